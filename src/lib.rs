//! # marketplace-client
//!
//! Leptos + WASM front end for the academic project marketplace.
//!
//! The crate is built around the session core in [`state`]: a persisted
//! session store, the cookie-held credential, the profile refresh policy,
//! route guard decisions, the startup bootstrap gate and the one-time-code
//! entry model. [`components`] and [`pages`] bind that core to Leptos
//! signals, timers and routing; [`net`] talks to the REST backend. Around
//! that core sit the public project catalogue with checkout and the
//! contributor dashboard (profile, projects, wallet, transactions).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
