//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wire the plain state models in `state` to Leptos signals,
//! timers and navigation. Session-level components (`main_wrapper`,
//! `route_guard`, `session_refresh`) read shared state from context
//! providers installed by `App`.

pub mod dashboard_nav;
pub mod email_verification;
pub mod form_field;
pub mod main_wrapper;
pub mod otp_input;
pub mod pager;
pub mod plagiarism_badge;
pub mod route_guard;
pub mod session_refresh;
