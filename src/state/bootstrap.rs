//! Startup identity gate.
//!
//! `MainWrapper` holds a [`BootstrapGate`] and renders no route until the
//! initial "who am I" check settles, so guards never decide on a session
//! that is about to change. The gate moves `Loading -> Ready` exactly once.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use super::credential::Credentials;
use super::session::SessionStore;
use crate::net::error::ApiError;
use crate::net::types::Profile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootstrapGate {
    phase: BootstrapPhase,
}

impl BootstrapGate {
    pub fn phase(self) -> BootstrapPhase {
        self.phase
    }

    pub fn should_render(self) -> bool {
        self.phase == BootstrapPhase::Ready
    }

    /// Move to `Ready`. Returns `true` only for the first call.
    pub fn finish(&mut self) -> bool {
        if self.phase == BootstrapPhase::Ready {
            return false;
        }
        self.phase = BootstrapPhase::Ready;
        true
    }
}

/// Result of the startup identity check.
#[derive(Clone, Debug, PartialEq)]
pub enum IdentityOutcome {
    Resolved(Profile),
    Failed(ApiError),
    NoCredential,
}

/// Apply `outcome` to the session and open the gate.
///
/// Anything other than a resolved profile means "no session". Returns
/// `false` (and leaves the session alone) if the gate was already open.
pub fn settle_identity(gate: &mut BootstrapGate, store: &mut SessionStore, outcome: IdentityOutcome) -> bool {
    if gate.should_render() {
        return false;
    }
    store.set_loading(false);
    match outcome {
        IdentityOutcome::Resolved(profile) => store.set_user(Some(profile)),
        IdentityOutcome::Failed(e) => {
            leptos::logging::warn!("identity check failed: {e}");
            store.set_user(None);
        }
        IdentityOutcome::NoCredential => store.set_user(None),
    }
    gate.finish()
}

/// Ask the backend who owns the stored credential.
pub async fn resolve_identity(config: &crate::config::ApiConfig, credentials: &Credentials) -> IdentityOutcome {
    let Some(token) = credentials.access_token() else {
        return IdentityOutcome::NoCredential;
    };
    match crate::net::api::fetch_current_user(config, &token).await {
        Ok(profile) => IdentityOutcome::Resolved(profile),
        Err(e) => IdentityOutcome::Failed(e),
    }
}
