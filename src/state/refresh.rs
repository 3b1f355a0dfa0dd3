//! Staleness policy and refresh scheduling for the cached profile.
//!
//! DESIGN
//! ======
//! [`RefreshScheduler`] is sans-IO: `mount`/`tick` decide what to do and the
//! `SessionRefresh` component performs the timer waits and HTTP calls. Each
//! fetch carries a [`RequestTicket`], so when two fetches overlap only the
//! newest result is applied.
//!
//! Cancellation is a shared `AtomicBool`; the first `cancel()` wins and every
//! later evaluation yields [`RefreshAction::Stop`].

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::credential::Credentials;
use super::session::SessionStore;
use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::util::sequence::{RequestSequencer, RequestTicket};

/// Cached profile data older than this is stale (30 minutes).
pub const STALENESS_WINDOW_MS: i64 = 30 * 60 * 1000;

/// How often a live scheduler re-checks staleness (5 minutes).
pub const REFRESH_CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Strictly more than [`STALENESS_WINDOW_MS`] since the last fetch.
pub fn needs_refresh(now_millis: i64, last_fetch_millis: i64) -> bool {
    now_millis.saturating_sub(last_fetch_millis) > STALENESS_WINDOW_MS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshAction {
    /// Profile is fresh; wait for the next tick.
    Idle,
    /// Fetch the profile and hand the result to [`RefreshScheduler::apply_refresh`].
    Fetch(RequestTicket),
    /// Scheduler is cancelled or the credential is gone; stop the timer.
    Stop,
}

#[derive(Clone, Debug)]
pub struct RefreshScheduler {
    alive: Arc<AtomicBool>,
    sequencer: RequestSequencer,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            sequencer: RequestSequencer::new(),
        }
    }

    /// First evaluation, run when the owning component mounts.
    ///
    /// Without a credential the scheduler stops immediately and no timer
    /// should be started.
    pub fn mount(&self, store: &SessionStore, credentials: &Credentials) -> RefreshAction {
        self.evaluate(store, credentials)
    }

    /// Periodic evaluation, run every [`REFRESH_CHECK_INTERVAL`].
    pub fn tick(&self, store: &SessionStore, credentials: &Credentials) -> RefreshAction {
        self.evaluate(store, credentials)
    }

    fn evaluate(&self, store: &SessionStore, credentials: &Credentials) -> RefreshAction {
        if !self.is_active() {
            return RefreshAction::Stop;
        }
        if !credentials.is_present() {
            self.cancel();
            return RefreshAction::Stop;
        }
        if store.should_refresh_user_data() {
            RefreshAction::Fetch(self.sequencer.begin())
        } else {
            RefreshAction::Idle
        }
    }

    /// Stop the scheduler. Returns `true` only for the call that stopped it.
    pub fn cancel(&self) -> bool {
        self.alive.swap(false, Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Apply a finished fetch. Returns `true` if the session was updated.
    ///
    /// Results from superseded tickets are dropped, and so is anything that
    /// lands after cancellation or once the credential is gone, so a logout
    /// during an in-flight fetch stays logged out. Failures are logged and
    /// leave the cached session untouched.
    pub fn apply_refresh(
        &self,
        store: &mut SessionStore,
        credentials: &Credentials,
        ticket: RequestTicket,
        result: Result<Profile, ApiError>,
    ) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        if !self.is_active() || !credentials.is_present() {
            leptos::logging::warn!("dropping profile refresh that finished after the session ended");
            return false;
        }
        match result {
            Ok(profile) => {
                store.set_user(Some(profile));
                true
            }
            Err(e) => {
                leptos::logging::warn!("error refreshing user data: {e}");
                false
            }
        }
    }
}
