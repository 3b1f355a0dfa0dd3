//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in and with what profile". Read
//! by route guards and user-aware components, refreshed in the background by
//! the refresh scheduler, and persisted so a reload keeps the user signed in.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (quota, corruption, no `localStorage`) are logged and
//! swallowed. The store then behaves as in-memory only; no public operation
//! returns an error or panics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use super::credential::Credentials;
use super::refresh::needs_refresh;
use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::util::clock::{Clock, SystemClock};
use crate::util::storage::{self, BrowserStorage, KeyValueStorage, StorageError};

/// Durable key holding the JSON profile.
pub const USER_DATA_KEY: &str = "user_data";
/// Durable key holding the last profile fetch time (epoch millis, decimal).
pub const FETCH_TIME_KEY: &str = "user_data_fetch_time";

/// Snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<Profile>,
    /// Meaningful only while `user` is present; `0` otherwise.
    pub last_fetch_epoch_millis: i64,
    pub is_loading: bool,
}

/// Session container with injected storage and clock.
///
/// Provided to the component tree as `RwSignal<SessionStore>`.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.session).finish_non_exhaustive()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl SessionStore {
    /// Empty store; nothing is read from `storage`.
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session: Session::default(),
            storage,
            clock,
        }
    }

    /// Store hydrated from whatever `storage` holds.
    pub fn load(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::new(storage, clock);
        match read_persisted(store.storage.as_ref()) {
            Ok(Some((user, fetched_at))) => {
                store.session.user = Some(user);
                store.session.last_fetch_epoch_millis = fetched_at;
            }
            Ok(None) | Err(StorageError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("ignoring persisted session: {e}"),
        }
        store
    }

    /// Store backed by `localStorage` and the system clock.
    pub fn browser() -> Self {
        Self::load(Arc::new(BrowserStorage), Arc::new(SystemClock))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&Profile> {
        self.session.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.session.is_loading = loading;
    }

    pub fn last_fetch_epoch_millis(&self) -> i64 {
        self.session.last_fetch_epoch_millis
    }

    /// Replace the profile (stamping the fetch time) or clear it on `None`.
    ///
    /// Both the in-memory and durable copies are updated.
    pub fn set_user(&mut self, user: Option<Profile>) {
        match user {
            Some(profile) => {
                let now = self.clock.now_millis().max(0);
                if let Err(e) = persist(self.storage.as_ref(), &profile, now) {
                    log_storage_failure("persist session", &e);
                }
                self.session.user = Some(profile);
                self.session.last_fetch_epoch_millis = now;
            }
            None => {
                for key in [USER_DATA_KEY, FETCH_TIME_KEY] {
                    if let Err(e) = self.storage.remove_item(key) {
                        log_storage_failure("clear session", &e);
                    }
                }
                self.session.user = None;
                self.session.last_fetch_epoch_millis = 0;
            }
        }
    }

    /// Whether the cached profile is older than the staleness window.
    pub fn should_refresh_user_data(&self) -> bool {
        needs_refresh(self.clock.now_millis(), self.session.last_fetch_epoch_millis)
    }
}

/// Sign out locally: drop the credential, then the session.
pub fn end_session(store: &mut SessionStore, credentials: &Credentials) {
    credentials.clear();
    store.set_user(None);
}

/// End the session when `err` shows the backend rejected the credential.
/// Returns `true` if it did.
pub fn end_session_if_rejected(store: &mut SessionStore, credentials: &Credentials, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    end_session(store, credentials);
    true
}

fn read_persisted(storage: &dyn KeyValueStorage) -> Result<Option<(Profile, i64)>, StorageError> {
    let Some(user) = storage::load_json::<Profile>(storage, USER_DATA_KEY)? else {
        return Ok(None);
    };
    let fetched_at = storage
        .get_item(FETCH_TIME_KEY)?
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|millis| *millis >= 0)
        .unwrap_or(0);
    Ok(Some((user, fetched_at)))
}

fn persist(storage: &dyn KeyValueStorage, profile: &Profile, fetched_at: i64) -> Result<(), StorageError> {
    storage::save_json(storage, USER_DATA_KEY, profile)?;
    storage.set_item(FETCH_TIME_KEY, &fetched_at.to_string())
}

fn log_storage_failure(action: &str, err: &StorageError) {
    // SSR and native builds have no durable storage; that is not worth a warning.
    if !matches!(err, StorageError::Unavailable) {
        leptos::logging::warn!("{action} failed: {err}");
    }
}
