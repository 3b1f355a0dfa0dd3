//! Bearer credential accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token is stored apart from the cached profile, so the two can
//! disagree: a profile may outlive its token. [`reconcile_credential`] is the
//! single place that resolves that by dropping the orphaned profile.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::session::SessionStore;
use crate::net::types::AuthTokens;
use crate::util::cookie::CookieStorage;
use crate::util::storage::{KeyValueStorage, StorageError};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// How often mounted guards re-read the cookie jar. Cookies expire without
/// any event, so this bounds how long an expired token keeps a page open.
pub const CREDENTIAL_CHECK_INTERVAL: Duration = Duration::from_secs(15);

/// Handle to the credential slot, provided through context.
#[derive(Clone)]
pub struct Credentials {
    storage: Arc<dyn KeyValueStorage>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("present", &self.is_present())
            .finish()
    }
}

impl Credentials {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Credentials kept in the document's cookie jar.
    pub fn browser() -> Self {
        Self::new(Arc::new(CookieStorage))
    }

    /// Current access token; `None` when absent or unreadable.
    pub fn access_token(&self) -> Option<String> {
        match self.storage.get_item(ACCESS_TOKEN_COOKIE) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                leptos::logging::warn!("credential read failed: {e}");
                None
            }
        }
    }

    pub fn is_present(&self) -> bool {
        self.access_token().is_some()
    }

    /// Store a freshly issued token pair.
    pub fn store(&self, tokens: &AuthTokens) {
        self.write(ACCESS_TOKEN_COOKIE, &tokens.access);
        if let Some(refresh) = tokens.refresh.as_deref() {
            self.write(REFRESH_TOKEN_COOKIE, refresh);
        }
    }

    pub fn clear(&self) {
        for key in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
            match self.storage.remove_item(key) {
                Ok(()) | Err(StorageError::Unavailable) => {}
                Err(e) => leptos::logging::warn!("credential clear failed: {e}"),
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self.storage.set_item(key, value) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("credential write failed: {e}"),
        }
    }
}

/// Drop a cached profile whose credential has disappeared.
///
/// Returns `true` when the session was cleared.
pub fn reconcile_credential(store: &mut SessionStore, credentials: &Credentials) -> bool {
    if store.is_logged_in() && !credentials.is_present() {
        store.set_user(None);
        return true;
    }
    false
}

/// Remembers whether a credential was present at the last poll, so a guard
/// only reacts when presence actually changes.
#[derive(Debug)]
pub struct CredentialWatch {
    credentials: Credentials,
    present: bool,
}

impl CredentialWatch {
    pub fn new(credentials: Credentials) -> Self {
        let present = credentials.is_present();
        Self { credentials, present }
    }

    pub fn present(&self) -> bool {
        self.present
    }

    /// Re-read the credential. Returns the new presence if it changed.
    pub fn poll(&mut self) -> Option<bool> {
        let now = self.credentials.is_present();
        if now == self.present {
            return None;
        }
        self.present = now;
        Some(now)
    }
}
