//! Durable key-value storage used by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists through `localStorage`; SSR and native tests
//! use [`MemoryStorage`]. Callers hold an `Arc<dyn KeyValueStorage>` so the
//! backing store is chosen once at startup and injected everywhere else.
//!
//! ERROR HANDLING
//! ==============
//! Every operation reports failure through [`StorageError`]. The session
//! layer decides whether to swallow it; this module never panics.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("corrupt value under {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

/// String-keyed durable storage slot provider.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value for `key`; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] when the stored text is not valid JSON
/// for `T`, or the underlying read error.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), reason: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Write`] if encoding fails, or the underlying write error.
pub fn save_json<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write(e.to_string()))?;
    storage.set_item(key, &raw)
}

/// `window.localStorage`, resolved on every call.
///
/// Outside the `hydrate` build every operation reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage for SSR renders and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let items = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { items: Mutex::new(items) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Read("memory storage lock poisoned".to_owned()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
