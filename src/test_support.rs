//! Fixtures shared by unit tests.

use std::sync::Arc;

use crate::net::types::Profile;
use crate::state::credential::Credentials;
use crate::state::session::SessionStore;
use crate::util::clock::ManualClock;
use crate::util::storage::{KeyValueStorage, MemoryStorage, StorageError};

pub const THIRTY_MINUTES_MS: i64 = 30 * 60 * 1000;

/// Storage whose every operation fails as if the quota were exhausted.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("quota exceeded".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
}

pub fn profile() -> Profile {
    Profile::new(1, "a@b.com")
}

/// Fresh in-memory store plus handles to its storage and clock.
pub fn memory_store(start_millis: i64) -> (SessionStore, Arc<MemoryStorage>, Arc<ManualClock>) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(start_millis));
    let store = SessionStore::load(storage.clone(), clock.clone());
    (store, storage, clock)
}

pub fn credentials_with(token: Option<&str>) -> Credentials {
    let storage = MemoryStorage::new();
    if let Some(token) = token {
        let _ = storage.set_item(crate::state::credential::ACCESS_TOKEN_COOKIE, token);
    }
    Credentials::new(Arc::new(storage))
}

/// Drive a future that never suspends (the native API stubs).
pub fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
