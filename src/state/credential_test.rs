use super::*;
use crate::test_support::{FailingStorage, credentials_with, memory_store, profile};
use crate::util::storage::MemoryStorage;

#[test]
fn missing_token_is_absent() {
    let credentials = credentials_with(None);
    assert_eq!(credentials.access_token(), None);
    assert!(!credentials.is_present());
}

#[test]
fn empty_token_is_absent() {
    let credentials = credentials_with(Some(""));
    assert!(!credentials.is_present());
}

#[test]
fn store_writes_access_and_refresh() {
    let storage = Arc::new(MemoryStorage::new());
    let credentials = Credentials::new(storage.clone());
    credentials.store(&AuthTokens {
        access: "acc".to_owned(),
        refresh: Some("ref".to_owned()),
    });
    assert_eq!(credentials.access_token(), Some("acc".to_owned()));
    assert_eq!(storage.get_item(REFRESH_TOKEN_COOKIE).expect("get"), Some("ref".to_owned()));
}

#[test]
fn clear_removes_both_tokens() {
    let storage = Arc::new(MemoryStorage::new());
    let credentials = Credentials::new(storage.clone());
    credentials.store(&AuthTokens {
        access: "acc".to_owned(),
        refresh: Some("ref".to_owned()),
    });
    credentials.clear();
    assert!(!credentials.is_present());
    assert_eq!(storage.get_item(REFRESH_TOKEN_COOKIE).expect("get"), None);
}

#[test]
fn unreadable_storage_reads_as_absent() {
    let credentials = Credentials::new(Arc::new(FailingStorage));
    assert!(!credentials.is_present());
    credentials.clear();
}

#[test]
fn debug_output_hides_token() {
    let credentials = credentials_with(Some("secret-token"));
    let rendered = format!("{credentials:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("present: true"));
}

// =============================================================
// reconcile_credential
// =============================================================

#[test]
fn reconcile_clears_profile_without_token() {
    let (mut store, _, _) = memory_store(0);
    store.set_user(Some(profile()));
    assert!(reconcile_credential(&mut store, &credentials_with(None)));
    assert!(!store.is_logged_in());
}

#[test]
fn reconcile_keeps_profile_with_token() {
    let (mut store, _, _) = memory_store(0);
    store.set_user(Some(profile()));
    assert!(!reconcile_credential(&mut store, &credentials_with(Some("tok"))));
    assert!(store.is_logged_in());
}

#[test]
fn reconcile_is_noop_when_logged_out() {
    let (mut store, _, _) = memory_store(0);
    assert!(!reconcile_credential(&mut store, &credentials_with(None)));
}

// =============================================================
// CredentialWatch
// =============================================================

#[test]
fn watch_reports_initial_presence() {
    assert!(CredentialWatch::new(credentials_with(Some("tok"))).present());
    assert!(!CredentialWatch::new(credentials_with(None)).present());
}

#[test]
fn watch_poll_reports_expiry_once() {
    let credentials = credentials_with(Some("tok"));
    let mut watch = CredentialWatch::new(credentials.clone());
    assert_eq!(watch.poll(), None);

    credentials.clear();
    assert_eq!(watch.poll(), Some(false));
    assert!(!watch.present());
    assert_eq!(watch.poll(), None);
}

#[test]
fn watch_poll_reports_new_token() {
    let credentials = credentials_with(None);
    let mut watch = CredentialWatch::new(credentials.clone());
    credentials.store(&AuthTokens {
        access: "acc".to_owned(),
        refresh: None,
    });
    assert_eq!(watch.poll(), Some(true));
}

#[test]
fn credential_check_runs_well_inside_refresh_interval() {
    assert!(CREDENTIAL_CHECK_INTERVAL < crate::state::refresh::REFRESH_CHECK_INTERVAL);
}
