//! First page load through the public API: hydrate the persisted session,
//! settle the bootstrap gate, evaluate guards and start the refresh timer.

use std::sync::Arc;

use marketplace_client::config::{DASHBOARD_PATH, SIGN_IN_PATH};
use marketplace_client::net::error::ApiError;
use marketplace_client::net::types::Profile;
use marketplace_client::state::bootstrap::{BootstrapGate, IdentityOutcome, settle_identity};
use marketplace_client::state::credential::{ACCESS_TOKEN_COOKIE, Credentials, reconcile_credential};
use marketplace_client::state::guard::{GuardDecision, Redirect, anonymous_guard, authenticated_guard};
use marketplace_client::state::refresh::{RefreshAction, RefreshScheduler, STALENESS_WINDOW_MS};
use marketplace_client::state::session::{FETCH_TIME_KEY, SessionStore, USER_DATA_KEY};
use marketplace_client::util::clock::ManualClock;
use marketplace_client::util::storage::MemoryStorage;

const NOW: i64 = 1_700_000_000_000;

fn persisted(fetched_at: i64) -> Arc<MemoryStorage> {
    let fetch_time = fetched_at.to_string();
    Arc::new(MemoryStorage::with_entries([
        (USER_DATA_KEY, r#"{"id":7,"email":"dev@uni.edu","full_name":"Dev","role":"contributor"}"#),
        (FETCH_TIME_KEY, fetch_time.as_str()),
    ]))
}

fn cookies(token: Option<&str>) -> Credentials {
    let entries: Vec<(&str, &str)> = token.map(|t| (ACCESS_TOKEN_COOKIE, t)).into_iter().collect();
    Credentials::new(Arc::new(MemoryStorage::with_entries(entries)))
}

#[test]
fn returning_user_with_fresh_profile_lands_on_dashboard() {
    let clock = Arc::new(ManualClock::new(NOW));
    let mut store = SessionStore::load(persisted(NOW - 60_000), clock.clone());
    let credentials = cookies(Some("tok"));

    assert!(store.is_logged_in());
    assert_eq!(store.user().map(Profile::display_name), Some("Dev"));

    let mut gate = BootstrapGate::default();
    assert!(!gate.should_render());
    let profile = store.user().cloned().unwrap();
    assert!(settle_identity(&mut gate, &mut store, IdentityOutcome::Resolved(profile)));
    assert!(gate.should_render());
    assert!(!store.is_loading());

    assert_eq!(authenticated_guard(&store, credentials.is_present()), GuardDecision::Render);
    assert_eq!(
        anonymous_guard(&store),
        GuardDecision::Redirect(Redirect {
            path: DASHBOARD_PATH,
            replace: true,
        })
    );

    let scheduler = RefreshScheduler::new();
    assert_eq!(scheduler.mount(&store, &credentials), RefreshAction::Idle);
}

#[test]
fn stale_profile_is_refetched_on_mount() {
    let clock = Arc::new(ManualClock::new(NOW));
    let mut store = SessionStore::load(persisted(NOW - STALENESS_WINDOW_MS - 1), clock.clone());
    let credentials = cookies(Some("tok"));

    let scheduler = RefreshScheduler::new();
    let RefreshAction::Fetch(ticket) = scheduler.mount(&store, &credentials) else {
        panic!("stale profile should be refetched");
    };
    let mut fresh = Profile::new(7, "dev@uni.edu");
    fresh.set_field("full_name", "Dev Renamed");
    assert!(scheduler.apply_refresh(&mut store, &credentials, ticket, Ok(fresh)));
    assert_eq!(store.last_fetch_epoch_millis(), NOW);
    assert!(!store.should_refresh_user_data());

    clock.advance(STALENESS_WINDOW_MS);
    assert_eq!(scheduler.tick(&store, &credentials), RefreshAction::Idle);
    clock.advance(1);
    assert!(matches!(scheduler.tick(&store, &credentials), RefreshAction::Fetch(_)));
}

#[test]
fn expired_cookie_clears_cached_profile() {
    let clock = Arc::new(ManualClock::new(NOW));
    let mut store = SessionStore::load(persisted(NOW), clock);
    let credentials = cookies(None);

    assert_eq!(
        authenticated_guard(&store, credentials.is_present()),
        GuardDecision::Redirect(Redirect {
            path: SIGN_IN_PATH,
            replace: true,
        })
    );
    assert!(reconcile_credential(&mut store, &credentials));
    assert!(!store.is_logged_in());
    assert_eq!(anonymous_guard(&store), GuardDecision::Render);
}

#[test]
fn rejected_credential_opens_gate_logged_out() {
    let storage = persisted(NOW);
    let clock = Arc::new(ManualClock::new(NOW));
    let mut store = SessionStore::load(storage.clone(), clock.clone());

    let mut gate = BootstrapGate::default();
    let outcome = IdentityOutcome::Failed(ApiError::Status {
        status: 401,
        detail: Some("Token is invalid".to_owned()),
    });
    assert!(settle_identity(&mut gate, &mut store, outcome));
    assert!(gate.should_render());
    assert!(!store.is_logged_in());

    let reloaded = SessionStore::load(storage, clock);
    assert!(!reloaded.is_logged_in());
    assert_eq!(reloaded.last_fetch_epoch_millis(), 0);
}

#[test]
fn first_visit_without_persisted_data_is_anonymous() {
    let clock = Arc::new(ManualClock::new(NOW));
    let mut store = SessionStore::load(Arc::new(MemoryStorage::new()), clock);
    let credentials = cookies(None);

    assert!(!store.is_logged_in());
    assert_eq!(anonymous_guard(&store), GuardDecision::Render);
    assert_eq!(
        authenticated_guard(&store, credentials.is_present()),
        GuardDecision::Redirect(Redirect {
            path: SIGN_IN_PATH,
            replace: true,
        })
    );

    let mut gate = BootstrapGate::default();
    assert!(settle_identity(&mut gate, &mut store, IdentityOutcome::NoCredential));
    assert!(!settle_identity(&mut gate, &mut store, IdentityOutcome::NoCredential));
    assert!(gate.should_render());

    let scheduler = RefreshScheduler::new();
    assert_eq!(scheduler.mount(&store, &credentials), RefreshAction::Stop);
    assert!(!scheduler.is_active());
}
