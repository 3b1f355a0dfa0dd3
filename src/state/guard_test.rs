use super::*;
use crate::test_support::{memory_store, profile};

// =============================================================
// authenticated_guard
// =============================================================

#[test]
fn authenticated_guard_renders_for_user_with_credential() {
    let (mut store, _, _) = memory_store(0);
    store.set_user(Some(profile()));
    assert_eq!(authenticated_guard(&store, true), GuardDecision::Render);
}

#[test]
fn authenticated_guard_redirects_anonymous_to_sign_in() {
    let (store, _, _) = memory_store(0);
    let decision = authenticated_guard(&store, true);
    assert_eq!(
        decision.redirect(),
        Some(Redirect {
            path: "/sign-in",
            replace: true
        })
    );
}

#[test]
fn authenticated_guard_fails_closed_without_credential() {
    let (mut store, _, _) = memory_store(0);
    store.set_user(Some(profile()));
    let decision = authenticated_guard(&store, false);
    assert!(!decision.renders());
    assert_eq!(decision.redirect().map(|r| r.path), Some("/sign-in"));
}

#[test]
fn authenticated_guard_credential_alone_is_not_enough() {
    let (store, _, _) = memory_store(0);
    assert!(!authenticated_guard(&store, true).renders());
}

// =============================================================
// anonymous_guard
// =============================================================

#[test]
fn anonymous_guard_renders_when_logged_out() {
    let (store, _, _) = memory_store(0);
    assert!(anonymous_guard(&store).renders());
}

#[test]
fn anonymous_guard_redirects_logged_in_to_dashboard() {
    let (mut store, _, _) = memory_store(0);
    store.set_user(Some(profile()));
    assert_eq!(
        anonymous_guard(&store),
        GuardDecision::Redirect(Redirect {
            path: "/dashboard/",
            replace: true
        })
    );
}

#[test]
fn render_decision_has_no_redirect() {
    assert_eq!(GuardDecision::Render.redirect(), None);
}
