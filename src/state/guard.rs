//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PrivateRoute` and `PublicRoute` evaluate these pure functions on every
//! session change and either render their children or navigate away with
//! history replacement (so Back does not bounce into the guard again).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::SessionStore;
use crate::config::{DASHBOARD_PATH, SIGN_IN_PATH};

/// Navigation instruction issued by a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub replace: bool,
}

impl Redirect {
    const fn replacing(path: &'static str) -> Self {
        Self { path, replace: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Redirect),
}

impl GuardDecision {
    pub fn renders(self) -> bool {
        matches!(self, Self::Render)
    }

    pub fn redirect(self) -> Option<Redirect> {
        match self {
            Self::Render => None,
            Self::Redirect(redirect) => Some(redirect),
        }
    }
}

/// Render only for a logged-in session that still holds a credential.
///
/// A profile without a credential fails closed: it cannot make authorized
/// calls, so it is sent to sign-in like an anonymous visitor.
pub fn authenticated_guard(store: &SessionStore, has_credential: bool) -> GuardDecision {
    if store.is_logged_in() && has_credential {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Redirect::replacing(SIGN_IN_PATH))
    }
}

/// Render only for visitors who are not logged in.
pub fn anonymous_guard(store: &SessionStore) -> GuardDecision {
    if store.is_logged_in() {
        GuardDecision::Redirect(Redirect::replacing(DASHBOARD_PATH))
    } else {
        GuardDecision::Render
    }
}
