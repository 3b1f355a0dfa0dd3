//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap a page to restrict who may see it. Both guards recompute on every
//! session change, so logging in on `/sign-in` or logging out on a dashboard
//! page redirects without further wiring. `PrivateRoute` also polls the
//! cookie jar, since an expiring cookie changes no signal on its own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::credential::{CredentialWatch, Credentials, reconcile_credential};
use crate::state::guard::{GuardDecision, anonymous_guard, authenticated_guard};
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::task::TaskSlot;

/// Signal tracking credential presence, re-read every
/// `CREDENTIAL_CHECK_INTERVAL` while the owner is mounted.
fn watch_credential(credentials: Credentials) -> ReadSignal<bool> {
    let watch = CredentialWatch::new(credentials);
    let (present, set_present) = signal(watch.present());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::credential::CREDENTIAL_CHECK_INTERVAL;

        let mut watch = watch;
        let handle = crate::util::task::spawn_cancellable(async move {
            loop {
                gloo_timers::future::sleep(CREDENTIAL_CHECK_INTERVAL).await;
                if let Some(now) = watch.poll() {
                    if set_present.try_set(now).is_some() {
                        break;
                    }
                }
            }
        });
        let slot = StoredValue::new(TaskSlot::default());
        slot.update_value(|s| s.replace(handle));
        on_cleanup(move || {
            let _ = slot.try_update_value(TaskSlot::cancel);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (watch, set_present);

    present
}

/// Navigate whenever `decision` turns into a redirect.
fn install_guard_redirect(decision: Memo<GuardDecision>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(redirect) = decision.get().redirect() {
            navigate(
                redirect.path,
                NavigateOptions {
                    replace: redirect.replace,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

/// Renders `children` only for a logged-in user holding a credential;
/// everyone else is sent to sign-in.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();

    let present = watch_credential(credentials.clone());

    let decision = Memo::new(move |_| {
        let _ = present.get();
        session.with(|s| authenticated_guard(s, credentials.is_present()))
    });
    install_guard_redirect(decision);

    view! {
        <Show when=move || decision.get().renders()>
            {children()}
        </Show>
    }
}

/// Renders `children` only for anonymous visitors; logged-in users are sent
/// to the dashboard.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();

    // A profile whose token is gone would bounce between the two guards.
    if session.with_untracked(SessionStore::is_logged_in) && !credentials.is_present() {
        session.update(|s| {
            reconcile_credential(s, &credentials);
        });
    }

    let decision = Memo::new(move |_| session.with(anonymous_guard));
    install_guard_redirect(decision);

    view! {
        <Show when=move || decision.get().renders()>
            {children()}
        </Show>
    }
}
