//! Background profile refresh host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside `MainWrapper`. Whenever the logged-in flag flips, the
//! previous [`RefreshScheduler`] is cancelled and a fresh one started, so a
//! new sign-in never inherits a stale timer. The loop is wrapped in a
//! [`TaskHandle`], so cancelling drops it mid-sleep rather than at the next
//! five-minute wake-up.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged by the scheduler and leave the cached profile
//! untouched; the next tick tries again.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::credential::Credentials;
use crate::state::refresh::RefreshScheduler;
use crate::state::session::SessionStore;
use crate::util::task::TaskHandle;

/// Live scheduler plus the handle of the task driving it.
#[derive(Clone)]
struct RefreshTask {
    scheduler: RefreshScheduler,
    handle: Option<TaskHandle>,
}

impl RefreshTask {
    fn cancel(&self) {
        self.scheduler.cancel();
        if let Some(handle) = &self.handle {
            handle.cancel();
        }
    }
}

#[component]
pub fn SessionRefresh() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();
    let current = StoredValue::new(None::<RefreshTask>);

    let logged_in = Memo::new(move |_| session.with(SessionStore::is_logged_in));

    Effect::new(move || {
        let _ = logged_in.get();
        if let Some(previous) = current.get_value() {
            previous.cancel();
        }
        let scheduler = RefreshScheduler::new();
        let handle = spawn_refresh_task(scheduler.clone(), session, credentials.clone(), config.clone());
        current.set_value(Some(RefreshTask { scheduler, handle }));
    });

    on_cleanup(move || {
        if let Some(task) = current.get_value() {
            task.cancel();
        }
    });
}

#[cfg(feature = "hydrate")]
fn spawn_refresh_task(
    scheduler: RefreshScheduler,
    session: RwSignal<SessionStore>,
    credentials: Credentials,
    config: ApiConfig,
) -> Option<TaskHandle> {
    use crate::state::credential::reconcile_credential;
    use crate::state::refresh::{REFRESH_CHECK_INTERVAL, RefreshAction};

    let handle = crate::util::task::spawn_cancellable(async move {
        let mut action = session.with_untracked(|s| scheduler.mount(s, &credentials));
        loop {
            match action {
                RefreshAction::Stop => {
                    let _ = session.try_update(|s| reconcile_credential(s, &credentials));
                    break;
                }
                RefreshAction::Fetch(ticket) => {
                    let result = match credentials.access_token() {
                        Some(token) => crate::net::api::fetch_current_user(&config, &token).await,
                        None => Err(crate::net::error::ApiError::MissingCredential),
                    };
                    let _ = session.try_update(|s| scheduler.apply_refresh(s, &credentials, ticket, result));
                }
                RefreshAction::Idle => {}
            }
            gloo_timers::future::sleep(REFRESH_CHECK_INTERVAL).await;
            let Some(next) = session.try_with_untracked(|s| scheduler.tick(s, &credentials)) else {
                break;
            };
            action = next;
        }
    });
    Some(handle)
}

#[cfg(not(feature = "hydrate"))]
fn spawn_refresh_task(
    scheduler: RefreshScheduler,
    _session: RwSignal<SessionStore>,
    _credentials: Credentials,
    _config: ApiConfig,
) -> Option<TaskHandle> {
    // No timers outside the browser.
    scheduler.cancel();
    None
}
