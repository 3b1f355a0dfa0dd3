//! Bootstrap gate around the whole route tree.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::bootstrap::BootstrapGate;
use crate::state::credential::Credentials;
use crate::state::session::SessionStore;

/// Renders nothing until the startup identity check settles, then renders
/// `children` for the rest of the page lifetime.
///
/// During SSR the gate stays closed; the hydrated client opens it.
#[component]
pub fn MainWrapper(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();
    let gate = RwSignal::new(BootstrapGate::default());

    #[cfg(feature = "hydrate")]
    {
        session.update(|s| s.set_loading(true));
        leptos::task::spawn_local(async move {
            let outcome = crate::state::bootstrap::resolve_identity(&config, &credentials).await;
            let mut next = gate.get_untracked();
            let _ = session.try_update(|s| crate::state::bootstrap::settle_identity(&mut next, s, outcome));
            let _ = gate.try_set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, credentials, config);

    view! {
        <Show when=move || gate.get().should_render()>
            {children()}
        </Show>
    }
}
