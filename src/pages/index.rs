//! Public landing page with category browsing.

use leptos::prelude::*;

use crate::config::{ABOUT_PATH, ApiConfig, DASHBOARD_PATH, PROJECTS_PATH, SIGN_IN_PATH, SIGN_UP_PATH, category_path};
use crate::net::marketplace::Category;
use crate::state::session::SessionStore;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ApiConfig>();
    let logged_in = move || session.with(SessionStore::is_logged_in);
    let categories = RwSignal::new(Vec::<Category>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_categories(&config).await {
            Ok(list) => categories.set(list),
            Err(e) => leptos::logging::warn!("loading categories failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <div class="landing-page">
            <h1>"Project Marketplace"</h1>
            <p class="landing-page__tagline">"Discover, share and publish academic projects."</p>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <nav class="landing-page__actions">
                            <a class="auth-button" href=SIGN_IN_PATH>"Sign In"</a>
                            <a class="auth-link" href=SIGN_UP_PATH>"Create an account"</a>
                        </nav>
                    }
                }
            >
                <nav class="landing-page__actions">
                    <a class="auth-button" href=DASHBOARD_PATH>"Go to dashboard"</a>
                </nav>
            </Show>
            <nav class="landing-page__links">
                <a class="auth-link" href=PROJECTS_PATH>"Browse projects"</a>
                <a class="auth-link" href=ABOUT_PATH>"About us"</a>
            </nav>
            <Show when=move || categories.with(|c| !c.is_empty())>
                <section class="landing-page__categories">
                    <h2>"Categories"</h2>
                    <ul>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |c: Category| {
                                view! {
                                    <li>
                                        <a href=category_path(c.id)>{c.name}</a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>
        </div>
    }
}
