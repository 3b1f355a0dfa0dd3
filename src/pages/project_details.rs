//! Single project view with purchase checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route `/projects/:id`. Buying does not require an account: a
//! signed-in buyer pays with their profile email, anyone else types one.
//! The backend answers with a payment gateway URL that the buyer follows
//! to complete the purchase.

#[cfg(test)]
#[path = "project_details_test.rs"]
mod project_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::{ApiConfig, PROJECTS_PATH, project_path};
use crate::net::marketplace::Project;
use crate::pages::projects::parse_route_id;
use crate::state::session::SessionStore;
use crate::util::sequence::RequestSequencer;

/// Email to bill: the signed-in profile's address, else the typed one.
pub fn purchase_email(profile_email: Option<&str>, typed: &str) -> Result<String, &'static str> {
    profile_email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .or_else(|| Some(typed.trim()).filter(|email| !email.is_empty()))
        .map(str::to_owned)
        .ok_or("Email is required.")
}

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let project = RwSignal::new(None::<Project>);
    let related = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let email_input = RwSignal::new(String::new());
    let paying = RwSignal::new(false);
    let checkout_url = RwSignal::new(None::<String>);
    let sequencer = RequestSequencer::new();

    let project_id = Memo::new(move |_| params.with(|p| parse_route_id(p.get("id").as_deref())));
    let profile_email = move || session.with(|s| s.user().and_then(|u| u.email().map(str::to_owned)));

    {
        let config = config.clone();
        Effect::new(move || {
            let id = project_id.get();
            let ticket = sequencer.begin();
            checkout_url.set(None);
            related.set(Vec::new());

            let Some(id) = id else {
                project.set(None);
                loading.set(false);
                info.set("Project not found".to_owned());
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let sequencer = sequencer.clone();
                loading.set(true);
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_project(&config, id).await;
                    if !sequencer.is_current(ticket) {
                        return;
                    }
                    let level = match result {
                        Ok(found) => {
                            let level = found.level.clone();
                            project.set(Some(found));
                            info.set(String::new());
                            level
                        }
                        Err(e) => {
                            project.set(None);
                            info.set(e.detail_or("Failed to load project details"));
                            None
                        }
                    };
                    loading.set(false);

                    if let Some(level) = level {
                        match crate::net::api::list_related_projects(&config, &level, id).await {
                            Ok(list) if sequencer.is_current(ticket) => related.set(list),
                            Ok(_) => {}
                            Err(e) => leptos::logging::warn!("loading related projects failed: {e}"),
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&config, id, ticket);
        });
    }

    // Stored so the submit handler stays `Copy` inside `<Show>` children.
    let config = StoredValue::new(config);
    let on_purchase = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if paying.get_untracked() {
            return;
        }
        let Some(id) = project_id.get_untracked() else {
            return;
        };
        let email = match purchase_email(profile_email().as_deref(), &email_input.get_untracked()) {
            Ok(email) => email,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        paying.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::initiate_payment(&config, id, &email).await {
                    Ok(url) => checkout_url.set(Some(url)),
                    Err(e) => {
                        leptos::logging::warn!("payment initiation failed: {e}");
                        info.set("Unable to initiate payment. Please try again.".to_owned());
                    }
                }
                paying.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (config, id, email);
    };

    view! {
        <div class="project-details">
            <a class="project-details__back" href=PROJECTS_PATH>"Back to projects"</a>
            <Show when=move || !info.get().is_empty()>
                <p class="project-details__message">{move || info.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="project-details__loading">"Loading project..."</p> }
            >
                {move || {
                    project
                        .get()
                        .map(|p| {
                            view! {
                                <article class="project-details__body">
                                    <h1>{p.title.clone()}</h1>
                                    <p class="project-details__meta">
                                        <span>{p.author_name.clone().unwrap_or_default()}</span>
                                        <span>{p.level.clone().unwrap_or_default()}</span>
                                        <span>{p.category_label().unwrap_or_default()}</span>
                                    </p>
                                    <p class="project-details__price">{p.price.label()}</p>
                                    <p class="project-details__description">{p.description.clone().unwrap_or_default()}</p>
                                </article>
                            }
                        })
                }}
                <Show when=move || project.with(Option::is_some)>
                    <section class="purchase">
                        <h2>"Purchase this project"</h2>
                        <Show
                            when=move || checkout_url.with(Option::is_none)
                            fallback=move || {
                                view! {
                                    <a
                                        class="auth-button"
                                        href=move || checkout_url.get().unwrap_or_default()
                                        target="_blank"
                                        rel="noopener"
                                    >
                                        "Continue to payment"
                                    </a>
                                }
                            }
                        >
                            <form class="purchase__form" on:submit=on_purchase>
                                <Show when=move || profile_email().is_none()>
                                    <input
                                        class="auth-input"
                                        type="email"
                                        placeholder="you@example.com"
                                        prop:value=move || email_input.get()
                                        on:input=move |ev| email_input.set(event_target_value(&ev))
                                    />
                                </Show>
                                <button class="auth-button" type="submit" disabled=move || paying.get()>
                                    {move || if paying.get() { "Processing..." } else { "Buy Now" }}
                                </button>
                            </form>
                        </Show>
                    </section>
                </Show>
            </Show>

            <Show when=move || related.with(|r| !r.is_empty())>
                <section class="related-projects">
                    <h2>"Related projects"</h2>
                    <ul>
                        <For
                            each=move || related.get()
                            key=|p| p.id
                            children=move |p: Project| {
                                view! {
                                    <li>
                                        <a href=project_path(p.id)>{p.title.clone()}</a>
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
