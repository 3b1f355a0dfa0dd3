//! Contributor dashboard overview: plagiarism checks across all projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`, so a profile is always present when the
//! page mounts. Logout lives in [`DashboardNav`]; it clears the session,
//! which flips the guard and redirects to sign-in.
//!
//! TRADE-OFFS
//! ==========
//! The checks list is refetched whenever the page number changes. Responses
//! are tagged with a [`RequestSequencer`] ticket so quick paging never shows
//! an older page's results.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::pager::{Pager, page_count};
use crate::components::plagiarism_badge::PlagiarismBadge;
use crate::config::ApiConfig;
use crate::net::plagiarism::{PlagiarismCheck, PlagiarismCheckRequest, PremiumProvider};
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session_if_rejected};
use crate::util::sequence::RequestSequencer;

pub const CHECKS_PAGE_SIZE: u32 = 10;

pub fn parse_project_id(raw: &str) -> Result<u64, &'static str> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or("Please enter a valid project ID")
}

/// Map the provider `<select>` value to a check request.
pub fn build_check_request(project_id: u64, provider: &str) -> PlagiarismCheckRequest {
    match provider {
        "copyscape" => PlagiarismCheckRequest::premium(project_id, PremiumProvider::Copyscape),
        "turnitin" => PlagiarismCheckRequest::premium(project_id, PremiumProvider::Turnitin),
        "plagscan" => PlagiarismCheckRequest::premium(project_id, PremiumProvider::Plagscan),
        _ => PlagiarismCheckRequest::local(project_id),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();

    let checks = RwSignal::new(Vec::<PlagiarismCheck>::new());
    let total = RwSignal::new(0_u64);
    let page = RwSignal::new(1_u32);
    let reload = RwSignal::new(0_u32);
    let info = RwSignal::new(String::new());
    let project_input = RwSignal::new(String::new());
    let provider = RwSignal::new("local".to_owned());
    let running = RwSignal::new(false);
    let sequencer = RequestSequencer::new();

    let pages = Signal::derive(move || page_count(total.get(), CHECKS_PAGE_SIZE));

    {
        let config = config.clone();
        let credentials = credentials.clone();
        Effect::new(move || {
            let page_number = page.get();
            let _ = reload.get();
            let ticket = sequencer.begin();

            #[cfg(feature = "hydrate")]
            {
                let Some(token) = credentials.access_token() else {
                    return;
                };
                let config = config.clone();
                let credentials = credentials.clone();
                let sequencer = sequencer.clone();
                leptos::task::spawn_local(async move {
                    let result =
                        crate::net::api::list_plagiarism_checks(&config, &token, page_number, CHECKS_PAGE_SIZE).await;
                    if !sequencer.is_current(ticket) {
                        return;
                    }
                    match result {
                        Ok(listing) => {
                            checks.set(listing.results);
                            total.set(listing.count);
                        }
                        // A rejected token cannot recover; sign out so the guard redirects.
                        Err(e) => {
                            if !session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                                info.set(e.detail_or("Failed to load plagiarism checks"));
                            }
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&config, &credentials, session, page_number, ticket);
        });
    }

    let check_credentials = credentials;
    let on_run_check = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if running.get_untracked() {
            return;
        }
        let project_id = match parse_project_id(&project_input.get_untracked()) {
            Ok(id) => id,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let request = build_check_request(project_id, &provider.get_untracked());
        running.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let token = check_credentials.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::run_plagiarism_check(&config, &token, &request).await {
                    Ok(check) => {
                        info.set(format!(
                            "Check complete: {:.1}% similarity ({})",
                            check.percentage(),
                            check.severity().label()
                        ));
                        page.set(1);
                        reload.update(|n| *n = n.wrapping_add(1));
                    }
                    Err(e) => info.set(e.detail_or("Plagiarism check failed")),
                }
                running.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &check_credentials, request);
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Dashboard"</h1>

            <section class="dashboard-section">
                <h2>"Run a plagiarism check"</h2>
                <form class="dashboard-form" on:submit=on_run_check>
                    <input
                        class="dashboard-input"
                        type="text"
                        inputmode="numeric"
                        placeholder="Project ID"
                        prop:value=move || project_input.get()
                        on:input=move |ev| project_input.set(event_target_value(&ev))
                    />
                    <select
                        class="dashboard-select"
                        prop:value=move || provider.get()
                        on:change=move |ev| provider.set(event_target_value(&ev))
                    >
                        <option value="local">"Local"</option>
                        <option value="copyscape">"Copyscape"</option>
                        <option value="turnitin">"Turnitin"</option>
                        <option value="plagscan">"Plagscan"</option>
                    </select>
                    <button class="dashboard-button" type="submit" disabled=move || running.get()>
                        {move || if running.get() { "Checking..." } else { "Run Check" }}
                    </button>
                </form>
            </section>

            <section class="dashboard-section">
                <h2>"Plagiarism checks"</h2>
                <Show
                    when=move || checks.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="dashboard-empty">"No checks yet."</p> }
                >
                    <ul class="check-list">
                        <For
                            each=move || checks.get()
                            key=|check| check.id
                            children=move |check: PlagiarismCheck| {
                                view! {
                                    <li class="check-list__item">
                                        <span class="check-list__project">
                                            {check.project_id.map(|id| format!("Project #{id}")).unwrap_or_default()}
                                        </span>
                                        <PlagiarismBadge percentage=check.percentage()/>
                                        <span class="check-list__status">{check.status.clone().unwrap_or_default()}</span>
                                        <span class="check-list__date">{check.created_at.clone().unwrap_or_default()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
                <Pager page=page pages=pages/>
            </section>

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
