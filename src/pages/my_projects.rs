//! Dashboard project management: upload new work and inspect plagiarism
//! checks per project.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`. Uploads are multipart: the text fields of
//! [`NewProject`] plus two documents picked through file inputs. Selecting a
//! project loads its checks; selecting a check loads its full record with
//! matched sources.
//!
//! TRADE-OFFS
//! ==========
//! Project checks and check details are tagged with [`RequestSequencer`]
//! tickets, so switching selection quickly never shows a stale panel.

#[cfg(test)]
#[path = "my_projects_test.rs"]
mod my_projects_test;

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::form_field::form_field;
use crate::components::plagiarism_badge::PlagiarismBadge;
use crate::config::{ApiConfig, project_path};
use crate::net::marketplace::{Category, NewProject, PROJECT_LEVELS, Project};
use crate::net::plagiarism::{PlagiarismCheck, source_label};
use crate::pages::dashboard::build_check_request;
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session_if_rejected};
use crate::util::sequence::RequestSequencer;

/// `Please provide a valid table of content` for `table_of_content`.
pub fn missing_field_message(field: &str) -> String {
    format!("Please provide a valid {}", field.replace('_', " "))
}

/// Raw upload form values; the documents are tracked by the file inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProjectForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price: String,
    pub keywords: String,
    pub co_authors: String,
}

impl NewProjectForm {
    /// Check required fields in form order and build the upload body.
    ///
    /// The two flags say whether each document has been picked.
    pub fn validate(&self, table_of_content: bool, project_content: bool) -> Result<NewProject, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(missing_field_message("title"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(missing_field_message("description"));
        }
        let category = self
            .category
            .trim()
            .parse::<u64>()
            .map_err(|_| missing_field_message("category"))?;
        let level = self.level.trim();
        if !PROJECT_LEVELS.contains(&level) {
            return Err(missing_field_message("level"));
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price > 0.0)
            .ok_or_else(|| missing_field_message("price"))?;
        if !table_of_content {
            return Err(missing_field_message("table_of_content"));
        }
        if !project_content {
            return Err(missing_field_message("project_content"));
        }
        Ok(NewProject {
            title: title.to_owned(),
            category,
            level: level.to_owned(),
            description: description.to_owned(),
            price,
            keywords: self.keywords.trim().to_owned(),
            co_authors: self.co_authors.trim().to_owned(),
        })
    }
}

#[cfg(feature = "hydrate")]
fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[component]
pub fn MyProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = StoredValue::new(expect_context::<Credentials>());
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let projects = RwSignal::new(Vec::<Project>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let reload = RwSignal::new(0_u32);
    let form = RwSignal::new(NewProjectForm::default());
    let uploading = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let table_of_content = NodeRef::<leptos::html::Input>::new();
    let project_content = NodeRef::<leptos::html::Input>::new();

    let selected_project = RwSignal::new(None::<u64>);
    let project_checks = RwSignal::new(Vec::<PlagiarismCheck>::new());
    let check_detail = RwSignal::new(None::<PlagiarismCheck>);
    let checking = RwSignal::new(false);
    let checks_sequencer = StoredValue::new(RequestSequencer::new());
    let detail_sequencer = StoredValue::new(RequestSequencer::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_categories(&config.get_value()).await {
            Ok(list) => categories.set(list),
            Err(e) => leptos::logging::warn!("loading categories failed: {e}"),
        }
    });

    Effect::new(move || {
        let _ = reload.get();

        #[cfg(feature = "hydrate")]
        {
            let credentials = credentials.get_value();
            let Some(token) = credentials.access_token() else {
                return;
            };
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::list_my_projects(&config, &token).await {
                    Ok(list) => projects.set(list),
                    Err(e) => {
                        if !session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                            info.set(e.detail_or("Failed to load your projects"));
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, credentials, config);
    });

    Effect::new(move || {
        let selected = selected_project.get();
        let ticket = checks_sequencer.with_value(RequestSequencer::begin);
        // A new selection invalidates any detail request in flight.
        detail_sequencer.with_value(RequestSequencer::begin);
        project_checks.set(Vec::new());
        check_detail.set(None);
        let Some(project_id) = selected else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let token = credentials.with_value(Credentials::access_token).unwrap_or_default();
            let config = config.get_value();
            let sequencer = checks_sequencer.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::list_project_checks(&config, &token, project_id).await;
                if !sequencer.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => project_checks.set(list),
                    Err(e) => info.set(e.detail_or("Failed to load plagiarism checks")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (project_id, ticket);
    });

    let show_check = move |check_id: u64| {
        let ticket = detail_sequencer.with_value(RequestSequencer::begin);

        #[cfg(feature = "hydrate")]
        {
            let token = credentials.with_value(Credentials::access_token).unwrap_or_default();
            let config = config.get_value();
            let sequencer = detail_sequencer.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_plagiarism_check(&config, &token, check_id).await;
                if !sequencer.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(check) => check_detail.set(Some(check)),
                    Err(e) => info.set(e.detail_or("Failed to load check details")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (check_id, ticket);
    };

    let run_check = move |project_id: u64| {
        if checking.get_untracked() {
            return;
        }
        checking.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let token = credentials.with_value(Credentials::access_token).unwrap_or_default();
            let config = config.get_value();
            let request = build_check_request(project_id, "local");
            leptos::task::spawn_local(async move {
                match crate::net::api::run_plagiarism_check(&config, &token, &request).await {
                    Ok(check) => {
                        info.set(format!("Check complete: {:.1}% similarity", check.percentage()));
                        selected_project.set(None);
                        selected_project.set(Some(project_id));
                    }
                    Err(e) => info.set(e.detail_or("Plagiarism check failed")),
                }
                checking.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = build_check_request(project_id, "local");
            checking.set(false);
        }
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        let files = (selected_file(table_of_content), selected_file(project_content));
        #[cfg(not(feature = "hydrate"))]
        let files: (Option<()>, Option<()>) = (None, None);

        let project = match form.with_untracked(|f| f.validate(files.0.is_some(), files.1.is_some())) {
            Ok(project) => project,
            Err(message) => {
                info.set(message);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let (Some(toc), Some(content)) = files else {
                return;
            };
            uploading.set(true);
            info.set(String::new());
            let token = credentials.with_value(Credentials::access_token).unwrap_or_default();
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_project(&config, &token, &project, &toc, &content).await {
                    Ok(()) => {
                        info.set("Project uploaded.".to_owned());
                        form.set(NewProjectForm::default());
                        reload.update(|n| *n = n.wrapping_add(1));
                    }
                    Err(e) => info.set(e.detail_or("Project upload failed")),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = project;
    };

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"My Projects"</h1>

            <section class="dashboard-section">
                <h2>"Upload a project"</h2>
                <form class="dashboard-form" on:submit=on_upload>
                    {form_field(form, "Title", "text", |f| &f.title, |f, v| f.title = v)}
                    <textarea
                        class="dashboard-input"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    ></textarea>
                    <select
                        class="dashboard-select"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.category = value);
                        }
                    >
                        <option value="">"Select category"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                    <select
                        class="dashboard-select"
                        prop:value=move || form.with(|f| f.level.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.level = value);
                        }
                    >
                        <option value="">"Select level"</option>
                        {PROJECT_LEVELS.into_iter().map(|level| view! { <option value=level>{level}</option> }).collect_view()}
                    </select>
                    {form_field(form, "Price", "number", |f| &f.price, |f, v| f.price = v)}
                    {form_field(form, "Keywords (comma separated)", "text", |f| &f.keywords, |f, v| f.keywords = v)}
                    {form_field(form, "Co-authors", "text", |f| &f.co_authors, |f, v| f.co_authors = v)}
                    <label class="dashboard-file">
                        "Table of content" <input type="file" node_ref=table_of_content/>
                    </label>
                    <label class="dashboard-file">
                        "Project content" <input type="file" node_ref=project_content/>
                    </label>
                    <button class="dashboard-button" type="submit" disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload Project" }}
                    </button>
                </form>
            </section>

            <section class="dashboard-section">
                <h2>"Your projects"</h2>
                <Show
                    when=move || projects.with(|p| !p.is_empty())
                    fallback=|| view! { <p class="dashboard-empty">"No projects uploaded yet."</p> }
                >
                    <ul class="my-projects">
                        {move || {
                            projects
                                .get()
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    view! {
                                        <li class="my-projects__item">
                                            <a href=project_path(id)>{project.title.clone()}</a>
                                            <span class="my-projects__price">{project.price.label()}</span>
                                            <span class="my-projects__status">
                                                {project.status.clone().unwrap_or_default()}
                                            </span>
                                            <button
                                                class="dashboard-button"
                                                type="button"
                                                on:click=move |_| selected_project.set(Some(id))
                                            >
                                                "View Checks"
                                            </button>
                                            <button
                                                class="dashboard-button"
                                                type="button"
                                                disabled=move || checking.get()
                                                on:click=move |_| run_check(id)
                                            >
                                                "Check Plagiarism"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>

            <Show when=move || selected_project.with(Option::is_some)>
                <section class="dashboard-section">
                    <h2>{move || format!("Checks for project #{}", selected_project.get().unwrap_or_default())}</h2>
                    <Show
                        when=move || project_checks.with(|c| !c.is_empty())
                        fallback=|| view! { <p class="dashboard-empty">"No checks for this project."</p> }
                    >
                        <ul class="check-list">
                            {move || {
                                project_checks
                                    .get()
                                    .into_iter()
                                    .map(|check| {
                                        let id = check.id;
                                        view! {
                                            <li class="check-list__item">
                                                <PlagiarismBadge percentage=check.percentage()/>
                                                <span class="check-list__status">
                                                    {check.status.clone().unwrap_or_default()}
                                                </span>
                                                <span class="check-list__date">
                                                    {check.created_at.clone().unwrap_or_default()}
                                                </span>
                                                <button
                                                    class="dashboard-button"
                                                    type="button"
                                                    on:click=move |_| show_check(id)
                                                >
                                                    "Details"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </section>
            </Show>

            {move || check_detail.get().map(|check| view! { <CheckDetail check=check/> })}

            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

/// Full record of one check with its matched sources.
#[component]
fn CheckDetail(check: PlagiarismCheck) -> impl IntoView {
    let failure = check.failure().map(str::to_owned);
    let provider = check
        .premium_provider
        .clone()
        .or_else(|| check.check_type.clone())
        .unwrap_or_else(|| "local".to_owned());
    let sources: Vec<String> = check.matched_sources.iter().map(source_label).collect();
    view! {
        <section class="dashboard-section check-detail">
            <h2>{format!("Check #{}", check.id)}</h2>
            <PlagiarismBadge percentage=check.percentage()/>
            <p class="check-detail__meta">
                <span>{provider}</span>
                <span>{check.status.clone().unwrap_or_default()}</span>
                <span>{check.updated_at.clone().or_else(|| check.created_at.clone()).unwrap_or_default()}</span>
            </p>
            {failure.map(|reason| view! { <p class="check-detail__error">{reason}</p> })}
            {if sources.is_empty() {
                view! { <p class="dashboard-empty">"No matched sources."</p> }.into_any()
            } else {
                view! {
                    <ul class="check-detail__sources">
                        {sources.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
