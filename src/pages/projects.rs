//! Public project catalogue, optionally narrowed to one category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at both `/projects` and `/categories/:id`. The whole listing is
//! fetched once per category; search and the level filter run client-side
//! over the loaded list, then the result is paged locally.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::pager::{Pager, page_count, page_slice};
use crate::config::{ApiConfig, project_path};
use crate::net::marketplace::{PROJECT_LEVELS, Project};
use crate::util::sequence::RequestSequencer;

pub const PROJECTS_PAGE_SIZE: u32 = 20;

/// Projects matching both the search term and the level (`""` for any).
pub fn filter_projects(projects: &[Project], search: &str, level: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.matches_level(level) && p.matches_search(search))
        .cloned()
        .collect()
}

/// Numeric `:id` route segment, if it parses.
pub fn parse_route_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let level = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);
    let sequencer = RequestSequencer::new();

    let category = Memo::new(move |_| params.with(|p| parse_route_id(p.get("id").as_deref())));

    Effect::new(move || {
        let category = category.get();
        let ticket = sequencer.begin();
        page.set(1);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let sequencer = sequencer.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                let result = match category {
                    Some(id) => crate::net::api::list_category_projects(&config, id).await,
                    None => crate::net::api::list_projects(&config).await,
                };
                if !sequencer.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(list) => {
                        projects.set(list);
                        info.set(String::new());
                    }
                    Err(e) => {
                        leptos::logging::warn!("loading projects failed: {e}");
                        projects.set(Vec::new());
                        info.set(e.detail_or("Failed to load projects"));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, category, ticket);
    });

    let filtered = Memo::new(move |_| projects.with(|all| filter_projects(all, &search.get(), &level.get())));
    let pages = Signal::derive(move || {
        let total = filtered.with(|f| u64::try_from(f.len()).unwrap_or(u64::MAX));
        page_count(total, PROJECTS_PAGE_SIZE)
    });
    let visible = move || filtered.with(|f| page_slice(f, page.get(), PROJECTS_PAGE_SIZE));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.set(search_input.get_untracked());
        page.set(1);
    };

    view! {
        <div class="projects-page">
            <h1>{move || if category.get().is_some() { "Category Projects" } else { "All Projects" }}</h1>
            <form class="projects-search" on:submit=on_search>
                <input
                    class="projects-search__input"
                    type="search"
                    placeholder="Search by title or author"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button class="projects-search__button" type="submit">"Search"</button>
            </form>
            <nav class="level-filter">
                {std::iter::once("")
                    .chain(PROJECT_LEVELS)
                    .map(|value| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if level.with(|l| l.as_str() == value) {
                                        "level-filter__option level-filter__option--active"
                                    } else {
                                        "level-filter__option"
                                    }
                                }
                                on:click=move |_| {
                                    level.set(value.to_owned());
                                    page.set(1);
                                }
                            >
                                {if value.is_empty() { "All Levels" } else { value }}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || !info.get().is_empty()>
                <p class="projects-page__message">{move || info.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="projects-page__loading">"Loading projects..."</p> }
            >
                <Show
                    when=move || filtered.with(|f| !f.is_empty())
                    fallback=|| view! { <p class="projects-page__empty">"No projects found."</p> }
                >
                    <ul class="project-grid">
                        <For
                            each=visible
                            key=|project| project.id
                            children=move |project: Project| {
                                view! {
                                    <li class="project-card">
                                        <a class="project-card__title" href=project_path(project.id)>
                                            {project.title.clone()}
                                        </a>
                                        <span class="project-card__author">
                                            {project.author_name.clone().unwrap_or_default()}
                                        </span>
                                        <span class="project-card__level">{project.level.clone().unwrap_or_default()}</span>
                                        <span class="project-card__price">{project.price.label()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Pager page=page pages=pages/>
                </Show>
            </Show>
        </div>
    }
}
