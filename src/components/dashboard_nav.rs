//! Header shared by every dashboard section: section links, the signed-in
//! user's name and logout.

#[cfg(test)]
#[path = "dashboard_nav_test.rs"]
mod dashboard_nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::{
    DASHBOARD_PATH, DASHBOARD_PROFILE_PATH, DASHBOARD_PROJECTS_PATH, DASHBOARD_TRANSACTIONS_PATH,
    DASHBOARD_WALLET_PATH, HOME_PATH,
};
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session};

pub const DASHBOARD_LINKS: [(&str, &str); 5] = [
    (DASHBOARD_PATH, "Overview"),
    (DASHBOARD_PROFILE_PATH, "Profile"),
    (DASHBOARD_PROJECTS_PATH, "My Projects"),
    (DASHBOARD_WALLET_PATH, "Wallet"),
    (DASHBOARD_TRANSACTIONS_PATH, "Transactions"),
];

/// Trailing slashes are ignored, so `/dashboard` matches `/dashboard/`.
pub fn is_current(pathname: &str, href: &str) -> bool {
    pathname.trim_end_matches('/') == href.trim_end_matches('/')
}

#[component]
pub fn DashboardNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let pathname = use_location().pathname;

    let display_name = move || session.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default());
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.update(|s| end_session(s, &credentials));
    };

    view! {
        <header class="dashboard-header">
            <a class="dashboard-header__home" href=HOME_PATH>"Project Marketplace"</a>
            <nav class="dashboard-header__links">
                {DASHBOARD_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <a
                                class=move || {
                                    if pathname.with(|p| is_current(p, href)) {
                                        "dashboard-header__link dashboard-header__link--active"
                                    } else {
                                        "dashboard-header__link"
                                    }
                                }
                                href=href
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="dashboard-header__user">{display_name}</span>
            <button class="dashboard-header__logout" type="button" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
