//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::main_wrapper::MainWrapper;
use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::components::session_refresh::SessionRefresh;
use crate::config::ApiConfig;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage, index::IndexPage,
    login::LoginPage, my_projects::MyProjectsPage, profile::ProfilePage, project_details::ProjectDetailsPage,
    projects::ProjectsPage, reset_password::ResetPasswordPage, sign_up::SignUpPage,
    transactions::TransactionsPage, wallet::WalletPage,
};
use crate::state::credential::Credentials;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, credential store and API configuration, then
/// mounts every route behind the bootstrap gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionStore::browser()));
    provide_context(Credentials::browser());
    provide_context(ApiConfig::from_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Project Marketplace"/>

        <Router>
            <MainWrapper>
                <SessionRefresh/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=IndexPage/>
                    <Route path=StaticSegment("about-us") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailsPage/>
                    <Route path=(StaticSegment("categories"), ParamSegment("id")) view=ProjectsPage/>
                    <Route
                        path=StaticSegment("sign-in")
                        view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("sign-up")
                        view=|| view! { <PublicRoute><SignUpPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <PublicRoute><ForgotPasswordPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("reset-password")
                        view=|| view! { <PublicRoute><ResetPasswordPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profile"))
                        view=|| view! { <PrivateRoute><ProfilePage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("projects"))
                        view=|| view! { <PrivateRoute><MyProjectsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("wallet"))
                        view=|| view! { <PrivateRoute><WalletPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("transactions"))
                        view=|| view! { <PrivateRoute><TransactionsPage/></PrivateRoute> }
                    />
                </Routes>
            </MainWrapper>
        </Router>
    }
}
