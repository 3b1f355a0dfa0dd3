//! Sign-in page with an inline email-verification fallback.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::email_verification::EmailVerification;
use crate::config::{ApiConfig, FORGOT_PASSWORD_PATH, SIGN_UP_PATH};
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, Profile};
use crate::state::credential::Credentials;
use crate::state::session::SessionStore;

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Exchange the login for tokens, store them, and fetch the profile.
///
/// If the profile cannot be fetched the freshly stored credential is cleared
/// again, so a half-finished sign-in never leaves a token behind.
///
/// # Errors
///
/// Returns the [`ApiError`] from whichever request failed.
pub async fn sign_in(config: &ApiConfig, credentials: &Credentials, request: &LoginRequest) -> Result<Profile, ApiError> {
    let tokens = crate::net::api::login(config, request).await?;
    credentials.store(&tokens);
    match crate::net::api::fetch_current_user(config, &tokens.access).await {
        Ok(profile) => Ok(profile),
        Err(e) => {
            credentials.clear();
            Err(e)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let unverified = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let credentials = credentials.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match sign_in(&config, &credentials, &request).await {
                    Ok(profile) => {
                        session.update(|s| s.set_user(Some(profile)));
                        navigate(crate::config::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) if e.is_unverified_email() => {
                        info.set("Please verify your email before signing in".to_owned());
                        unverified.set(Some(request.email));
                    }
                    Err(e) => info.set(e.detail_or("Login failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &credentials, session, request);
    };

    let on_verified = Callback::new(move |()| {
        unverified.set(None);
        info.set("Email verified! You can now sign in.".to_owned());
    });

    view! {
        <div class="auth-page">
            <Show
                when=move || unverified.with(Option::is_none)
                fallback=move || {
                    view! {
                        <EmailVerification
                            email=unverified.get_untracked().unwrap_or_default()
                            on_verified=on_verified
                        />
                    }
                }
            >
                <div class="auth-card">
                    <h1>"Sign In"</h1>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <a class="auth-link" href=FORGOT_PASSWORD_PATH>"Forgot password?"</a>
                    <p class="auth-card__footer">
                        "No account yet? "
                        <a class="auth-link" href=SIGN_UP_PATH>"Sign up"</a>
                    </p>
                </div>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
