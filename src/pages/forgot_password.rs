//! Forgot-password page: requests a reset code by email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::config::{ApiConfig, RESET_PASSWORD_PATH, SIGN_IN_PATH};
use crate::util::query::encode_query_value;

pub fn validate_email_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address");
    }
    Ok(email.to_owned())
}

/// Reset page URL carrying `email` in the query string.
pub fn reset_password_href(email: &str) -> String {
    format!("{RESET_PASSWORD_PATH}?email={}", encode_query_value(email))
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validate_email_input(&email.get_untracked()) {
            Ok(value) => value,
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
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(&config, &email_value).await {
                    Ok(()) => {
                        info.set("Reset code sent! Check your email.".to_owned());
                        navigate(&reset_password_href(&email_value), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(e.detail_or("Failed to send reset code")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, email_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
                <p class="auth-card__subtitle">"Enter your email and we'll send you a reset code."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Reset Code" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a class="auth-link" href=SIGN_IN_PATH>"Back to sign in"</a>
            </div>
        </div>
    }
}
