//! Registration page followed by email verification.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;

use crate::components::email_verification::EmailVerification;
use crate::components::form_field::form_field;
use crate::config::{ApiConfig, SIGN_IN_PATH};
use crate::net::types::RegisterRequest;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Passwords must match and be at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Raw field values of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub password2: String,
    pub contact: String,
}

impl SignUpForm {
    /// Check every field and build the request body.
    ///
    /// Text fields are trimmed; passwords are taken verbatim.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let email = self.email.trim();
        let full_name = self.full_name.trim();
        let contact = self.contact.trim();
        if [email, full_name, &self.password, &self.password2, contact]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err("Please fill in all fields");
        }
        validate_password_pair(&self.password, &self.password2)?;
        Ok(RegisterRequest {
            email: email.to_owned(),
            full_name: full_name.to_owned(),
            password: self.password.clone(),
            password2: self.password2.clone(),
            contact: contact.to_owned(),
        })
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let form = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered_email = RwSignal::new(None::<String>);
    let verified = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(SignUpForm::validate) {
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
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &request).await {
                    Ok(()) => {
                        info.set("Registration successful! Check your email for the verification code.".to_owned());
                        registered_email.set(Some(request.email));
                    }
                    Err(e) => info.set(e.detail_or("Registration failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, request);
    };

    let on_verified = Callback::new(move |()| {
        info.set("Email verified! Redirecting to sign in...".to_owned());
        verified.set(true);
    });

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if verified.get() {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    navigate(SIGN_IN_PATH, leptos_router::NavigateOptions::default());
                });
            }
        });
    }

    view! {
        <div class="auth-page">
            <Show
                when=move || registered_email.with(Option::is_none)
                fallback=move || {
                    view! {
                        <EmailVerification
                            email=registered_email.get_untracked().unwrap_or_default()
                            on_verified=on_verified
                        />
                    }
                }
            >
                <div class="auth-card">
                    <h1>"Create Account"</h1>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        {form_field(form, "you@example.com", "email", |f| &f.email, |f, v| f.email = v)}
                        {form_field(form, "Full name", "text", |f| &f.full_name, |f, v| f.full_name = v)}
                        {form_field(form, "Contact number", "tel", |f| &f.contact, |f, v| f.contact = v)}
                        {form_field(form, "Password", "password", |f| &f.password, |f, v| f.password = v)}
                        {form_field(form, "Confirm password", "password", |f| &f.password2, |f, v| f.password2 = v)}
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Already registered? "
                        <a class="auth-link" href=SIGN_IN_PATH>"Sign in"</a>
                    </p>
                </div>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
