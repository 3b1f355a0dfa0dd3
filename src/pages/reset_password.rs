//! Reset-password page: six-digit code plus a new password.
//!
//! The email arrives in the `?email=` query parameter set by the
//! forgot-password page. Without it there is nothing to reset, so the page
//! sends the visitor back to request a code.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::otp_input::{OtpInput, cooldown_slot, resend_label};
use crate::config::{ApiConfig, FORGOT_PASSWORD_PATH, SIGN_IN_PATH};
use crate::net::types::PasswordResetConfirmRequest;
use crate::pages::sign_up::validate_password_pair;
use crate::state::otp::{OtpCode, ResendCooldown};

pub fn validate_reset_input(otp: &OtpCode, password: &str, confirm: &str) -> Result<(), &'static str> {
    if !otp.is_complete() {
        return Err("Please enter all 6 digits of the reset code");
    }
    if password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all password fields");
    }
    validate_password_pair(password, confirm)
}

/// Validate the form and build the confirm request for `email`.
pub fn build_reset_request(
    email: &str,
    otp: &OtpCode,
    password: &str,
    confirm: &str,
) -> Result<PasswordResetConfirmRequest, &'static str> {
    validate_reset_input(otp, password, confirm)?;
    Ok(PasswordResetConfirmRequest {
        email: email.to_owned(),
        otp: otp.code(),
        password: password.to_owned(),
        password2: confirm.to_owned(),
    })
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let query = use_query_map();
    let email = Memo::new(move |_| query.with(|q| q.get("email").unwrap_or_default().trim().to_owned()));

    let otp = RwSignal::new(OtpCode::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let cooldown = RwSignal::new(ResendCooldown::default());
    let busy = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let done = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let countdown = cooldown_slot();

    let navigate = use_navigate();
    Effect::new(move || {
        if email.with(String::is_empty) {
            navigate(
                FORGOT_PASSWORD_PATH,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        Effect::new(move || {
            if done.get() {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    navigate(SIGN_IN_PATH, NavigateOptions::default());
                });
            }
        });
    }

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || done.get_untracked() {
            return;
        }
        let request = match build_reset_request(
            &email.get_untracked(),
            &otp.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
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
            let config = submit_config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&config, &request).await {
                    Ok(()) => {
                        info.set("Password reset successful! Redirecting to sign in...".to_owned());
                        done.set(true);
                    }
                    Err(e) => info.set(e.detail_or("Password reset failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&submit_config, request);
    };

    let on_resend = move |_: leptos::ev::MouseEvent| {
        if sending.get_untracked() || !cooldown.get_untracked().can_resend() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let email = email.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(&config, &email).await {
                    Ok(()) => {
                        info.set("A new reset code has been sent".to_owned());
                        otp.update(OtpCode::clear);
                        cooldown.update(ResendCooldown::start);
                        let handle = crate::components::otp_input::run_resend_cooldown(cooldown);
                        let _ = countdown.try_update_value(|slot| slot.replace(handle));
                    }
                    Err(e) => info.set(e.detail_or("Failed to resend code")),
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, countdown);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">
                    "Enter the code sent to "
                    <strong>{move || email.get()}</strong>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <OtpInput otp=otp disabled=Signal::derive(move || busy.get() || done.get())/>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get() || done.get()>
                        {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
                <button
                    class="auth-link-button"
                    type="button"
                    disabled=move || sending.get() || !cooldown.get().can_resend()
                    on:click=on_resend
                >
                    {move || resend_label(cooldown.get(), sending.get(), "Resend Code")}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a class="auth-link" href=SIGN_IN_PATH>"Back to sign in"</a>
            </div>
        </div>
    }
}
