//! Email verification step shown after sign-up or an unverified sign-in.

use leptos::prelude::*;

use crate::components::otp_input::{OtpInput, cooldown_slot, resend_label};
use crate::config::ApiConfig;
use crate::state::otp::{OtpCode, ResendCooldown};

/// Collects the six-digit code mailed to `email` and calls `on_verified`
/// once the backend accepts it.
#[component]
pub fn EmailVerification(#[prop(into)] email: String, on_verified: Callback<()>) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let email = StoredValue::new(email);
    let otp = RwSignal::new(OtpCode::new());
    let cooldown = RwSignal::new(ResendCooldown::default());
    let busy = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let countdown = cooldown_slot();

    let verify_config = config.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = otp.get_untracked();
        if !code.is_complete() {
            info.set("Please enter all 6 digits".to_owned());
            return;
        }
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = verify_config.clone();
            let email = email.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_email(&config, &email, &code.code()).await {
                    Ok(()) => {
                        info.set("Email verified successfully!".to_owned());
                        on_verified.run(());
                    }
                    Err(e) => info.set(e.detail_or("Email verification failed")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&verify_config, on_verified);
    };

    let on_resend = move |_: leptos::ev::MouseEvent| {
        if sending.get_untracked() || !cooldown.get_untracked().can_resend() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let email = email.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::resend_verification(&config, &email).await {
                    Ok(()) => {
                        info.set("Verification code sent".to_owned());
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
        <div class="auth-card auth-card--verify">
            <h2>"Verify your email"</h2>
            <p class="auth-card__subtitle">
                "We sent a 6-digit code to "
                <strong>{move || email.get_value()}</strong>
            </p>
            <form class="auth-form" on:submit=on_verify>
                <OtpInput otp=otp disabled=Signal::derive(move || busy.get())/>
                <button
                    class="auth-button"
                    type="submit"
                    disabled=move || !otp.with(|o| o.can_submit(busy.get()))
                >
                    {move || if busy.get() { "Verifying..." } else { "Verify Email" }}
                </button>
            </form>
            <button
                class="auth-link-button"
                type="button"
                disabled=move || sending.get() || !cooldown.get().can_resend()
                on:click=on_resend
            >
                {move || resend_label(cooldown.get(), sending.get(), "Resend Verification Code")}
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
