//! Six-box one-time-code input.
//!
//! The boxes are a view over an `RwSignal<OtpCode>`; all validation and
//! focus movement lives in [`OtpCode`]. Keyboard focus follows
//! `OtpCode::focus` after every change.

#[cfg(test)]
#[path = "otp_input_test.rs"]
mod otp_input_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::otp::{OTP_LENGTH, OtpCode, ResendCooldown};
use crate::util::task::TaskSlot;

/// Label for the resend button.
pub fn resend_label(cooldown: ResendCooldown, sending: bool, idle_label: &str) -> String {
    if sending {
        "Sending...".to_owned()
    } else if cooldown.can_resend() {
        idle_label.to_owned()
    } else {
        format!("Resend in {}s", cooldown.remaining())
    }
}

/// Count `cooldown` down once per second until it reaches zero. Cancelling
/// the returned handle stops the countdown without waiting out the current
/// second.
#[cfg(feature = "hydrate")]
pub(crate) fn run_resend_cooldown(cooldown: RwSignal<ResendCooldown>) -> crate::util::task::TaskHandle {
    crate::util::task::spawn_cancellable(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            let Some(left) = cooldown.try_update(ResendCooldown::tick) else {
                break;
            };
            if left == 0 {
                break;
            }
        }
    })
}

/// Slot for the running countdown, cancelled when the owner is cleaned up.
pub(crate) fn cooldown_slot() -> StoredValue<TaskSlot> {
    let slot = StoredValue::new(TaskSlot::default());
    on_cleanup(move || {
        let _ = slot.try_update_value(TaskSlot::cancel);
    });
    slot
}

#[component]
pub fn OtpInput(otp: RwSignal<OtpCode>, #[prop(into, optional)] disabled: Signal<bool>) -> impl IntoView {
    let boxes: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let index = otp.with(OtpCode::focus);
            if let Some(input) = boxes[index].get() {
                let _ = input.focus();
            }
        });
    }

    view! {
        <div class="otp-input">
            {(0..OTP_LENGTH)
                .map(|index| {
                    view! {
                        <input
                            node_ref=boxes[index]
                            class="otp-input__box"
                            type="text"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            maxlength="1"
                            placeholder="0"
                            aria-label=format!("Digit {}", index + 1)
                            disabled=move || disabled.get()
                            prop:value=move || otp.with(|o| o.digit(index).map(String::from).unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                // A rejected value still notifies so the box re-renders its old digit.
                                otp.update(|o| {
                                    o.input(index, &value);
                                });
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Backspace" && otp.with_untracked(|o| o.digit(index).is_none()) {
                                    ev.prevent_default();
                                    otp.update(|o| {
                                        o.backspace(index);
                                    });
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
