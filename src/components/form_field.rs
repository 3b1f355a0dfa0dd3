//! Text input bound to one `String` field of a form struct held in a signal.

use leptos::prelude::*;

pub fn form_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    placeholder: &'static str,
    kind: &'static str,
    get: fn(&T) -> &String,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}
