//! Dashboard profile: view and edit the signed-in user's details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`. The form starts from the cached session
//! profile, then refreshes from `user/me`. A successful save replaces the
//! session profile so the navigation name updates at once.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::dashboard_nav::DashboardNav;
use crate::components::form_field::form_field;
use crate::config::ApiConfig;
use crate::net::marketplace::ProfileUpdate;
use crate::net::types::Profile;
use crate::pages::sign_up::MIN_PASSWORD_LENGTH;
use crate::state::credential::Credentials;
use crate::state::session::{SessionStore, end_session_if_rejected};

/// Editable profile fields. A blank password leaves it unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub password: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |key: &str| profile.text(key).unwrap_or_default().to_owned();
        Self {
            name: profile.text("name").or_else(|| profile.full_name()).unwrap_or_default().to_owned(),
            specialization: text("specialization"),
            contact: text("contact"),
            password: String::new(),
        }
    }

    pub fn to_update(&self) -> Result<ProfileUpdate, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please provide a valid name");
        }
        let password = if self.password.is_empty() {
            None
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err("Password must be at least 6 characters");
        } else {
            Some(self.password.clone())
        };
        Ok(ProfileUpdate {
            name: name.to_owned(),
            specialization: self.specialization.trim().to_owned(),
            contact: self.contact.trim().to_owned(),
            password,
        })
    }
}

/// Count shown for list-or-number profile stats such as `projects`.
pub fn stat_count(profile: &Profile, key: &str) -> u64 {
    match profile.field(key) {
        Some(serde_json::Value::Array(items)) => u64::try_from(items.len()).unwrap_or(u64::MAX),
        Some(value) => value.as_u64().unwrap_or(0),
        None => 0,
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let credentials = expect_context::<Credentials>();
    let config = expect_context::<ApiConfig>();

    let initial = session.with_untracked(|s| s.user().map(ProfileForm::from_profile).unwrap_or_default());
    let form = RwSignal::new(initial);
    let info = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = credentials.access_token() {
            let config = config.clone();
            let credentials = credentials.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user(&config, &token).await {
                    Ok(profile) => {
                        form.set(ProfileForm::from_profile(&profile));
                        session.update(|s| s.set_user(Some(profile)));
                    }
                    Err(e) => {
                        if !session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                            info.set(e.detail_or("Failed to load profile"));
                        }
                    }
                }
            });
        }
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match form.with_untracked(ProfileForm::to_update) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let credentials = credentials.clone();
            let token = credentials.access_token().unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&config, &token, &update).await {
                    Ok(profile) => {
                        form.set(ProfileForm::from_profile(&profile));
                        session.update(|s| s.set_user(Some(profile)));
                        info.set("Profile updated.".to_owned());
                    }
                    Err(e) => {
                        if !session.try_update(|s| end_session_if_rejected(s, &credentials, &e)).unwrap_or(false) {
                            info.set(e.detail_or("Failed to update profile"));
                        }
                    }
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&config, &credentials, update);
    };

    let email = move || session.with(|s| s.user().and_then(Profile::email).unwrap_or_default().to_owned());
    let stat = move |key: &'static str| move || session.with(|s| s.user().map_or(0, |p| stat_count(p, key)));

    view! {
        <div class="dashboard-page">
            <DashboardNav/>
            <h1>"Profile"</h1>
            <section class="dashboard-section profile-summary">
                <p class="profile-summary__email">{email}</p>
                <p class="profile-summary__stats">
                    <span>{stat("projects")} " projects"</span>
                    <span>{stat("likes")} " likes"</span>
                </p>
            </section>
            <section class="dashboard-section">
                <h2>"Edit profile"</h2>
                <form class="dashboard-form" on:submit=on_save>
                    {form_field(form, "Full name", "text", |f| &f.name, |f, v| f.name = v)}
                    {form_field(form, "Specialization", "text", |f| &f.specialization, |f, v| f.specialization = v)}
                    {form_field(form, "Contact number", "tel", |f| &f.contact, |f, v| f.contact = v)}
                    {form_field(form, "New password (optional)", "password", |f| &f.password, |f, v| f.password = v)}
                    <button class="dashboard-button" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>
            <Show when=move || !info.get().is_empty()>
                <p class="dashboard-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
