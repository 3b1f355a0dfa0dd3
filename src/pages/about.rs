//! Public "About us" page.

use leptos::prelude::*;

use crate::config::{PROJECTS_PATH, SIGN_UP_PATH};

const TEAM: [(&str, &str, &str); 2] = [
    (
        "Zubairu Abduljelil",
        "Software Engineer",
        "Passionate about building scalable solutions and creating seamless user experiences.",
    ),
    (
        "Yusuf Abdulmalik",
        "Software Engineer",
        "Full-stack developer focused on modern web technologies and clean architecture.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__hero">
                <h1>"About Our Platform"</h1>
                <p>
                    "We connect students and researchers with quality academic project materials, "
                    "and give contributors a place to publish and sell their work."
                </p>
                <nav class="about-page__actions">
                    <a class="auth-button" href=SIGN_UP_PATH>"Get Started"</a>
                    <a class="auth-link" href=PROJECTS_PATH>"Browse Projects"</a>
                </nav>
            </section>
            <section class="about-page__team">
                <h2>"Meet the Team"</h2>
                <ul class="team-list">
                    {TEAM
                        .iter()
                        .map(|(name, role, bio)| {
                            view! {
                                <li class="team-list__member">
                                    <h3>{*name}</h3>
                                    <p class="team-list__role">{*role}</p>
                                    <p class="team-list__bio">{*bio}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
