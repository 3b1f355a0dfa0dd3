//! Similarity badge for plagiarism check results.

#[cfg(test)]
#[path = "plagiarism_badge_test.rs"]
mod plagiarism_badge_test;

use leptos::prelude::*;

use crate::net::plagiarism::Severity;

/// Percentage with one decimal place, e.g. `"42.5%"`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

pub fn badge_class(severity: Severity) -> String {
    format!("plagiarism-badge plagiarism-badge--{}", severity.css_modifier())
}

#[component]
pub fn PlagiarismBadge(percentage: f64) -> impl IntoView {
    let severity = Severity::from_percentage(percentage);
    view! {
        <span class=badge_class(severity) title=severity.label()>
            <span class="plagiarism-badge__value">{format_percentage(percentage)}</span>
            <span class="plagiarism-badge__label">{severity.label()}</span>
        </span>
    }
}
