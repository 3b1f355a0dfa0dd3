//! Plagiarism-check DTOs and severity classification.
//!
//! Contributors run a check on an uploaded project before publishing it. The
//! backend returns a similarity percentage; [`Severity`] buckets it for the
//! dashboard badge.

#[cfg(test)]
#[path = "plagiarism_test.rs"]
mod plagiarism_test;

use serde::{Deserialize, Serialize};

/// Where the check is run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// Backend-local corpus comparison.
    #[default]
    Local,
    /// Paid third-party provider.
    Premium,
}

/// Third-party providers available for premium checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumProvider {
    Copyscape,
    Turnitin,
    Plagscan,
}

/// Body for `POST plagiarism/check/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlagiarismCheckRequest {
    pub project_id: u64,
    pub check_type: CheckType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_provider: Option<PremiumProvider>,
}

impl PlagiarismCheckRequest {
    pub fn local(project_id: u64) -> Self {
        Self {
            project_id,
            check_type: CheckType::Local,
            premium_provider: None,
        }
    }

    pub fn premium(project_id: u64, provider: PremiumProvider) -> Self {
        Self {
            project_id,
            check_type: CheckType::Premium,
            premium_provider: Some(provider),
        }
    }
}

/// A completed or pending plagiarism check.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlagiarismCheck {
    pub id: u64,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub similarity_percentage: Option<f64>,
    /// Name used by the per-project listing for the same figure.
    #[serde(default)]
    pub plagiarism_percentage: Option<f64>,
    #[serde(default)]
    pub check_type: Option<String>,
    #[serde(default)]
    pub premium_provider: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Sources the backend matched; shape varies by provider.
    #[serde(default)]
    pub matched_sources: Vec<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PlagiarismCheck {
    /// Similarity percentage under either field name; `0` when absent.
    pub fn percentage(&self) -> f64 {
        self.similarity_percentage.or(self.plagiarism_percentage).unwrap_or(0.0)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_percentage(self.percentage())
    }

    /// Failure reason, only for checks the backend marked `failed`.
    pub fn failure(&self) -> Option<&str> {
        if self.status.as_deref() == Some("failed") {
            self.error_message.as_deref().filter(|m| !m.is_empty())
        } else {
            None
        }
    }
}

/// One-line text for a matched source: its URL or title when present,
/// otherwise the raw value.
pub fn source_label(source: &serde_json::Value) -> String {
    match source {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Object(fields) => ["url", "title", "source"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(|v| v.as_str()))
            .map_or_else(|| source.to_string(), str::to_owned),
        other => other.to_string(),
    }
}

/// Risk bucket for a similarity percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// `< 20` low, `< 50` medium, `< 75` high, otherwise critical.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 20.0 {
            Self::Low
        } else if percentage < 50.0 {
            Self::Medium
        } else if percentage < 75.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
            Self::Critical => "Critical",
        }
    }

    /// CSS modifier for the badge (`plagiarism-badge--low`, ...).
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Query string for `GET plagiarism/checks/`.
pub fn checks_query(page: u32, page_size: u32) -> String {
    format!("page={}&page_size={}", page.max(1), page_size.max(1))
}
