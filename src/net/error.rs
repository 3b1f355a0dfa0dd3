//! REST failure classification.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as `{"detail": ...}`, `{"message": ...}` or
//! per-field lists (`{"email": ["..."]}`). [`extract_detail`] flattens those
//! shapes into one human-readable string so pages can show it verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not authenticated")]
    MissingCredential,
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-provided detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Backend detail text, or `fallback` when the backend gave none.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }

    /// Whether the backend rejected the request because the email is unverified.
    pub fn is_unverified_email(&self) -> bool {
        self.detail()
            .is_some_and(|d| d.contains("verified") || d.contains("Verify"))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. } | Self::MissingCredential)
    }
}

/// Pull the most useful message out of an error response body.
pub fn extract_detail(body: &serde_json::Value) -> Option<String> {
    for key in ["detail", "message", "error"] {
        if let Some(text) = body.get(key).and_then(serde_json::Value::as_str) {
            return Some(text.to_owned());
        }
    }
    let fields = body.as_object()?;
    fields.iter().find_map(|(field, value)| {
        let first = match value {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Array(items) => items.first().and_then(serde_json::Value::as_str),
            _ => None,
        }?;
        if field == "non_field_errors" {
            Some(first.to_owned())
        } else {
            Some(format!("{field}: {first}"))
        }
    })
}
