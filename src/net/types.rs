//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! [`Profile`] is treated as opaque: it keeps the backend's JSON object as-is
//! and exposes typed accessors, so a cached profile written to storage reads
//! back exactly as the backend sent it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by `user/me`.
///
/// Stored as the raw JSON object. Nothing is required: a backend that omits
/// `email`, sends a string `id`, or nulls out `full_name` still yields a
/// usable profile, and `null` fields survive a save/load cycle verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    fields: serde_json::Map<String, serde_json::Value>,
}

/// Fields tried, in order, for [`Profile::display_name`].
const DISPLAY_NAME_FIELDS: [&str; 4] = ["full_name", "name", "username", "email"];

impl Profile {
    pub fn new(id: u64, email: impl Into<String>) -> Self {
        Self::default().with_field("id", id).with_field("email", email.into())
    }

    pub fn with_field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// String field, treating `null` and non-strings as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(serde_json::Value::as_str)
    }

    /// Backend identifier in whatever JSON form it was sent.
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.field("id").filter(|id| !id.is_null())
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn full_name(&self) -> Option<&str> {
        self.text("full_name")
    }

    /// Name to show in navigation chrome: the first non-blank of full name,
    /// name, username and email; empty when none is set.
    pub fn display_name(&self) -> &str {
        DISPLAY_NAME_FIELDS
            .iter()
            .filter_map(|key| self.text(key))
            .find(|value| !value.trim().is_empty())
            .unwrap_or("")
    }
}

/// Token pair returned by `user/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub password2: String,
    pub contact: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetConfirmRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub password2: String,
}

/// Paginated list envelope used by list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// List response that is either a [`Page`] envelope or a bare array; the
/// backend uses both shapes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    // Bare arrays first: a derived struct also accepts sequence input.
    Items(Vec<T>),
    Page(Page<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page(page) => page.results,
            Self::Items(items) => items,
        }
    }
}
