//! Marketplace DTOs: projects, categories, payments, wallet and transactions.
//!
//! DESIGN
//! ======
//! Money arrives either as a JSON number or as a decimal string (`"1500.00"`),
//! so every amount goes through [`Amount`]. Optional display fields default
//! rather than fail, so one sparse record never hides a whole listing.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use serde::{Deserialize, Serialize};

/// Symbol prefixed to every displayed amount.
pub const CURRENCY_SIGN: &str = "$";

/// Academic levels offered by the level filter and the upload form.
pub const PROJECT_LEVELS: [&str; 8] = ["NCE", "ND", "HND", "BSc", "MSc", "PGD", "PhD", "Others"];

// =============================================================================
// Amount
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "RawAmount")]
pub struct Amount(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Null(()),
}

impl TryFrom<RawAmount> for Amount {
    type Error = String;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Number(value) => Ok(Self(value)),
            RawAmount::Null(()) => Ok(Self(0.0)),
            RawAmount::Text(text) if text.trim().is_empty() => Ok(Self(0.0)),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| format!("invalid amount: {text:?}")),
        }
    }
}

impl Amount {
    /// `$1,234.50` style label.
    pub fn label(self) -> String {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        let sign = if self.0 < 0.0 { "-" } else { "" };
        format!("{sign}{CURRENCY_SIGN}{grouped}.{cents}")
    }
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub price: Amount,
    #[serde(default)]
    pub description: Option<String>,
    /// Category id, name, or nested `{ "id", "name" }` object.
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub co_authors: Option<String>,
}

impl Project {
    /// Case-insensitive match of `term` against title or author.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self
                .author_name
                .as_deref()
                .is_some_and(|author| author.to_lowercase().contains(&term))
    }

    /// An empty `level` matches every project.
    pub fn matches_level(&self, level: &str) -> bool {
        level.is_empty() || self.level.as_deref() == Some(level)
    }

    pub fn category_label(&self) -> Option<String> {
        match self.category.as_ref()? {
            serde_json::Value::String(name) => Some(name.clone()),
            serde_json::Value::Number(id) => Some(format!("Category #{id}")),
            serde_json::Value::Object(fields) => fields.get("name").and_then(|n| n.as_str()).map(str::to_owned),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default, alias = "title")]
    pub name: String,
}

/// Body for `POST projects/{id}/initiatepayment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub email: String,
}

/// Payment gateway reply; the checkout link sits under `data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub data: PaymentData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentData {
    #[serde(default)]
    pub authorization_url: Option<String>,
}

impl PaymentResponse {
    pub fn authorization_url(self) -> Option<String> {
        self.data.authorization_url.filter(|url| !url.trim().is_empty())
    }
}

/// Text fields of a project upload; the two documents travel alongside as
/// multipart file parts.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub category: u64,
    pub level: String,
    pub description: String,
    pub price: f64,
    pub keywords: String,
    pub co_authors: String,
}

/// Multipart part names for the two uploaded documents.
pub const TABLE_OF_CONTENT_FIELD: &str = "table_of_content";
pub const PROJECT_CONTENT_FIELD: &str = "project_content";

impl NewProject {
    /// Text parts in the order the backend form lists them.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("category", self.category.to_string()),
            ("level", self.level.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
            ("keywords", self.keywords.clone()),
            ("co_authors", self.co_authors.clone()),
        ]
    }
}

// =============================================================================
// Account
// =============================================================================

/// Body for `PATCH user/me`. The password is only sent when changing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub specialization: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Payout bank details; also the body for `POST user/wallet`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bank: String,
}

fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub balance: Amount,
    #[serde(flatten)]
    pub account: BankAccount,
}

/// Body for `POST user/cashout`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CashoutRequest {
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Cashout {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Cashout {
    pub fn when(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.date.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn when(&self) -> Option<&str> {
        self.date.as_deref().or(self.created_at.as_deref())
    }
}

/// CSS modifier for a payout or transaction status (`status--pending`, ...).
pub fn status_modifier(status: Option<&str>) -> &'static str {
    match status.map(str::to_lowercase).as_deref() {
        Some("pending") => "pending",
        Some("approved" | "completed" | "success" | "successful") => "ok",
        Some("rejected" | "failed" | "declined") => "failed",
        _ => "unknown",
    }
}
