//! `document.cookie` access for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token lives in a cookie rather than `localStorage` so it stays
//! separate from the cached profile. [`CookieStorage`] adapts the cookie jar
//! to [`KeyValueStorage`]. Parsing and formatting go through the `cookie`
//! crate with percent-encoding, so they can be tested natively.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use super::storage::{KeyValueStorage, StorageError};

/// Lifetime applied to credential cookies, in seconds (7 days).
pub const COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Find `name` in a `document.cookie`-style string (`a=1; b=2`).
///
/// Values are percent-decoded. Empty values are reported as absent, and
/// pairs that fail to parse are skipped.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(cookies)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Build the assignment string that sets `name` for the whole site.
pub fn format_set_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
    site_cookie(name, value, Duration::seconds(max_age_secs))
}

/// Build the assignment string that expires `name` immediately.
pub fn format_expire_cookie(name: &str) -> String {
    site_cookie(name, "", Duration::ZERO)
}

fn site_cookie(name: &str, value: &str, max_age: Duration) -> String {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .max_age(max_age)
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// Site cookie jar of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStorage;

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, StorageError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for CookieStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let cookies = html_document()?
                .cookie()
                .map_err(|e| StorageError::Read(format!("{e:?}")))?;
            Ok(read_cookie(&cookies, key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&format_set_cookie(key, value, COOKIE_MAX_AGE_SECS))
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&format_expire_cookie(key))
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
