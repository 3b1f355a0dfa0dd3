//! Client configuration: backend location and route paths.
//!
//! The API base URL is fixed at build time from `MARKETPLACE_API_BASE_URL`
//! and falls back to the hosted backend when the variable is unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://project-market-place-backend.onrender.com/api/v1/";

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const DASHBOARD_PATH: &str = "/dashboard/";
pub const DASHBOARD_PROFILE_PATH: &str = "/dashboard/profile";
pub const DASHBOARD_PROJECTS_PATH: &str = "/dashboard/projects";
pub const DASHBOARD_WALLET_PATH: &str = "/dashboard/wallet";
pub const DASHBOARD_TRANSACTIONS_PATH: &str = "/dashboard/transactions";
pub const PROJECTS_PATH: &str = "/projects";
pub const ABOUT_PATH: &str = "/about-us/";

/// Detail page for one project.
pub fn project_path(project_id: u64) -> String {
    format!("{PROJECTS_PATH}/{project_id}")
}

/// Project listing narrowed to one category.
pub fn category_path(category_id: u64) -> String {
    format!("/categories/{category_id}")
}

/// Backend REST API location, provided to components through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("MARKETPLACE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Use `base_url`, normalized to end with exactly one `/`.
    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self { base_url: format!("{trimmed}/") }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative API `path` such as `user/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
