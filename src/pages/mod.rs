//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Form validation is kept in pure functions next to the
//! page so it can be tested without a browser.

pub mod about;
pub mod dashboard;
pub mod forgot_password;
pub mod index;
pub mod login;
pub mod my_projects;
pub mod profile;
pub mod project_details;
pub mod projects;
pub mod reset_password;
pub mod sign_up;
pub mod transactions;
pub mod wallet;
