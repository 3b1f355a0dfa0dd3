//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies their failures, `types`
//! defines the shared wire schema, `marketplace` holds the project, wallet
//! and transaction DTOs, and `plagiarism` holds the plagiarism-check DTOs and
//! severity classification used by the dashboard.

pub mod api;
pub mod error;
pub mod marketplace;
pub mod plagiarism;
pub mod types;
