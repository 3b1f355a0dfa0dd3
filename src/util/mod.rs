//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! wall-clock time, query encoding, background task lifetimes) from session
//! and page logic so the latter stay testable on native targets.

pub mod clock;
pub mod cookie;
pub mod query;
pub mod sequence;
pub mod storage;
pub mod task;
