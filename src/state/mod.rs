//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `credential`, `refresh`, `guard`,
//! `bootstrap`, `otp`) so components depend on small focused models. Every
//! model here is plain data plus methods; components wrap them in Leptos
//! signals and provide them through context.

pub mod bootstrap;
pub mod credential;
pub mod guard;
pub mod otp;
pub mod refresh;
pub mod session;
