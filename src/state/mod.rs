//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`query`, `session`, `splash`, `dashboard`) so
//! each page depends on a small focused model, and every transition is a
//! plain method that native tests can drive without a browser.

pub mod dashboard;
pub mod metrics;
pub mod query;
pub mod session;
pub mod splash;
