//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod chart_host;
pub mod chat_list;
pub mod template_list;
