//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod backdrop;
pub mod chart;
pub mod clock;
pub mod escape;
pub mod sequence;
