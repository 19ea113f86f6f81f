//! Network layer for the external analytics endpoint.

pub mod api;
pub mod types;
