//! # textbi-ui
//!
//! Leptos + WASM client for the Text BI demo: a natural-language query
//! panel backed by an external analytics endpoint, plus the splash →
//! mock-login → mock-dashboard sequence. All analytical work (NL-to-SQL,
//! query execution, chart data) is mocked or delegated; this crate is the
//! interactive surface only.
//!
//! Browser-only dependencies sit behind the `csr` feature so the state and
//! utility layers build and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
