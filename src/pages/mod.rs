//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. `home` gates the splash/login and dashboard
//! surfaces; `analyze` is the standalone query panel.

pub mod analyze;
pub mod dashboard;
pub mod home;
pub mod splash;
