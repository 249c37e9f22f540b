//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, redirects, form
//! submission) and reads state only through `hooks`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
