//! Read-only projections and action bindings over the user store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call these instead of reading `AuthState` fields directly, so the
//! derivation rules (display name, initials, completeness) live in one place.

pub mod auth;
pub mod profile;
