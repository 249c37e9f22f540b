//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain state value and its transitions; `store` wraps it in a
//! reactive container together with the HTTP client. The container is built
//! once in `App` and passed down through context, never held in a global.

pub mod auth;
pub mod store;
