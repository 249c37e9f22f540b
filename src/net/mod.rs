//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single configured transport, `api` wraps individual
//! endpoints, `error` folds every failure into one display string, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
