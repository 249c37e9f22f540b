//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so overrides are baked in with
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Transport settings shared by every backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address every request path is appended to.
    pub api_base_url: String,
    /// Send cookies with every request (session-based auth).
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), with_credentials: true }
    }
}

impl ClientConfig {
    /// Build config from the compile-time `DEVTINDER_API_BASE_URL` override.
    pub fn from_build_env() -> Self {
        Self::from_base_url(option_env!("DEVTINDER_API_BASE_URL"))
    }

    /// Build config from an optional base URL; blank values use the default.
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url, ..Self::default() }
    }

    /// Absolute URL for an API path, joined with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
