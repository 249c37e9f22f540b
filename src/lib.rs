//! # devtinder
//!
//! Leptos + WASM single-page client for DevTinder: login, route guarding,
//! and placeholder dashboard/profile pages.
//!
//! ARCHITECTURE
//! ============
//! `net` owns the configured HTTP transport and error normalization,
//! `state` holds the injected user store, `hooks` exposes read-only
//! projections over it, and `pages`/`components` render from those.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
