//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: guarded pages
//! bounce anonymous visitors to `/login`, and the login page forwards to
//! `/dashboard` as soon as a user appears.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub(crate) fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub(crate) fn should_leave_login(state: &AuthState) -> bool {
    state.user.is_some()
}

/// Navigate to `target` when `should_redirect` holds for `state`.
///
/// Returns whether navigation happened.
pub(crate) fn redirect_when<F>(
    state: &AuthState,
    should_redirect: fn(&AuthState) -> bool,
    target: &str,
    navigate: &F,
) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    if !should_redirect(state) {
        return false;
    }
    navigate(target, NavigateOptions::default());
    true
}

/// Redirect to `/login` whenever no login is in flight and no user is present.
pub fn install_unauth_redirect<F>(state: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        state.with(|s| redirect_when(s, should_redirect_unauth, LOGIN_ROUTE, &navigate));
    });
}

/// Redirect to `/dashboard` once a user is present.
pub fn install_login_redirect<F>(state: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        state.with(|s| redirect_when(s, should_leave_login, DASHBOARD_ROUTE, &navigate));
    });
}
