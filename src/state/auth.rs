//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, loading flag, and last error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only while a login request is in flight.
    pub loading: bool,
    /// Normalized message from the last failed login, cleared on each attempt.
    pub error: Option<String>,
}

/// Coarse lifecycle phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    Failed,
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Authenticating
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else if self.error.is_some() {
            AuthPhase::Failed
        } else {
            AuthPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub(crate) fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a successful login. A missing user leaves the current one in place.
    pub(crate) fn finish_login(&mut self, user: Option<User>) {
        if let Some(user) = user {
            self.user = Some(user);
        }
        self.loading = false;
    }

    pub(crate) fn fail_login(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub(crate) fn clear_session(&mut self) {
        self.user = None;
        self.error = None;
    }
}
