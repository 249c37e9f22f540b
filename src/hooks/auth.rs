//! Auth state projections and the caller-facing login/logout actions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::profile::{display_name, initials};
use crate::net::http::{FetchTransport, Transport};
use crate::net::types::{Credentials, User};
use crate::state::store::{AppStore, UserStore};
use crate::util::storage::{DurableStorage, LocalStorage, read_identity_record, remove_identity_record};

/// The store provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Result of [`AuthActions::try_login`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub error: Option<String>,
}

/// Login/logout bound to a store; logout also forgets the identity record.
pub struct AuthActions<T, S> {
    store: UserStore<T, S>,
}

impl<T, S> Clone for AuthActions<T, S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone() }
    }
}

impl<T: Transport, S: DurableStorage> AuthActions<T, S> {
    pub fn new(store: UserStore<T, S>) -> Self {
        Self { store }
    }

    pub async fn login(&self, credentials: Credentials) {
        self.store.login(credentials).await;
    }

    /// Log in and report whether the attempt left an error behind.
    pub async fn try_login(&self, credentials: Credentials) -> LoginOutcome {
        self.store.login(credentials).await;
        let error = self.store.snapshot().error;
        LoginOutcome { success: error.is_none(), error }
    }

    pub fn logout(&self) {
        self.store.logout();
        if let Some(record) = read_identity_record(self.store.storage()) {
            log::info!("forgetting identity record for {}", record.email.as_deref().unwrap_or("<unknown>"));
        }
        remove_identity_record(self.store.storage());
    }
}

/// Reactive auth projections plus bound actions.
#[derive(Clone)]
pub struct Auth {
    pub user: Signal<Option<User>>,
    pub is_authenticated: Signal<bool>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub display_name: Signal<String>,
    pub initials: Signal<String>,
    pub actions: AuthActions<FetchTransport, LocalStorage>,
}

pub fn use_auth() -> Auth {
    let store = use_store();
    let state = store.state();
    Auth {
        user: Signal::derive(move || state.with(|s| s.user.clone())),
        is_authenticated: Signal::derive(move || state.with(|s| s.is_authenticated())),
        is_loading: Signal::derive(move || state.with(|s| s.loading)),
        error: Signal::derive(move || state.with(|s| s.error.clone())),
        display_name: Signal::derive(move || state.with(|s| display_name(s.user.as_ref()))),
        initials: Signal::derive(move || state.with(|s| initials(s.user.as_ref()))),
        actions: AuthActions::new(store),
    }
}

pub fn use_user_actions() -> AuthActions<FetchTransport, LocalStorage> {
    AuthActions::new(use_store())
}
