//! Injected user store: reactive auth state plus the login/logout actions.
//!
//! DESIGN
//! ======
//! The observable value is an `RwSignal<AuthState>`. Reading [`UserStore::state`]
//! inside a reactive scope subscribes to it; the actions are the only writers.
//!
//! Overlapping logins are sequenced by a generation counter: each attempt takes
//! the next generation, and a resolution whose generation is no longer current
//! is dropped without touching state or storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use super::auth::AuthState;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::error_message;
use crate::net::http::{FetchTransport, HttpClient, Transport};
use crate::net::types::Credentials;
use crate::util::storage::{DurableStorage, LocalStorage, write_identity_record};

/// Store wired to the browser transport and `localStorage`.
pub type AppStore = UserStore<FetchTransport, LocalStorage>;

pub struct UserStore<T, S> {
    state: RwSignal<AuthState>,
    client: Arc<HttpClient<T, S>>,
    generation: Arc<AtomicU64>,
}

impl<T, S> Clone for UserStore<T, S> {
    fn clone(&self) -> Self {
        Self { state: self.state, client: Arc::clone(&self.client), generation: Arc::clone(&self.generation) }
    }
}

impl AppStore {
    /// Build the browser store from build-time configuration.
    pub fn browser() -> Self {
        Self::new(HttpClient::new(ClientConfig::from_build_env(), FetchTransport, LocalStorage))
    }
}

impl<T: Transport, S: DurableStorage> UserStore<T, S> {
    pub fn new(client: HttpClient<T, S>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            client: Arc::new(client),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Read-only handle; tracked reads re-run when any action writes.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn storage(&self) -> &S {
        self.client.storage()
    }

    /// Attempt a login. Never fails; the outcome lands in the state.
    pub async fn login(&self, credentials: Credentials) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("login attempt for {}", credentials.email);
        self.commit(AuthState::begin_login);

        let result = api::login(self.client.as_ref(), &credentials).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("discarding stale login result (attempt {generation})");
            return;
        }

        match result {
            Ok(user) => {
                write_identity_record(self.client.storage(), user.as_ref());
                if let Some(user) = &user {
                    log::info!("logged in as {}", user.email);
                }
                self.commit(|s| s.finish_login(user));
            }
            Err(err) => {
                let message = error_message(&err);
                log::error!("login failed: {message} ({err:?})");
                self.commit(|s| s.fail_login(message));
            }
        }
    }

    /// Drop the current user and error. Storage is left to the caller.
    pub fn logout(&self) {
        if self.state.with_untracked(|s| s.user.is_none() && s.error.is_none()) {
            return;
        }
        self.commit(AuthState::clear_session);
        log::info!("logged out");
    }

    /// Apply a transition and log the resulting phase when it changes.
    fn commit(&self, transition: impl FnOnce(&mut AuthState)) {
        let before = self.state.with_untracked(AuthState::phase);
        self.state.update(transition);
        let after = self.state.with_untracked(AuthState::phase);
        if before != after {
            log::debug!("auth phase {before:?} -> {after:?}");
        }
    }
}
