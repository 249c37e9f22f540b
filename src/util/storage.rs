//! Durable key/value storage and the persisted identity record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; tests and non-browser builds
//! use [`MemoryStorage`]. Both sit behind [`DurableStorage`] so the store and
//! the HTTP interceptor never touch `web-sys` directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Key holding the reduced `{id, email}` identity record.
pub const USER_KEY: &str = "user";

/// String key/value storage that outlives the page.
pub trait DurableStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Remove every key, not just the ones this crate writes.
    fn clear(&self);
}

/// Browser `localStorage`. Every call is a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl DurableStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }
}

/// In-memory storage; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }

    fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Reduced identity persisted after a successful login.
///
/// Missing fields are omitted, so a login without a user payload persists `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdentityRecord {
    pub fn from_user(user: Option<&User>) -> Self {
        Self { id: user.map(|u| u.id.clone()), email: user.map(|u| u.email.clone()) }
    }
}

/// Persist the identity record for `user` under [`USER_KEY`].
///
/// Writes even when `user` is `None`; callers rely on the key existing after
/// any successful login.
pub fn write_identity_record<S: DurableStorage + ?Sized>(storage: &S, user: Option<&User>) {
    if user.is_none() {
        log::warn!("login succeeded without a user payload; persisting empty identity record");
    }
    match serde_json::to_string(&IdentityRecord::from_user(user)) {
        Ok(raw) => storage.set(USER_KEY, &raw),
        Err(e) => log::error!("identity record encode failed: {e}"),
    }
}

/// Load the persisted identity record, if present and well-formed.
pub fn read_identity_record<S: DurableStorage + ?Sized>(storage: &S) -> Option<IdentityRecord> {
    let raw = storage.get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn remove_identity_record<S: DurableStorage + ?Sized>(storage: &S) {
    storage.remove(USER_KEY);
}
