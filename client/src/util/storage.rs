//! Browser `localStorage` backend for the typed client store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch `localStorage` directly; they go through
//! `records::ClientStore`, which owns key names and value rules. This module
//! supplies the hydrate-only glue underneath it. During SSR every read misses
//! and every write is dropped, keeping server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use records::{ClientStore, StorageBackend, StoreError};

/// `window.localStorage`, or nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
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

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError::Backend("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
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
}

/// Typed store over the browser backend.
#[must_use]
pub fn client_store() -> ClientStore<BrowserStorage> {
    ClientStore::new(BrowserStorage)
}
