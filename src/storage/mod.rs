//! Persisted key-value slot holding the serialized history.
//!
//! The concrete backend is compile-time selected, mirroring the two screens:
//! - always available → [`MemoryStorage`] (tests, previews)
//! - `native` feature → `tokio::fs` files (native.rs)
//! - `wasm` feature → browser `localStorage` (wasm.rs)
//!
//! All backends implement [`KeyValueStore`]; the history store only needs
//! `get`, `set` and `remove` on a single key.

pub mod memory;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "wasm")]
pub mod wasm;

use crate::error::StorageError;

pub use memory::MemoryStorage;

/// Asynchronous text slot storage.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Read the slot; `Ok(None)` when it has never been written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the slot. Removing an absent slot succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore> KeyValueStore for &T {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }
}
