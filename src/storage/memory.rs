//! In-memory slot storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_lock::RwLock;

use super::KeyValueStore;
use crate::error::StorageError;

/// Shared in-memory key-value storage.
///
/// Clones share the same map, so a caller can hand one clone to the engine
/// and keep another to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one slot.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.slots.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.write().await.remove(key);
        Ok(())
    }
}
