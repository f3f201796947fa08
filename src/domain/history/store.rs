//! History store — the in-memory list kept in sync with one persisted slot.
//!
//! Every mutation rewrites the whole slot from the in-memory list, so the last
//! completed write always reflects the latest state. A failed write is
//! reported to the caller but never rolls back the in-memory change.

use std::collections::VecDeque;

use super::convert::{decode, encode};
use super::state::{HistoryState, LoadPhase};
use super::HistoryItem;
use crate::error::{EngineError, StorageError};
use crate::storage::KeyValueStore;

/// How the initial load ended. The store is `Ready` after every variant.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A valid snapshot was read.
    Restored { count: usize },
    /// No snapshot was persisted yet.
    Empty,
    /// The snapshot was not a well-formed history list; it was erased.
    RecoveredCorrupt,
    /// The slot could not be read; history starts empty.
    Unavailable(StorageError),
}

/// Conversion history backed by a [`KeyValueStore`] slot.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    key: String,
    state: HistoryState,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S, key: &str, max_size: usize) -> Self {
        Self {
            storage,
            key: key.to_string(),
            state: HistoryState::new(max_size),
        }
    }

    /// Read the persisted snapshot and make the store ready.
    ///
    /// Never fails: corrupt snapshots are erased and unreadable storage falls
    /// back to an empty history.
    pub async fn load(&mut self) -> LoadOutcome {
        self.state.begin_loading();

        let outcome = match self.storage.get(&self.key).await {
            Ok(None) => {
                self.state.finish_loading(Vec::new());
                LoadOutcome::Empty
            }
            Ok(Some(text)) => match decode(&text) {
                Ok(items) => {
                    self.state.finish_loading(items);
                    LoadOutcome::Restored {
                        count: self.state.len(),
                    }
                }
                Err(e) => {
                    tracing::warn!("Discarding corrupt history snapshot: {}", e);
                    if let Err(e) = self.storage.remove(&self.key).await {
                        tracing::warn!("Failed to erase corrupt history snapshot: {}", e);
                    }
                    self.state.finish_loading(Vec::new());
                    LoadOutcome::RecoveredCorrupt
                }
            },
            Err(e) => {
                tracing::error!("Failed to read history: {}", e);
                self.state.finish_loading(Vec::new());
                LoadOutcome::Unavailable(e)
            }
        };

        tracing::info!("History ready with {} item(s)", self.state.len());
        outcome
    }

    /// Prepend `item`, cap the list, and persist the new snapshot.
    ///
    /// Returns [`EngineError::NotLoaded`] without touching anything before
    /// [`load`](Self::load) completes. Any other error means only the write
    /// failed; the item stays in memory.
    pub async fn append(&mut self, item: HistoryItem) -> Result<(), EngineError> {
        if self.state.phase() != LoadPhase::Ready {
            tracing::warn!("Ignoring history append before load completed");
            return Err(EngineError::NotLoaded);
        }
        self.state.push(item);
        self.persist().await
    }

    /// Empty the list and remove the persisted slot.
    ///
    /// The in-memory list is cleared even when the removal fails.
    pub async fn clear(&mut self) -> Result<(), EngineError> {
        self.state.clear();
        self.storage.remove(&self.key).await?;
        tracing::info!("History cleared");
        Ok(())
    }

    async fn persist(&self) -> Result<(), EngineError> {
        let text = encode(self.state.items())?;
        self.storage.set(&self.key, &text).await?;
        tracing::debug!("Persisted {} history item(s)", self.state.len());
        Ok(())
    }

    pub fn items(&self) -> &VecDeque<HistoryItem> {
        self.state.items()
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.state.latest()
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversion::convert;
    use crate::shared::Unit;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use tokio_test::block_on;

    const KEY: &str = "glucoseHistory";

    fn make_item(ms: i64) -> HistoryItem {
        HistoryItem::new(
            Utc.timestamp_millis_opt(ms).unwrap(),
            convert(90.0 + ms as f64, Unit::MgDl),
        )
    }

    fn persisted(storage: &MemoryStorage) -> Option<Vec<HistoryItem>> {
        block_on(storage.get(KEY))
            .unwrap()
            .map(|text| decode(&text).unwrap())
    }

    #[test]
    fn test_load_empty_slot() {
        let mut store = HistoryStore::new(MemoryStorage::new(), KEY, 100);
        assert!(store.is_loading());
        let outcome = block_on(store.load());
        assert!(matches!(outcome, LoadOutcome::Empty));
        assert!(!store.is_loading());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_restores_snapshot() {
        let items = vec![make_item(3), make_item(2), make_item(1)];
        let storage = MemoryStorage::with_entry(KEY, &encode(&items).unwrap());
        let mut store = HistoryStore::new(storage, KEY, 100);
        let outcome = block_on(store.load());
        assert!(matches!(outcome, LoadOutcome::Restored { count: 3 }));
        assert_eq!(store.items().iter().cloned().collect::<Vec<_>>(), items);
    }

    #[test]
    fn test_load_truncates_oversized_snapshot() {
        let items: Vec<_> = (0..150).rev().map(make_item).collect();
        let storage = MemoryStorage::with_entry(KEY, &encode(&items).unwrap());
        let mut store = HistoryStore::new(storage, KEY, 100);
        let outcome = block_on(store.load());
        assert!(matches!(outcome, LoadOutcome::Restored { count: 100 }));
        assert_eq!(store.latest().unwrap().id.as_str(), "149");
    }

    #[test]
    fn test_load_recovers_from_corrupt_snapshot() {
        let storage = MemoryStorage::with_entry(KEY, "not a list");
        let mut store = HistoryStore::new(storage.clone(), KEY, 100);
        let outcome = block_on(store.load());
        assert!(matches!(outcome, LoadOutcome::RecoveredCorrupt));
        assert!(store.is_empty());
        assert!(!store.is_loading());
        assert!(!block_on(storage.contains(KEY)));
    }

    #[test]
    fn test_append_before_load_is_rejected() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::new(storage.clone(), KEY, 100);
        let err = block_on(store.append(make_item(1))).unwrap_err();
        assert!(matches!(err, EngineError::NotLoaded));
        assert!(store.is_empty());
        assert!(persisted(&storage).is_none());
    }

    #[test]
    fn test_append_persists_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::new(storage.clone(), KEY, 100);
        block_on(store.load());
        block_on(store.append(make_item(1))).unwrap();
        block_on(store.append(make_item(2))).unwrap();
        let on_disk = persisted(&storage).unwrap();
        assert_eq!(on_disk, store.items().iter().cloned().collect::<Vec<_>>());
        assert_eq!(on_disk[0].id.as_str(), "2");
    }

    #[test]
    fn test_append_sub_millisecond_item_matches_reload() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::new(storage.clone(), KEY, 100);
        block_on(store.load());
        let ts = Utc.timestamp_opt(1_740_000_000, 123_456_789).unwrap();
        block_on(store.append(HistoryItem::new(ts, convert(110.0, Unit::MgDl)))).unwrap();

        let mut reloaded = HistoryStore::new(storage.clone(), KEY, 100);
        block_on(reloaded.load());
        assert_eq!(store.items(), reloaded.items());
        assert_eq!(
            persisted(&storage).unwrap(),
            store.items().iter().cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_append_caps_persisted_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::new(storage.clone(), KEY, 5);
        block_on(store.load());
        for ms in 0..8 {
            block_on(store.append(make_item(ms))).unwrap();
        }
        assert_eq!(store.len(), 5);
        let on_disk = persisted(&storage).unwrap();
        assert_eq!(on_disk.len(), 5);
        assert_eq!(on_disk.last().unwrap().id.as_str(), "3");
    }

    #[test]
    fn test_clear_removes_slot() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::new(storage.clone(), KEY, 100);
        block_on(store.load());
        block_on(store.append(make_item(1))).unwrap();
        block_on(store.clear()).unwrap();
        assert!(store.is_empty());
        assert!(!block_on(storage.contains(KEY)));
    }
}
