//! History state container — the in-memory rolling list.

use super::HistoryItem;
use std::collections::VecDeque;

/// Initial-load lifecycle: `Uninitialized → Loading → Ready`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Newest-first conversion history capped at `max_size` items.
///
/// The store owns an instance of this type and keeps the persisted slot in
/// sync with it; the list itself never touches storage.
#[derive(Debug, Clone)]
pub struct HistoryState {
    items: VecDeque<HistoryItem>,
    max_size: usize,
    phase: LoadPhase,
}

impl HistoryState {
    pub fn new(max_size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size,
            phase: LoadPhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True from construction until the initial load has finished.
    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Ready
    }

    pub fn begin_loading(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Replace the list with loaded items (newest first), cap it, and mark ready.
    pub fn finish_loading(&mut self, items: Vec<HistoryItem>) {
        self.items.clear();
        self.items.extend(items.into_iter().take(self.max_size));
        self.phase = LoadPhase::Ready;
    }

    /// Prepend an item, dropping the oldest ones beyond capacity.
    pub fn push(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(self.max_size);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &VecDeque<HistoryItem> {
        &self.items
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
