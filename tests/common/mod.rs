//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};
use glucose_engine::error::StorageError;
use glucose_engine::storage::{KeyValueStore, MemoryStorage};
use glucose_engine::surface::{Confirmation, Notice, NoticeLevel, Surface};

pub const BASE_MS: i64 = 1_740_000_000_000;

pub fn at_ms(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).expect("valid test timestamp")
}

/// Surface that answers confirmations with a fixed value and records notices.
#[derive(Default)]
pub struct RecordingSurface {
    pub answer: bool,
    pub confirmations: RefCell<Vec<Confirmation>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingSurface {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

impl Surface for RecordingSurface {
    async fn confirm(&self, request: &Confirmation) -> bool {
        self.confirmations.borrow_mut().push(request.clone());
        self.answer
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Memory storage whose operations can be switched to fail.
#[derive(Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_get: Cell<bool>,
    pub fail_set: Cell<bool>,
    pub fail_remove: Cell<bool>,
}

impl FlakyStorage {
    pub fn wrapping(inner: MemoryStorage) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }
}

impl KeyValueStore for FlakyStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_get.get() {
            return Err(StorageError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_set.get() {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_remove.get() {
            return Err(StorageError::Backend("remove refused".to_string()));
        }
        self.inner.remove(key).await
    }
}
