//! Unified engine error types.
//!
//! None of these are fatal to the controller: every failure degrades to an
//! empty or unchanged history and, where the platform asks for it, a notice.

use thiserror::Error;

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("History has not finished loading")]
    NotLoaded,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors from the persisted key-value slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}
