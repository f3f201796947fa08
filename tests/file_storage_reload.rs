//! Native file-backed history across controller restarts.
//!
//! Run with:
//! ```bash
//! cargo test --features native --test file_storage_reload
//! ```

#![cfg(feature = "native")]

mod common;

use common::RecordingSurface;
use glucose_engine::prelude::*;

#[tokio::test]
async fn history_round_trips_through_data_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    let surface = RecordingSurface::answering(true);

    let mut first = ConversionController::builder(FileStorage::new(dir.path()), &surface)
        .build()
        .expect("valid config");
    first.load().await;
    for text in ["100", "150"] {
        first.set_input(text);
        first.convert().await;
    }

    let mut second = ConversionController::builder(FileStorage::new(dir.path()), &surface)
        .build()
        .expect("valid config");
    let outcome = second.load().await;
    assert!(matches!(outcome, LoadOutcome::Restored { count: 2 }));
    assert_eq!(
        second.history().iter().cloned().collect::<Vec<_>>(),
        first.history().iter().cloned().collect::<Vec<_>>()
    );

    assert!(second.clear_history().await);
    let file = dir.path().join(format!("{}.json", HISTORY_STORAGE_KEY));
    assert!(!file.exists());
}

#[tokio::test]
async fn garbage_file_is_discarded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join(format!("{}.json", HISTORY_STORAGE_KEY));
    std::fs::write(&file, "not a list").expect("seed file");
    let surface = RecordingSurface::default();

    let mut c = ConversionController::builder(FileStorage::new(dir.path()), &surface)
        .build()
        .expect("valid config");

    assert!(matches!(c.load().await, LoadOutcome::RecoveredCorrupt));
    assert!(!file.exists());
    assert!(surface.notices.borrow().is_empty());
}
