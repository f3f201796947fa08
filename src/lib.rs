//! # Glucose Engine
//!
//! Blood-glucose conversion and history engine shared by the native mobile
//! screen and the WASM web screen.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Units, constants, formatting, domain slices (always available, WASM-safe)
//! 2. **Storage** — The persisted history slot: memory, `tokio::fs` (native) / `localStorage` (WASM)
//! 3. **Surface** — Confirmation + notification capability implemented by each screen
//! 4. **Controller** — `ConversionController` orchestrating input, history and chart
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use glucose_engine::prelude::*;
//!
//! let mut controller = ConversionController::builder(MemoryStorage::new(), my_surface)
//!     .config(EngineConfig::default().platform(Platform::Web))
//!     .build()?;
//!
//! controller.load().await;
//! controller.set_input("120");
//! let result = controller.convert().await;
//! let chart = controller.chart();
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared unit type, identifiers and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): conversion, history, chart.
pub mod domain;

/// Engine constants: conversion factor, capacities, storage key.
pub mod constants;

/// Engine configuration.
pub mod config;

/// Unified engine error types.
pub mod error;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Key-value slot holding the serialized history.
pub mod storage;

// ── Layer 3: Surface ─────────────────────────────────────────────────────────

/// User confirmation / notification capability and platform policy.
pub mod surface;

// ── Layer 4: Controller ──────────────────────────────────────────────────────

/// `ConversionController` — the primary entry point.
pub mod controller;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{HistoryId, Unit};

    // Domain types — conversion
    pub use crate::domain::conversion::{convert, parse_input, ConversionResult, Reading};

    // Domain types — history
    pub use crate::domain::history::{HistoryItem, HistoryRow, HistoryState, HistoryStore, LoadOutcome, LoadPhase};

    // Domain types — chart
    pub use crate::domain::chart::{Chart, ChartDataPoint, ChartMode, ChartSeries, ChartSeriesBuilder};

    // Constants
    pub use crate::constants::{
        CONVERSION_FACTOR, HISTORY_STORAGE_KEY, MAX_CHART_LABELS, MAX_HISTORY_ITEMS_DISPLAYED,
        MIN_POINTS_FOR_CHART,
    };

    // Errors + config
    pub use crate::config::EngineConfig;
    pub use crate::error::{EngineError, StorageError};

    // Storage
    pub use crate::storage::{KeyValueStore, MemoryStorage};
    #[cfg(feature = "native")]
    pub use crate::storage::native::FileStorage;
    #[cfg(feature = "wasm")]
    pub use crate::storage::wasm::LocalStorage;

    // Surface
    pub use crate::surface::{Confirmation, Notice, NoticeLevel, Platform, Surface};

    // Controller
    pub use crate::controller::{ConversionController, ConversionControllerBuilder};
}
