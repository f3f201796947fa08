//! High-level controller — `ConversionController` and its builder.
//!
//! The controller owns the input field, the selected unit, the history store
//! and the screen's [`Surface`]. Chart series, table rows and input validity
//! are derived on demand from that state and never stored.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::config::EngineConfig;
use crate::domain::chart::{Chart, ChartSeriesBuilder};
use crate::domain::conversion::{parse_input, ConversionResult};
use crate::domain::history::{HistoryItem, HistoryRow, HistoryStore, LoadOutcome};
use crate::error::EngineError;
use crate::shared::Unit;
use crate::storage::KeyValueStore;
use crate::surface::{Confirmation, Notice, Surface};

/// Source of creation timestamps.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Orchestrates input validation, conversion, history and chart derivation
/// for one screen.
pub struct ConversionController<S, U> {
    store: HistoryStore<S>,
    surface: U,
    config: EngineConfig,
    chart_builder: ChartSeriesBuilder,
    clock: Clock,
    unit: Unit,
    input: String,
    last_result: Option<ConversionResult>,
}

impl<S: KeyValueStore, U: Surface> ConversionController<S, U> {
    pub fn builder(storage: S, surface: U) -> ConversionControllerBuilder<S, U> {
        ConversionControllerBuilder::new(storage, surface)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Load persisted history. Tells the user when storage could not be read.
    pub async fn load(&mut self) -> LoadOutcome {
        let outcome = self.store.load().await;
        match &outcome {
            LoadOutcome::Unavailable(e) => {
                self.surface.notify(Notice::error(
                    "Error",
                    format!("Could not load conversion history: {}", e),
                ));
            }
            LoadOutcome::RecoveredCorrupt => {
                tracing::info!("Started with empty history after discarding a corrupt snapshot");
            }
            LoadOutcome::Restored { .. } | LoadOutcome::Empty => {}
        }
        outcome
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Select the input unit. Always clears the input field.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        self.input.clear();
    }

    /// Whether the current input is a positive finite number.
    pub fn is_valid(&self) -> bool {
        parse_input(&self.input).is_some()
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_loading()
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Convert the current input, record it in history and show the result.
    ///
    /// Does nothing and returns `None` while the input is invalid or history
    /// is still loading.
    pub async fn convert(&mut self) -> Option<ConversionResult> {
        if self.is_loading() {
            return None;
        }
        let value = parse_input(&self.input)?;

        let result = ConversionResult::new(value, self.unit);
        let item = HistoryItem::new(self.next_timestamp(), result.reading);
        tracing::debug!("Recording conversion {} as {}", result, item.id);

        if let Err(e) = self.store.append(item).await {
            self.report_save_failure(&e);
        }

        self.surface.notify(Notice::info("Conversion Result", result.message()));
        self.last_result = Some(result.clone());
        self.input.clear();
        Some(result)
    }

    /// Ask for confirmation, then wipe history. Returns whether history was cleared.
    pub async fn clear_history(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        if !self.surface.confirm(&Confirmation::clear_history()).await {
            tracing::debug!("History clear cancelled");
            return false;
        }

        if let Err(e) = self.store.clear().await {
            tracing::warn!("Failed to remove persisted history: {}", e);
            self.surface.notify(Notice::error(
                "Error",
                format!("Could not clear saved history: {}", e),
            ));
        }
        self.input.clear();
        true
    }

    /// Whether the clear-history action is enabled.
    pub fn can_clear(&self) -> bool {
        !self.is_loading() && !self.store.is_empty()
    }

    // ── Derived state ────────────────────────────────────────────────────

    pub fn history(&self) -> &VecDeque<HistoryItem> {
        self.store.items()
    }

    pub fn table_rows(&self) -> Vec<HistoryRow> {
        self.history()
            .iter()
            .map(|item| HistoryRow::from_item(item, &self.config.label_offset))
            .collect()
    }

    /// The unit plotted on the chart: always the one not selected for input.
    pub fn chart_unit(&self) -> Unit {
        self.unit.other()
    }

    /// Chart for the current history in this platform's rendering mode.
    pub fn chart(&self) -> Chart {
        if self.is_loading() {
            return Chart::InsufficientData;
        }
        self.chart_builder
            .build(self.history(), self.unit, self.config.platform.chart_mode())
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last_result.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &HistoryStore<S> {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// Creation time in whole milliseconds, strictly after the newest item so
    /// ids stay unique and sortable.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = (self.clock)();
        let mut ms = now.timestamp_millis();
        if let Some(latest) = self.store.latest() {
            ms = ms.max(latest.timestamp_ms() + 1);
        }
        DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or(now)
    }

    fn report_save_failure(&self, err: &EngineError) {
        tracing::warn!("Failed to save history: {}", err);
        if self.config.platform.surfaces_save_failures() {
            self.surface.notify(Notice::warning(
                "Warning",
                format!("Conversion saved for this session only: {}", err),
            ));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ConversionControllerBuilder<S, U> {
    storage: S,
    surface: U,
    config: EngineConfig,
    unit: Unit,
    clock: Option<Clock>,
}

impl<S: KeyValueStore, U: Surface> ConversionControllerBuilder<S, U> {
    pub fn new(storage: S, surface: U) -> Self {
        Self {
            storage,
            surface,
            config: EngineConfig::default(),
            unit: Unit::default(),
            clock: None,
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Initially selected input unit.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Override the timestamp source (defaults to `Utc::now`).
    pub fn clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn build(self) -> Result<ConversionController<S, U>, EngineError> {
        self.config.validate()?;
        Ok(ConversionController {
            store: HistoryStore::new(
                self.storage,
                &self.config.storage_key,
                self.config.max_history_items,
            ),
            surface: self.surface,
            chart_builder: ChartSeriesBuilder::from_config(&self.config),
            clock: self.clock.unwrap_or_else(|| Box::new(Utc::now)),
            config: self.config,
            unit: self.unit,
            input: String::new(),
            last_result: None,
        })
    }
}
