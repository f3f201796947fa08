//! Engine configuration.

use chrono::{FixedOffset, Offset, Utc};

use crate::constants::{
    HISTORY_STORAGE_KEY, MAX_CHART_LABELS, MAX_HISTORY_ITEMS_DISPLAYED, MIN_POINTS_FOR_CHART,
};
use crate::error::EngineError;
use crate::surface::Platform;

/// Configuration shared by the store, the chart builder and the controller.
///
/// Defaults match the shipped app; setters are chainable:
///
/// ```rust,ignore
/// let config = EngineConfig::default()
///     .platform(Platform::Web)
///     .label_offset(FixedOffset::east_opt(3600).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Key of the persisted history slot.
    pub storage_key: String,
    /// History capacity; older items are dropped on insert.
    pub max_history_items: usize,
    /// Axis label cap for label-thinned charts.
    pub max_chart_labels: usize,
    /// Minimum history length before a chart is produced.
    pub min_points_for_chart: usize,
    /// Time zone offset used when rendering time labels.
    pub label_offset: FixedOffset,
    pub platform: Platform,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            max_history_items: MAX_HISTORY_ITEMS_DISPLAYED,
            max_chart_labels: MAX_CHART_LABELS,
            min_points_for_chart: MIN_POINTS_FOR_CHART,
            label_offset: Utc.fix(),
            platform: Platform::default(),
        }
    }
}

impl EngineConfig {
    pub fn storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn max_history_items(mut self, max: usize) -> Self {
        self.max_history_items = max;
        self
    }

    pub fn max_chart_labels(mut self, max: usize) -> Self {
        self.max_chart_labels = max;
        self
    }

    pub fn min_points_for_chart(mut self, min: usize) -> Self {
        self.min_points_for_chart = min;
        self
    }

    pub fn label_offset(mut self, offset: FixedOffset) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Reject settings the engine cannot honor.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.storage_key.trim().is_empty() {
            return Err(EngineError::Validation("storage_key must not be empty".into()));
        }
        if self.max_history_items == 0 {
            return Err(EngineError::Validation("max_history_items must be at least 1".into()));
        }
        if self.max_chart_labels == 0 {
            return Err(EngineError::Validation("max_chart_labels must be at least 1".into()));
        }
        if self.min_points_for_chart < 2 {
            return Err(EngineError::Validation(
                "min_points_for_chart must be at least 2".into(),
            ));
        }
        Ok(())
    }
}
