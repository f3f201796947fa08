//! Engine constants shared by both screens.

/// mg/dL per mmol/L of glucose.
pub const CONVERSION_FACTOR: f64 = 18.0182;

/// Maximum number of conversions kept in history (oldest dropped first).
pub const MAX_HISTORY_ITEMS_DISPLAYED: usize = 100;

/// Fewer history entries than this and no chart is drawn.
pub const MIN_POINTS_FOR_CHART: usize = 2;

/// Upper bound on visible axis labels in label-thinned chart mode.
pub const MAX_CHART_LABELS: usize = 6;

/// Key of the persisted history slot.
pub const HISTORY_STORAGE_KEY: &str = "glucoseHistory";
