//! Chart domain — plot-ready series derived from history.
//!
//! Series are always recomputed from the current history and unit selection;
//! nothing here is persisted.

pub mod builder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::fmt::num;
use crate::shared::Unit;

pub use builder::ChartSeriesBuilder;

/// How axis labels are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    /// Every history item becomes one labeled point.
    #[default]
    Full,
    /// At most `max_chart_labels` points (plus forced endpoints) are kept.
    LabelThinned,
}

/// A single point on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub timestamp: DateTime<Utc>,
    pub time_label: String,
    pub mgdl_value: f64,
    pub mmol_value: f64,
    /// The value in the charted unit.
    pub y_value: f64,
}

/// A chronological series ready for a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// The charted unit (opposite of the input unit).
    pub unit: Unit,
    pub mode: ChartMode,
    pub points: Vec<ChartDataPoint>,
}

impl ChartSeries {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.time_label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y_value).collect()
    }

    /// Suffix appended to Y axis ticks, e.g. `" mmol/L"`.
    pub fn unit_suffix(&self) -> String {
        format!(" {}", self.unit)
    }

    /// Y axis tick text, at the unit's axis precision.
    pub fn format_axis_value(&self, value: f64) -> String {
        num::axis(value, self.unit)
    }

    pub fn first(&self) -> Option<&ChartDataPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ChartDataPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of building a chart: a series, or a signal to show a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    InsufficientData,
    Series(ChartSeries),
}

impl Chart {
    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            Self::Series(series) => Some(series),
            Self::InsufficientData => None,
        }
    }

    pub fn into_series(self) -> Option<ChartSeries> {
        match self {
            Self::Series(series) => Some(series),
            Self::InsufficientData => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}
