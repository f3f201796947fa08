//! Chart series builder — history → chronological, unit-selected points.

use chrono::FixedOffset;

use super::{Chart, ChartDataPoint, ChartMode, ChartSeries};
use crate::config::EngineConfig;
use crate::domain::history::HistoryItem;
use crate::shared::fmt::time;
use crate::shared::Unit;

/// Derives a [`Chart`] from history for one input-unit selection.
#[derive(Debug, Clone)]
pub struct ChartSeriesBuilder {
    max_labels: usize,
    min_points: usize,
    label_offset: FixedOffset,
}

impl Default for ChartSeriesBuilder {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ChartSeriesBuilder {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            max_labels: config.max_chart_labels,
            min_points: config.min_points_for_chart,
            label_offset: config.label_offset,
        }
    }

    /// Build the chart for `history` (any order) while `input_unit` is selected.
    ///
    /// The charted unit is the opposite of `input_unit`. Returns
    /// [`Chart::InsufficientData`] when fewer than the minimum number of points
    /// exist, before or after label thinning.
    pub fn build<'a, I>(&self, history: I, input_unit: Unit, mode: ChartMode) -> Chart
    where
        I: IntoIterator<Item = &'a HistoryItem>,
    {
        let mut items: Vec<&HistoryItem> = history.into_iter().collect();
        if items.len() < self.min_points {
            return Chart::InsufficientData;
        }

        items.sort_by_key(|item| item.timestamp);
        let unit = input_unit.other();
        let points: Vec<ChartDataPoint> = items.iter().map(|item| self.point(item, unit)).collect();

        let points = match mode {
            ChartMode::Full => points,
            ChartMode::LabelThinned => thin_labels(&points, self.max_labels),
        };
        if points.len() < self.min_points {
            return Chart::InsufficientData;
        }

        tracing::debug!("Built {:?} chart with {} point(s) in {}", mode, points.len(), unit);
        Chart::Series(ChartSeries { unit, mode, points })
    }

    fn point(&self, item: &HistoryItem, unit: Unit) -> ChartDataPoint {
        ChartDataPoint {
            timestamp: item.timestamp,
            time_label: time::chart_label(&item.timestamp, &self.label_offset),
            mgdl_value: item.mgdl_value,
            mmol_value: item.mmol_value,
            y_value: item.value_in(unit),
        }
    }
}

/// Keep a stride of chronologically sorted points so that roughly
/// `max_labels` labels remain, always including the first and last point.
///
/// Series of at most `max_labels` points are kept whole. An empty input
/// yields an empty output.
pub(crate) fn thin_labels(points: &[ChartDataPoint], max_labels: usize) -> Vec<ChartDataPoint> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let len = points.len();
    let max_labels = max_labels.max(1);
    let step = (len / max_labels).max(1);

    let mut kept: Vec<ChartDataPoint> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| len <= max_labels || *i == 0 || *i == len - 1 || i % step == 0)
        .map(|(_, p)| p.clone())
        .collect();

    if kept.first().map(|p| &p.time_label) != Some(&first.time_label) {
        kept.insert(0, first.clone());
    }
    if kept.last().map(|p| &p.time_label) != Some(&last.time_label) {
        kept.push(last.clone());
    }
    kept
}
