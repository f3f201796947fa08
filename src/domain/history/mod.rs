//! History domain — recorded conversions, persistence and table rows.

mod convert;
pub mod state;
pub mod store;
pub mod wire;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::conversion::Reading;
use crate::shared::fmt::{num, time};
use crate::shared::{HistoryId, Unit};

pub use state::{HistoryState, LoadPhase};
pub use store::{HistoryStore, LoadOutcome};

/// One recorded conversion. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub id: HistoryId,
    pub timestamp: DateTime<Utc>,
    pub mgdl_value: f64,
    pub mmol_value: f64,
}

impl HistoryItem {
    /// New item created at `timestamp`; the id is the timestamp in milliseconds.
    ///
    /// The timestamp is truncated to whole milliseconds, the precision of the
    /// persisted record.
    pub fn new(timestamp: DateTime<Utc>, reading: Reading) -> Self {
        let ms = timestamp.timestamp_millis();
        Self {
            id: HistoryId::from_timestamp_ms(ms),
            timestamp: DateTime::from_timestamp_millis(ms).unwrap_or(timestamp),
            mgdl_value: reading.mgdl_value,
            mmol_value: reading.mmol_value,
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    pub fn reading(&self) -> Reading {
        Reading {
            mgdl_value: self.mgdl_value,
            mmol_value: self.mmol_value,
        }
    }

    pub fn value_in(&self, unit: Unit) -> f64 {
        self.reading().value_in(unit)
    }
}

/// A history entry formatted for the table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub id: HistoryId,
    pub time_label: String,
    pub mgdl_text: String,
    pub mmol_text: String,
}

impl HistoryRow {
    pub fn from_item(item: &HistoryItem, offset: &FixedOffset) -> Self {
        Self {
            id: item.id.clone(),
            time_label: time::table_label(&item.timestamp, offset),
            mgdl_text: num::display(item.mgdl_value, Unit::MgDl),
            mmol_text: num::display(item.mmol_value, Unit::MmolL),
        }
    }
}
