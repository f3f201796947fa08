//! Wire types for the persisted history slot.
//!
//! The slot holds a JSON array of these records, newest first:
//! `[{"id":"1740076800000","timestamp":1740076800000,"mgdlValue":120,"mmolValue":6.66}]`

use serde::{Deserialize, Serialize};

/// One persisted history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemWire {
    pub id: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub mgdl_value: f64,
    pub mmol_value: f64,
}
