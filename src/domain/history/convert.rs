//! Conversions between persisted records and domain history items.

use chrono::{TimeZone, Utc};

use super::wire::HistoryItemWire;
use super::HistoryItem;
use crate::error::EngineError;
use crate::shared::HistoryId;

impl TryFrom<HistoryItemWire> for HistoryItem {
    type Error = EngineError;

    fn try_from(w: HistoryItemWire) -> Result<Self, Self::Error> {
        let timestamp = Utc
            .timestamp_millis_opt(w.timestamp)
            .single()
            .ok_or_else(|| {
                EngineError::Validation(format!("Invalid timestamp: {}", w.timestamp))
            })?;
        if !w.mgdl_value.is_finite() || !w.mmol_value.is_finite() {
            return Err(EngineError::Validation(format!(
                "Non-finite value in history item {}",
                w.id
            )));
        }
        Ok(Self {
            id: HistoryId::from(w.id),
            timestamp,
            mgdl_value: w.mgdl_value,
            mmol_value: w.mmol_value,
        })
    }
}

impl From<&HistoryItem> for HistoryItemWire {
    fn from(item: &HistoryItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            timestamp: item.timestamp_ms(),
            mgdl_value: item.mgdl_value,
            mmol_value: item.mmol_value,
        }
    }
}

/// Serialize a newest-first history list into slot text.
pub(crate) fn encode<'a>(
    items: impl IntoIterator<Item = &'a HistoryItem>,
) -> Result<String, EngineError> {
    let wire: Vec<HistoryItemWire> = items.into_iter().map(HistoryItemWire::from).collect();
    Ok(serde_json::to_string(&wire)?)
}

/// Parse slot text back into history items; any malformed record rejects the snapshot.
pub(crate) fn decode(text: &str) -> Result<Vec<HistoryItem>, EngineError> {
    let wire: Vec<HistoryItemWire> = serde_json::from_str(text)?;
    wire.into_iter().map(HistoryItem::try_from).collect()
}
