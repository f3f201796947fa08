//! Timestamp labels for the history table and chart axis.

use chrono::{DateTime, FixedOffset, Utc};

/// Short label under each chart point, e.g. `"02/20 18:30"`.
pub const CHART_LABEL_FORMAT: &str = "%m/%d %H:%M";

/// Label in the history table, e.g. `"2025-02-20 18:30"`.
pub const TABLE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render `timestamp` in the viewer's `offset` using a strftime `format`.
pub fn label(timestamp: &DateTime<Utc>, offset: &FixedOffset, format: &str) -> String {
    timestamp.with_timezone(offset).format(format).to_string()
}

pub fn chart_label(timestamp: &DateTime<Utc>, offset: &FixedOffset) -> String {
    label(timestamp, offset, CHART_LABEL_FORMAT)
}

pub fn table_label(timestamp: &DateTime<Utc>, offset: &FixedOffset) -> String {
    label(timestamp, offset, TABLE_LABEL_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};

    #[test]
    fn test_chart_label_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 2, 20, 18, 30, 5).unwrap();
        assert_eq!(chart_label(&ts, &Utc.fix()), "02/20 18:30");
    }

    #[test]
    fn test_table_label_with_offset() {
        let ts = Utc.with_ymd_and_hms(2025, 2, 20, 23, 15, 0).unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(table_label(&ts, &offset), "2025-02-21 01:15");
    }
}
