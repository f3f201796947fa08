//! Number formatting for glucose values.
//!
//! Values are always rendered with a fixed number of decimals (trailing zeros
//! kept), so `7.0 mmol/L` shows as `"7.00"`.

use crate::shared::Unit;

/// Format an f64 with exactly `decimals` places.
pub fn fixed(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    // `-0.00` reads badly next to a unit
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Format a value for display in `unit` (mg/dL 0 places, mmol/L 2 places).
pub fn display(amount: f64, unit: Unit) -> String {
    fixed(amount, unit.display_decimals())
}

/// Format a value for display in `unit`, followed by the unit name.
pub fn display_with_unit(amount: f64, unit: Unit) -> String {
    format!("{} {}", display(amount, unit), unit)
}

/// Format a value for a chart's Y axis (mg/dL 0 places, mmol/L 1 place).
pub fn axis(amount: f64, unit: Unit) -> String {
    fixed(amount, unit.axis_decimals())
}
