//! Conversion domain — mg/dL ↔ mmol/L and input validation.

use serde::{Deserialize, Serialize};

use crate::constants::CONVERSION_FACTOR;
use crate::shared::fmt::num;
use crate::shared::Unit;

/// One glucose concentration expressed in both units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub mgdl_value: f64,
    pub mmol_value: f64,
}

impl Reading {
    pub fn value_in(&self, unit: Unit) -> f64 {
        match unit {
            Unit::MgDl => self.mgdl_value,
            Unit::MmolL => self.mmol_value,
        }
    }
}

/// Compute both representations of `value` measured in `source`.
///
/// `value` must already be a positive finite number (see [`parse_input`]);
/// there is no error path here.
pub fn convert(value: f64, source: Unit) -> Reading {
    match source {
        Unit::MgDl => Reading {
            mgdl_value: value,
            mmol_value: value / CONVERSION_FACTOR,
        },
        Unit::MmolL => Reading {
            mgdl_value: value * CONVERSION_FACTOR,
            mmol_value: value,
        },
    }
}

/// Parse user input into a convertible value.
///
/// Returns `None` for empty, non-numeric, non-finite, zero or negative input.
pub fn parse_input(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// The outcome of one conversion, as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input_value: f64,
    pub input_unit: Unit,
    pub reading: Reading,
}

impl ConversionResult {
    pub fn new(input_value: f64, input_unit: Unit) -> Self {
        Self {
            input_value,
            input_unit,
            reading: convert(input_value, input_unit),
        }
    }

    pub fn output_unit(&self) -> Unit {
        self.input_unit.other()
    }

    pub fn output_value(&self) -> f64 {
        self.reading.value_in(self.output_unit())
    }

    /// e.g. `"120 mg/dL ≈ 6.66 mmol/L"`.
    pub fn message(&self) -> String {
        format!(
            "{} ≈ {}",
            num::display_with_unit(self.input_value, self.input_unit),
            num::display_with_unit(self.output_value(), self.output_unit())
        )
    }
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
