//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the persisted history format, so they can be used directly
//! in wire types without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── HistoryId ───────────────────────────────────────────────────────────────

/// Newtype for history item identifiers (millisecond timestamp as a string,
/// e.g. `"1740076800000"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(String);

impl HistoryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Id derived from a creation time in epoch milliseconds.
    pub fn from_timestamp_ms(ms: i64) -> Self {
        Self(ms.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HistoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HistoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Unit ────────────────────────────────────────────────────────────────────

/// Blood-glucose concentration unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mg/dL")]
    MgDl,
    #[serde(rename = "mmol/L")]
    MmolL,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }

    /// The opposite unit. The chart always plots this one.
    pub fn other(&self) -> Self {
        match self {
            Self::MgDl => Self::MmolL,
            Self::MmolL => Self::MgDl,
        }
    }

    /// Decimal places used when showing a value to the user.
    pub fn display_decimals(&self) -> usize {
        match self {
            Self::MgDl => 0,
            Self::MmolL => 2,
        }
    }

    /// Decimal places used on a chart's Y axis.
    pub fn axis_decimals(&self) -> usize {
        match self {
            Self::MgDl => 0,
            Self::MmolL => 1,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mg/dL" | "mg/dl" | "mgdl" => Ok(Self::MgDl),
            "mmol/L" | "mmol/l" | "mmol" => Ok(Self::MmolL),
            other => Err(format!("Unknown glucose unit: {}", other)),
        }
    }
}
