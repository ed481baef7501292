//! Configuration types for roster extraction.
//!
//! These structures are deserialized from `scanner.yaml`. Every field has a
//! default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::parsing::{DEFAULT_DATE_SERIAL_FLOOR, DEFAULT_NAME_PATTERN};

/// Tuning for the sheet structure heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Serials at or below this value do not count towards the date header
    /// scan. The date index of the chosen row ignores it.
    pub date_serial_floor: f64,
    /// Regular expression matched against text cells to find employee names.
    pub name_pattern: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            date_serial_floor: DEFAULT_DATE_SERIAL_FLOOR,
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        }
    }
}
