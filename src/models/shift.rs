//! Shift model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A shift assignment found at an employee/date intersection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// The date of the shift.
    pub date: NaiveDate,
    /// The shift code exactly as written in the sheet (e.g. "M", "N", "OFF").
    pub label: String,
}
