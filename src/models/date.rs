//! Date header models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The row chosen as a sheet's date header.
///
/// A `date_count` of zero means no row held any date serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateHeader {
    /// The 0-based grid row holding the dates.
    pub row: usize,
    /// How many cells in that row decoded as dates.
    pub date_count: usize,
}

impl DateHeader {
    /// Returns true if a date row was located.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::DateHeader;
    ///
    /// assert!(!DateHeader::default().is_found());
    /// assert!(DateHeader { row: 2, date_count: 7 }.is_found());
    /// ```
    pub fn is_found(&self) -> bool {
        self.date_count > 0
    }
}

/// One decoded date in the header row and the column it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// The 0-based grid column holding the date.
    pub column: usize,
}
