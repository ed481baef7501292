//! Employee models.
//!
//! Employees are detected by [`crate::parsing::NameScanner`]; each one remembers
//! the grid row its name was found on so shifts can be looked up along it.

use serde::{Deserialize, Serialize};

/// An employee detected in a roster sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The display name, exactly as matched in the sheet.
    pub name: String,
    /// The 0-based grid row holding the name.
    pub row: usize,
}

/// The employees found in a sheet together with the column they were found in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employees {
    /// Employees in row order.
    pub list: Vec<Employee>,
    /// The 0-based column holding employee names.
    pub column: usize,
}

impl Employees {
    /// Returns true if no employee names were found.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of employees found.
    pub fn len(&self) -> usize {
        self.list.len()
    }
}
