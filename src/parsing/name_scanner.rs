//! Employee name column detection.

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{RosterError, RosterResult};
use crate::models::{Cell, Employee, Employees, Grid};

/// Matches two or more capitalised words, allowing inner apostrophes and
/// hyphens when another capital follows (e.g. "O'Brien", "Smith-Jones").
pub const DEFAULT_NAME_PATTERN: &str =
    r"[A-Z](?:[A-Za-z]|['-][A-Z])*(?:\s+[A-Z](?:[A-Za-z]|['-][A-Z])*)+";

/// Locates the column of a grid that holds employee names.
#[derive(Debug, Clone)]
pub struct NameScanner {
    pattern: Regex,
}

impl NameScanner {
    /// Compiles a scanner for the given name pattern.
    ///
    /// Fails with [`RosterError::EmployeeLookupFailed`] if the pattern is not a
    /// valid regular expression.
    pub fn new(pattern: &str) -> RosterResult<Self> {
        let pattern = Regex::new(pattern).map_err(|err| RosterError::EmployeeLookupFailed {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Compiles a scanner for [`DEFAULT_NAME_PATTERN`].
    pub fn standard() -> RosterResult<Self> {
        Self::new(DEFAULT_NAME_PATTERN)
    }

    /// Returns the first name-shaped substring of a text cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::Cell;
    /// use shift_roster::parsing::NameScanner;
    ///
    /// let scanner = NameScanner::standard().unwrap();
    /// assert_eq!(scanner.match_name(&Cell::text("Jane Doe (RN)")), Some("Jane Doe"));
    /// assert_eq!(scanner.match_name(&Cell::text("Monday")), None);
    /// ```
    pub fn match_name<'a>(&self, cell: &'a Cell) -> Option<&'a str> {
        match cell {
            Cell::Text(text) => self.pattern.find(text).map(|found| found.as_str()),
            Cell::Unset | Cell::Numeric(_) => None,
        }
    }

    /// Scans every column and returns the employees of the column with the
    /// most name matches. Ties go to the lowest column index.
    ///
    /// A grid without any match yields an empty list at column 0.
    pub fn scan(&self, grid: &Grid) -> Employees {
        let mut best = Employees::default();

        for column in 0..grid.column_count() {
            let list: Vec<Employee> = grid
                .column(column)
                .filter_map(|(row, cell)| {
                    self.match_name(cell).map(|name| Employee {
                        name: name.to_string(),
                        row,
                    })
                })
                .collect();

            if list.len() > best.list.len() {
                best = Employees { list, column };
            }
        }

        if best.is_empty() {
            warn!("No employee names found in any column");
        } else {
            debug!(
                column = best.column,
                employees = best.len(),
                "Employee column scan finished"
            );
        }
        best
    }
}
