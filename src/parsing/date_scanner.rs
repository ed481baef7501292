//! Date header row detection.

use tracing::debug;

use crate::models::{DateHeader, Grid};

use super::date_serial::{DEFAULT_DATE_SERIAL_FLOOR, serial_to_date};

/// Locates the row of a grid that holds the roster's calendar dates.
///
/// Every row is scored by the number of numeric cells whose serial is above
/// the floor and decodes to a date. The highest-scoring row wins; on a tie the
/// earliest row is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateScanner {
    floor: f64,
}

impl Default for DateScanner {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_SERIAL_FLOOR)
    }
}

impl DateScanner {
    /// Creates a scanner that only counts serials strictly greater than `floor`.
    pub fn new(floor: f64) -> Self {
        Self { floor }
    }

    /// Returns the serial floor.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Scans the grid and returns the best date header candidate.
    ///
    /// A `date_count` of zero in the result means no row qualified.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{Cell, Grid};
    /// use shift_roster::parsing::DateScanner;
    ///
    /// let grid = Grid::new(vec![
    ///     vec![Cell::text("Roster")],
    ///     vec![Cell::Unset, Cell::numeric("44927"), Cell::numeric("44928")],
    /// ]);
    ///
    /// let header = DateScanner::default().scan(&grid);
    /// assert_eq!(header.row, 1);
    /// assert_eq!(header.date_count, 2);
    /// ```
    pub fn scan(&self, grid: &Grid) -> DateHeader {
        let mut best = DateHeader::default();

        for (row, cells) in grid.rows().iter().enumerate() {
            let date_count = cells
                .iter()
                .filter_map(|cell| cell.serial())
                .filter(|serial| *serial > self.floor && serial_to_date(*serial).is_some())
                .count();

            if date_count > best.date_count {
                best = DateHeader { row, date_count };
            }
        }

        debug!(
            row = best.row,
            date_count = best.date_count,
            "Date header scan finished"
        );
        best
    }
}
