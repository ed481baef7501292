//! Shift lookup at employee/date intersections.
//!
//! Real rosters are sparse: most intersections are blank. A cell that cannot
//! produce a shift is reported as a [`CellRejection`] and simply skipped by the
//! roster builder.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use crate::models::{Cell, DateEntry, Grid, Shift};

use super::date_serial::cell_to_date;

/// Why a grid position did not yield a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellRejection {
    /// The coordinate lies outside the grid.
    #[error("cell ({row}, {column}) is outside the grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// The sheet declares no type for the cell.
    #[error("cell has no declared type")]
    Unset,
    /// The cell's value is empty or whitespace only.
    #[error("cell is blank")]
    Blank,
}

/// Decodes every date in the header row, in column order.
///
/// Unlike the header scan, no serial floor is applied here: once the row is
/// known to hold dates, any decodable serial counts.
pub fn date_entries(grid: &Grid, date_row: usize) -> Vec<DateEntry> {
    grid.row(date_row)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(column, cell)| cell_to_date(cell).map(|date| DateEntry { date, column }))
        .collect()
}

/// Builds the date to column index for the header row.
///
/// When two columns decode to the same date the later column wins.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_roster::models::{Cell, Grid};
/// use shift_roster::parsing::build_date_index;
///
/// let grid = Grid::new(vec![vec![
///     Cell::text("Name"),
///     Cell::numeric("44927"),
///     Cell::numeric("44927"),
/// ]]);
///
/// let index = build_date_index(&grid, 0);
/// assert_eq!(index[&NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()], 2);
/// ```
pub fn build_date_index(grid: &Grid, date_row: usize) -> BTreeMap<NaiveDate, usize> {
    let mut index = BTreeMap::new();
    for entry in date_entries(grid, date_row) {
        if let Some(previous) = index.insert(entry.date, entry.column) {
            warn!(
                date = %entry.date,
                previous_column = previous,
                column = entry.column,
                "Duplicate date in header row, keeping later column"
            );
        }
    }
    index
}

/// Resolves the shift at `(row, column)` for the given date.
///
/// The stored label is the cell's raw value, untrimmed; trimming only decides
/// whether the cell counts as blank.
pub fn resolve_shift(
    grid: &Grid,
    date: NaiveDate,
    row: usize,
    column: usize,
) -> Result<Shift, CellRejection> {
    let cell = grid
        .cell(row, column)
        .ok_or(CellRejection::OutOfBounds { row, column })?;

    let label = match cell {
        Cell::Unset => return Err(CellRejection::Unset),
        Cell::Text(value) | Cell::Numeric(value) => value,
    };

    if label.trim().is_empty() {
        return Err(CellRejection::Blank);
    }

    Ok(Shift {
        date,
        label: label.clone(),
    })
}
