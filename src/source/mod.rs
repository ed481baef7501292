//! Access to sheet grids.
//!
//! Opening and decoding workbook files is left to implementations of
//! [`GridSource`]; the parsing core only ever sees a [`crate::models::Grid`].

mod workbook;

pub use workbook::{InMemoryWorkbook, NamedGrid};

use crate::error::RosterResult;
use crate::models::Grid;

/// A collaborator that can list a workbook's sheets and hand over their cells.
pub trait GridSource {
    /// Returns the sheet names in workbook order.
    fn list_sheets(&self) -> RosterResult<Vec<String>>;

    /// Returns a snapshot of one sheet's cells.
    fn grid(&self, sheet_name: &str) -> RosterResult<Grid>;
}
