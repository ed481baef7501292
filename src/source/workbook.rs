//! An in-memory workbook.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::Grid;

use super::GridSource;

/// A sheet name paired with its cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedGrid {
    /// The sheet name.
    pub name: String,
    /// The sheet's cells.
    pub grid: Grid,
}

/// A workbook held entirely in memory, with sheets kept in insertion order.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Cell, Grid};
/// use shift_roster::source::{GridSource, InMemoryWorkbook};
///
/// let workbook = InMemoryWorkbook::new()
///     .with_sheet("January", Grid::new(vec![vec![Cell::text("M")]]))
///     .with_sheet("February", Grid::default());
///
/// assert_eq!(workbook.list_sheets()?, vec!["January", "February"]);
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InMemoryWorkbook {
    #[serde(default)]
    sheets: Vec<NamedGrid>,
}

impl InMemoryWorkbook {
    /// Creates an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sheet, replacing any existing sheet with the same name.
    pub fn add_sheet(&mut self, name: impl Into<String>, grid: Grid) {
        let name = name.into();
        match self.sheets.iter_mut().find(|sheet| sheet.name == name) {
            Some(existing) => existing.grid = grid,
            None => self.sheets.push(NamedGrid { name, grid }),
        }
    }

    /// Builder form of [`InMemoryWorkbook::add_sheet`].
    pub fn with_sheet(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.add_sheet(name, grid);
        self
    }

    /// Number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if the workbook has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl From<Vec<NamedGrid>> for InMemoryWorkbook {
    fn from(sheets: Vec<NamedGrid>) -> Self {
        let mut workbook = Self::new();
        for sheet in sheets {
            workbook.add_sheet(sheet.name, sheet.grid);
        }
        workbook
    }
}

impl GridSource for InMemoryWorkbook {
    fn list_sheets(&self) -> RosterResult<Vec<String>> {
        Ok(self.sheets.iter().map(|sheet| sheet.name.clone()).collect())
    }

    fn grid(&self, sheet_name: &str) -> RosterResult<Grid> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == sheet_name)
            .map(|sheet| sheet.grid.clone())
            .ok_or_else(|| RosterError::SheetNotFound {
                sheet: sheet_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    #[test]
    fn test_add_sheet_replaces_same_name() {
        let mut workbook = InMemoryWorkbook::new();
        workbook.add_sheet("Week 1", Grid::default());
        workbook.add_sheet("Week 1", Grid::new(vec![vec![Cell::text("M")]]));

        assert_eq!(workbook.len(), 1);
        assert_eq!(workbook.grid("Week 1").unwrap().row_count(), 1);
    }

    #[test]
    fn test_unknown_sheet_is_not_found() {
        let workbook = InMemoryWorkbook::new();
        match workbook.grid("Nights") {
            Err(RosterError::SheetNotFound { sheet }) => assert_eq!(sheet, "Nights"),
            _ => panic!("Expected SheetNotFound error"),
        }
    }

    #[test]
    fn test_deserialize_workbook() {
        let json = r#"{
            "sheets": [
                { "name": "Week 1", "grid": [[null, 44927], ["Jane Doe", "M"]] },
                { "name": "Week 2", "grid": [] }
            ]
        }"#;

        let workbook: InMemoryWorkbook = serde_json::from_str(json).unwrap();
        assert_eq!(workbook.list_sheets().unwrap(), vec!["Week 1", "Week 2"]);
        assert_eq!(
            workbook.grid("Week 1").unwrap().cell(1, 1),
            Some(&Cell::text("M"))
        );
    }
}
