//! Request types for the roster API.

use serde::{Deserialize, Serialize};

use crate::models::Grid;
use crate::source::{InMemoryWorkbook, NamedGrid};

/// Request body for the `/roster` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// The name of the sheet the grid was read from.
    pub sheet_name: String,
    /// The sheet's cells, row by row.
    pub grid: Grid,
}

/// One sheet in a workbook request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    /// The sheet name.
    pub name: String,
    /// The sheet's cells, row by row.
    pub grid: Grid,
}

/// Request body for the `/workbook/rosters` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookRequest {
    /// The workbook's sheets in workbook order.
    pub sheets: Vec<SheetRequest>,
}

impl From<WorkbookRequest> for InMemoryWorkbook {
    fn from(request: WorkbookRequest) -> Self {
        request
            .sheets
            .into_iter()
            .map(|sheet| NamedGrid {
                name: sheet.name,
                grid: sheet.grid,
            })
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use crate::source::GridSource;

    #[test]
    fn test_deserialize_roster_request() {
        let json = r#"{
            "sheet_name": "Week 1",
            "grid": [["", 44927, 44928], ["Jane Doe", "M", ""]]
        }"#;

        let request: RosterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.sheet_name, "Week 1");
        assert_eq!(request.grid.cell(0, 1), Some(&Cell::numeric("44927")));
        assert_eq!(request.grid.cell(1, 0), Some(&Cell::text("Jane Doe")));
    }

    #[test]
    fn test_workbook_request_converts_in_order() {
        let json = r#"{
            "sheets": [
                { "name": "Days", "grid": [] },
                { "name": "Nights", "grid": [] }
            ]
        }"#;

        let request: WorkbookRequest = serde_json::from_str(json).unwrap();
        let workbook: InMemoryWorkbook = request.into();
        assert_eq!(workbook.list_sheets().unwrap(), vec!["Days", "Nights"]);
    }
}
