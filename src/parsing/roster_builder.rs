//! Roster assembly for a single sheet.

use tracing::{debug, trace, warn};

use crate::config::ScannerConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{DateHeader, Employees, Grid, Roster};
use crate::source::GridSource;

use super::date_scanner::DateScanner;
use super::name_scanner::NameScanner;
use super::shift_resolver::{build_date_index, resolve_shift};

/// Everything learned about one sheet while building its roster.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetAnalysis {
    /// The sheet the analysis belongs to.
    pub sheet_name: String,
    /// The detected date header row.
    pub date_header: DateHeader,
    /// The detected employee column and employees.
    pub employees: Employees,
    /// Employee name to shifts.
    pub roster: Roster,
}

/// Runs the date scan, name scan and shift resolution for a sheet.
///
/// # Example
///
/// ```
/// use shift_roster::config::ScannerConfig;
/// use shift_roster::models::{Cell, Grid};
/// use shift_roster::parsing::RosterBuilder;
///
/// let grid = Grid::new(vec![
///     vec![Cell::Unset, Cell::numeric("44927")],
///     vec![Cell::text("Jane Doe"), Cell::text("M")],
/// ]);
///
/// let builder = RosterBuilder::new(&ScannerConfig::default())?;
/// let roster = builder.build(&grid, "January")?;
/// assert_eq!(roster.get("Jane Doe").unwrap()[0].label, "M");
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    date_scanner: DateScanner,
    name_scanner: NameScanner,
}

impl RosterBuilder {
    /// Creates a builder from scanner configuration.
    ///
    /// Fails with [`RosterError::EmployeeLookupFailed`] if the configured
    /// name pattern does not compile.
    pub fn new(config: &ScannerConfig) -> RosterResult<Self> {
        Ok(Self {
            date_scanner: DateScanner::new(config.date_serial_floor),
            name_scanner: NameScanner::new(&config.name_pattern)?,
        })
    }

    /// Builds the roster for one sheet's grid.
    ///
    /// Fails with [`RosterError::NoDateRow`] if no row holds a date. A sheet
    /// without employees yields an empty roster.
    pub fn build(&self, grid: &Grid, sheet_name: &str) -> RosterResult<Roster> {
        self.analyze(grid, sheet_name).map(|analysis| analysis.roster)
    }

    /// Builds the roster for one sheet and also returns the detected layout.
    pub fn analyze(&self, grid: &Grid, sheet_name: &str) -> RosterResult<SheetAnalysis> {
        let date_header = self.date_scanner.scan(grid);
        if !date_header.is_found() {
            return Err(RosterError::NoDateRow {
                sheet: sheet_name.to_string(),
            });
        }

        let employees = self.name_scanner.scan(grid);
        let date_index = build_date_index(grid, date_header.row);

        let mut roster = Roster::new();
        for employee in &employees.list {
            let mut shifts = Vec::new();
            for (date, column) in &date_index {
                match resolve_shift(grid, *date, employee.row, *column) {
                    Ok(shift) => shifts.push(shift),
                    Err(rejection) => trace!(
                        employee = %employee.name,
                        date = %date,
                        %rejection,
                        "No shift"
                    ),
                }
            }

            if roster.insert(employee.name.as_str(), shifts).is_some() {
                warn!(
                    sheet = sheet_name,
                    employee = %employee.name,
                    row = employee.row,
                    "Employee name appears more than once, keeping later row"
                );
            }
        }

        debug!(
            sheet = sheet_name,
            date_row = date_header.row,
            dates = date_index.len(),
            employee_column = employees.column,
            employees = roster.len(),
            "Roster built"
        );

        Ok(SheetAnalysis {
            sheet_name: sheet_name.to_string(),
            date_header,
            employees,
            roster,
        })
    }

    /// Fetches a sheet from a grid source and analyzes it.
    ///
    /// Source failures other than an unknown sheet are wrapped as
    /// [`RosterError::GridAccess`] naming the sheet.
    pub fn analyze_from_source<S: GridSource + ?Sized>(
        &self,
        source: &S,
        sheet_name: &str,
    ) -> RosterResult<SheetAnalysis> {
        let grid = source.grid(sheet_name).map_err(|err| match err {
            RosterError::GridAccess { .. } | RosterError::SheetNotFound { .. } => err,
            other => RosterError::GridAccess {
                sheet: sheet_name.to_string(),
                message: other.to_string(),
            },
        })?;
        self.analyze(&grid, sheet_name)
    }

    /// Fetches a sheet from a grid source and builds its roster.
    pub fn build_from_source<S: GridSource + ?Sized>(
        &self,
        source: &S,
        sheet_name: &str,
    ) -> RosterResult<Roster> {
        self.analyze_from_source(source, sheet_name)
            .map(|analysis| analysis.roster)
    }
}

/// Builds a roster with the default scanner configuration.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Cell, Grid};
/// use shift_roster::new_roster;
///
/// let grid = Grid::new(vec![vec![Cell::text("Jane Doe"), Cell::text("M")]]);
/// assert!(new_roster(&grid, "Sheet1").is_err());
/// ```
pub fn new_roster(grid: &Grid, sheet_name: &str) -> RosterResult<Roster> {
    RosterBuilder::new(&ScannerConfig::default())?.build(grid, sheet_name)
}
