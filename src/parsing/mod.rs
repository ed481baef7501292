//! Roster extraction heuristics.
//!
//! A sheet has no fixed schema, so its structure is inferred from content:
//! the date header is the row with the most date serials, the employee column
//! is the column with the most name-shaped cells, and shifts are read at the
//! intersections of employee rows and date columns.

mod date_scanner;
mod date_serial;
mod name_scanner;
mod roster_builder;
mod shift_resolver;

pub use date_scanner::DateScanner;
pub use date_serial::{DEFAULT_DATE_SERIAL_FLOOR, cell_to_date, serial_to_date};
pub use name_scanner::{DEFAULT_NAME_PATTERN, NameScanner};
pub use roster_builder::{RosterBuilder, SheetAnalysis, new_roster};
pub use shift_resolver::{CellRejection, build_date_index, date_entries, resolve_shift};
