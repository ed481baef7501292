//! HTTP API module for roster extraction.
//!
//! This module exposes the parsing core over REST: a single sheet grid, or a
//! whole workbook of grids, goes in and rosters come out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RosterRequest, SheetRequest, WorkbookRequest};
pub use response::{ApiError, EmployeeShifts, RosterResponse, SkippedSheet, WorkbookResponse};
pub use state::AppState;
