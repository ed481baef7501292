//! Shift roster extraction for loosely formatted spreadsheets.
//!
//! Roster sheets put their dates, employee names and shift codes wherever the
//! author liked. This crate infers that layout from cell content alone and
//! turns a sheet's grid into an employee to shifts mapping.
//!
//! ```
//! use shift_roster::models::{Cell, Grid};
//! use shift_roster::new_roster;
//!
//! let grid = Grid::new(vec![
//!     vec![Cell::text(""), Cell::numeric("44927"), Cell::numeric("44928")],
//!     vec![Cell::text("Jane Doe"), Cell::text("M"), Cell::text("")],
//!     vec![Cell::text("John Roe"), Cell::text(""), Cell::text("N")],
//! ]);
//!
//! let roster = new_roster(&grid, "January")?;
//! assert_eq!(roster.get("Jane Doe").unwrap()[0].label, "M");
//! assert_eq!(roster.get("John Roe").unwrap()[0].label, "N");
//! # Ok::<(), shift_roster::error::RosterError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod source;

pub use parsing::new_roster;
