//! Core data models for roster extraction.
//!
//! This module contains the grid input types and the entities derived from
//! them. Everything here is built once per parse and never mutated afterwards.

mod cell;
mod date;
mod employee;
mod roster;
mod shift;

pub use cell::{Cell, Grid};
pub use date::{DateEntry, DateHeader};
pub use employee::{Employee, Employees};
pub use roster::Roster;
pub use shift::Shift;
