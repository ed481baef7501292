//! Error types for the roster extraction engine.
//!
//! Only sheet-level failures are represented here. Cell-level anomalies are
//! absorbed by the resolver (see [`crate::parsing::CellRejection`]) and never
//! reach callers as errors.

use thiserror::Error;

/// The main error type for roster extraction.
///
/// # Example
///
/// ```
/// use shift_roster::error::RosterError;
///
/// let error = RosterError::NoDateRow {
///     sheet: "March".to_string(),
/// };
/// assert_eq!(error.to_string(), "cannot locate date row in sheet 'March'");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// No row of the sheet contains a decodable date serial.
    #[error("cannot locate date row in sheet '{sheet}'")]
    NoDateRow {
        /// The sheet that was scanned.
        sheet: String,
    },

    /// The employee name pattern could not be compiled.
    #[error("employee lookup failed for pattern '{pattern}': {message}")]
    EmployeeLookupFailed {
        /// The pattern that failed to compile.
        pattern: String,
        /// The compiler's description of the failure.
        message: String,
    },

    /// The grid collaborator failed to produce a sheet's cells.
    #[error("failed to read sheet '{sheet}': {message}")]
    GridAccess {
        /// The sheet being read.
        sheet: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// The requested sheet does not exist in the workbook.
    #[error("sheet not found: {sheet}")]
    SheetNotFound {
        /// The missing sheet name.
        sheet: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
