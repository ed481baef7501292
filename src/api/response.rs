//! Response types for the roster API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::Shift;
use crate::parsing::SheetAnalysis;

/// One employee and their shifts, sorted by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeShifts {
    /// The employee's name as found in the sheet.
    pub name: String,
    /// The 0-based row the name was found on.
    pub row: usize,
    /// The employee's shifts in date order.
    pub shifts: Vec<Shift>,
}

/// Response body for a parsed sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterResponse {
    /// The sheet that was parsed.
    pub sheet_name: String,
    /// The 0-based row holding the dates.
    pub date_row: usize,
    /// Number of date cells counted in that row.
    pub date_count: usize,
    /// The 0-based column holding employee names.
    pub employee_column: usize,
    /// Employees sorted by name.
    pub employees: Vec<EmployeeShifts>,
}

impl From<SheetAnalysis> for RosterResponse {
    fn from(analysis: SheetAnalysis) -> Self {
        // Later rows win for repeated names, matching the roster itself.
        let rows: HashMap<&str, usize> = analysis
            .employees
            .list
            .iter()
            .map(|employee| (employee.name.as_str(), employee.row))
            .collect();

        let employees = analysis
            .roster
            .sorted()
            .into_iter()
            .map(|(name, shifts)| EmployeeShifts {
                row: rows.get(name.as_str()).copied().unwrap_or_default(),
                name,
                shifts,
            })
            .collect();

        Self {
            sheet_name: analysis.sheet_name,
            date_row: analysis.date_header.row,
            date_count: analysis.date_header.date_count,
            employee_column: analysis.employees.column,
            employees,
        }
    }
}

/// A sheet that was left out of a workbook response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSheet {
    /// The sheet name.
    pub sheet_name: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable reason.
    pub message: String,
}

/// Response body for the `/workbook/rosters` endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkbookResponse {
    /// Rosters of the sheets that parsed, in workbook order.
    pub rosters: Vec<RosterResponse>,
    /// Sheets without a date row.
    pub skipped: Vec<SkippedSheet>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a no date row error response.
    pub fn no_date_row(sheet: &str) -> Self {
        Self::with_details(
            "NO_DATE_ROW",
            format!("cannot locate date row in sheet '{}'", sheet),
            "No row of the sheet contains a numeric date serial",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::NoDateRow { sheet } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::no_date_row(&sheet),
            },
            RosterError::EmployeeLookupFailed { pattern, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "EMPLOYEE_LOOKUP_FAILED",
                    "Employee name pattern is invalid",
                    format!("{}: {}", pattern, message),
                ),
            },
            RosterError::GridAccess { sheet, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "GRID_ACCESS_ERROR",
                    format!("failed to read sheet '{}'", sheet),
                    message,
                ),
            },
            RosterError::SheetNotFound { sheet } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHEET_NOT_FOUND", format!("sheet not found: {}", sheet)),
            },
            RosterError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RosterError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
        }
    }
}
