//! HTTP request handlers for the roster API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::RosterError;
use crate::source::{GridSource, InMemoryWorkbook};

use super::request::{RosterRequest, WorkbookRequest};
use super::response::{ApiError, ApiErrorResponse, RosterResponse, SkippedSheet, WorkbookResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster", post(roster_handler))
        .route("/workbook/rosters", post(workbook_handler))
        .with_state(state)
}

/// Handler for POST /roster.
///
/// Parses a single sheet's grid into a roster.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.builder().analyze(&request.grid, &request.sheet_name) {
        Ok(analysis) => {
            info!(
                correlation_id = %correlation_id,
                sheet = %analysis.sheet_name,
                employees = analysis.roster.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Roster parsed successfully"
            );
            json_response(StatusCode::OK, RosterResponse::from(analysis))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster parsing failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /workbook/rosters.
///
/// Parses every sheet of a workbook. Sheets without a date row are reported
/// as skipped; any other failure aborts the request.
async fn workbook_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkbookRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workbook request");

    let workbook: InMemoryWorkbook = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let sheets = match workbook.list_sheets() {
        Ok(sheets) => sheets,
        Err(err) => return error_response(err),
    };

    let start_time = Instant::now();
    let mut response = WorkbookResponse::default();
    for sheet in sheets {
        match state.builder().analyze_from_source(&workbook, &sheet) {
            Ok(analysis) => response.rosters.push(analysis.into()),
            Err(RosterError::NoDateRow { sheet }) => {
                warn!(correlation_id = %correlation_id, sheet = %sheet, "Skipping sheet without dates");
                let error = ApiError::no_date_row(&sheet);
                response.skipped.push(SkippedSheet {
                    sheet_name: sheet,
                    code: error.code,
                    message: error.message,
                });
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    sheet = %sheet,
                    error = %err,
                    "Workbook parsing failed"
                );
                return error_response(err);
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        parsed = response.rosters.len(),
        skipped = response.skipped.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Workbook parsed"
    );
    json_response(StatusCode::OK, response)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: RosterError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
