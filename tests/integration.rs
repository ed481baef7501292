//! Integration tests for roster extraction.
//!
//! This suite covers:
//! - End-to-end roster building through the library entry point
//! - Layout detection on realistic sheets (title rows, weekday rows, notes)
//! - The `/roster` and `/workbook/rosters` HTTP endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_roster::api::{AppState, create_router};
use shift_roster::config::ConfigLoader;
use shift_roster::error::RosterError;
use shift_roster::models::{Cell, Grid, Shift};
use shift_roster::new_roster;
use shift_roster::parsing::RosterBuilder;
use shift_roster::source::InMemoryWorkbook;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(&config).expect("Failed to build state"))
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn shift(day: &str, label: &str) -> Shift {
    Shift {
        date: date(day),
        label: label.to_string(),
    }
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// A fortnight sheet laid out the way ward rosters usually are: a title, a
/// weekday row, the date row, then staff with a notes column on the right.
fn ward_sheet() -> Value {
    json!([
        ["Ward 7 nursing roster", null, null, null, null],
        [null, "Sun", "Mon", "Tue", "notes"],
        ["Staff", 44927, 44928, 44929, null],
        ["Jane Doe", "M", "M", "OFF", "float pool"],
        ["John Roe", "N", "", "N", null],
        ["O'Brien Anne", null, " ", null, "on leave"],
        ["Total staff", 2, 1, 2, null]
    ])
}

// =============================================================================
// Library: End-to-End
// =============================================================================

#[test]
fn test_two_row_example() {
    let grid = Grid::new(vec![
        vec![Cell::text("Roster for January")],
        vec![],
        vec![Cell::text(""), Cell::numeric("44927"), Cell::numeric("44928")],
        vec![Cell::text("Jane Doe"), Cell::text("M"), Cell::text("")],
        vec![Cell::text("John Roe"), Cell::text(""), Cell::text("N")],
    ]);

    let roster = new_roster(&grid, "January").unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("Jane Doe").unwrap(), &[shift("2023-01-01", "M")]);
    assert_eq!(roster.get("John Roe").unwrap(), &[shift("2023-01-02", "N")]);
}

#[test]
fn test_ward_sheet_layout() {
    let grid: Grid = serde_json::from_value(ward_sheet()).unwrap();
    let roster = new_roster(&grid, "Fortnight").unwrap();

    let sorted = roster.sorted();
    assert_eq!(
        sorted["Jane Doe"],
        vec![
            shift("2023-01-01", "M"),
            shift("2023-01-02", "M"),
            shift("2023-01-03", "OFF"),
        ]
    );
    assert_eq!(
        sorted["John Roe"],
        vec![shift("2023-01-01", "N"), shift("2023-01-03", "N")]
    );
    // Detected but rostered off every day.
    assert!(sorted["O'Brien Anne"].is_empty());
    // Summary rows with lowercase words are not name-shaped.
    assert!(!roster.contains("Total staff"));
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_sheet_without_dates_fails_with_sheet_name() {
    let grid = Grid::new(vec![
        vec![Cell::text("Jane Doe"), Cell::text("Mon"), Cell::text("Tue")],
        vec![Cell::text("John Roe"), Cell::text("M"), Cell::text("N")],
    ]);

    match new_roster(&grid, "Template") {
        Err(RosterError::NoDateRow { sheet }) => assert_eq!(sheet, "Template"),
        other => panic!("Expected NoDateRow, got {:?}", other),
    }
}

#[test]
fn test_sheet_without_names_is_empty_roster() {
    let grid = Grid::new(vec![
        vec![Cell::numeric("44927"), Cell::numeric("44928")],
        vec![Cell::text("M"), Cell::text("N")],
    ]);

    let roster = new_roster(&grid, "Codes").unwrap();
    assert!(roster.is_empty());
}

#[test]
fn test_builder_reads_from_workbook() {
    let grid: Grid = serde_json::from_value(ward_sheet()).unwrap();
    let workbook = InMemoryWorkbook::new()
        .with_sheet("Cover", Grid::new(vec![vec![Cell::text("Read me")]]))
        .with_sheet("Fortnight", grid);

    let builder = RosterBuilder::new(ConfigLoader::default().scanner()).unwrap();

    let roster = builder.build_from_source(&workbook, "Fortnight").unwrap();
    assert!(roster.contains("Jane Doe"));

    assert!(matches!(
        builder.build_from_source(&workbook, "Cover"),
        Err(RosterError::NoDateRow { .. })
    ));
}

// =============================================================================
// HTTP: /roster
// =============================================================================

#[tokio::test]
async fn test_roster_endpoint_ward_sheet() {
    let body = json!({ "sheet_name": "Fortnight", "grid": ward_sheet() });

    let (status, json) = post_json(create_router_for_test(), "/roster", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sheet_name"], "Fortnight");
    assert_eq!(json["date_row"], 2);
    assert_eq!(json["date_count"], 3);
    assert_eq!(json["employee_column"], 0);

    let jane = json["employees"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "Jane Doe")
        .unwrap();
    assert_eq!(jane["row"], 3);
    assert_eq!(jane["shifts"].as_array().unwrap().len(), 3);
    assert_eq!(jane["shifts"][2]["label"], "OFF");
    assert_eq!(jane["shifts"][2]["date"], "2023-01-03");
}

#[tokio::test]
async fn test_roster_endpoint_keeps_shiftless_employees() {
    let body = json!({
        "sheet_name": "Week 1",
        "grid": [
            [null, 44927],
            ["Jane Doe", "M"],
            ["Amy Wong", null]
        ]
    });

    let (status, json) = post_json(create_router_for_test(), "/roster", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["employees"][0]["name"], "Amy Wong");
    assert_eq!(json["employees"][0]["shifts"], json!([]));
}

#[tokio::test]
async fn test_error_no_date_row() {
    let body = json!({ "sheet_name": "Draft", "grid": [["Jane Doe", "M"]] });

    let (status, json) = post_json(create_router_for_test(), "/roster", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "NO_DATE_ROW");
    assert!(json["message"].as_str().unwrap().contains("Draft"));
}

#[tokio::test]
async fn test_error_invalid_cell_type() {
    let body = json!({ "sheet_name": "Week 1", "grid": [[true, 44927]] });

    let (status, json) = post_json(create_router_for_test(), "/roster", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_grid() {
    let body = json!({ "sheet_name": "Week 1" });

    let (status, json) = post_json(create_router_for_test(), "/roster", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// =============================================================================
// HTTP: /workbook/rosters
// =============================================================================

#[tokio::test]
async fn test_workbook_skips_sheets_without_dates() {
    let body = json!({
        "sheets": [
            { "name": "Cover", "grid": [["Ward 7 roster"]] },
            { "name": "Fortnight", "grid": ward_sheet() },
            { "name": "Week 3", "grid": [[null, 44941], ["Jane Doe", "E"]] }
        ]
    });

    let (status, json) = post_json(create_router_for_test(), "/workbook/rosters", body).await;

    assert_eq!(status, StatusCode::OK);

    let rosters = json["rosters"].as_array().unwrap();
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0]["sheet_name"], "Fortnight");
    assert_eq!(rosters[1]["sheet_name"], "Week 3");
    assert_eq!(rosters[1]["employees"][0]["shifts"][0]["date"], "2023-01-15");

    let skipped = json["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["sheet_name"], "Cover");
    assert_eq!(skipped[0]["code"], "NO_DATE_ROW");
}

#[tokio::test]
async fn test_workbook_empty() {
    let (status, json) =
        post_json(create_router_for_test(), "/workbook/rosters", json!({ "sheets": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rosters"], json!([]));
    assert_eq!(json["skipped"], json!([]));
}
