#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;

// ── values.get parsing ────────────────────────────────────────

#[test]
fn test_table_from_values_headers_and_rows() {
    let body = json!({
        "range": "Transactions!A1:E3",
        "values": [
            ["Date", "Amount", "Type"],
            ["2024-01-01", "-50", "Debit"],
            ["2024-01-02", "100", "Credit"],
        ]
    });
    let table = table_from_values(&body).unwrap();
    assert_eq!(table.headers, vec!["Date", "Amount", "Type"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, 1), "-50");
}

#[test]
fn test_table_from_values_numeric_and_bool_cells_become_text() {
    let body = json!({
        "values": [
            ["Date", "Amount", "Suspicious"],
            ["2024-01-01", -50.25, true],
        ]
    });
    let table = table_from_values(&body).unwrap();
    assert_eq!(table.cell(0, 1), "-50.25");
    assert_eq!(table.cell(0, 2), "true");
}

#[test]
fn test_table_from_values_pads_short_rows() {
    // Sheets omits trailing empty cells.
    let body = json!({
        "values": [
            ["Date", "Amount", "Message"],
            ["2024-01-01", "-50"],
        ]
    });
    let table = table_from_values(&body).unwrap();
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.cell(0, 2), "");
}

#[test]
fn test_table_from_values_empty_sheet() {
    // A worksheet with no data has no "values" key at all.
    let body = json!({ "range": "Transactions!A1:Z1000" });
    let table = table_from_values(&body).unwrap();
    assert!(table.headers.is_empty());
    assert!(table.is_empty());
}

#[test]
fn test_table_from_values_header_only() {
    let body = json!({ "values": [["Date", "Amount"]] });
    let table = table_from_values(&body).unwrap();
    assert_eq!(table.headers.len(), 2);
    assert!(table.is_empty());
}

#[test]
fn test_table_from_values_malformed() {
    let body = json!({ "values": "nope" });
    assert!(matches!(
        table_from_values(&body),
        Err(SourceError::MalformedResponse(_))
    ));
}

// ── metadata parsing ──────────────────────────────────────────

#[test]
fn test_worksheets_from_metadata() {
    let body = json!({
        "sheets": [
            { "properties": { "title": "Transactions" } },
            { "properties": { "title": "Budget" } },
        ]
    });
    let names = worksheets_from_metadata(&body).unwrap();
    assert_eq!(names, vec!["Transactions", "Budget"]);
}

#[test]
fn test_worksheets_from_metadata_missing_sheets() {
    let body = json!({ "error": { "code": 403 } });
    assert!(matches!(
        worksheets_from_metadata(&body),
        Err(SourceError::MalformedResponse(_))
    ));
}

// ── URL building ──────────────────────────────────────────────

#[test]
fn test_values_url_encodes_worksheet_name() {
    let client = SheetsClient::new("sheet123", "key456").unwrap();
    let url = client.values_url("History Transactions").unwrap();
    let s = url.as_str();
    assert!(s.starts_with("https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/"));
    assert!(s.contains("History%20Transactions"));
    assert!(s.contains("key=key456"));
}
