use std::time::Duration;

use serde_json::Value;

use super::{RecordSource, SourceError};
use crate::models::RawTable;

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Read-only Google Sheets v4 client, API-key auth. Owned by the caller and
/// passed into each fetch; it holds no cross-run state beyond the connection
/// pool inside reqwest.
pub(crate) struct SheetsClient {
    http: reqwest::blocking::Client,
    sheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub(crate) fn new(sheet_id: &str, api_key: &str) -> Result<Self, SourceError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        Ok(Self {
            http,
            sheet_id: sheet_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn get_json(&self, url: reqwest::Url, worksheet: Option<&str>) -> Result<Value, SourceError> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .map_err(|e| SourceError::MalformedResponse(e.to_string()));
        }

        // The values endpoint answers an unknown worksheet name with a 400
        // "Unable to parse range"; treat 404 the same way.
        if let Some(name) = worksheet {
            if status == reqwest::StatusCode::BAD_REQUEST
                || status == reqwest::StatusCode::NOT_FOUND
            {
                return Err(SourceError::WorksheetNotFound(name.to_string()));
            }
        }
        Err(SourceError::Unavailable(format!(
            "HTTP {status} from spreadsheet service"
        )))
    }

    fn values_url(&self, worksheet: &str) -> Result<reqwest::Url, SourceError> {
        let mut url = reqwest::Url::parse(API_BASE)
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Unavailable("invalid API base URL".into()))?
            .push(&self.sheet_id)
            .push("values")
            .push(worksheet);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    fn metadata_url(&self) -> Result<reqwest::Url, SourceError> {
        let mut url = reqwest::Url::parse(API_BASE)
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Unavailable("invalid API base URL".into()))?
            .push(&self.sheet_id);
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("fields", "sheets.properties.title");
        Ok(url)
    }

    fn fetch_named(&self, worksheet: &str) -> Result<RawTable, SourceError> {
        let body = self.get_json(self.values_url(worksheet)?, Some(worksheet))?;
        table_from_values(&body)
    }
}

impl RecordSource for SheetsClient {
    /// Fetch the named worksheet, falling back to the spreadsheet's first
    /// worksheet when the name does not exist (mirrors how people rename
    /// tabs without updating their config).
    fn fetch_table(&self, worksheet: &str) -> Result<RawTable, SourceError> {
        match self.fetch_named(worksheet) {
            Err(SourceError::WorksheetNotFound(_)) => {
                let names = self.list_worksheets()?;
                let first = names
                    .first()
                    .ok_or_else(|| SourceError::WorksheetNotFound(worksheet.to_string()))?;
                self.fetch_named(first)
            }
            other => other,
        }
    }

    fn list_worksheets(&self) -> Result<Vec<String>, SourceError> {
        let body = self.get_json(self.metadata_url()?, None)?;
        worksheets_from_metadata(&body)
    }
}

/// Pull a RawTable out of a `values.get` response body. The first row is
/// the header row; ragged data rows are padded by `RawTable::new`. A sheet
/// with no values at all is an empty table, not an error.
pub(crate) fn table_from_values(body: &Value) -> Result<RawTable, SourceError> {
    let Some(values) = body.get("values") else {
        return Ok(RawTable::default());
    };
    let rows = values
        .as_array()
        .ok_or_else(|| SourceError::MalformedResponse("\"values\" is not an array".into()))?;

    let mut text_rows: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = row
            .as_array()
            .ok_or_else(|| SourceError::MalformedResponse("row is not an array".into()))?;
        text_rows.push(cells.iter().map(cell_text).collect());
    }

    let mut iter = text_rows.into_iter();
    let headers = iter.next().unwrap_or_default();
    Ok(RawTable::new(headers, iter.collect()))
}

pub(crate) fn worksheets_from_metadata(body: &Value) -> Result<Vec<String>, SourceError> {
    let sheets = body
        .get("sheets")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::MalformedResponse("missing \"sheets\" list".into()))?;
    Ok(sheets
        .iter()
        .filter_map(|s| s.pointer("/properties/title"))
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Cells arrive as JSON strings, numbers or bools depending on the sheet's
/// formatting; the pipeline only deals in text, so normalize here.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
