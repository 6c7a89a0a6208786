mod client;

pub(crate) use client::SheetsClient;

use crate::models::RawTable;

/// Failures at the data-source boundary. Everything past this boundary is
/// soft-fail: once a table has been fetched, the pipeline cannot error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SourceError {
    /// Cannot reach or authenticate to the spreadsheet service. The only
    /// variant that reaches the user.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The named worksheet does not exist. Recovered internally by falling
    /// back to the first worksheet; surfaces only if that also fails.
    #[error("worksheet not found: {0}")]
    WorksheetNotFound(String),

    #[error("malformed response from data source: {0}")]
    MalformedResponse(String),
}

/// The input provider the pipeline runs against. The production source is
/// `SheetsClient`; tests substitute in-memory tables.
pub(crate) trait RecordSource {
    fn fetch_table(&self, worksheet: &str) -> Result<RawTable, SourceError>;
    fn list_worksheets(&self) -> Result<Vec<String>, SourceError>;
}
