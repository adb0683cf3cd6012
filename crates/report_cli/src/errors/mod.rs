use std::path::PathBuf;

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while loading and printing application records
///
/// A missing data file is not represented here: record sources report it
/// as `Ok(None)` so callers can treat it as an empty report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Data path is not a regular file: {path}")]
    InvalidDataPath { path: PathBuf },
    #[error("Failed to read data file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed application data in {path}: {source}")]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Record {index} has an invalid shape: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}
