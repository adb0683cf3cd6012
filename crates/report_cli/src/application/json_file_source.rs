use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::RecordSource;
use crate::errors::{ReportError, ReportResult};

/// Record source backed by a JSON array on disk
///
/// The file is read once, in full, and never written.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load_records(&self) -> ReportResult<Option<Vec<Value>>> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file not found, nothing to report");
                return Ok(None);
            }
            Err(source) => {
                return Err(ReportError::ReadFailed {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if !metadata.is_file() {
            return Err(ReportError::InvalidDataPath {
                path: self.path.clone(),
            });
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ReportError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Value> =
            serde_json::from_slice(&bytes).map_err(|source| ReportError::MalformedData {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded application records"
        );

        Ok(Some(records))
    }
}
