use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ReportResult;

/// Domain trait for loading application records
///
/// Keeps the printer independent of where records live, so tests can feed
/// it fixtures without touching the filesystem.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every raw record in stored order
    ///
    /// Elements are left undecoded; only the records that end up in the
    /// report are checked against the record shape.
    ///
    /// # Returns
    /// * `Ok(Some(records))` - The decoded records, oldest first
    /// * `Ok(None)` - The source does not exist; nothing to report
    /// * `Err(ReportError)` - The source exists but could not be read or decoded
    async fn load_records(&self) -> ReportResult<Option<Vec<Value>>>;
}
