use serde_json::Value;

use crate::application::{JsonFileSource, ReportPrinter};
use crate::config::Config;
use crate::domain::RecordSource;
use crate::errors::ReportResult;

/// Load the configured data file and print the report to stdout
pub async fn run(config: Config) -> ReportResult<()> {
    let printer = ReportPrinter::from_config(&config);
    let source = JsonFileSource::new(config.data_path);

    let records = load_records_or_empty(&source).await?;

    // Loading is done; stdout is locked only for the synchronous print
    let written = printer.print(&records, &mut std::io::stdout().lock())?;
    tracing::info!(blocks = written, path = %source.path().display(), "report complete");

    Ok(())
}

/// Load every raw record from `source`
///
/// A source that does not exist yields an empty list.
pub async fn load_records_or_empty<S>(source: &S) -> ReportResult<Vec<Value>>
where
    S: RecordSource + ?Sized,
{
    Ok(source.load_records().await?.unwrap_or_default())
}
