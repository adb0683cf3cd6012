use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_DATA_PATH, DEFAULT_PREVIEW_WIDTH, DEFAULT_RECORD_COUNT};
use crate::errors::{ReportError, ReportResult};
use crate::utils::path::resolve_data_path;

/// Applications Report
///
/// Prints a short preview of the most recent tailored job applications
/// stored in a JSON data file.
///
/// ## Output
/// One block per record:
/// ```text
/// --- Job: {title} at {company} ---
/// Reasoning: {first 100 chars}...
/// Resume snippet: {first 100 chars}...
/// Cover Letter snippet: {first 100 chars}...
/// ----------------------------------------
/// ```
///
/// A missing data file is not an error: nothing is printed.
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "applications-report")]
#[command(about = "Preview the most recent tailored job applications")]
#[command(version)]
#[command(
    long_about = "Reads a JSON array of job-application records and prints a truncated preview \nof the last few entries. The data file is never modified."
)]
pub struct Cli {
    /// Path to the JSON data file.
    ///
    /// Defaults to data/applications.json in the current directory.
    /// A leading ~ is expanded to the home directory.
    #[arg(
        help = "JSON file holding the application records",
        value_name = "PATH"
    )]
    pub path: Option<PathBuf>,

    /// Number of trailing records to show
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_RECORD_COUNT)]
    pub count: usize,

    /// Number of characters kept in each text preview
    #[arg(short = 'w', long, value_name = "CHARS", default_value_t = DEFAULT_PREVIEW_WIDTH)]
    pub width: usize,

    /// Also print id, score, status, URL and creation time for each record
    #[arg(long)]
    pub details: bool,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub async fn parse_config() -> ReportResult<Config> {
        Self::parse().into_config().await
    }

    /// Resolve and validate the parsed arguments
    pub async fn into_config(self) -> ReportResult<Config> {
        let data_path = resolve_data_path(self.path, DEFAULT_DATA_PATH);

        // A missing file is fine; something that is not a file is not
        if let Ok(metadata) = tokio::fs::metadata(&data_path).await
            && !metadata.is_file()
        {
            return Err(ReportError::InvalidDataPath { path: data_path });
        }

        Ok(Config {
            data_path,
            count: self.count,
            width: self.width,
            details: self.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["applications-report"]).unwrap();
        assert!(cli.path.is_none());
        assert_eq!(cli.count, 3);
        assert_eq!(cli.width, 100);
        assert!(!cli.details);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "applications-report",
            "jobs.json",
            "-n",
            "5",
            "--width",
            "20",
            "--details",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("jobs.json")));
        assert_eq!(cli.count, 5);
        assert_eq!(cli.width, 20);
        assert!(cli.details);
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(Cli::try_parse_from(["applications-report", "-n", "-1"]).is_err());
    }

    #[tokio::test]
    async fn test_into_config_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("applications.json");
        let cli = Cli::try_parse_from([OsStr::new("applications-report"), path.as_os_str()])
            .unwrap();

        let config = cli.into_config().await.unwrap();
        assert_eq!(config.data_path, path);
        assert_eq!(config.count, 3);
    }

    #[tokio::test]
    async fn test_into_config_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            OsStr::new("applications-report"),
            temp_dir.path().as_os_str(),
        ])
        .unwrap();

        let result = cli.into_config().await;
        assert!(matches!(
            result.unwrap_err(),
            ReportError::InvalidDataPath { .. }
        ));
    }
}
