use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ReportError, ReportResult};

/// Initialize logging based on environment configuration
///
/// Diagnostics are written to stderr so they never interleave with the
/// report on stdout.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ReportError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ReportResult<()> {
    // No RUST_LOG, no subscriber
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| ReportError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
