mod application;
mod cli;
mod config;
mod domain;
mod errors;
mod handlers;
mod utils;

use cli::Cli;
use handlers::run;
use utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config().await?;

    // Initialize logging based on environment
    logging::init_logging()?;

    tracing::debug!(?config, "starting report");

    if let Err(e) = run(config).await {
        tracing::error!("Failed to print report: {}", e);
        return Err(e.into());
    }

    Ok(())
}
