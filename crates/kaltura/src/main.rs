//! Kaltura CLI binary.
//!
//! This binary provides command-line access to the thumbnail pipeline:
//! - Fetch an entry's thumbnail into local storage
//! - Check that the configured credentials can start a session
//! - Show the effective configuration

use clap::Parser;
use kaltura::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_session, fetch_thumbnail, load_config, show_config};

    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    let config = load_config(cli.config_file.as_deref())?;

    match cli.command {
        Commands::Thumbnail {
            entry_id,
            dir,
            format,
        } => {
            fetch_thumbnail(&config, &entry_id, dir.as_deref(), format).await?;
        }

        Commands::Session => {
            check_session(&config).await?;
        }

        Commands::Config { format } => {
            show_config(&config, format)?;
        }
    }

    Ok(())
}
