//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Kaltura - locally cached thumbnails for Kaltura video entries
#[derive(Parser, Debug)]
#[command(name = "kaltura")]
#[command(about = "Locally cached thumbnails for Kaltura video entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the default search path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the thumbnail of an entry into local storage and print its URI
    Thumbnail {
        /// Kaltura entry id
        entry_id: String,

        /// Destination directory (URI such as public://thumbs, or a path)
        #[arg(long)]
        dir: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Check that the configured credentials can start an admin session
    Session,

    /// Print the effective configuration with the admin secret masked
    Config {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thumbnail() {
        let cli = Cli::try_parse_from([
            "kaltura",
            "thumbnail",
            "0_abc123",
            "--dir",
            "public://thumbs",
        ])
        .unwrap();
        match cli.command {
            Commands::Thumbnail {
                entry_id,
                dir,
                format,
            } => {
                assert_eq!(entry_id, "0_abc123");
                assert_eq!(dir.as_deref(), Some("public://thumbs"));
                assert_eq!(format, OutputFormat::Human);
            }
            other => panic!("Expected thumbnail command, got {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "kaltura",
            "config",
            "--format",
            "json",
            "-v",
            "--config",
            "/etc/kaltura.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_file, Some(PathBuf::from("/etc/kaltura.toml")));
        assert!(matches!(
            cli.command,
            Commands::Config {
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_thumbnail_requires_entry_id() {
        assert!(Cli::try_parse_from(["kaltura", "thumbnail"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
