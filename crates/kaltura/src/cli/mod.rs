//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the kaltura binary.

mod commands;
mod config;
mod session;
mod thumbnail;

pub use commands::{Cli, Commands};
pub use config::{load_config, show_config};
pub use session::check_session;
pub use thumbnail::fetch_thumbnail;
