//! Command-line surface of the `stamplist` binary.
//!
//! # Responsibility
//! - Declare flags, environment fallbacks and subcommands.
//! - Carry raw user input only; resolution happens in `config`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stamplist")]
#[command(version = stamplist_core::core_version())]
#[command(about = "Timestamped item list backed by a local SQLite store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite database file (created when missing)
    #[arg(long, env = "STAMPLIST_DB")]
    pub db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, env = "STAMPLIST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "STAMPLIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Use built-in sample data instead of the database; nothing is saved
    #[arg(long)]
    pub preview: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all items
    List,

    /// Add items stamped with the current time
    Add {
        /// Number of items to add
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
