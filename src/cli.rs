use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI interface for `shopdb`
#[derive(Parser)]
#[command(name = "shopdb")]
#[command(version = crate::VERSION)]
#[command(about = "shopdb - shared MongoDB connection for the shop backend")]
pub struct Cli {
    /// Configuration file (defaults to ./shopdb.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Connect to the database and report the result
    Check,
    /// Show the effective configuration with credentials masked
    Config,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
