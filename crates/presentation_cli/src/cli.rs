//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skycast weather lookup
#[derive(Debug, Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Current weather and 5-day forecast", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./skycast.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up current conditions and the forecast for a place
    ///
    /// Without PLACE the last searched place is used, or the configured
    /// default on first run.
    /// Example: skycast search "London, UK"
    Search {
        /// City name, optionally with a country ("Paris, FR")
        place: Option<String>,

        /// Print the result as JSON instead of the terminal view
        #[arg(long, conflicts_with = "watch")]
        json: bool,

        /// Keep the view open and refresh it every 30 seconds (demo data only)
        #[arg(short, long)]
        watch: bool,
    },

    /// Print the last searched place
    Last,

    /// Print the effective configuration with the API key masked
    Config,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
