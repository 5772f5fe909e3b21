//! CLI argument definitions using clap
//!
//! Commands:
//! - livequery serve --config <path>
//! - livequery query --config <path>
//! - livequery tables --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// livequery - A live-monitoring status query engine
#[derive(Parser, Debug)]
#[command(name = "livequery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve queries over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./livequery.json")]
        config: PathBuf,
    },

    /// Execute a single query from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./livequery.json")]
        config: PathBuf,
    },

    /// Print the table and column listing
    Tables {
        /// Path to configuration file
        #[arg(long, default_value = "./livequery.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
