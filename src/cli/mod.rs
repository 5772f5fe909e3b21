//! CLI module for livequery
//!
//! Provides the command-line interface:
//! - serve: load a status snapshot and serve queries over HTTP
//! - query: one-shot query execution from stdin
//! - tables: print the table and column listing

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
