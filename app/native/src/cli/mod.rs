//! CLI module for Tilecast.
//!
//! This module provides the command-line interface to the layout engine:
//! mode selection, tile layout output and configuration management.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::TilecastError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), TilecastError> {
    let cli = Cli::parse();
    cli.execute()
}
