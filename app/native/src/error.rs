//! Error types for Tilecast.
//!
//! This module provides the application-level error type used by the CLI.
//! Engine errors live in [`crate::layout::LayoutError`] and convert into it.

use thiserror::Error;

use crate::config::ConfigError;
use crate::layout::LayoutError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum TilecastError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// The layout engine rejected its input.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for TilecastError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for TilecastError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for TilecastError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}
