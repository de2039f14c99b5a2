//! Configuration types for Tilecast.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{DEFAULT_GAP, DEFAULT_PADDING};

/// Layout engine configuration.
///
/// Every field is optional in the file; missing fields use the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Spacing between adjacent tiles, in pixels.
    /// Default: 8
    pub gap: f64,

    /// Inset from the container edges, in pixels.
    /// Not applied to the single full-bleed layout.
    /// Default: 8
    pub padding: f64,

    /// Maximum number of tiles to show. Extra participants are dropped
    /// after host-first ordering (e.g. 4 for battle mode: host + 3 guests).
    /// Default: unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tiles: Option<usize>,

    /// Whether the host is always placed in the first tile.
    /// Default: true
    pub host_first: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            padding: DEFAULT_PADDING,
            max_tiles: None,
            host_first: true,
        }
    }
}

impl LayoutConfig {
    /// Checks that the configured values can produce a sensible layout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for negative or non-finite spacing, or a
    /// tile limit of zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("gap", self.gap), ("padding", self.padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "layout.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.max_tiles == Some(0) {
            return Err(ConfigError::Invalid(
                "layout.maxTiles must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }
}

/// Root configuration structure for Tilecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TilecastConfig {
    /// Optional JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Layout engine configuration.
    pub layout: LayoutConfig,
}

impl TilecastConfig {
    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<(), ConfigError> { self.layout.validate() }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
    /// The configuration file parsed but holds unusable values.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/tilecast/config.jsonc \
                or ~/.tilecast.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
            Self::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound | Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".tilecast.jsonc", ".tilecast.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/tilecast/config.jsonc` (if the variable is set)
/// 2. `~/.config/tilecast/config.jsonc`
/// 3. The platform config directory (`dirs::config_dir()`) + `tilecast/`
/// 4. `~/.tilecast.jsonc` or `~/.tilecast.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let app_dir = PathBuf::from(xdg_config).join("tilecast");
        for filename in CONFIG_FILE_NAMES {
            paths.push(app_dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let app_dir = home.join(".config").join("tilecast");
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            // XDG_CONFIG_HOME might be ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let app_dir = config_dir.join("tilecast");
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads and validates the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, `ConfigError::ParseError`
/// for invalid JSON, and `ConfigError::Invalid` for unusable values.
pub fn load_config_from_path(path: &PathBuf) -> Result<(TilecastConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let config = parse_config_file(path)?;
    Ok((config, path.clone()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the error from the first file that exists but
/// fails to load.
pub fn load_config() -> Result<(TilecastConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = parse_config_file(&path)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}

/// Reads a JSONC file, strips its comments and validates the result.
fn parse_config_file(path: &Path) -> Result<TilecastConfig, ConfigError> {
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: TilecastConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}
