//! Config CLI commands.
//!
//! Commands for managing the Tilecast configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::cli::output;
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, config_paths};
use crate::error::TilecastError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a new configuration file at the default location with all
    /// available options commented out.
    #[command(
        name = "init",
        after_long_help = r"Examples:
  tilecast config init              # Create config at default location
  tilecast config init --force      # Overwrite existing config
  tilecast config init --path ~/tilecast.jsonc  # Create at custom path
  tilecast config init --stdout     # Print template to stdout"
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Tilecast looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,

    /// Print the effective configuration as JSON.
    ///
    /// Defaults are filled in for anything the file leaves out.
    Show,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), TilecastError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone()).map(|path| {
                    println!("Configuration file created at: {}", path.display());
                    println!("\nAll options are commented out by default.");
                    println!("Edit the file and uncomment the options you want to configure.");
                })
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
        ConfigCommands::Show => show_config(),
    }
}

/// Initialize a new configuration file, returning where it was written.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<PathBuf, TilecastError> {
    let config_path = custom_path.map_or_else(
        || config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc")),
        config::expand_path,
    );

    if config_path.exists() && !force {
        return Err(TilecastError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        TilecastError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    tracing::debug!(path = %config_path.display(), "created configuration file");
    Ok(config_path)
}

/// Show the configuration file search paths.
fn show_config_path() {
    // Loading records which file, if any, is in effect
    config::get_config();
    let active = config::get_config_path().map(PathBuf::as_path);

    println!("Configuration file search paths (in priority order):\n");
    for line in describe_config_paths(&config_paths(), active) {
        println!("{line}");
    }
}

/// Lists the search paths, marking the loaded file as active.
///
/// A file loaded through `--config` is not one of the search paths and is
/// reported after them.
fn describe_config_paths(paths: &[PathBuf], active: Option<&Path>) -> Vec<String> {
    let mut lines: Vec<String> = paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let marker = if active == Some(path.as_path()) {
                " (active)"
            } else if path.exists() {
                " (exists)"
            } else {
                ""
            };
            format!("  {}. {}{marker}", i + 1, path.display())
        })
        .collect();

    match active {
        Some(active) if !paths.iter().any(|path| path == active) => {
            lines.push(String::new());
            lines.push(format!("Active (--config): {}", active.display()));
        }
        Some(_) => {}
        None => {
            lines.push(String::new());
            lines.push("No configuration file loaded, using defaults.".to_string());
            lines.push("Run 'tilecast config init' to create one.".to_string());
        }
    }

    lines
}

/// Print the effective configuration.
fn show_config() -> Result<(), TilecastError> {
    let value = serde_json::to_value(config::get_config())?;
    output::print_highlighted_json(&value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TilecastConfig;

    #[test]
    fn test_init_config_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tilecast").join("config.jsonc");

        let written = init_config(false, Some(path.clone())).unwrap();
        assert_eq!(written, path);

        let (config, _) = config::load_config_from_path(&path).unwrap();
        assert_eq!(config, TilecastConfig::default());
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{}").unwrap();

        let err = init_config(false, Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("--force"));

        assert!(init_config(true, Some(path)).is_ok());
    }

    #[test]
    fn test_describe_paths_marks_custom_file_active() {
        let dir = tempfile::tempdir().unwrap();
        let searched = dir.path().join("config.jsonc");
        let missing = dir.path().join("tilecast.jsonc");
        let custom = dir.path().join("custom.jsonc");
        std::fs::write(&searched, "{}").unwrap();
        std::fs::write(&custom, "{}").unwrap();

        let lines = describe_config_paths(&[searched, missing], Some(custom.as_path()));

        assert!(lines[0].ends_with("config.jsonc (exists)"));
        assert!(lines[1].ends_with("tilecast.jsonc"));
        assert!(lines.iter().all(|line| !line.contains("(active)")));
        assert_eq!(lines.last().unwrap(), &format!("Active (--config): {}", custom.display()));
    }

    #[test]
    fn test_describe_paths_marks_loaded_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.jsonc");
        let second = dir.path().join("b.jsonc");
        std::fs::write(&first, "{}").unwrap();
        std::fs::write(&second, "{}").unwrap();

        let lines = describe_config_paths(&[first, second.clone()], Some(second.as_path()));

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("a.jsonc (exists)"));
        assert!(lines[1].ends_with("b.jsonc (active)"));
    }

    #[test]
    fn test_describe_paths_without_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let lines = describe_config_paths(&[dir.path().join("config.jsonc")], None);

        assert!(!lines[0].contains('('));
        assert!(lines.iter().any(|line| line.contains("using defaults")));
    }
}
