//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `layout` - Mode selection and tile layout commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::TilecastError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout;

// Re-export commonly used types for convenience
pub use config_cmd::ConfigCommands;
pub use layout::LayoutArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tilecast CLI - Responsive video tile layouts for multi-party broadcasts.
#[derive(Parser, Debug)]
#[command(name = "tilecast")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the layout mode chosen for a participant count.
    ///
    /// Orientation defaults to landscape; pass --portrait for tall containers.
    #[command(after_long_help = r"Examples:
  tilecast mode 2               # dual-horizontal
  tilecast mode 2 --portrait    # dual-vertical
  tilecast mode 9               # grid-auto")]
    Mode {
        /// Number of participants.
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Treat the container as portrait (height >= width).
        #[arg(long, short)]
        portrait: bool,
    },

    /// Compute tile rectangles for a container.
    ///
    /// Takes either a participant count or a list of participant IDs.
    /// Spacing and tile limits not given here come from the configuration file.
    Layout(LayoutArgs),

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Tilecast configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Tilecast configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(tilecast completions --shell zsh)"
    ///   tilecast completions --shell fish > ~/.config/fish/completions/tilecast.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_ref().map(|path| config::expand_path(PathBuf::from(path)))
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), TilecastError> {
        // Set custom config path if provided
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(TilecastError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Mode { count, portrait } => layout::execute_mode(*count, *portrait),
            Commands::Layout(args) => layout::execute(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                let schema_output = schema::print_schema();
                println!("{schema_output}");
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "tilecast", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // CLI parsing tests
    // ========================================================================

    #[test]
    fn test_cli_definition_is_valid() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_parses_mode() {
        let cli = Cli::try_parse_from(["tilecast", "mode", "3"]).unwrap();
        match cli.command {
            Commands::Mode { count, portrait } => {
                assert_eq!(count, 3);
                assert!(!portrait);
            }
            _ => panic!("Expected Mode command"),
        }
    }

    #[test]
    fn test_cli_parses_mode_portrait() {
        let cli = Cli::try_parse_from(["tilecast", "mode", "2", "--portrait"]).unwrap();
        assert!(matches!(cli.command, Commands::Mode { count: 2, portrait: true }));
    }

    #[test]
    fn test_cli_accepts_negative_count() {
        // Rejected by the engine, not the parser
        let cli = Cli::try_parse_from(["tilecast", "mode", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Mode { count: -1, .. }));
    }

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["tilecast", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["tilecast", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_completions_fish() {
        let cli = Cli::try_parse_from(["tilecast", "completions", "--shell", "fish"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Fish),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_global_config() {
        let cli =
            Cli::try_parse_from(["tilecast", "schema", "--config", "/tmp/tilecast.jsonc"]).unwrap();
        assert_eq!(cli.config_path(), Some(PathBuf::from("/tmp/tilecast.jsonc")));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["tilecast", "wallpaper"]).is_err());
    }

    #[test]
    fn test_execute_fails_for_missing_config() {
        let cli = Cli::try_parse_from([
            "tilecast",
            "mode",
            "1",
            "--config",
            "/nonexistent/tilecast.jsonc",
        ])
        .unwrap();

        let err = cli.execute().unwrap_err();
        assert!(matches!(err, TilecastError::ConfigError(_)));
    }
}
