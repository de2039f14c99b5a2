//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Tilecast Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Layout Engine
  // ============================================================================
  // "layout": {
  //   // Spacing between adjacent tiles, in pixels
  //   "gap": 8,
  //
  //   // Inset from the container edges, in pixels.
  //   // The single-participant layout is always full bleed and ignores this.
  //   "padding": 8,
  //
  //   // Maximum number of tiles on screen (e.g. 4 for battle mode).
  //   // Leave unset to show every participant.
  //   "maxTiles": null,
  //
  //   // Always place the host in the first tile
  //   "hostFirst": true
  // }
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
