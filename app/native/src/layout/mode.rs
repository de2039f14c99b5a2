//! Layout mode selection.
//!
//! The mode is a pure function of participant count and orientation. It never
//! looks at container pixel sizes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{EngineResult, checked_count};

/// Named tiling strategy for a given participant count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// One full-bleed tile.
    #[default]
    Single,
    /// Two tiles stacked top/bottom.
    DualVertical,
    /// Two tiles side by side.
    DualHorizontal,
    /// Fixed 2×2 grid.
    #[serde(rename = "grid-2x2")]
    Grid2x2,
    /// 3×2 grid in landscape, 2×3 in portrait.
    #[serde(rename = "grid-3x2")]
    Grid3x2,
    /// Near-square grid sized from the participant count.
    GridAuto,
}

impl LayoutMode {
    /// All modes, in order of increasing participant count.
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::DualVertical,
        Self::DualHorizontal,
        Self::Grid2x2,
        Self::Grid3x2,
        Self::GridAuto,
    ];

    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::DualVertical => "dual-vertical",
            Self::DualHorizontal => "dual-horizontal",
            Self::Grid2x2 => "grid-2x2",
            Self::Grid3x2 => "grid-3x2",
            Self::GridAuto => "grid-auto",
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim())).ok_or_else(
            || {
                format!(
                    "Invalid layout mode '{s}'. Expected one of: single, dual-vertical, \
                     dual-horizontal, grid-2x2, grid-3x2, grid-auto."
                )
            },
        )
    }
}

/// Maps an already-validated count to its mode.
#[must_use]
pub(crate) const fn mode_for(count: usize, is_landscape: bool) -> LayoutMode {
    match count {
        0 | 1 => LayoutMode::Single,
        2 if is_landscape => LayoutMode::DualHorizontal,
        2 => LayoutMode::DualVertical,
        3 | 4 => LayoutMode::Grid2x2,
        5 | 6 => LayoutMode::Grid3x2,
        _ => LayoutMode::GridAuto,
    }
}

/// Selects the layout mode for a participant count and orientation.
///
/// # Errors
///
/// Returns [`super::LayoutError::InvalidArgument`] if `count` is negative.
pub fn select_mode(count: i64, is_landscape: bool) -> EngineResult<LayoutMode> {
    Ok(mode_for(checked_count(count)?, is_landscape))
}
