//! Tiling layout engine for multi-party video rooms.
//!
//! Given a participant count, the size of the hosting container and its
//! orientation, the engine picks a named layout mode and computes one tile
//! rectangle per participant. Everything here is pure: no I/O, no shared
//! state, and identical inputs always produce bit-identical tiles.
//!
//! # Supported Layouts
//!
//! - **Single**: one full-bleed tile (no padding)
//! - **Dual vertical**: two tiles stacked top/bottom (portrait)
//! - **Dual horizontal**: two tiles side by side (landscape)
//! - **Grid 2×2**: 3 or 4 participants
//! - **Grid 3×2**: 5 or 6 participants, 2×3 in portrait
//! - **Grid auto**: near-square grid for 7 or more participants
//!
//! Ordering is the caller's business: tile `i` always belongs to participant
//! `i` of the input. See [`crate::roster`] for host-first ordering helpers.
//!
//! # Performance
//!
//! Tile lists use `SmallVec` to avoid heap allocations for rooms with up to
//! 16 participants, which covers every named layout.

mod dual;
mod error;
mod geometry;
mod grid;
mod helpers;
mod mode;
mod single;
mod spacing;

pub use error::{EngineResult, LayoutError};
pub use geometry::{ContainerGeometry, Orientation, TileRect};
pub use grid::{GridShape, grid_shape};
pub use mode::{LayoutMode, select_mode};
use serde::Serialize;
use smallvec::SmallVec;
pub use spacing::{DEFAULT_GAP, DEFAULT_PADDING, Spacing};

use crate::roster::ParticipantId;

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for tile lists.
pub const TILES_INLINE_CAP: usize = 16;

/// Computed tiles, in participant order.
pub type Tiles = SmallVec<[TileRect; TILES_INLINE_CAP]>;

/// The selected mode together with one tile per participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    /// The layout mode that produced the tiles.
    pub mode: LayoutMode,
    /// One tile per participant, in input order.
    pub tiles: Tiles,
}

impl LayoutResult {
    /// Number of tiles in the layout.
    #[must_use]
    pub fn len(&self) -> usize { self.tiles.len() }

    /// Returns true if the layout has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// Pairs each participant with its tile.
    ///
    /// `participants` must be the list the layout was computed for; extra
    /// entries on either side are dropped.
    pub fn assignments<'a>(
        &'a self,
        participants: &'a [ParticipantId],
    ) -> impl Iterator<Item = (&'a ParticipantId, &'a TileRect)> + 'a {
        participants.iter().zip(self.tiles.iter())
    }

    /// Returns true if both layouts have the same mode and bit-identical tiles.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.tiles.len() == other.tiles.len()
            && self.tiles.iter().zip(other.tiles.iter()).all(|(a, b)| a.bit_eq(b))
    }
}

// ============================================================================
// Main Layout Functions
// ============================================================================

/// Computes tiles for a mode using the default gap and padding (8 units each).
///
/// # Errors
///
/// Returns [`LayoutError::InvalidArgument`] if `count` is negative.
pub fn compute_layout(
    mode: LayoutMode,
    count: i64,
    width: f64,
    height: f64,
    is_landscape: bool,
) -> EngineResult<Tiles> {
    compute_layout_with_spacing(mode, count, width, height, is_landscape, &Spacing::default())
}

/// Computes tiles for a mode with explicit spacing.
///
/// # Arguments
///
/// * `mode` - The layout mode to apply
/// * `count` - Number of participants (must be non-negative)
/// * `width` / `height` - Container size; not validated
/// * `is_landscape` - Orientation flag, normally `width > height`
/// * `spacing` - Gap and padding values
///
/// # Errors
///
/// Returns [`LayoutError::InvalidArgument`] if `count` is negative.
pub fn compute_layout_with_spacing(
    mode: LayoutMode,
    count: i64,
    width: f64,
    height: f64,
    is_landscape: bool,
    spacing: &Spacing,
) -> EngineResult<Tiles> {
    let count = error::checked_count(count)?;
    Ok(tiles_for(mode, count, &ContainerGeometry::new(width, height), is_landscape, spacing))
}

/// Selects a mode and computes tiles for an ordered list of participants.
///
/// Orientation is derived from the geometry (`width > height`).
#[must_use]
pub fn solve(participants: &[ParticipantId], geometry: &ContainerGeometry) -> LayoutResult {
    solve_with_spacing(participants, geometry, &Spacing::default())
}

/// Same as [`solve`] with explicit spacing.
#[must_use]
pub fn solve_with_spacing(
    participants: &[ParticipantId],
    geometry: &ContainerGeometry,
    spacing: &Spacing,
) -> LayoutResult {
    solve_count(participants.len(), geometry, spacing)
}

/// Selects a mode and computes tiles for `count` participants.
#[must_use]
pub fn solve_count(count: usize, geometry: &ContainerGeometry, spacing: &Spacing) -> LayoutResult {
    let is_landscape = geometry.is_landscape();
    let mode = mode::mode_for(count, is_landscape);
    let tiles = tiles_for(mode, count, geometry, is_landscape, spacing);

    tracing::trace!(
        %mode,
        count,
        width = geometry.width,
        height = geometry.height,
        "computed layout"
    );

    LayoutResult { mode, tiles }
}

/// Routes a validated count to the algorithm for `mode`.
///
/// Dual modes only describe two tiles; any other count goes through the grid
/// path so that every participant still gets exactly one tile.
fn tiles_for(
    mode: LayoutMode,
    count: usize,
    geometry: &ContainerGeometry,
    is_landscape: bool,
    spacing: &Spacing,
) -> Tiles {
    if count == 0 {
        return Tiles::new();
    }

    match mode {
        LayoutMode::Single => single::layout(count, geometry),
        LayoutMode::DualHorizontal if count == 2 => dual::layout_horizontal(geometry, spacing),
        LayoutMode::DualVertical if count == 2 => dual::layout_vertical(geometry, spacing),
        LayoutMode::DualHorizontal
        | LayoutMode::DualVertical
        | LayoutMode::Grid2x2
        | LayoutMode::Grid3x2
        | LayoutMode::GridAuto => {
            let shape = grid_shape(mode, count, is_landscape);
            grid::layout(count, shape, geometry, spacing)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
