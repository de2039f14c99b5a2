//! Geometric types shared by the layout algorithms.
//!
//! All values are in layout units (pixels on the hosting surface). The engine
//! never validates geometry: degenerate containers produce degenerate tiles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Container
// ============================================================================

/// Size of the surface that hosts the video tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContainerGeometry {
    /// Width of the container.
    pub width: f64,
    /// Height of the container.
    pub height: f64,
}

impl ContainerGeometry {
    /// Creates a new container geometry.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Returns the orientation implied by the container's aspect ratio.
    #[must_use]
    pub fn orientation(&self) -> Orientation { Orientation::from_size(self.width, self.height) }

    /// Returns true if the container is wider than it is tall.
    #[must_use]
    pub fn is_landscape(&self) -> bool { self.orientation().is_landscape() }
}

// ============================================================================
// Orientation
// ============================================================================

/// Aspect-ratio classification of a container.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall.
    #[default]
    Landscape,
    /// Taller than wide, or square.
    Portrait,
}

impl Orientation {
    /// Classifies a size. Only a strictly wider container is landscape.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        if width > height { Self::Landscape } else { Self::Portrait }
    }

    /// Returns true for [`Orientation::Landscape`].
    #[must_use]
    pub const fn is_landscape(self) -> bool { matches!(self, Self::Landscape) }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landscape => write!(f, "landscape"),
            Self::Portrait => write!(f, "portrait"),
        }
    }
}

// ============================================================================
// Tile
// ============================================================================

/// The rectangle assigned to one participant's video feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TileRect {
    /// Width of the tile.
    pub width: f64,
    /// Height of the tile.
    pub height: f64,
    /// Distance from the container's top edge.
    pub top: f64,
    /// Distance from the container's left edge.
    pub left: f64,
}

impl TileRect {
    /// Creates a tile from its origin and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { width, height, top, left }
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 { self.left + self.width }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.top + self.height }

    /// Returns true if the interiors of the two tiles intersect.
    ///
    /// Tiles that merely share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Returns true if every coordinate is bit-identical to `other`.
    ///
    /// Unlike `==`, this treats two NaNs with the same payload as equal and
    /// distinguishes `0.0` from `-0.0`.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
            && self.top.to_bits() == other.top.to_bits()
            && self.left.to_bits() == other.left.to_bits()
    }
}
