//! Gap and padding handling for layouts.

use super::geometry::ContainerGeometry;
use crate::config::LayoutConfig;

/// Default spacing between adjacent tiles.
pub const DEFAULT_GAP: f64 = 8.0;

/// Default inset from the container edge.
pub const DEFAULT_PADDING: f64 = 8.0;

/// Resolved spacing values for layout calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Gap between adjacent tiles, on both axes.
    pub gap: f64,
    /// Inset from every container edge.
    pub padding: f64,
}

impl Default for Spacing {
    fn default() -> Self { Self::new(DEFAULT_GAP, DEFAULT_PADDING) }
}

impl Spacing {
    /// Creates spacing with the given gap and padding.
    #[must_use]
    pub const fn new(gap: f64, padding: f64) -> Self { Self { gap, padding } }

    /// Spacing with no gap and no padding.
    #[must_use]
    pub const fn none() -> Self { Self::new(0.0, 0.0) }

    /// Resolves spacing from the layout configuration.
    #[must_use]
    pub const fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.gap, config.padding)
    }

    /// Returns the usable `(width, height)` once padding is removed.
    ///
    /// Values are not clamped: a container smaller than twice the padding
    /// yields non-positive dimensions.
    #[must_use]
    pub fn available(&self, geometry: &ContainerGeometry) -> (f64, f64) {
        (
            2.0f64.mul_add(-self.padding, geometry.width),
            2.0f64.mul_add(-self.padding, geometry.height),
        )
    }

    /// Returns the bit pattern of both values, for cache keys.
    #[must_use]
    pub const fn to_bits(&self) -> (u64, u64) { (self.gap.to_bits(), self.padding.to_bits()) }
}
