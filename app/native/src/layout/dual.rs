//! Dual layouts - two tiles split evenly along one axis.

use smallvec::smallvec;

use super::Tiles;
use super::geometry::ContainerGeometry;
use super::helpers::{content_box, split_horizontal, split_vertical};
use super::spacing::Spacing;

/// Two tiles side by side, each spanning the full padded height.
#[must_use]
pub fn layout_horizontal(geometry: &ContainerGeometry, spacing: &Spacing) -> Tiles {
    let (left, right) = split_horizontal(&content_box(geometry, spacing), spacing.gap);
    smallvec![left, right]
}

/// Two tiles stacked top/bottom, each spanning the full padded width.
#[must_use]
pub fn layout_vertical(geometry: &ContainerGeometry, spacing: &Spacing) -> Tiles {
    let (top, bottom) = split_vertical(&content_box(geometry, spacing), spacing.gap);
    smallvec![top, bottom]
}
