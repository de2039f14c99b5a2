//! Helper functions for layout calculations.

use super::geometry::{ContainerGeometry, TileRect};
use super::spacing::Spacing;

/// Returns the padded content box of a container.
#[must_use]
pub fn content_box(geometry: &ContainerGeometry, spacing: &Spacing) -> TileRect {
    let (width, height) = spacing.available(geometry);
    TileRect::new(spacing.padding, spacing.padding, width, height)
}

/// Splits a tile horizontally (left/right) into two equal halves with a gap.
///
/// # Returns
///
/// A tuple of (`left_tile`, `right_tile`)
#[must_use]
pub fn split_horizontal(frame: &TileRect, gap: f64) -> (TileRect, TileRect) {
    let width = (frame.width - gap) / 2.0;

    let left = TileRect::new(frame.left, frame.top, width, frame.height);
    let right = TileRect::new(frame.left + width + gap, frame.top, width, frame.height);

    (left, right)
}

/// Splits a tile vertically (top/bottom) into two equal halves with a gap.
///
/// # Returns
///
/// A tuple of (`top_tile`, `bottom_tile`)
#[must_use]
pub fn split_vertical(frame: &TileRect, gap: f64) -> (TileRect, TileRect) {
    let height = (frame.height - gap) / 2.0;

    let top = TileRect::new(frame.left, frame.top, frame.width, height);
    let bottom = TileRect::new(frame.left, frame.top + height + gap, frame.width, height);

    (top, bottom)
}
