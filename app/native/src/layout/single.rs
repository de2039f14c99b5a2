//! Single layout - every tile fills the whole container.
//!
//! This is the only layout that ignores padding. The full-bleed behavior is
//! what broadcast pages have always rendered for a lone broadcaster, so it
//! is kept even though the other layouts inset their tiles.

use super::Tiles;
use super::geometry::{ContainerGeometry, TileRect};

/// Single layout - one full-bleed tile per participant.
///
/// With more than one participant every tile is stacked on the same
/// rectangle; callers normally only reach this with a count of 0 or 1.
#[must_use]
pub fn layout(count: usize, geometry: &ContainerGeometry) -> Tiles {
    let frame = TileRect::new(0.0, 0.0, geometry.width, geometry.height);
    std::iter::repeat_n(frame, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_single_is_full_bleed() {
        let result = layout(1, &ContainerGeometry::new(800.0, 600.0));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0], TileRect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_layout_single_empty() {
        assert!(layout(0, &ContainerGeometry::new(800.0, 600.0)).is_empty());
    }

    #[test]
    fn test_layout_single_keeps_cardinality() {
        let result = layout(3, &ContainerGeometry::new(640.0, 360.0));

        assert_eq!(result.len(), 3);
        for tile in &result {
            assert_eq!(*tile, TileRect::new(0.0, 0.0, 640.0, 360.0));
        }
    }
}
