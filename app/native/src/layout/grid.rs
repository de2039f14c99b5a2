//! Grid layouts - tiles arranged in equal rows and columns.
//!
//! # Layout Rules
//!
//! - `grid-2x2`: always 2 columns × 2 rows
//! - `grid-3x2`: 3 columns × 2 rows in landscape, 2 × 3 in portrait
//! - `grid-auto`: `ceil(sqrt(n))` columns, `ceil(n / cols)` rows
//! - More than 6 tiles always use the auto grid, whatever mode was requested
//! - A named grid that cannot hold every tile also falls back to the auto grid
//!
//! Tiles are placed row-major in input order. The last row may be partial;
//! its tiles keep the column width of the full rows and stay left-aligned.
//!
//! ```text
//! 8 tiles, landscape:
//! +----+----+----+
//! | T0 | T1 | T2 |
//! +----+----+----+
//! | T3 | T4 | T5 |
//! +----+----+----+
//! | T6 | T7 |
//! +----+----+
//! ```

use serde::Serialize;

use super::geometry::{ContainerGeometry, TileRect};
use super::mode::LayoutMode;
use super::spacing::Spacing;
use super::Tiles;

/// Largest count a named grid mode is selected for.
const NAMED_GRID_MAX: usize = 6;

/// Column and row counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridShape {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl GridShape {
    /// Creates a new grid shape.
    #[must_use]
    pub const fn new(cols: usize, rows: usize) -> Self { Self { cols, rows } }

    /// Near-square grid for `count` tiles.
    ///
    /// Uses integer arithmetic so the result never depends on floating-point
    /// rounding of the square root.
    #[must_use]
    pub const fn auto(count: usize) -> Self {
        let count = if count == 0 { 1 } else { count };
        let mut cols = count.isqrt();
        if cols * cols < count {
            cols += 1;
        }
        Self::new(cols, count.div_ceil(cols))
    }

    /// Number of cells in the grid.
    #[must_use]
    pub const fn capacity(&self) -> usize { self.cols * self.rows }
}

/// Resolves the grid shape used for `count` tiles under `mode`.
///
/// Non-grid modes resolve to the auto grid; this is the shape the engine
/// falls back to when a dual mode is asked for anything other than 2 tiles.
#[must_use]
pub fn grid_shape(mode: LayoutMode, count: usize, is_landscape: bool) -> GridShape {
    if count > NAMED_GRID_MAX {
        return GridShape::auto(count);
    }

    let named = match mode {
        LayoutMode::Grid2x2 => GridShape::new(2, 2),
        LayoutMode::Grid3x2 if is_landscape => GridShape::new(3, 2),
        LayoutMode::Grid3x2 => GridShape::new(2, 3),
        LayoutMode::GridAuto
        | LayoutMode::Single
        | LayoutMode::DualVertical
        | LayoutMode::DualHorizontal => return GridShape::auto(count),
    };

    if named.capacity() < count { GridShape::auto(count) } else { named }
}

/// Grid layout - `count` equal tiles in rows and columns.
///
/// # Arguments
///
/// * `count` - Number of tiles to place
/// * `shape` - Column and row counts (must hold at least `count` cells)
/// * `geometry` - Size of the hosting container
/// * `spacing` - Gap and padding values
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn layout(
    count: usize,
    shape: GridShape,
    geometry: &ContainerGeometry,
    spacing: &Spacing,
) -> Tiles {
    if count == 0 {
        return Tiles::new();
    }

    let (avail_width, avail_height) = spacing.available(geometry);
    let gap = spacing.gap;

    // Calculate cell dimensions
    let h_gaps_total = gap * (shape.cols - 1) as f64;
    let v_gaps_total = gap * (shape.rows - 1) as f64;
    let cell_width = (avail_width - h_gaps_total) / shape.cols as f64;
    let cell_height = (avail_height - v_gaps_total) / shape.rows as f64;

    // Each position is derived from its own row/column index, so no error
    // accumulates across the row.
    (0..count)
        .map(|idx| {
            let row = idx / shape.cols;
            let col = idx % shape.cols;
            let left = (col as f64).mul_add(cell_width + gap, spacing.padding);
            let top = (row as f64).mul_add(cell_height + gap, spacing.padding);
            TileRect::new(left, top, cell_width, cell_height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_frame() -> ContainerGeometry { ContainerGeometry::new(800.0, 600.0) }

    // ========================================================================
    // Shape Tests
    // ========================================================================

    #[test]
    fn test_auto_shape() {
        assert_eq!(GridShape::auto(1), GridShape::new(1, 1));
        assert_eq!(GridShape::auto(7), GridShape::new(3, 3));
        assert_eq!(GridShape::auto(8), GridShape::new(3, 3));
        assert_eq!(GridShape::auto(9), GridShape::new(3, 3));
        assert_eq!(GridShape::auto(10), GridShape::new(4, 3));
        assert_eq!(GridShape::auto(12), GridShape::new(4, 3));
        assert_eq!(GridShape::auto(17), GridShape::new(5, 4));
    }

    #[test]
    fn test_auto_shape_zero_is_one_cell() {
        assert_eq!(GridShape::auto(0), GridShape::new(1, 1));
    }

    #[test]
    fn test_named_shapes() {
        assert_eq!(grid_shape(LayoutMode::Grid2x2, 3, true), GridShape::new(2, 2));
        assert_eq!(grid_shape(LayoutMode::Grid2x2, 4, false), GridShape::new(2, 2));
        assert_eq!(grid_shape(LayoutMode::Grid3x2, 5, true), GridShape::new(3, 2));
        assert_eq!(grid_shape(LayoutMode::Grid3x2, 6, false), GridShape::new(2, 3));
    }

    #[test]
    fn test_more_than_six_overrides_named_grid() {
        // 7 tiles would not fit the 3×2 cells of the named grid
        assert_eq!(grid_shape(LayoutMode::Grid3x2, 7, true), GridShape::new(3, 3));
        assert_eq!(grid_shape(LayoutMode::Grid3x2, 7, false), GridShape::new(3, 3));
        assert_eq!(grid_shape(LayoutMode::Grid2x2, 8, true), GridShape::new(3, 3));
    }

    #[test]
    fn test_undersized_named_grid_falls_back() {
        assert_eq!(grid_shape(LayoutMode::Grid2x2, 5, true), GridShape::new(3, 2));
        assert_eq!(grid_shape(LayoutMode::Grid2x2, 6, false), GridShape::new(3, 2));
    }

    #[test]
    fn test_non_grid_modes_use_auto_shape() {
        assert_eq!(grid_shape(LayoutMode::DualHorizontal, 3, true), GridShape::new(2, 2));
        assert_eq!(grid_shape(LayoutMode::Single, 1, true), GridShape::new(1, 1));
    }

    // ========================================================================
    // Layout Tests
    // ========================================================================

    #[test]
    fn test_layout_empty() {
        let result = layout(0, GridShape::new(2, 2), &screen_frame(), &Spacing::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_layout_2x2() {
        let result = layout(4, GridShape::new(2, 2), &screen_frame(), &Spacing::default());

        // (784 - 8) / 2 = 388, (584 - 8) / 2 = 288
        assert_eq!(result.len(), 4);
        assert_eq!(result[0], TileRect::new(8.0, 8.0, 388.0, 288.0));
        assert_eq!(result[1], TileRect::new(404.0, 8.0, 388.0, 288.0));
        assert_eq!(result[2], TileRect::new(8.0, 304.0, 388.0, 288.0));
        assert_eq!(result[3], TileRect::new(404.0, 304.0, 388.0, 288.0));
    }

    #[test]
    fn test_layout_partial_last_row_is_left_aligned() {
        let result = layout(8, GridShape::new(3, 3), &screen_frame(), &Spacing::default());

        assert_eq!(result.len(), 8);
        assert_eq!(result[6].left, 8.0);
        assert_eq!(result[6].top, result[7].top);
        assert_eq!(result[7].left, result[1].left);
        assert!(result[6].top > result[3].top);
    }

    #[test]
    fn test_layout_tiles_fill_padded_box() {
        let frame = screen_frame();
        let spacing = Spacing::default();
        let result = layout(6, GridShape::new(3, 2), &frame, &spacing);

        let last = result[5];
        assert!((last.right() - (frame.width - spacing.padding)).abs() < 1e-9);
        assert!((last.bottom() - (frame.height - spacing.padding)).abs() < 1e-9);
    }

    #[test]
    fn test_layout_no_spacing() {
        let result = layout(4, GridShape::new(2, 2), &screen_frame(), &Spacing::none());

        assert_eq!(result[0], TileRect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(result[3], TileRect::new(400.0, 300.0, 400.0, 300.0));
    }
}
