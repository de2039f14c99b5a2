//! Single-entry memo for layout results.
//!
//! Resize observers fire far more often than the layout actually changes, so
//! the session keeps the last result and reuses it while the inputs match.

use crate::layout::{ContainerGeometry, LayoutResult, Orientation, Spacing, solve_count};

/// The exact inputs a layout was computed from.
///
/// Floats are stored as bit patterns so that equality is exact and `NaN`
/// inputs still compare equal to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    count: usize,
    width: u64,
    height: u64,
    orientation: Orientation,
    spacing: (u64, u64),
}

impl LayoutKey {
    /// Builds the key for a layout request.
    #[must_use]
    pub fn new(count: usize, geometry: &ContainerGeometry, spacing: &Spacing) -> Self {
        Self {
            count,
            width: geometry.width.to_bits(),
            height: geometry.height.to_bits(),
            orientation: geometry.orientation(),
            spacing: spacing.to_bits(),
        }
    }
}

/// Cache of the most recent layout computation.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutKey, LayoutResult)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Creates a new empty layout cache.
    #[must_use]
    pub const fn new() -> Self { Self { entry: None, hits: 0, misses: 0 } }

    /// Returns the layout for the inputs, computing it on a miss.
    pub fn get_or_compute(
        &mut self,
        count: usize,
        geometry: &ContainerGeometry,
        spacing: &Spacing,
    ) -> &LayoutResult {
        let key = LayoutKey::new(count, geometry, spacing);

        let entry = match self.entry.take() {
            Some(entry) if entry.0 == key => {
                self.hits += 1;
                tracing::trace!(count, "layout cache hit");
                entry
            }
            _ => {
                self.misses += 1;
                (key, solve_count(count, geometry, spacing))
            }
        };

        &self.entry.insert(entry).1
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 { self.hits }

    /// Number of lookups that required a recomputation.
    #[must_use]
    pub const fn misses(&self) -> u64 { self.misses }
}
