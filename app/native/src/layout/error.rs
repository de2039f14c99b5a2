//! Error types for the layout engine.
//!
//! The engine has a single failure mode: a negative participant count. Bad
//! geometry is never an error; sanitizing container sizes is the caller's job.

use thiserror::Error;

/// Result type alias for layout operations.
pub type EngineResult<T> = Result<T, LayoutError>;

/// Errors that can occur while computing a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The participant count was negative.
    ///
    /// Clamping would silently break the one-tile-per-participant guarantee,
    /// so the value is rejected instead.
    #[error("invalid argument: participant count must be non-negative, got {count}")]
    InvalidArgument {
        /// The rejected count.
        count: i64,
    },
}

/// Converts a signed participant count into a usable one.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidArgument`] if `count` is negative.
pub fn checked_count(count: i64) -> EngineResult<usize> {
    usize::try_from(count).map_err(|_| LayoutError::InvalidArgument { count })
}
