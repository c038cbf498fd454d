use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("bitmap holds {actual} cells, expected {expected}")]
    BitmapSizeMismatch { expected: usize, actual: usize },

    #[error("no saved state to load")]
    NoSavedState,

    /// Auto-advance bounds that can't hold any interval, or a zero step.
    #[error("invalid auto-advance interval range {min:?}..={max:?}")]
    InvalidIntervalRange { min: Duration, max: Duration },
}
