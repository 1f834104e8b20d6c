//! Error type shared by every tensor operation.
//!
//! Each variant corresponds to one class of contract violation. Operations
//! report the violation before touching the buffer, so a tensor that returned
//! an error is left exactly as it was.

use scirs2_core::ndarray::ShapeError;
use thiserror::Error;

/// Result alias used throughout `cubit-core`.
pub type Result<T> = std::result::Result<T, TensorError>;

#[derive(Error, Debug)]
pub enum TensorError {
    /// The tensor has no allocated buffer.
    #[error("tensor is empty")]
    Empty,

    /// An index or coordinate is outside its axis extent.
    #[error("{axis} index {index} out of bounds (extent {extent})")]
    OutOfBounds {
        axis: &'static str,
        index: usize,
        extent: usize,
    },

    /// A shape list with zero or more than three dimensions.
    #[error("shape must have between 1 and 3 dimensions, got {0}")]
    InvalidRank(usize),

    /// A flat payload or reshape target whose element count differs from the buffer.
    #[error("element count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A replacement buffer whose `(rows, cols, channels)` differ from the current ones.
    #[error("dimension mismatch: expected (rows, cols, channels) {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised by the array primitive when a buffer cannot take the requested layout.
    #[error("layout error: {0}")]
    Layout(#[from] ShapeError),
}

impl TensorError {
    pub(crate) fn out_of_bounds(axis: &'static str, index: usize, extent: usize) -> Self {
        Self::OutOfBounds {
            axis,
            index,
            extent,
        }
    }
}
