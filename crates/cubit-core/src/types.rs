//! Core type definitions shared across the crate.
//!
//! - Element ordering selector ([`Order`]) for bulk import, export and reshape
//! - Logical shape storage ([`RawShape`])
//! - Element-specific aliases for the tensors and handles passed between layers
//!
//! # Examples
//!
//! ```
//! use cubit_core::{FTensor, Order};
//!
//! let mut tensor = FTensor::new(2, 2, 3);
//! tensor.fill_values(&(0..12).map(|x| x as f32).collect::<Vec<_>>(), Order::RowMajor).unwrap();
//! assert_eq!(tensor.at(1, 0, 2).unwrap(), 8.0);
//! ```

use smallvec::SmallVec;

pub use crate::dense::Tensor;
pub use crate::handle::{TensorHandle, TensorView};

/// Element ordering of a flat sequence exchanged with a tensor.
///
/// For a tensor with canonical shape `(channels, rows, cols)`:
///
/// - `RowMajor`: element `(c, r, k)` sits at `c * rows * cols + r * cols + k`
///   (C order, the layout row-major frameworks expect).
/// - `ColMajor`: the tensor's own memory order, column-major inside each
///   channel plane with planes stored one after another, so element
///   `(c, r, k)` sits at `c * rows * cols + k * rows + r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// External C order (last axis varies fastest)
    RowMajor,
    /// Native per-channel column-major order
    ColMajor,
}

impl Order {
    /// Whether this selects C order
    pub fn is_row_major(self) -> bool {
        matches!(self, Order::RowMajor)
    }
}

impl From<bool> for Order {
    /// `true` selects [`Order::RowMajor`], `false` selects [`Order::ColMajor`].
    fn from(row_major: bool) -> Self {
        if row_major {
            Order::RowMajor
        } else {
            Order::ColMajor
        }
    }
}

/// Logical shape as supplied by callers: one to three extents.
pub type RawShape = SmallVec<[usize; 3]>;

/// Single-precision tensor, the type most layers exchange.
pub type FTensor = Tensor<f32>;

/// Byte tensor used for masks and quantized inputs.
pub type U1Tensor = Tensor<u8>;

/// Shared handle over an [`FTensor`].
pub type SharedFTensor = TensorHandle<f32>;

/// Shared handle over a [`U1Tensor`].
pub type SharedU1Tensor = TensorHandle<u8>;
