//! # cubit-core
//!
//! Fixed-rank dense tensor container for neural-network inference.
//!
//! A [`Tensor`] holds up to three dimensions, `channels x rows x cols`, and is
//! the unit layers and operators exchange. This crate provides:
//!
//! - **Shape normalization**: any 1-3 extent logical shape maps onto the
//!   canonical `(channels, rows, cols)` triple by left-padding with ones
//! - **Bounds-checked access** to elements, channel planes and the raw buffer
//! - **Layout conversion** between the native per-channel column-major buffer
//!   and row-major (C order) sequences used by external frameworks
//! - **Shape mutation**: reshape, flatten and padding
//! - **Ownership handles** ([`TensorHandle`], [`TensorView`]) for passing
//!   tensors between pipeline stages
//!
//! ## Memory Layout
//!
//! The buffer is one `Array3` from `scirs2_core::ndarray_ext` with axes
//! `(rows, cols, channels)` in column-major order: inside a channel plane
//! the row index varies fastest, and planes are stored one after another.
//! Linear offsets ([`Tensor::index`], [`Tensor::raw_ptr_at`]) address this
//! native order.
//!
//! ## Quick Start
//!
//! ```
//! use cubit_core::{Order, Tensor};
//!
//! // A vector, a matrix and a volume
//! let vector = Tensor::<f32>::from_shape(&[10]).unwrap();
//! assert_eq!(vector.shapes().unwrap(), [1, 1, 10]);
//!
//! let matrix = Tensor::<f32>::from_shape(&[4, 5]).unwrap();
//! assert_eq!(matrix.shapes().unwrap(), [1, 4, 5]);
//!
//! // Import weights laid out in C order
//! let weights: Vec<f32> = (0..24).map(|x| x as f32).collect();
//! let mut volume = Tensor::<f32>::from_shape(&[2, 3, 4]).unwrap();
//! volume.fill_values(&weights, Order::RowMajor).unwrap();
//! assert_eq!(volume.at(1, 2, 3).unwrap(), 23.0);
//!
//! // Flatten keeping C-order element positions
//! volume.flatten(Order::RowMajor).unwrap();
//! assert_eq!(volume.values(Order::RowMajor).unwrap(), weights);
//! ```
//!
//! ## Error Handling
//!
//! Every contract violation is reported as a [`TensorError`] before the
//! tensor is modified:
//!
//! ```
//! use cubit_core::{Order, Tensor, TensorError};
//!
//! let mut tensor = Tensor::<f32>::new(1, 3, 4);
//! let result = tensor.reshape(&[5, 3], Order::RowMajor);
//! assert!(matches!(result, Err(TensorError::SizeMismatch { expected: 12, actual: 15 })));
//! assert_eq!(tensor.shapes().unwrap(), [1, 3, 4]);
//! ```
//!
//! ## Features
//!
//! - `logging` (default): [`logging::init_logging`] installs a
//!   `tracing-subscriber` registry

pub mod dense;
pub mod element;
pub mod error;
pub mod handle;
pub mod logging;
pub mod ops;
pub mod types;


pub use element::Element;
pub use error::{Result, TensorError};
pub use types::{
    FTensor, Order, RawShape, SharedFTensor, SharedU1Tensor, Tensor, TensorHandle, TensorView,
    U1Tensor,
};
