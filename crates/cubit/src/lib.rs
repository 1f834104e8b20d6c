//! # Cubit - Dense 3D Tensors for Inference Pipelines
//!
//! This is the **meta crate** that re-exports the cubit components for
//! convenient access. The tensor itself lives in [`core`].
//!
//! ## Quick Start
//!
//! ```
//! use cubit::prelude::*;
//!
//! // Weights arrive in C order from a model file
//! let weights: Vec<f32> = (0..12).map(|x| x as f32).collect();
//! let mut tensor = Tensor::from_values(&[3, 4], &weights, Order::RowMajor)?;
//! assert_eq!(tensor.shapes()?, [1, 3, 4]);
//!
//! tensor.padding(&[1, 1, 1, 1], 0.0)?;
//! assert_eq!(tensor.shapes()?, [1, 5, 6]);
//! assert_eq!(tensor.at(0, 1, 1)?, weights[0]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Operations ([`core`])
//!
//! Channel-major 3D container with a column-major buffer, row-major
//! import/export, reshape, flatten, padding, random fills and copy-on-write
//! handles.
//!
//! ```
//! use cubit::core::{FTensor, Order};
//!
//! let mut tensor = FTensor::new(2, 3, 4);
//! tensor.flatten(Order::RowMajor).unwrap();
//! assert_eq!(tensor.raw_shapes().unwrap(), &[24]);
//! ```
//!
//! ## Features
//!
//! - `logging` (default): Enable [`core::logging::init_logging`] backed by
//!   `tracing-subscriber`

pub use cubit_core as core;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use cubit::prelude::*;
    //!
    //! let tensor = FTensor::new(3, 32, 32);
    //! assert_eq!(tensor.size().unwrap(), 3 * 32 * 32);
    //! ```

    // Tensor types
    pub use crate::core::{
        FTensor, SharedFTensor, SharedU1Tensor, Tensor, TensorHandle, TensorView, U1Tensor,
    };

    // Layout and errors
    pub use crate::core::{Element, Order, Result, TensorError};
}
