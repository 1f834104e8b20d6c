//! Tensor operations at a glance.
//!
//! All operations are methods on [`Tensor`](crate::Tensor). Fallible ones
//! return [`Result`](crate::Result) and leave the tensor untouched on error.
//!
//! # Shape Queries
//!
//! - [`rows`](crate::Tensor::rows), [`cols`](crate::Tensor::cols),
//!   [`channels`](crate::Tensor::channels), [`size`](crate::Tensor::size)
//! - [`shapes`](crate::Tensor::shapes): canonical `[channels, rows, cols]`
//! - [`raw_shapes`](crate::Tensor::raw_shapes): logical shape as supplied
//!
//! # Access
//!
//! - [`index`](crate::Tensor::index) / [`index_mut`](crate::Tensor::index_mut):
//!   linear offset in native order
//! - [`at`](crate::Tensor::at) / [`at_mut`](crate::Tensor::at_mut):
//!   `(channel, row, col)`
//! - [`slice`](crate::Tensor::slice) / [`slice_mut`](crate::Tensor::slice_mut):
//!   one channel plane
//! - [`raw_ptr`](crate::Tensor::raw_ptr), [`raw_ptr_at`](crate::Tensor::raw_ptr_at),
//!   [`matrix_raw_ptr`](crate::Tensor::matrix_raw_ptr): zero-copy handoff
//! - [`set_data`](crate::Tensor::set_data): same-shape buffer replacement
//!
//! # Bulk Exchange
//!
//! - [`fill_values`](crate::Tensor::fill_values) / [`values`](crate::Tensor::values)
//!   with [`Order::RowMajor`](crate::Order::RowMajor) or
//!   [`Order::ColMajor`](crate::Order::ColMajor)
//!
//! # Shape Mutation
//!
//! - [`reshape`](crate::Tensor::reshape), [`flatten`](crate::Tensor::flatten)
//! - [`padding`](crate::Tensor::padding): `[top, bottom, left, right]` border
//!
//! # Initialization
//!
//! - [`fill`](crate::Tensor::fill), [`ones`](crate::Tensor::ones)
//! - [`rand_u`](crate::Tensor::rand_u), [`rand_n`](crate::Tensor::rand_n)
//! - [`transform`](crate::Tensor::transform)
//!
//! # Examples
//!
//! ```
//! use cubit_core::{Order, Tensor};
//!
//! // Row-major reshape keeps every element's C-order position
//! let values: Vec<f32> = (0..24).map(|x| x as f32).collect();
//! let mut tensor = Tensor::from_values(&[2, 3, 4], &values, Order::RowMajor).unwrap();
//! tensor.reshape(&[24], Order::RowMajor).unwrap();
//! assert_eq!(tensor.values(Order::RowMajor).unwrap(), values);
//!
//! // Pad a feature map before a convolution
//! let mut fmap = Tensor::<f32>::new(3, 8, 8);
//! fmap.ones().unwrap();
//! fmap.padding(&[1, 1, 1, 1], 0.0).unwrap();
//! assert_eq!(fmap.shapes().unwrap(), [3, 10, 10]);
//! ```
