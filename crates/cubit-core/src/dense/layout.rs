//! Bulk import and export between flat sequences and the native layout
//!
//! A flat sequence is either in native order (a straight copy of the buffer)
//! or in row-major C order, where element `(c, r, k)` sits at
//! `c * rows * cols + r * cols + k`. A row-major `rows x cols` block is the
//! transpose of a native `cols x rows` block, so converting between the two
//! orders is a per-channel transpose.

use super::types::{allocate, canonical_dims, checked_len, Tensor};
use crate::error::{Result, TensorError};
use crate::types::Order;
use crate::Element;
use scirs2_core::ndarray::ShapeBuilder;
use scirs2_core::ndarray_ext::{Array3, ArrayView2, Axis};
use tracing::trace;

/// Write row-major `values` into every channel plane of `data`.
///
/// `values.len()` must equal `data.len()`; callers check this first.
pub(crate) fn import_row_major<T: Element>(data: &mut Array3<T>, values: &[T]) -> Result<()> {
    let (rows, cols, _) = data.dim();
    let plane = rows * cols;
    if plane == 0 {
        return Ok(());
    }
    for (mut target, block) in data.axis_iter_mut(Axis(2)).zip(values.chunks_exact(plane)) {
        // C-ordered view of the block; assigning it into the column-major plane transposes it
        let block = ArrayView2::from_shape((rows, cols), block)?;
        target.assign(&block);
    }
    Ok(())
}

/// Read every channel plane of `data` in row-major order, planes concatenated.
pub(crate) fn export_row_major<T: Element>(data: &Array3<T>) -> Vec<T> {
    let mut values = Vec::with_capacity(data.len());
    for plane in data.axis_iter(Axis(2)) {
        values.extend(plane.iter().copied());
    }
    values
}

impl<T: Element> Tensor<T> {
    /// Fill the tensor from a flat sequence
    ///
    /// # Arguments
    ///
    /// * `values` - Exactly `size()` elements
    /// * `order` - How `values` is laid out: [`Order::RowMajor`] for C order,
    ///   [`Order::ColMajor`] for a straight copy into native order
    ///
    /// # Errors
    ///
    /// [`TensorError::Empty`] on an empty tensor and
    /// [`TensorError::SizeMismatch`] when the length differs from `size()`.
    /// The buffer is untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::<f32>::new(2, 2, 3);
    /// let values: Vec<f32> = (0..12).map(|x| x as f32).collect();
    /// tensor.fill_values(&values, Order::RowMajor).unwrap();
    ///
    /// // c * 6 + r * 3 + k
    /// assert_eq!(tensor.at(1, 1, 0).unwrap(), 9.0);
    /// assert_eq!(tensor.values(Order::RowMajor).unwrap(), values);
    /// ```
    pub fn fill_values(&mut self, values: &[T], order: Order) -> Result<()> {
        self.ensure_allocated()?;
        let expected = self.data.len();
        if values.len() != expected {
            return Err(TensorError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        trace!(len = expected, ?order, "importing tensor values");
        match order {
            Order::RowMajor => import_row_major(&mut self.data, values),
            Order::ColMajor => {
                self.buffer_mut()?.copy_from_slice(values);
                Ok(())
            }
        }
    }

    /// Export all elements as a flat sequence
    ///
    /// The inverse of [`Tensor::fill_values`]: filling a tensor with its own
    /// export in the same order leaves every element bit-for-bit unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::<f32>::new_2d(2, 2);
    /// tensor.fill_values(&[1.0, 2.0, 3.0, 4.0], Order::RowMajor).unwrap();
    ///
    /// assert_eq!(tensor.values(Order::RowMajor).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(tensor.values(Order::ColMajor).unwrap(), vec![1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn values(&self, order: Order) -> Result<Vec<T>> {
        self.ensure_allocated()?;
        trace!(len = self.data.len(), ?order, "exporting tensor values");
        match order {
            Order::RowMajor => Ok(export_row_major(&self.data)),
            Order::ColMajor => Ok(self.buffer()?.to_vec()),
        }
    }

    /// Create a tensor of the given logical shape filled from `values`
    ///
    /// Shorthand for [`Tensor::from_shape`] followed by
    /// [`Tensor::fill_values`].
    pub fn from_values(shape: &[usize], values: &[T], order: Order) -> Result<Self> {
        let [channels, rows, cols] = canonical_dims(shape)?;
        let expected = checked_len::<T>([channels, rows, cols])?;
        if values.len() != expected {
            return Err(TensorError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        let data = match order {
            Order::RowMajor => {
                let mut data = allocate(rows, cols, channels);
                import_row_major(&mut data, values)?;
                data
            }
            Order::ColMajor => Array3::from_shape_vec((rows, cols, channels).f(), values.to_vec())?,
        };
        Ok(Self {
            data,
            raw_shape: shape.iter().copied().collect(),
        })
    }
}
