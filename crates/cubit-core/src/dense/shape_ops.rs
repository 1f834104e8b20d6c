//! Shape-changing operations that conserve the element count
//!
//! Both operations build the replacement buffer completely before swapping
//! it in, together with the new logical shape.

use super::layout::{export_row_major, import_row_major};
use super::types::{allocate, canonical_dims, checked_len, Tensor};
use crate::error::{Result, TensorError};
use crate::types::Order;
use crate::Element;
use scirs2_core::ndarray::ShapeBuilder;
use scirs2_core::ndarray_ext::Array3;
use tracing::debug;

impl<T: Element> Tensor<T> {
    /// Reshape the tensor in place
    ///
    /// # Arguments
    ///
    /// * `shape` - New logical shape with one to three extents whose product
    ///   equals `size()`
    /// * `order` - [`Order::RowMajor`] keeps the C-order position of every
    ///   element (the behavior row-major frameworks expect);
    ///   [`Order::ColMajor`] reinterprets the native buffer under the new
    ///   dimensions without moving data
    ///
    /// # Errors
    ///
    /// [`TensorError::Empty`], [`TensorError::InvalidRank`],
    /// [`TensorError::InvalidArgument`] when the target element count
    /// overflows, or [`TensorError::SizeMismatch`]; the tensor is unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let values: Vec<f32> = (0..24).map(|x| x as f32).collect();
    /// let mut tensor = Tensor::from_values(&[2, 3, 4], &values, Order::RowMajor).unwrap();
    ///
    /// tensor.reshape(&[4, 6], Order::RowMajor).unwrap();
    /// assert_eq!(tensor.shapes().unwrap(), [1, 4, 6]);
    /// assert_eq!(tensor.values(Order::RowMajor).unwrap(), values);
    ///
    /// assert!(tensor.reshape(&[5, 5], Order::RowMajor).is_err());
    /// ```
    pub fn reshape(&mut self, shape: &[usize], order: Order) -> Result<()> {
        self.ensure_allocated()?;
        let [channels, rows, cols] = canonical_dims(shape)?;
        let expected = self.data.len();
        let actual = checked_len::<T>([channels, rows, cols])?;
        if actual != expected {
            return Err(TensorError::SizeMismatch { expected, actual });
        }

        let data = match order {
            Order::RowMajor => {
                let values = export_row_major(&self.data);
                let mut data = allocate(rows, cols, channels);
                import_row_major(&mut data, &values)?;
                data
            }
            Order::ColMajor => {
                Array3::from_shape_vec((rows, cols, channels).f(), self.buffer()?.to_vec())?
            }
        };

        debug!(
            from = ?self.raw_shape.as_slice(),
            to = ?shape,
            ?order,
            "reshaped tensor"
        );
        self.data = data;
        self.raw_shape = shape.iter().copied().collect();
        Ok(())
    }

    /// Collapse the tensor into a vector of `size()` elements
    ///
    /// Equivalent to `reshape(&[size], order)`.
    pub fn flatten(&mut self, order: Order) -> Result<()> {
        let size = self.size()?;
        self.reshape(&[size], order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota_tensor(shape: &[usize], order: Order) -> Tensor<f32> {
        let n: usize = shape.iter().product();
        let values: Vec<f32> = (0..n).map(|x| x as f32).collect();
        Tensor::from_values(shape, &values, order).unwrap()
    }

    #[test]
    fn test_row_major_reshape_to_vector() {
        let mut tensor = iota_tensor(&[2, 3, 4], Order::RowMajor);
        tensor.reshape(&[24], Order::RowMajor).unwrap();

        assert_eq!(tensor.raw_shapes().unwrap(), &[24]);
        assert_eq!(tensor.shapes().unwrap(), [1, 1, 24]);
        let expected: Vec<f32> = (0..24).map(|x| x as f32).collect();
        assert_eq!(tensor.values(Order::RowMajor).unwrap(), expected);
        assert_eq!(tensor.at(0, 0, 13).unwrap(), 13.0);
    }

    #[test]
    fn test_row_major_reshape_keeps_element_identity() {
        let mut tensor = iota_tensor(&[4, 6], Order::RowMajor);
        tensor.reshape(&[3, 2, 4], Order::RowMajor).unwrap();
        // element 17 of C order: c = 2, r = 0, k = 1
        assert_eq!(tensor.at(2, 0, 1).unwrap(), 17.0);
        assert_eq!(tensor.raw_shapes().unwrap(), &[3, 2, 4]);
    }

    #[test]
    fn test_col_major_reshape_keeps_native_buffer() {
        let mut tensor = iota_tensor(&[2, 3, 4], Order::ColMajor);
        let native = tensor.values(Order::ColMajor).unwrap();

        tensor.reshape(&[6, 4], Order::ColMajor).unwrap();
        assert_eq!(tensor.shapes().unwrap(), [1, 6, 4]);
        assert_eq!(tensor.values(Order::ColMajor).unwrap(), native);
        // native offset = k * rows + r
        assert_eq!(tensor.at(0, 5, 3).unwrap(), 23.0);
    }

    #[test]
    fn test_reshape_rejects_mismatched_size() {
        let mut tensor = iota_tensor(&[3, 4], Order::RowMajor);
        let before = tensor.clone();
        assert!(matches!(
            tensor.reshape(&[5, 3], Order::RowMajor),
            Err(TensorError::SizeMismatch {
                expected: 12,
                actual: 15
            })
        ));
        assert_eq!(tensor, before);
    }

    #[test]
    fn test_reshape_rejects_overflowing_target() {
        let mut tensor = iota_tensor(&[3, 4], Order::RowMajor);
        let before = tensor.clone();
        // the product wraps to 12 in modular arithmetic
        for order in [Order::RowMajor, Order::ColMajor] {
            assert!(matches!(
                tensor.reshape(&[usize::MAX / 2 + 7, 2], order),
                Err(TensorError::InvalidArgument(_))
            ));
            assert!(matches!(
                tensor.reshape(&[usize::MAX, 2, 2], order),
                Err(TensorError::InvalidArgument(_))
            ));
        }
        assert_eq!(tensor, before);
    }

    #[test]
    fn test_reshape_rejects_bad_rank() {
        let mut tensor = iota_tensor(&[2, 3, 4], Order::RowMajor);
        assert!(matches!(
            tensor.reshape(&[], Order::ColMajor),
            Err(TensorError::InvalidRank(0))
        ));
        assert!(matches!(
            tensor.reshape(&[1, 2, 3, 4], Order::ColMajor),
            Err(TensorError::InvalidRank(4))
        ));
        assert_eq!(tensor.raw_shapes().unwrap(), &[2, 3, 4]);
    }

    #[test]
    fn test_reshape_empty_fails() {
        let mut tensor = Tensor::<f32>::default();
        assert!(matches!(
            tensor.reshape(&[1], Order::RowMajor),
            Err(TensorError::Empty)
        ));
        assert!(matches!(tensor.flatten(Order::RowMajor), Err(TensorError::Empty)));
    }

    #[test]
    fn test_flatten_matches_reshape() {
        for order in [Order::RowMajor, Order::ColMajor] {
            let mut flattened = iota_tensor(&[2, 3, 4], Order::RowMajor);
            let mut reshaped = flattened.clone();
            flattened.flatten(order).unwrap();
            reshaped.reshape(&[24], order).unwrap();
            assert_eq!(flattened, reshaped);
            assert_eq!(flattened.raw_shapes().unwrap(), &[24]);
        }
    }
}
