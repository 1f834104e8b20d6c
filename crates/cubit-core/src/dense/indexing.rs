//! Bounds-checked element, plane and buffer access
//!
//! Every accessor checks its arguments against the current physical
//! dimensions and reports [`TensorError::OutOfBounds`] instead of panicking.
//! Linear offsets address the native memory order.

use super::types::Tensor;
use crate::error::{Result, TensorError};
use crate::Element;
use scirs2_core::ndarray::{ErrorKind, ShapeBuilder, ShapeError};
use scirs2_core::ndarray_ext::{Array3, ArrayView2, ArrayViewMut2, Axis};
use tracing::debug;

impl<T: Element> Tensor<T> {
    /// Contiguous buffer in native order
    pub(crate) fn buffer(&self) -> Result<&[T]> {
        self.ensure_allocated()?;
        self.data
            .as_slice_memory_order()
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::IncompatibleLayout).into())
    }

    pub(crate) fn buffer_mut(&mut self) -> Result<&mut [T]> {
        self.ensure_allocated()?;
        self.data
            .as_slice_memory_order_mut()
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::IncompatibleLayout).into())
    }

    fn check_coords(&self, channel: usize, row: usize, col: usize) -> Result<()> {
        self.ensure_allocated()?;
        let (rows, cols, channels) = self.data.dim();
        if channel >= channels {
            return Err(TensorError::out_of_bounds("channel", channel, channels));
        }
        if row >= rows {
            return Err(TensorError::out_of_bounds("row", row, rows));
        }
        if col >= cols {
            return Err(TensorError::out_of_bounds("col", col, cols));
        }
        Ok(())
    }

    /// Element at a linear offset in native order
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::<f32>::new_2d(2, 2);
    /// tensor.fill_values(&[1.0, 2.0, 3.0, 4.0], Order::RowMajor).unwrap();
    ///
    /// // Native order walks down each column first
    /// assert_eq!(tensor.index(1).unwrap(), 3.0);
    /// assert!(tensor.index(4).is_err());
    /// ```
    pub fn index(&self, offset: usize) -> Result<T> {
        let buffer = self.buffer()?;
        buffer
            .get(offset)
            .copied()
            .ok_or_else(|| TensorError::out_of_bounds("offset", offset, buffer.len()))
    }

    /// Mutable element at a linear offset in native order
    pub fn index_mut(&mut self, offset: usize) -> Result<&mut T> {
        let buffer = self.buffer_mut()?;
        let len = buffer.len();
        buffer
            .get_mut(offset)
            .ok_or_else(|| TensorError::out_of_bounds("offset", offset, len))
    }

    /// Element at `(channel, row, col)`
    ///
    /// Each coordinate is checked against its own axis extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f32>::new(2, 3, 4);
    /// *tensor.at_mut(1, 2, 3).unwrap() = 7.0;
    /// assert_eq!(tensor.at(1, 2, 3).unwrap(), 7.0);
    /// assert!(tensor.at(2, 0, 0).is_err());
    /// ```
    pub fn at(&self, channel: usize, row: usize, col: usize) -> Result<T> {
        self.check_coords(channel, row, col)?;
        Ok(self.data[[row, col, channel]])
    }

    /// Mutable element at `(channel, row, col)`
    pub fn at_mut(&mut self, channel: usize, row: usize, col: usize) -> Result<&mut T> {
        self.check_coords(channel, row, col)?;
        Ok(&mut self.data[[row, col, channel]])
    }

    /// The `rows x cols` plane of one channel
    pub fn slice(&self, channel: usize) -> Result<ArrayView2<'_, T>> {
        let channels = self.channels()?;
        if channel >= channels {
            return Err(TensorError::out_of_bounds("channel", channel, channels));
        }
        Ok(self.data.index_axis(Axis(2), channel))
    }

    /// Mutable `rows x cols` plane of one channel
    pub fn slice_mut(&mut self, channel: usize) -> Result<ArrayViewMut2<'_, T>> {
        let channels = self.channels()?;
        if channel >= channels {
            return Err(TensorError::out_of_bounds("channel", channel, channels));
        }
        Ok(self.data.index_axis_mut(Axis(2), channel))
    }

    /// Whole buffer in native order
    pub fn as_slice(&self) -> Result<&[T]> {
        self.buffer()
    }

    /// Whole mutable buffer in native order
    pub fn as_slice_mut(&mut self) -> Result<&mut [T]> {
        self.buffer_mut()
    }

    /// Contiguous native-order storage of one channel plane
    pub fn matrix_slice(&self, channel: usize) -> Result<&[T]> {
        let channels = self.channels()?;
        if channel >= channels {
            return Err(TensorError::out_of_bounds("channel", channel, channels));
        }
        let plane = self.data.dim().0 * self.data.dim().1;
        let start = channel * plane;
        Ok(&self.buffer()?[start..start + plane])
    }

    /// Pointer to the first element of the buffer
    ///
    /// The pointer stays valid until the next operation that replaces the
    /// buffer (`reshape`, `flatten`, `padding` or `set_data`).
    pub fn raw_ptr(&mut self) -> Result<*mut T> {
        Ok(self.buffer_mut()?.as_mut_ptr())
    }

    /// Pointer to the element at a linear native offset
    pub fn raw_ptr_at(&mut self, offset: usize) -> Result<*mut T> {
        Ok(self.index_mut(offset)? as *mut T)
    }

    /// Pointer to the first element of a channel plane
    ///
    /// The plane starts at offset `channel * rows * cols`.
    pub fn matrix_raw_ptr(&mut self, channel: usize) -> Result<*mut T> {
        let channels = self.channels()?;
        if channel >= channels {
            return Err(TensorError::out_of_bounds("channel", channel, channels));
        }
        let (rows, cols, _) = self.data.dim();
        self.raw_ptr_at(channel * rows * cols)
    }

    /// Replace the buffer contents with an array of identical dimensions
    ///
    /// `data` must have the axes `(rows, cols, channels)` of the current
    /// buffer; a differently shaped array is rejected rather than reshaped.
    /// An empty tensor has no buffer to replace and fails with
    /// [`TensorError::Empty`].
    /// Arrays in another memory order are copied into native order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::Tensor;
    /// use scirs2_core::ndarray_ext::Array3;
    ///
    /// let mut tensor = Tensor::<f32>::new(2, 3, 4);
    /// tensor.set_data(Array3::from_elem((3, 4, 2), 1.5)).unwrap();
    /// assert_eq!(tensor.at(1, 2, 3).unwrap(), 1.5);
    ///
    /// assert!(tensor.set_data(Array3::zeros((4, 3, 2))).is_err());
    /// ```
    pub fn set_data(&mut self, data: Array3<T>) -> Result<()> {
        self.ensure_allocated()?;
        let (rows, cols, channels) = self.data.dim();
        let (new_rows, new_cols, new_channels) = data.dim();
        if (rows, cols, channels) != (new_rows, new_cols, new_channels) {
            return Err(TensorError::DimensionMismatch {
                expected: [rows, cols, channels],
                actual: [new_rows, new_cols, new_channels],
            });
        }

        let data = if data.t().is_standard_layout() {
            data
        } else {
            let mut native = Array3::zeros((rows, cols, channels).f());
            native.assign(&data);
            native
        };

        debug!(rows, cols, channels, "replaced tensor buffer");
        self.data = data;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Order;

    fn sequential(channels: usize, rows: usize, cols: usize) -> Tensor<f32> {
        let mut tensor = Tensor::new(channels, rows, cols);
        let values: Vec<f32> = (0..channels * rows * cols).map(|x| x as f32).collect();
        tensor.fill_values(&values, Order::ColMajor).unwrap();
        tensor
    }

    #[test]
    fn test_native_offset_layout() {
        let tensor = sequential(2, 3, 4);
        // offset = c * rows * cols + col * rows + row
        assert_eq!(tensor.at(0, 1, 0).unwrap(), 1.0);
        assert_eq!(tensor.at(0, 0, 1).unwrap(), 3.0);
        assert_eq!(tensor.at(1, 2, 3).unwrap(), 23.0);
        assert_eq!(tensor.index(13).unwrap(), tensor.at(1, 1, 0).unwrap());
    }

    #[test]
    fn test_index_bounds() {
        let mut tensor = sequential(1, 2, 2);
        assert!(tensor.index(3).is_ok());
        assert!(matches!(
            tensor.index(4),
            Err(TensorError::OutOfBounds {
                axis: "offset",
                index: 4,
                extent: 4
            })
        ));
        *tensor.index_mut(0).unwrap() = 9.0;
        assert_eq!(tensor.at(0, 0, 0).unwrap(), 9.0);
    }

    #[test]
    fn test_at_checks_every_axis() {
        let tensor = sequential(2, 3, 4);
        assert!(matches!(
            tensor.at(2, 0, 0),
            Err(TensorError::OutOfBounds { axis: "channel", .. })
        ));
        assert!(matches!(
            tensor.at(0, 3, 0),
            Err(TensorError::OutOfBounds { axis: "row", .. })
        ));
        assert!(matches!(
            tensor.at(0, 0, 4),
            Err(TensorError::OutOfBounds { axis: "col", .. })
        ));
    }

    #[test]
    fn test_empty_access_fails() {
        let mut tensor = Tensor::<f32>::default();
        assert!(matches!(tensor.at(0, 0, 0), Err(TensorError::Empty)));
        assert!(matches!(tensor.index(0), Err(TensorError::Empty)));
        assert!(matches!(tensor.slice(0), Err(TensorError::Empty)));
        assert!(matches!(tensor.raw_ptr(), Err(TensorError::Empty)));
    }

    #[test]
    fn test_slice_is_channel_plane() {
        let mut tensor = sequential(2, 3, 4);
        let plane = tensor.slice(1).unwrap();
        assert_eq!(plane.dim(), (3, 4));
        assert_eq!(plane[[2, 3]], 23.0);
        assert!(tensor.slice(2).is_err());

        tensor.slice_mut(0).unwrap().fill(-1.0);
        assert_eq!(tensor.at(0, 2, 3).unwrap(), -1.0);
        assert_eq!(tensor.at(1, 0, 0).unwrap(), 12.0);
    }

    #[test]
    fn test_matrix_slice_and_pointers() {
        let mut tensor = sequential(3, 2, 2);
        assert_eq!(tensor.matrix_slice(2).unwrap(), &[8.0, 9.0, 10.0, 11.0]);

        let base = tensor.raw_ptr().unwrap();
        let plane = tensor.matrix_raw_ptr(1).unwrap();
        assert_eq!(plane as usize - base as usize, 4 * std::mem::size_of::<f32>());
        assert!(tensor.matrix_raw_ptr(3).is_err());
        assert!(tensor.raw_ptr_at(12).is_err());

        let last = tensor.raw_ptr_at(11).unwrap();
        assert_eq!(last as usize - base as usize, 11 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_set_data_rejects_shape_change() {
        let mut tensor = Tensor::<f32>::new(2, 3, 4);
        let result = tensor.set_data(Array3::zeros((3, 4, 1)));
        assert!(matches!(
            result,
            Err(TensorError::DimensionMismatch {
                expected: [3, 4, 2],
                actual: [3, 4, 1]
            })
        ));
        assert_eq!(tensor.shapes().unwrap(), [2, 3, 4]);
    }

    #[test]
    fn test_set_data_on_empty_fails() {
        let mut tensor = Tensor::<f32>::default();
        assert!(matches!(
            tensor.set_data(Array3::zeros((0, 0, 0))),
            Err(TensorError::Empty)
        ));
        assert!(matches!(
            tensor.set_data(Array3::zeros((2, 2, 2))),
            Err(TensorError::Empty)
        ));
        assert!(tensor.is_empty());
    }

    #[test]
    fn test_set_data_relays_row_major_arrays() {
        let mut tensor = Tensor::<f32>::new(1, 2, 3);
        let source = Array3::from_shape_fn((2, 3, 1), |(r, k, _)| (r * 10 + k) as f32);
        assert!(source.is_standard_layout());
        tensor.set_data(source).unwrap();
        assert_eq!(tensor.at(0, 1, 2).unwrap(), 12.0);
        // native order: column-major within the plane
        assert_eq!(tensor.as_slice().unwrap(), &[0.0, 10.0, 1.0, 11.0, 2.0, 12.0]);
    }
}
