//! Spatial padding of channel planes

use super::types::{checked_len, Tensor};
use crate::error::{Result, TensorError};
use crate::Element;
use scirs2_core::ndarray::ShapeBuilder;
use scirs2_core::ndarray_ext::{s, Array3};
use smallvec::smallvec;
use tracing::debug;

impl<T: Element> Tensor<T> {
    /// Grow every channel plane by a constant border
    ///
    /// The original values land in the sub-region offset by `(top, left)`
    /// of a buffer pre-filled with `padding_value`. The channel axis is left
    /// alone. Afterwards the logical shape is always the full triple
    /// `[channels, rows, cols]`, whatever its rank was before.
    ///
    /// # Arguments
    ///
    /// * `pads` - Exactly four extents: `[top, bottom, left, right]`
    /// * `padding_value` - Value written into the border
    ///
    /// # Errors
    ///
    /// [`TensorError::Empty`] on an empty tensor and
    /// [`TensorError::InvalidArgument`] unless `pads` has four entries whose
    /// padded buffer can be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::from_values(&[2, 2], &[1.0f32, 2.0, 3.0, 4.0], Order::RowMajor).unwrap();
    /// tensor.padding(&[1, 1, 1, 1], 0.0).unwrap();
    ///
    /// assert_eq!(tensor.shapes().unwrap(), [1, 4, 4]);
    /// assert_eq!(tensor.raw_shapes().unwrap(), &[1, 4, 4]);
    /// assert_eq!(tensor.at(0, 1, 1).unwrap(), 1.0);
    /// assert_eq!(tensor.at(0, 2, 2).unwrap(), 4.0);
    /// assert_eq!(tensor.at(0, 0, 0).unwrap(), 0.0);
    /// ```
    pub fn padding(&mut self, pads: &[usize], padding_value: T) -> Result<()> {
        self.ensure_allocated()?;
        let &[top, bottom, left, right] = pads else {
            return Err(TensorError::InvalidArgument(format!(
                "padding expects 4 extents (top, bottom, left, right), got {}",
                pads.len()
            )));
        };

        let (rows, cols, channels) = self.data.dim();
        let grown = |extent: usize, before: usize, after: usize| {
            extent
                .checked_add(before)
                .and_then(|n| n.checked_add(after))
                .ok_or_else(|| {
                    TensorError::InvalidArgument(format!(
                        "padding {pads:?} overflows extent {extent}"
                    ))
                })
        };
        let new_rows = grown(rows, top, bottom)?;
        let new_cols = grown(cols, left, right)?;
        checked_len::<T>([channels, new_rows, new_cols])?;

        let mut padded = Array3::from_elem((new_rows, new_cols, channels).f(), padding_value);
        padded
            .slice_mut(s![top..top + rows, left..left + cols, ..])
            .assign(&self.data);

        debug!(channels, rows, cols, new_rows, new_cols, "padded tensor");
        self.data = padded;
        self.raw_shape = smallvec![channels, new_rows, new_cols];
        Ok(())
    }
}
