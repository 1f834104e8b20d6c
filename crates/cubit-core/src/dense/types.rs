//! Tensor type definition, construction and shape queries
//!
//! This module defines the core `Tensor<T>` type together with the shape
//! normalization rules. Data access, layout conversion and shape mutation are
//! organized in sibling modules.

use crate::error::{Result, TensorError};
use crate::types::RawShape;
use crate::Element;
use scirs2_core::ndarray::{ArrayViewMut3, ShapeBuilder};
use scirs2_core::ndarray_ext::Array3;
use smallvec::smallvec;

/// Dense tensor of rank at most three, backed by scirs2_core's ndarray
///
/// The buffer is a single `Array3<T>` with axes `(rows, cols, channels)`
/// allocated in column-major order: inside each channel plane the row index
/// varies fastest, and planes follow one another in memory. Callers see the
/// canonical shape `(channels, rows, cols)` and, separately, the logical
/// raw shape they asked for (a vector, a matrix or a full volume).
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32`, or `u8` for masks)
///
/// # Examples
///
/// ```
/// use cubit_core::Tensor;
///
/// let tensor = Tensor::<f32>::new(3, 4, 5);
/// assert_eq!(tensor.shapes().unwrap(), [3, 4, 5]);
/// assert_eq!(tensor.raw_shapes().unwrap(), &[3, 4, 5]);
///
/// let vector = Tensor::<f32>::new_1d(10);
/// assert_eq!(vector.shapes().unwrap(), [1, 1, 10]);
/// assert_eq!(vector.raw_shapes().unwrap(), &[10]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    /// Buffer with axes (rows, cols, channels), column-major in memory
    pub(crate) data: Array3<T>,
    /// Logical shape reported to callers
    pub(crate) raw_shape: RawShape,
}

/// Left-pad a 1..=3 length shape with ones into `[channels, rows, cols]`.
pub(crate) fn canonical_dims(shape: &[usize]) -> Result<[usize; 3]> {
    if shape.is_empty() || shape.len() > 3 {
        return Err(TensorError::InvalidRank(shape.len()));
    }
    let mut dims = [1; 3];
    dims[3 - shape.len()..].copy_from_slice(shape);
    Ok(dims)
}

/// Element count of `[channels, rows, cols]`, checked against what one
/// allocation of `T` can hold.
///
/// Fails with [`TensorError::InvalidArgument`] when the product overflows
/// `usize` or the buffer would exceed `isize::MAX` bytes.
pub(crate) fn checked_len<T>(dims: [usize; 3]) -> Result<usize> {
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&len| {
            len.checked_mul(std::mem::size_of::<T>().max(1))
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| {
            TensorError::InvalidArgument(format!(
                "shape {dims:?} exceeds the addressable element count"
            ))
        })
}

/// Drop leading unit extents of an explicit `(channels, rows, cols)` triple.
fn collapsed_raw_shape(channels: usize, rows: usize, cols: usize) -> RawShape {
    if channels == 1 && rows == 1 {
        smallvec![cols]
    } else if channels == 1 {
        smallvec![rows, cols]
    } else {
        smallvec![channels, rows, cols]
    }
}

/// Allocate a zeroed buffer in native (column-major) order.
pub(crate) fn allocate<T: Element>(rows: usize, cols: usize, channels: usize) -> Array3<T> {
    Array3::zeros((rows, cols, channels).f())
}

impl<T: Element> Tensor<T> {
    /// Create a zero-filled tensor with explicit dimensions
    ///
    /// The raw shape drops leading unit dimensions: `(1, 1, n)` is reported as
    /// `[n]` and `(1, r, c)` as `[r, c]`.
    ///
    /// # Panics
    ///
    /// If the buffer size overflows, like `Vec::with_capacity`. Use
    /// [`Tensor::from_shape`] for dimensions that are not known to fit.
    ///
    /// # Arguments
    ///
    /// * `channels` - Number of channel planes
    /// * `rows` - Rows per plane
    /// * `cols` - Columns per plane
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::new(1, 4, 5);
    /// assert_eq!(tensor.raw_shapes().unwrap(), &[4, 5]);
    /// assert_eq!(tensor.size().unwrap(), 20);
    /// ```
    pub fn new(channels: usize, rows: usize, cols: usize) -> Self {
        Self {
            data: allocate(rows, cols, channels),
            raw_shape: collapsed_raw_shape(channels, rows, cols),
        }
    }

    /// Create a zero-filled vector of `size` elements, stored as one row
    pub fn new_1d(size: usize) -> Self {
        Self {
            data: allocate(1, size, 1),
            raw_shape: smallvec![size],
        }
    }

    /// Create a zero-filled single-channel matrix
    ///
    /// A single row is reported as the vector shape `[cols]`.
    pub fn new_2d(rows: usize, cols: usize) -> Self {
        Self::new(1, rows, cols)
    }

    /// Create a zero-filled tensor from a logical shape of one to three extents
    ///
    /// The shape is stored as given and left-padded with ones to obtain the
    /// canonical `(channels, rows, cols)`.
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidRank`] if `shape` is empty or longer than three,
    /// [`TensorError::InvalidArgument`] if the element count cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::from_shape(&[4, 5]).unwrap();
    /// assert_eq!(tensor.shapes().unwrap(), [1, 4, 5]);
    ///
    /// assert!(Tensor::<f32>::from_shape(&[]).is_err());
    /// assert!(Tensor::<f32>::from_shape(&[1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        let [channels, rows, cols] = canonical_dims(shape)?;
        checked_len::<T>([channels, rows, cols])?;
        Ok(Self {
            data: allocate(rows, cols, channels),
            raw_shape: shape.iter().copied().collect(),
        })
    }

    /// Whether no buffer is allocated (default-constructed or a zero extent)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn ensure_allocated(&self) -> Result<()> {
        if self.is_empty() {
            Err(TensorError::Empty)
        } else {
            Ok(())
        }
    }

    /// Number of rows per channel plane
    pub fn rows(&self) -> Result<usize> {
        self.ensure_allocated()?;
        Ok(self.data.dim().0)
    }

    /// Number of columns per channel plane
    pub fn cols(&self) -> Result<usize> {
        self.ensure_allocated()?;
        Ok(self.data.dim().1)
    }

    /// Number of channel planes
    pub fn channels(&self) -> Result<usize> {
        self.ensure_allocated()?;
        Ok(self.data.dim().2)
    }

    /// Total number of elements
    pub fn size(&self) -> Result<usize> {
        self.ensure_allocated()?;
        Ok(self.data.len())
    }

    /// Canonical shape `[channels, rows, cols]`, read from the buffer
    pub fn shapes(&self) -> Result<[usize; 3]> {
        self.ensure_allocated()?;
        let (rows, cols, channels) = self.data.dim();
        Ok([channels, rows, cols])
    }

    /// Logical shape as supplied at construction or by the last reshape
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidRank`] if no logical shape is recorded, which is
    /// the case for a default-constructed tensor.
    pub fn raw_shapes(&self) -> Result<&[usize]> {
        if self.raw_shape.is_empty() || self.raw_shape.len() > 3 {
            return Err(TensorError::InvalidRank(self.raw_shape.len()));
        }
        Ok(&self.raw_shape)
    }

    /// The whole buffer, axes `(rows, cols, channels)`
    pub fn data(&self) -> &Array3<T> {
        &self.data
    }

    /// Mutable view of the whole buffer
    ///
    /// A view cannot be resized, so the dimensions stay in step with the raw
    /// shape. Use [`Tensor::set_data`] to swap in a different buffer.
    pub fn data_mut(&mut self) -> ArrayViewMut3<'_, T> {
        self.data.view_mut()
    }
}

impl<T: Element> Default for Tensor<T> {
    /// An empty tensor with no buffer and no logical shape
    fn default() -> Self {
        Self {
            data: allocate(0, 0, 0),
            raw_shape: RawShape::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_dims_left_pads() {
        assert_eq!(canonical_dims(&[10]).unwrap(), [1, 1, 10]);
        assert_eq!(canonical_dims(&[4, 5]).unwrap(), [1, 4, 5]);
        assert_eq!(canonical_dims(&[2, 3, 4]).unwrap(), [2, 3, 4]);
        assert!(matches!(
            canonical_dims(&[]),
            Err(TensorError::InvalidRank(0))
        ));
        assert!(matches!(
            canonical_dims(&[1, 1, 1, 1]),
            Err(TensorError::InvalidRank(4))
        ));
    }

    #[test]
    fn test_explicit_constructors_collapse_unit_dims() {
        assert_eq!(Tensor::<f32>::new(1, 1, 7).raw_shapes().unwrap(), &[7]);
        assert_eq!(Tensor::<f32>::new(1, 3, 7).raw_shapes().unwrap(), &[3, 7]);
        assert_eq!(Tensor::<f32>::new(2, 1, 7).raw_shapes().unwrap(), &[2, 1, 7]);
        assert_eq!(Tensor::<f32>::new_2d(1, 9).raw_shapes().unwrap(), &[9]);
        assert_eq!(Tensor::<f32>::new_2d(2, 9).raw_shapes().unwrap(), &[2, 9]);
    }

    #[test]
    fn test_new_1d_is_single_row() {
        let tensor = Tensor::<f32>::new_1d(6);
        assert_eq!(tensor.rows().unwrap(), 1);
        assert_eq!(tensor.cols().unwrap(), 6);
        assert_eq!(tensor.channels().unwrap(), 1);
        assert_eq!(tensor.raw_shapes().unwrap(), &[6]);
    }

    #[test]
    fn test_from_shape_keeps_raw_shape() {
        let tensor = Tensor::<f64>::from_shape(&[1, 4, 5]).unwrap();
        assert_eq!(tensor.raw_shapes().unwrap(), &[1, 4, 5]);
        assert_eq!(tensor.shapes().unwrap(), [1, 4, 5]);
        assert_eq!(tensor.data().dim(), (4, 5, 1));
    }

    #[test]
    fn test_element_count_matches_raw_shape() {
        for shape in [&[10][..], &[4, 5], &[2, 3, 4]] {
            let tensor = Tensor::<f32>::from_shape(shape).unwrap();
            let [c, r, k] = tensor.shapes().unwrap();
            assert_eq!(shape.iter().product::<usize>(), c * r * k);
            assert_eq!(tensor.size().unwrap(), c * r * k);
        }
    }

    #[test]
    fn test_default_is_empty() {
        let tensor = Tensor::<f32>::default();
        assert!(tensor.is_empty());
        assert!(matches!(tensor.rows(), Err(TensorError::Empty)));
        assert!(matches!(tensor.shapes(), Err(TensorError::Empty)));
        assert!(matches!(tensor.raw_shapes(), Err(TensorError::InvalidRank(0))));
    }

    #[test]
    fn test_checked_len() {
        assert_eq!(checked_len::<f32>([2, 3, 4]).unwrap(), 24);
        assert_eq!(checked_len::<f32>([0, 3, 4]).unwrap(), 0);
        assert!(matches!(
            checked_len::<f32>([usize::MAX, 2, 2]),
            Err(TensorError::InvalidArgument(_))
        ));
        // fits in usize, but not in bytes
        assert!(checked_len::<f64>([1, 1, usize::MAX / 4]).is_err());
        assert!(checked_len::<u8>([1, 1, isize::MAX as usize]).is_ok());
    }

    #[test]
    fn test_from_shape_rejects_unallocatable_sizes() {
        assert!(matches!(
            Tensor::<f32>::from_shape(&[usize::MAX, 2, 2]),
            Err(TensorError::InvalidArgument(_))
        ));
        assert!(matches!(
            Tensor::<f32>::from_shape(&[usize::MAX / 2 + 7, 2]),
            Err(TensorError::InvalidArgument(_))
        ));
        assert!(Tensor::<f32>::from_shape(&[isize::MAX as usize]).is_err());
    }

    #[test]
    fn test_zero_extent_allocates_nothing() {
        let tensor = Tensor::<f32>::from_shape(&[0, 3]).unwrap();
        assert!(tensor.is_empty());
        assert!(matches!(tensor.size(), Err(TensorError::Empty)));
    }
}
