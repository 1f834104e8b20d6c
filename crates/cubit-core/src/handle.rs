//! Ownership handles for passing tensors between pipeline stages.
//!
//! A [`Tensor`] always owns its buffer outright. Code that needs to hand the
//! same tensor to several consumers wraps it in a [`TensorHandle`], an
//! `Arc`-backed owning handle with copy-on-write mutation. Code that only
//! reads borrows a [`TensorView`].
//!
//! # Examples
//!
//! ```
//! use cubit_core::{Tensor, TensorHandle};
//!
//! let mut output = TensorHandle::new(Tensor::<f32>::new(1, 2, 2));
//! let observer = output.clone();
//!
//! // The first write detaches `output` from the shared buffer
//! output.make_mut().fill(3.0).unwrap();
//! assert_eq!(output.at(0, 1, 1).unwrap(), 3.0);
//! assert_eq!(observer.at(0, 1, 1).unwrap(), 0.0);
//! ```

use crate::dense::Tensor;
use crate::error::Result;
use crate::types::Order;
use crate::Element;
use scirs2_core::ndarray_ext::ArrayView2;
use std::ops::Deref;
use std::sync::Arc;

/// Cheaply clonable owning handle over a tensor.
///
/// Clones share one tensor. Reads go through `Deref`; [`TensorHandle::make_mut`]
/// clones the tensor first if other handles still point at it, so a write
/// through one handle is never visible through another.
#[derive(Clone)]
pub struct TensorHandle<T> {
    inner: Arc<Tensor<T>>,
}

impl<T: Element> TensorHandle<T> {
    /// Wrap a tensor in the first handle
    pub fn new(tensor: Tensor<T>) -> Self {
        Self {
            inner: Arc::new(tensor),
        }
    }

    /// Exclusive access to the tensor, cloning it if the buffer is shared
    pub fn make_mut(&mut self) -> &mut Tensor<T> {
        Arc::make_mut(&mut self.inner)
    }

    /// Recover the tensor if this is the only handle
    pub fn try_unwrap(self) -> std::result::Result<Tensor<T>, Self> {
        Arc::try_unwrap(self.inner).map_err(|inner| Self { inner })
    }

    /// Recover the tensor, cloning it when other handles remain
    pub fn into_inner(self) -> Tensor<T> {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Number of handles sharing this tensor
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether both handles point at the same tensor
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Read-only view of the shared tensor
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(&self.inner)
    }
}

impl<T> Deref for TensorHandle<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Element> From<Tensor<T>> for TensorHandle<T> {
    fn from(tensor: Tensor<T>) -> Self {
        Self::new(tensor)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TensorHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TensorHandle").field(&*self.inner).finish()
    }
}

/// Non-owning, read-only view of a tensor.
///
/// Exposes the query half of the tensor API. The borrow checker keeps the
/// tensor from being mutated or dropped while a view is alive.
#[derive(Clone, Copy)]
pub struct TensorView<'a, T> {
    tensor: &'a Tensor<T>,
}

impl<'a, T: Element> TensorView<'a, T> {
    /// Borrow `tensor` for reading
    pub fn new(tensor: &'a Tensor<T>) -> Self {
        Self { tensor }
    }

    /// See [`Tensor::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// See [`Tensor::shapes`]
    pub fn shapes(&self) -> Result<[usize; 3]> {
        self.tensor.shapes()
    }

    /// See [`Tensor::raw_shapes`]
    pub fn raw_shapes(&self) -> Result<&'a [usize]> {
        self.tensor.raw_shapes()
    }

    /// See [`Tensor::size`]
    pub fn size(&self) -> Result<usize> {
        self.tensor.size()
    }

    /// See [`Tensor::at`]
    pub fn at(&self, channel: usize, row: usize, col: usize) -> Result<T> {
        self.tensor.at(channel, row, col)
    }

    /// See [`Tensor::index`]
    pub fn index(&self, offset: usize) -> Result<T> {
        self.tensor.index(offset)
    }

    /// See [`Tensor::slice`]
    pub fn slice(&self, channel: usize) -> Result<ArrayView2<'a, T>> {
        self.tensor.slice(channel)
    }

    /// See [`Tensor::values`]
    pub fn values(&self, order: Order) -> Result<Vec<T>> {
        self.tensor.values(order)
    }

    /// Borrowed tensor, for operations the view does not forward
    pub fn tensor(&self) -> &'a Tensor<T> {
        self.tensor
    }
}

impl<T: Element> Tensor<T> {
    /// Read-only view of this tensor
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_until_written() {
        let mut first = TensorHandle::new(Tensor::<f32>::new(1, 2, 2));
        let second = first.clone();
        assert!(first.ptr_eq(&second));
        assert_eq!(first.handle_count(), 2);

        first.make_mut().ones().unwrap();
        assert!(!first.ptr_eq(&second));
        assert_eq!(first.at(0, 0, 0).unwrap(), 1.0);
        assert_eq!(second.at(0, 0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_make_mut_on_unique_handle_does_not_clone() {
        let mut handle = TensorHandle::from(Tensor::<u8>::new_1d(3));
        let before = handle.as_slice().unwrap().as_ptr();
        handle.make_mut().fill(4).unwrap();
        assert_eq!(handle.as_slice().unwrap().as_ptr(), before);
    }

    #[test]
    fn test_unwrap_and_into_inner() {
        let handle = TensorHandle::new(Tensor::<f32>::new(2, 2, 2));
        let shared = handle.clone();
        let handle = handle.try_unwrap().unwrap_err();
        drop(shared);
        let tensor = handle.try_unwrap().unwrap();
        assert_eq!(tensor.shapes().unwrap(), [2, 2, 2]);

        let handle = TensorHandle::new(tensor);
        let other = handle.clone();
        let owned = handle.into_inner();
        assert_eq!(owned, *other);
    }

    #[test]
    fn test_view_forwards_queries() {
        let values: Vec<f32> = (0..6).map(|x| x as f32).collect();
        let tensor = Tensor::from_values(&[2, 3], &values, Order::RowMajor).unwrap();
        let view = tensor.view();
        assert_eq!(view.shapes().unwrap(), [1, 2, 3]);
        assert_eq!(view.raw_shapes().unwrap(), &[2, 3]);
        assert_eq!(view.size().unwrap(), 6);
        assert_eq!(view.at(0, 1, 2).unwrap(), 5.0);
        assert_eq!(view.index(1).unwrap(), 3.0);
        assert_eq!(view.slice(0).unwrap()[[1, 0]], 3.0);
        assert_eq!(view.values(Order::RowMajor).unwrap(), values);
        assert!(!view.is_empty());
        assert!(view.at(0, 2, 0).is_err());
    }
}
