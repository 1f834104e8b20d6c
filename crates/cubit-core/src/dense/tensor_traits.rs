//! # Tensor - Trait Implementations
//!
//! - `Index<[usize; 3]>` / `IndexMut<[usize; 3]>` with `[channel, row, col]`
//! - `Debug`
//! - `Display`, plus [`Tensor::show`] which sends the same rendering to the log

use super::types::Tensor;
use crate::Element;
use scirs2_core::ndarray_ext::Axis;
use std::fmt;
use tracing::info;

/// Panics on out-of-range coordinates; use [`Tensor::at`] for a checked read.
impl<T> std::ops::Index<[usize; 3]> for Tensor<T> {
    type Output = T;
    fn index(&self, [channel, row, col]: [usize; 3]) -> &Self::Output {
        &self.data[[row, col, channel]]
    }
}

impl<T> std::ops::IndexMut<[usize; 3]> for Tensor<T> {
    fn index_mut(&mut self, [channel, row, col]: [usize; 3]) -> &mut Self::Output {
        &mut self.data[[row, col, channel]]
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols, channels) = self.data.dim();
        f.debug_struct("Tensor")
            .field("raw_shape", &self.raw_shape.as_slice())
            .field("shape", &[channels, rows, cols])
            .field("data", &self.data)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "Tensor(empty)");
        }
        for (channel, plane) in self.data.axis_iter(Axis(2)).enumerate() {
            writeln!(f, "Channel: {channel}")?;
            writeln!(f, "{plane}")?;
        }
        Ok(())
    }
}

impl<T: Element> Tensor<T> {
    /// Log every channel plane at `info` level
    pub fn show(&self) {
        if self.data.is_empty() {
            info!("empty tensor");
            return;
        }
        for (channel, plane) in self.data.axis_iter(Axis(2)).enumerate() {
            info!(channel, "\n{}", plane);
        }
    }
}
