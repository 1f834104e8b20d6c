//! Whole-buffer initialization: constants, random values and elementwise maps
//!
//! Random fills use scirs2_core::random. The `_with` variants take the
//! generator from the caller so fills can be reproduced with a seeded RNG.

use super::types::Tensor;
use crate::error::{Result, TensorError};
use crate::Element;
use scirs2_core::numeric::{Float, NumCast};
use scirs2_core::random::{thread_rng, Distribution, RandNormal as Normal, Rng};

impl<T: Element> Tensor<T> {
    /// Set every element to `value`
    pub fn fill(&mut self, value: T) -> Result<()> {
        self.ensure_allocated()?;
        self.data.fill(value);
        Ok(())
    }

    /// Set every element to one
    pub fn ones(&mut self) -> Result<()> {
        self.fill(T::one())
    }

    /// Fill with independent samples from a uniform distribution
    ///
    /// Floating element types sample `[min, max)`, integral types `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidArgument`] if `max < min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::<f32>::new(2, 8, 8);
    /// tensor.rand_u(-1.0, 1.0).unwrap();
    /// assert!(tensor.values(Order::ColMajor).unwrap().iter().all(|v| (-1.0..1.0).contains(v)));
    ///
    /// assert!(tensor.rand_u(1.0, -1.0).is_err());
    /// ```
    pub fn rand_u(&mut self, min: T, max: T) -> Result<()> {
        self.rand_u_with(&mut thread_rng(), min, max)
    }

    /// [`Tensor::rand_u`] drawing from a caller-supplied generator
    pub fn rand_u_with<R: Rng>(&mut self, rng: &mut R, min: T, max: T) -> Result<()> {
        self.ensure_allocated()?;
        if !(max >= min) {
            return Err(TensorError::InvalidArgument(format!(
                "uniform range requires max >= min, got min {min}, max {max}"
            )));
        }
        self.data
            .map_inplace(|x| *x = T::from_unit_sample(min, max, rng.random::<f64>()));
        Ok(())
    }

    /// Apply `f` to every element in place
    ///
    /// Elements are visited in no particular order, so `f` should not
    /// depend on the order of calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubit_core::{Order, Tensor};
    ///
    /// let mut tensor = Tensor::from_values(&[4], &[-2.0f32, -1.0, 0.5, 3.0], Order::RowMajor).unwrap();
    /// tensor.transform(|x| x.max(0.0)).unwrap();
    /// assert_eq!(tensor.values(Order::RowMajor).unwrap(), vec![0.0, 0.0, 0.5, 3.0]);
    /// ```
    pub fn transform<F>(&mut self, f: F) -> Result<()>
    where
        F: FnMut(T) -> T,
    {
        self.ensure_allocated()?;
        self.data.mapv_inplace(f);
        Ok(())
    }
}

impl<T: Element + Float> Tensor<T> {
    /// Fill with independent samples from a normal distribution
    ///
    /// Only available for floating element types.
    ///
    /// # Arguments
    ///
    /// * `mean` - Center of the distribution
    /// * `std` - Standard deviation; must be finite and non-negative
    pub fn rand_n(&mut self, mean: T, std: T) -> Result<()> {
        self.rand_n_with(&mut thread_rng(), mean, std)
    }

    /// [`Tensor::rand_n`] drawing from a caller-supplied generator
    pub fn rand_n_with<R: Rng>(&mut self, rng: &mut R, mean: T, std: T) -> Result<()> {
        self.ensure_allocated()?;
        let (mu, sigma) = match (mean.to_f64(), std.to_f64()) {
            (Some(mu), Some(sigma)) if mu.is_finite() && sigma.is_finite() && sigma >= 0.0 => {
                (mu, sigma)
            }
            _ => {
                return Err(TensorError::InvalidArgument(format!(
                    "normal distribution requires a finite mean and non-negative std, got mean {mean}, std {std}"
                )))
            }
        };
        let normal =
            Normal::new(mu, sigma).map_err(|err| TensorError::InvalidArgument(err.to_string()))?;
        self.data
            .map_inplace(|x| *x = <T as NumCast>::from(normal.sample(&mut *rng)).unwrap_or(mean));
        Ok(())
    }
}
