//! Numeric element types a [`Tensor`](crate::Tensor) can hold.

use scirs2_core::numeric::{Num, NumCast};
use std::fmt;

/// Scalar type stored in a tensor buffer.
///
/// Implemented for the primitive floating and integral types. The only
/// behavior beyond plain arithmetic is how a uniform sample is mapped onto a
/// value range, since integral and floating types disagree on whether the
/// upper bound is reachable.
pub trait Element:
    Copy + Num + NumCast + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Map `unit`, drawn uniformly from `[0, 1)`, onto the range `min..max`.
    ///
    /// Floating types produce values in `[min, max)`, integral types in
    /// `[min, max]`. Callers guarantee `min <= max`.
    fn from_unit_sample(min: Self, max: Self, unit: f64) -> Self;
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn from_unit_sample(min: Self, max: Self, unit: f64) -> Self {
                    // interpolating in f64 keeps `max - min` from overflowing
                    let value = ((min as f64) * (1.0 - unit) + (max as f64) * unit) as $t;
                    if value < min {
                        min
                    } else if value >= max && max > min {
                        // largest value below max
                        if max == 0.0 {
                            -(<$t>::from_bits(1))
                        } else if max > 0.0 {
                            <$t>::from_bits(max.to_bits() - 1)
                        } else {
                            <$t>::from_bits(max.to_bits() + 1)
                        }
                    } else {
                        value.min(max)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn from_unit_sample(min: Self, max: Self, unit: f64) -> Self {
                    // every 64-bit span fits in i128; f64 only picks the offset
                    let span = (max as i128) - (min as i128) + 1;
                    let offset = ((unit * span as f64).floor() as i128).clamp(0, span - 1);
                    ((min as i128) + offset) as $t
                }
            }
        )*
    };
}

impl_float_element!(f32, f64);
impl_int_element!(u8, u16, u32, u64, i8, i16, i32, i64);
