//! Implementation of the `FiniteF64` primitive

use crate::{TemporalError, TemporalResult};
use core_maths::CoreFloat;
use num_traits::FromPrimitive;

/// A finite `f64` value.
///
/// `FiniteF64` is the entry point for loosely typed numeric input. A
/// non-finite value never makes it past construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    #[inline]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns whether the value has no fractional part.
    #[inline]
    pub fn is_integral(&self) -> bool {
        CoreFloat::trunc(self.0) == self.0
    }

    /// Converts the value into an integer of type `T`, throwing a
    /// `RangeError` when the value is fractional or out of `T`'s range.
    pub fn as_integer_if_integral<T: FromPrimitive>(&self) -> TemporalResult<T> {
        if !self.is_integral() {
            return Err(TemporalError::range().with_message("value must be integral."));
        }
        T::from_f64(self.0)
            .ok_or(TemporalError::range().with_message("integer value exceeds a valid range."))
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = TemporalError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(TemporalError::range().with_message("number value is not a finite value."));
        }
        Ok(Self(value))
    }
}
