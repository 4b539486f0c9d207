use core::num::{NonZeroU128, NonZeroU32};

use crate::{primitive::FiniteF64, TemporalError, TemporalResult};

/// A validated rounding increment, an integer in `1..=1_000_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoundingIncrement(pub(crate) NonZeroU32);

impl Default for RoundingIncrement {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<f64> for RoundingIncrement {
    type Error = TemporalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // A non-finite increment is a RangeError.
        let value = FiniteF64::try_from(value)?;
        let truncated = core_maths::CoreFloat::trunc(value.as_inner());
        if !(1.0..=1_000_000_000.0).contains(&truncated) {
            return Err(TemporalError::range()
                .with_message("roundingIncrement must be between 1 and 1e9."));
        }
        Self::try_new(truncated as u32)
    }
}

impl RoundingIncrement {
    /// A rounding increment of one.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a new `RoundingIncrement`.
    pub fn try_new(increment: u32) -> TemporalResult<Self> {
        if increment > 1_000_000_000 {
            return Err(TemporalError::range()
                .with_message("roundingIncrement must be between 1 and 1e9."));
        }
        NonZeroU32::new(increment)
            .map(Self)
            .ok_or(TemporalError::range().with_message("roundingIncrement cannot be zero."))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// `ValidateTemporalRoundingIncrement`
    pub(crate) fn validate(self, dividend: u64, inclusive: bool) -> TemporalResult<()> {
        let max = if inclusive { dividend } else { dividend - 1 };

        let increment = u64::from(self.get());
        if increment > max {
            return Err(TemporalError::range().with_message("roundingIncrement exceeds maximum."));
        }

        if dividend % increment != 0 {
            return Err(TemporalError::range()
                .with_message("dividend is not divisible by roundingIncrement."));
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn as_extended_increment(&self) -> NonZeroU128 {
        NonZeroU128::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::RoundingIncrement;

    #[test]
    fn increment_bounds() {
        assert!(RoundingIncrement::try_new(0).is_err());
        assert!(RoundingIncrement::try_new(1_000_000_001).is_err());
        assert_eq!(RoundingIncrement::try_new(1).unwrap(), RoundingIncrement::ONE);

        assert!(RoundingIncrement::try_from(f64::INFINITY).is_err());
        assert!(RoundingIncrement::try_from(0.5).is_err());
        assert_eq!(RoundingIncrement::try_from(2.9).unwrap().get(), 2);
    }

    #[test]
    fn increment_validation() {
        let fifteen = RoundingIncrement::try_new(15).unwrap();
        assert!(fifteen.validate(60, false).is_ok());
        assert!(fifteen.validate(1000, false).is_err());

        let sixty = RoundingIncrement::try_new(60).unwrap();
        assert!(sixty.validate(60, false).is_err());
        assert!(sixty.validate(60, true).is_ok());
    }
}
