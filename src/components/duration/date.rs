//! Implementation of a `DateDuration`

use crate::{Sign, TemporalError, TemporalResult};

use super::{is_valid_duration, TimeDuration};

/// `DateDuration` represents the [date duration record][spec] of the `Duration.`
///
/// [spec]: https://tc39.es/proposal-temporal/#sec-temporal-date-duration-records
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateDuration {
    /// `DateDuration`'s internal year value.
    pub years: i64,
    /// `DateDuration`'s internal month value.
    pub months: i64,
    /// `DateDuration`'s internal week value.
    pub weeks: i64,
    /// `DateDuration`'s internal day value.
    pub days: i64,
}

impl DateDuration {
    /// Creates a new, non-validated `DateDuration`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Returns this `DateDuration` with `days` replaced.
    #[inline]
    #[must_use]
    pub(crate) const fn with_days(self, days: i64) -> Self {
        Self::new_unchecked(self.years, self.months, self.weeks, days)
    }
}

impl DateDuration {
    /// Creates a new `DateDuration` with provided values.
    ///
    /// Returns a `RangeError` when the fields have mixed signs or exceed the
    /// maximum duration.
    pub fn new(years: i64, months: i64, weeks: i64, days: i64) -> TemporalResult<Self> {
        let result = Self::new_unchecked(years, months, weeks, days);
        if !is_valid_duration(&result, &TimeDuration::default()) {
            return Err(TemporalError::range().with_message("Invalid DateDuration."));
        }
        Ok(result)
    }

    /// Returns a negated `DateDuration`.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new_unchecked(-self.years, -self.months, -self.weeks, -self.days)
    }

    /// Returns a new `DateDuration` representing the absolute value of the current.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new_unchecked(
            self.years.abs(),
            self.months.abs(),
            self.weeks.abs(),
            self.days.abs(),
        )
    }

    /// Returns the sign for the current `DateDuration`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        duration_sign(&[self.years, self.months, self.weeks, self.days])
    }

    /// Returns whether every field is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Returns the `[i64; 4]` array of `DateDuration` fields.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> [i64; 4] {
        [self.years, self.months, self.weeks, self.days]
    }
}

/// `DurationSign`: the sign of the first non-zero field.
#[inline]
pub(crate) fn duration_sign(fields: &[i64]) -> Sign {
    fields
        .iter()
        .find(|field| **field != 0)
        .map_or(Sign::Zero, |field| Sign::from(field.signum() as i8))
}
