//! An implementation of `TimeDuration` and it's methods.

use crate::{options::TemporalUnit, Sign, TemporalError, TemporalResult};

use super::{date::duration_sign, is_valid_duration, normalized::NormalizedTimeDuration, DateDuration};

/// Nanosecond lengths of the units `Day` through `Nanosecond`.
const UNIT_LENGTHS: [i128; 7] = [
    crate::NS_PER_DAY as i128,
    3_600_000_000_000,
    60_000_000_000,
    1_000_000_000,
    1_000_000,
    1_000,
    1,
];

/// `TimeDuration` represents the [Time Duration record][spec] of the `Duration.`
///
/// [spec]: https://tc39.es/proposal-temporal/#sec-temporal-time-duration-records
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeDuration {
    /// `TimeDuration`'s internal hour value.
    pub hours: i64,
    /// `TimeDuration`'s internal minute value.
    pub minutes: i64,
    /// `TimeDuration`'s internal second value.
    pub seconds: i64,
    /// `TimeDuration`'s internal millisecond value.
    pub milliseconds: i64,
    /// `TimeDuration`'s internal microsecond value.
    pub microseconds: i64,
    /// `TimeDuration`'s internal nanosecond value.
    pub nanoseconds: i64,
}

// ==== TimeDuration Private API ====

impl TimeDuration {
    /// Creates a new `TimeDuration`.
    #[must_use]
    pub(crate) const fn new_unchecked(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        }
    }

    /// Balances a `NormalizedTimeDuration` into whole days and a `TimeDuration`
    /// whose largest field is `largest_unit`.
    ///
    /// Units above `largest_unit` are left at zero; when `largest_unit` is a
    /// date unit, the overflow is carried into the returned day count.
    ///
    /// Equivalent: `BalanceTimeDuration`
    pub(crate) fn from_normalized(
        norm: NormalizedTimeDuration,
        largest_unit: TemporalUnit,
    ) -> TemporalResult<(i64, Self)> {
        let start = match largest_unit {
            TemporalUnit::Year | TemporalUnit::Month | TemporalUnit::Week | TemporalUnit::Day => 0,
            TemporalUnit::Hour => 1,
            TemporalUnit::Minute => 2,
            TemporalUnit::Second => 3,
            TemporalUnit::Millisecond => 4,
            TemporalUnit::Microsecond => 5,
            TemporalUnit::Nanosecond => 6,
            TemporalUnit::Auto => {
                return Err(TemporalError::range().with_message("Invalid largestUnit for balance."))
            }
        };

        let mut fields = [0i64; 7];
        let mut remainder = norm.0;
        for (field, unit_length) in fields.iter_mut().zip(UNIT_LENGTHS).skip(start) {
            // Division truncates toward zero, so every field keeps the sign of `norm`.
            let value = remainder / unit_length;
            remainder %= unit_length;
            *field = i64::try_from(value).map_err(|_| {
                TemporalError::range().with_message("Balanced duration field exceeds i64.")
            })?;
        }

        let [days, hours, minutes, seconds, milliseconds, microseconds, nanoseconds] = fields;
        Ok((
            days,
            Self::new_unchecked(
                hours,
                minutes,
                seconds,
                milliseconds,
                microseconds,
                nanoseconds,
            ),
        ))
    }

    /// Returns this `TimeDuration` as a single nanosecond count.
    #[inline]
    #[must_use]
    pub(crate) fn to_normalized(self) -> NormalizedTimeDuration {
        NormalizedTimeDuration::from_time_duration(&self)
    }
}

// ==== TimeDuration's public API ====

impl TimeDuration {
    /// Creates a new validated `TimeDuration`.
    pub fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> TemporalResult<Self> {
        let result = Self::new_unchecked(
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        );
        if !is_valid_duration(&DateDuration::default(), &result) {
            return Err(
                TemporalError::range().with_message("Attempted to create an invalid TimeDuration.")
            );
        }
        Ok(result)
    }

    /// `BalanceDuration`
    ///
    /// Folds `days` and this time duration into a single nanosecond count and
    /// redistributes it down from `largest_unit`, returning the balanced days
    /// and time fields.
    ///
    /// ```rust
    /// use temporal_calendar::{options::TemporalUnit, TimeDuration};
    ///
    /// let time = TimeDuration::new(25, 0, 0, 0, 0, 0).unwrap();
    /// let (days, balanced) = time.balance(0, TemporalUnit::Day).unwrap();
    /// assert_eq!(days, 1);
    /// assert_eq!(balanced.hours, 1);
    /// ```
    pub fn balance(&self, days: i64, largest_unit: TemporalUnit) -> TemporalResult<(i64, Self)> {
        let norm = self.to_normalized().add_days(days)?;
        Self::from_normalized(norm, largest_unit)
    }

    /// Returns a new `TimeDuration` representing the absolute value of the current.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new_unchecked(
            self.hours.abs(),
            self.minutes.abs(),
            self.seconds.abs(),
            self.milliseconds.abs(),
            self.microseconds.abs(),
            self.nanoseconds.abs(),
        )
    }

    /// Returns a negated `TimeDuration`.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new_unchecked(
            -self.hours,
            -self.minutes,
            -self.seconds,
            -self.milliseconds,
            -self.microseconds,
            -self.nanoseconds,
        )
    }

    /// Returns the sign of the current `TimeDuration`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        duration_sign(&self.fields())
    }

    /// Returns whether every field is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Returns the `[i64; 6]` array of `TimeDuration` fields.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> [i64; 6] {
        [
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds,
        ]
    }
}
