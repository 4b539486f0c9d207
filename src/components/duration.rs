//! This module implements `Duration` along with it's methods and components.

use core::fmt;

use writeable::Writeable;

use crate::{
    components::PlainDate,
    formatting::{FormattableDateDuration, FormattableDuration, FormattableTimeDuration},
    options::{ArithmeticOverflow, ResolvedRoundingOptions, RoundingOptions, TemporalUnit},
    primitive::FiniteF64,
    Sign, TemporalError, TemporalResult, NS_PER_DAY,
};

use self::normalized::{NormalizedDurationRecord, NormalizedTimeDuration, MAX_TIME_DURATION};

mod date;
pub(crate) mod normalized;
mod time;


#[doc(inline)]
pub use date::DateDuration;
#[doc(inline)]
pub use time::TimeDuration;

/// A partial duration record whose fields are loosely typed numbers.
///
/// This is the front door for untrusted duration input. Absent fields
/// default to zero, but at least one field must be present.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PartialDuration {
    /// A potentially existent `years` field.
    pub years: Option<f64>,
    /// A potentially existent `months` field.
    pub months: Option<f64>,
    /// A potentially existent `weeks` field.
    pub weeks: Option<f64>,
    /// A potentially existent `days` field.
    pub days: Option<f64>,
    /// A potentially existent `hours` field.
    pub hours: Option<f64>,
    /// A potentially existent `minutes` field.
    pub minutes: Option<f64>,
    /// A potentially existent `seconds` field.
    pub seconds: Option<f64>,
    /// A potentially existent `milliseconds` field.
    pub milliseconds: Option<f64>,
    /// A potentially existent `microseconds` field.
    pub microseconds: Option<f64>,
    /// A potentially existent `nanoseconds` field.
    pub nanoseconds: Option<f64>,
}

impl PartialDuration {
    /// Returns whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The native Rust implementation of `Temporal.Duration`.
///
/// `Duration` is made up of a `DateDuration` and `TimeDuration` as primarily
/// defined by Abtract Operation 7.5.1-5.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duration {
    date: DateDuration,
    time: TimeDuration,
}

// ==== Private Creation methods ====

impl Duration {
    /// Creates a new `Duration` from a `DateDuration` and `TimeDuration`.
    #[inline]
    pub(crate) const fn new_unchecked(date: DateDuration, time: TimeDuration) -> Self {
        Self { date, time }
    }

    /// Returns the largest unit with a non-zero value, or `Nanosecond` for
    /// a zero duration.
    ///
    /// Equivalent: `DefaultTemporalLargestUnit`
    pub(crate) fn default_largest_unit(&self) -> TemporalUnit {
        const UNITS: [TemporalUnit; 10] = [
            TemporalUnit::Year,
            TemporalUnit::Month,
            TemporalUnit::Week,
            TemporalUnit::Day,
            TemporalUnit::Hour,
            TemporalUnit::Minute,
            TemporalUnit::Second,
            TemporalUnit::Millisecond,
            TemporalUnit::Microsecond,
            TemporalUnit::Nanosecond,
        ];
        self.fields()
            .iter()
            .zip(UNITS)
            .find(|(value, _)| **value != 0)
            .map_or(TemporalUnit::Nanosecond, |(_, unit)| unit)
    }

    /// Balances the time fields into the day field, returning the number of
    /// whole days this duration moves a date.
    ///
    /// The sub-day remainder is truncated toward zero.
    pub(crate) fn balance_time_into_days(&self) -> TemporalResult<i64> {
        let (days, _) = self.time.balance(self.date.days, TemporalUnit::Day)?;
        Ok(days)
    }
}

// ==== Public Duration API ====

impl Duration {
    /// Creates a new validated `Duration`.
    ///
    /// Returns a `RangeError` when any two non-zero fields differ in sign or
    /// the duration exceeds the maximum range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
        nanoseconds: i64,
    ) -> TemporalResult<Self> {
        let duration = Self::new_unchecked(
            DateDuration::new_unchecked(years, months, weeks, days),
            TimeDuration::new_unchecked(
                hours,
                minutes,
                seconds,
                milliseconds,
                microseconds,
                nanoseconds,
            ),
        );
        if !is_valid_duration(&duration.date, &duration.time) {
            return Err(TemporalError::range().with_message("Duration was not valid."));
        }
        Ok(duration)
    }

    /// Creates a `Duration` from a validated `DateDuration` and `TimeDuration`.
    pub fn from_parts(date: DateDuration, time: TimeDuration) -> TemporalResult<Self> {
        if !is_valid_duration(&date, &time) {
            return Err(TemporalError::range().with_message("Duration was not valid."));
        }
        Ok(Self::new_unchecked(date, time))
    }

    /// Creates a `Duration` from only a `DateDuration`.
    #[must_use]
    pub fn from_date_duration(date: &DateDuration) -> Self {
        Self::new_unchecked(*date, TimeDuration::default())
    }

    /// Creates a `Duration` from a `PartialDuration`.
    ///
    /// Equivalent: `ToLimitedTemporalDuration`
    ///
    /// Throws a `TypeError` if no field is present, and a `RangeError` if a
    /// field is not a finite integer or the fields do not form a valid
    /// duration.
    pub fn from_partial_duration(partial: PartialDuration) -> TemporalResult<Self> {
        if partial.is_empty() {
            return Err(TemporalError::r#type().with_message("PartialDuration cannot be empty."));
        }

        let to_integer = |field: Option<f64>| -> TemporalResult<i64> {
            field.map_or(Ok(0), |value| {
                FiniteF64::try_from(value)?.as_integer_if_integral::<i64>()
            })
        };

        Self::new(
            to_integer(partial.years)?,
            to_integer(partial.months)?,
            to_integer(partial.weeks)?,
            to_integer(partial.days)?,
            to_integer(partial.hours)?,
            to_integer(partial.minutes)?,
            to_integer(partial.seconds)?,
            to_integer(partial.milliseconds)?,
            to_integer(partial.microseconds)?,
            to_integer(partial.nanoseconds)?,
        )
    }
}

// ==== Public `Duration` Getters ====

impl Duration {
    /// Returns a reference to the inner `TimeDuration`
    #[inline]
    #[must_use]
    pub fn time(&self) -> &TimeDuration {
        &self.time
    }

    /// Returns a reference to the inner `DateDuration`
    #[inline]
    #[must_use]
    pub fn date(&self) -> &DateDuration {
        &self.date
    }

    /// Returns the `years` field of the duration.
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.date.years
    }

    /// Returns the `months` field of the duration.
    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.date.months
    }

    /// Returns the `weeks` field of the duration.
    #[inline]
    #[must_use]
    pub const fn weeks(&self) -> i64 {
        self.date.weeks
    }

    /// Returns the `days` field of the duration.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.date.days
    }

    /// Returns the `hours` field of the duration.
    #[inline]
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.time.hours
    }

    /// Returns the `minutes` field of the duration.
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.time.minutes
    }

    /// Returns the `seconds` field of the duration.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.time.seconds
    }

    /// Returns the `milliseconds` field of the duration.
    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.time.milliseconds
    }

    /// Returns the `microseconds` field of the duration.
    #[inline]
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.time.microseconds
    }

    /// Returns the `nanoseconds` field of the duration.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.time.nanoseconds
    }

    /// Returns all ten fields, largest unit first.
    #[must_use]
    pub fn fields(&self) -> [i64; 10] {
        let [years, months, weeks, days] = self.date.fields();
        let [hours, minutes, seconds, milliseconds, microseconds, nanoseconds] =
            self.time.fields();
        [
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        ]
    }
}

// ==== Public Duration methods ====

impl Duration {
    /// Determines the sign for the current self.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        date::duration_sign(&self.fields())
    }

    /// Returns whether the current `Duration` is zero.
    ///
    /// Equivalant to `Temporal.Duration.blank()`.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Returns a negated `Duration`
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new_unchecked(self.date.negated(), self.time.negated())
    }

    /// Returns the absolute value of `Duration`.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new_unchecked(self.date.abs(), self.time.abs())
    }

    /// Rounds the current `Duration` according to `options`.
    ///
    /// Calendar units are measured from `relative_to`, which is required
    /// whenever the duration has non-zero years, months, or weeks, or the
    /// rounding involves one of those units. Without it, a day is treated
    /// as exactly 24 hours.
    pub fn round(
        &self,
        options: RoundingOptions,
        relative_to: Option<&PlainDate>,
    ) -> TemporalResult<Self> {
        let existing_largest_unit = self.default_largest_unit();
        let resolved =
            ResolvedRoundingOptions::from_duration_options(options, existing_largest_unit)?;

        let Some(anchor) = relative_to else {
            if resolved.largest_unit.is_calendar_unit()
                || self.date.years != 0
                || self.date.months != 0
                || self.date.weeks != 0
            {
                return Err(TemporalError::range()
                    .with_message("relativeTo is required to round calendar units."));
            }
            let norm = self.time.to_normalized().add_days(self.date.days)?;
            let record = NormalizedDurationRecord::new(DateDuration::default(), norm)?;
            return record.round_relative_duration(norm.0, None, resolved);
        };

        // Move the anchor by the date fields, then by the whole days of the time fields.
        let (extra_days, remainder) = self.time.to_normalized().div_rem_days();
        let intermediate = anchor.calendar().date_add(
            anchor,
            &self.date,
            ArithmeticOverflow::Constrain,
        )?;
        let target_days = i64::try_from(i128::from(intermediate.to_epoch_days()) + extra_days)
            .map_err(|_| TemporalError::range().with_message("Rounding target is out of range."))?;
        let target = anchor.calendar().date_from_epoch_days(target_days)?;
        let dest_epoch_ns = i128::from(target_days) * i128::from(NS_PER_DAY) + remainder;

        let record = if resolved.largest_unit.is_date_unit() {
            let date = anchor
                .calendar()
                .date_until(anchor, &target, resolved.largest_unit)?;
            NormalizedDurationRecord::new(date, NormalizedTimeDuration(remainder))?
        } else {
            let anchor_ns = i128::from(anchor.to_epoch_days()) * i128::from(NS_PER_DAY);
            NormalizedDurationRecord::new(
                DateDuration::default(),
                NormalizedTimeDuration(dest_epoch_ns - anchor_ns),
            )?
        };

        record.round_relative_duration(dest_epoch_ns, Some(anchor), resolved)
    }
}

// ==== Duration validation ====

/// `IsValidDuration`
///
/// A duration is valid when its non-zero fields share one sign, its
/// years, months, and weeks are below `2^32`, and its days and time
/// together are below `2^53` seconds.
#[must_use]
pub(crate) fn is_valid_duration(date: &DateDuration, time: &TimeDuration) -> bool {
    let mut sign = 0;
    for field in date.fields().iter().chain(time.fields().iter()) {
        let field_sign = field.signum();
        if field_sign != 0 {
            if sign != 0 && field_sign != sign {
                return false;
            }
            sign = field_sign;
        }
    }

    const MAX_CALENDAR_UNIT: u64 = 1 << 32;
    if date.years.unsigned_abs() >= MAX_CALENDAR_UNIT
        || date.months.unsigned_abs() >= MAX_CALENDAR_UNIT
        || date.weeks.unsigned_abs() >= MAX_CALENDAR_UNIT
    {
        return false;
    }

    let total = NormalizedTimeDuration::from_time_duration(time).0
        + i128::from(date.days) * i128::from(NS_PER_DAY);
    total.abs() <= MAX_TIME_DURATION
}

// ==== Display ====

impl Duration {
    /// Returns the ISO 8601 form of this duration, e.g. `P1Y2M3W4DT5H6M7.008S`.
    pub(crate) fn to_formattable(&self) -> FormattableDuration {
        let date = self.date.abs();
        let date = (!date.is_zero()).then_some(FormattableDateDuration {
            years: date.years.unsigned_abs(),
            months: date.months.unsigned_abs(),
            weeks: date.weeks.unsigned_abs(),
            days: date.days.unsigned_abs(),
        });

        let time = self.time.abs();
        // The sub-minute units fold into seconds plus a nanosecond fraction.
        let seconds = TimeDuration {
            hours: 0,
            minutes: 0,
            ..time
        };
        let seconds = NormalizedTimeDuration::from_time_duration(&seconds);

        FormattableDuration {
            sign: self.sign(),
            date,
            time: FormattableTimeDuration {
                hours: time.hours.unsigned_abs(),
                minutes: time.minutes.unsigned_abs(),
                seconds: seconds.seconds().unsigned_abs(),
                fraction: seconds.subseconds().unsigned_abs(),
            },
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_formattable().write_to(f)
    }
}
