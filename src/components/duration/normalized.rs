//! This module implements the normalized `Duration` records and the
//! relative rounding of a duration.

use alloc::format;
use core::num::NonZeroU128;

use crate::{
    components::PlainDate,
    options::{ArithmeticOverflow, ResolvedRoundingOptions, TemporalRoundingMode, TemporalUnit},
    rounding::IncrementRounder,
    temporal_assert, Sign, TemporalError, TemporalResult, TemporalUnwrap, NS_PER_DAY,
};

use super::{DateDuration, Duration, TimeDuration};

/// The largest nanosecond magnitude of a duration, `2^53` seconds minus one nanosecond.
pub(crate) const MAX_TIME_DURATION: i128 = 9_007_199_254_740_991_999_999_999;

const NS_PER_DAY_128BIT: i128 = NS_PER_DAY as i128;

// ==== NormalizedTimeDuration ====
//
// A time duration represented in pure nanoseconds.
//
// Invariants:
//
// nanoseconds.abs() <= MAX_TIME_DURATION

/// A Normalized `TimeDuration` that represents the current `TimeDuration` in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NormalizedTimeDuration(pub(crate) i128);

impl NormalizedTimeDuration {
    /// Equivalent: 7.5.20 NormalizeTimeDuration ( hours, minutes, seconds, milliseconds, microseconds, nanoseconds )
    pub(crate) fn from_time_duration(time: &TimeDuration) -> Self {
        let mut nanoseconds = i128::from(time.hours) * 3_600_000_000_000;
        nanoseconds += i128::from(time.minutes) * 60_000_000_000;
        nanoseconds += i128::from(time.seconds) * 1_000_000_000;
        nanoseconds += i128::from(time.milliseconds) * 1_000_000;
        nanoseconds += i128::from(time.microseconds) * 1_000;
        nanoseconds += i128::from(time.nanoseconds);
        Self(nanoseconds)
    }

    /// Equivalent: 7.5.23 Add24HourDaysToNormalizedTimeDuration ( d, days )
    pub(crate) fn add_days(&self, days: i64) -> TemporalResult<Self> {
        let result = self.0 + i128::from(days) * NS_PER_DAY_128BIT;
        if result.abs() > MAX_TIME_DURATION {
            return Err(TemporalError::range()
                .with_message("normalizedTimeDuration exceeds maxTimeDuration."));
        }
        Ok(Self(result))
    }

    /// Returns the whole seconds, truncated toward zero.
    #[inline]
    pub(crate) fn seconds(&self) -> i64 {
        // A valid duration is below 2^53 seconds.
        (self.0 / 1_000_000_000) as i64
    }

    /// Returns the subsecond components of the `NormalizedTimeDuration`.
    #[inline]
    pub(crate) fn subseconds(&self) -> i32 {
        (self.0 % 1_000_000_000) as i32
    }

    /// Returns the whole days and the nanosecond remainder, both truncated toward zero.
    #[inline]
    pub(crate) fn div_rem_days(&self) -> (i128, i128) {
        (self.0 / NS_PER_DAY_128BIT, self.0 % NS_PER_DAY_128BIT)
    }

    #[inline]
    pub(crate) fn sign(&self) -> Sign {
        Sign::from(self.0.cmp(&0))
    }

    /// Round the current `NormalizedTimeDuration` to a multiple of `increment` nanoseconds.
    pub(crate) fn round(
        &self,
        increment: NonZeroU128,
        mode: TemporalRoundingMode,
    ) -> TemporalResult<Self> {
        let rounded = IncrementRounder::<i128>::from_signed_num(self.0, increment)?.round(mode);
        if rounded.abs() > MAX_TIME_DURATION {
            return Err(TemporalError::range()
                .with_message("normalizedTimeDuration exceeds maxTimeDuration."));
        }
        Ok(Self(rounded))
    }
}

// ==== NormalizedDurationRecord ====
//
// A record consisting of a DateDuration and NormalizedTimeDuration
//

/// A NormalizedDurationRecord is a duration record that contains
/// a `DateDuration` and `NormalizedTimeDuration`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NormalizedDurationRecord {
    date: DateDuration,
    norm: NormalizedTimeDuration,
}

impl NormalizedDurationRecord {
    /// Creates a new `NormalizedDurationRecord`.
    ///
    /// Equivalent: `CreateNormalizedDurationRecord` & `CombineDateAndNormalizedTimeDuration`.
    pub(crate) fn new(date: DateDuration, norm: NormalizedTimeDuration) -> TemporalResult<Self> {
        if date.sign() != Sign::Zero && norm.sign() != Sign::Zero && date.sign() != norm.sign() {
            return Err(TemporalError::range()
                .with_message("DateDuration and NormalizedTimeDuration must agree."));
        }
        Ok(Self { date, norm })
    }

    pub(crate) fn from_date_duration(date: DateDuration) -> TemporalResult<Self> {
        Self::new(date, NormalizedTimeDuration::default())
    }

    pub(crate) fn date(&self) -> DateDuration {
        self.date
    }

    pub(crate) fn normalized_time_duration(&self) -> NormalizedTimeDuration {
        self.norm
    }

    /// The sign of the record, with zero treated as positive.
    pub(crate) fn sign(&self) -> Sign {
        match self.date.sign() {
            Sign::Zero => self.norm.sign(),
            sign => sign,
        }
    }
}

// ==== Nudge Duration Rounding Functions ====

// Below implements the nudge rounding functionality for Duration.
//
// A duration is rounded by bracketing its end point between two candidate
// durations that differ by one increment of the smallest unit, then rounding
// by the exact position of the end point between the two candidates.

#[derive(Debug)]
struct NudgeRecord {
    normalized: NormalizedDurationRecord,
    nudge_epoch_ns: i128,
    expanded: bool,
}

/// Returns the epoch nanoseconds of `anchor` plus `duration`.
fn epoch_ns_after(anchor: &PlainDate, duration: &DateDuration) -> TemporalResult<i128> {
    let end = anchor
        .calendar()
        .date_add(anchor, duration, ArithmeticOverflow::Constrain)?;
    Ok(i128::from(end.to_epoch_days()) * NS_PER_DAY_128BIT)
}

/// Truncates `value` to a multiple of `increment`.
#[inline]
fn truncate_to_increment(value: i64, increment: i64) -> i64 {
    (value / increment) * increment
}

impl NormalizedDurationRecord {
    /// `NudgeToCalendarUnit`
    fn nudge_calendar_unit(
        &self,
        sign: Sign,
        dest_epoch_ns: i128,
        anchor: &PlainDate,
        options: ResolvedRoundingOptions,
    ) -> TemporalResult<NudgeRecord> {
        let increment = i64::from(options.increment.get());
        let step = increment * i64::from(sign.as_sign_multiplier());
        let date = self.date();

        let (r1, r2, start_duration, end_duration) = match options.smallest_unit {
            TemporalUnit::Year => {
                let years = truncate_to_increment(date.years, increment);
                (
                    years,
                    years + step,
                    DateDuration::new(years, 0, 0, 0)?,
                    DateDuration::new(years + step, 0, 0, 0)?,
                )
            }
            TemporalUnit::Month => {
                let months = truncate_to_increment(date.months, increment);
                (
                    months,
                    months + step,
                    DateDuration::new(date.years, months, 0, 0)?,
                    DateDuration::new(date.years, months + step, 0, 0)?,
                )
            }
            TemporalUnit::Week => {
                // Weeks are always seven days, so the remaining days fold into weeks directly.
                let weeks = truncate_to_increment(date.weeks + date.days / 7, increment);
                (
                    weeks,
                    weeks + step,
                    DateDuration::new(date.years, date.months, weeks, 0)?,
                    DateDuration::new(date.years, date.months, weeks + step, 0)?,
                )
            }
            unit => {
                return Err(TemporalError::assert()
                    .with_message(format!("{unit} is not a calendar rounding unit.")));
            }
        };

        let start_epoch_ns = epoch_ns_after(anchor, &start_duration)?;
        let end_epoch_ns = epoch_ns_after(anchor, &end_duration)?;

        #[cfg(feature = "log")]
        log::trace!(
            "nudging {} between {r1} ({start_epoch_ns}) and {r2} ({end_epoch_ns}) toward {dest_epoch_ns}",
            options.smallest_unit
        );

        match sign {
            Sign::Negative => temporal_assert!(
                end_epoch_ns <= dest_epoch_ns && dest_epoch_ns <= start_epoch_ns,
                "destination {dest_epoch_ns} is outside of the nudge window"
            ),
            _ => temporal_assert!(
                start_epoch_ns <= dest_epoch_ns && dest_epoch_ns <= end_epoch_ns,
                "destination {dest_epoch_ns} is outside of the nudge window"
            ),
        }
        let denominator = (end_epoch_ns - start_epoch_ns).abs();
        temporal_assert!(denominator != 0, "nudge window is empty");
        let progress = (dest_epoch_ns - start_epoch_ns).abs();

        // The exact total is r1 + sign * increment * progress / denominator,
        // which is rounded to a count of increments without leaving integers.
        let dividend = i128::from(r1) * denominator + i128::from(step) * progress;
        let divisor = NonZeroU128::new((i128::from(increment) * denominator).unsigned_abs())
            .temporal_unwrap()?;
        let rounded_unit = IncrementRounder::<i128>::from_signed_num(dividend, divisor)?
            .round_as_quotient(options.rounding_mode)
            * i128::from(increment);

        let expanded = rounded_unit == i128::from(r2);
        let (duration, nudge_epoch_ns) = if expanded {
            (end_duration, end_epoch_ns)
        } else {
            (start_duration, start_epoch_ns)
        };

        Ok(NudgeRecord {
            normalized: NormalizedDurationRecord::from_date_duration(duration)?,
            nudge_epoch_ns,
            expanded,
        })
    }

    /// `NudgeToDayOrTime`
    ///
    /// Rounds the days and time of the duration arithmetically, treating a
    /// day as exactly 24 hours.
    fn nudge_to_day_or_time(
        &self,
        dest_epoch_ns: i128,
        options: ResolvedRoundingOptions,
    ) -> TemporalResult<NudgeRecord> {
        let norm = self.normalized_time_duration().add_days(self.date().days)?;

        let unit_length = options.smallest_unit.as_nanoseconds().temporal_unwrap()?;
        let increment = NonZeroU128::new(u128::from(unit_length))
            .temporal_unwrap()?
            .checked_mul(options.increment.as_extended_increment())
            .temporal_unwrap()?;
        let rounded_norm = norm.round(increment, options.rounding_mode)?;

        let diff_norm = rounded_norm.0 - norm.0;
        let (whole_days, _) = norm.div_rem_days();
        let (rounded_whole_days, rounded_remainder) = rounded_norm.div_rem_days();

        let day_delta = rounded_whole_days - whole_days;
        let expanded = day_delta != 0 && day_delta.signum() == norm.0.signum();

        let (days, remainder) = if options.largest_unit >= TemporalUnit::Day {
            (
                i64::try_from(rounded_whole_days).map_err(|_| {
                    TemporalError::range().with_message("Rounded days exceed a valid range.")
                })?,
                NormalizedTimeDuration(rounded_remainder),
            )
        } else {
            (0, rounded_norm)
        };

        Ok(NudgeRecord {
            normalized: NormalizedDurationRecord::new(self.date().with_days(days), remainder)?,
            nudge_epoch_ns: dest_epoch_ns + diff_norm,
            expanded,
        })
    }

    /// `BubbleRelativeDuration`
    ///
    /// Carries a rounded-up unit into coarser units, up to `largest_unit`,
    /// for as long as the nudged end point reaches the next coarser boundary.
    fn bubble_relative_duration(
        &self,
        sign: Sign,
        nudge_epoch_ns: i128,
        anchor: Option<&PlainDate>,
        largest_unit: TemporalUnit,
        smallest_unit: TemporalUnit,
    ) -> TemporalResult<NormalizedDurationRecord> {
        let mut duration = *self;
        if smallest_unit == TemporalUnit::Year {
            return Ok(duration);
        }
        let sign_value = i64::from(sign.as_sign_multiplier());

        let mut unit = smallest_unit.larger();
        while unit <= largest_unit {
            // Weeks only take part when they are the largest unit.
            if unit == TemporalUnit::Week && largest_unit != TemporalUnit::Week {
                unit = unit.larger();
                continue;
            }

            let date = duration.date();
            let end_duration = match unit {
                TemporalUnit::Year => DateDuration::new(date.years + sign_value, 0, 0, 0)?,
                TemporalUnit::Month => {
                    DateDuration::new(date.years, date.months + sign_value, 0, 0)?
                }
                TemporalUnit::Week => {
                    DateDuration::new(date.years, date.months, date.weeks + sign_value, 0)?
                }
                _ => return Err(TemporalError::assert()),
            };

            let end_epoch_ns = epoch_ns_after(anchor.temporal_unwrap()?, &end_duration)?;
            let beyond_end = nudge_epoch_ns - end_epoch_ns;
            if beyond_end.signum() == -i128::from(sign_value) {
                break;
            }
            duration = NormalizedDurationRecord::from_date_duration(end_duration)?;

            if unit == TemporalUnit::Year {
                break;
            }
            unit = unit.larger();
        }

        Ok(duration)
    }

    /// `RoundRelativeDuration`
    ///
    /// Rounds this record, whose end point is `dest_epoch_ns`, to the resolved
    /// options. Calendar units require an `anchor` to measure their lengths.
    pub(crate) fn round_relative_duration(
        &self,
        dest_epoch_ns: i128,
        anchor: Option<&PlainDate>,
        options: ResolvedRoundingOptions,
    ) -> TemporalResult<Duration> {
        let sign = self.sign();

        let nudge_result = if options.smallest_unit.is_calendar_unit() {
            let anchor = anchor.ok_or(
                TemporalError::range().with_message("Rounding calendar units requires relativeTo."),
            )?;
            self.nudge_calendar_unit(sign, dest_epoch_ns, anchor, options)?
        } else {
            self.nudge_to_day_or_time(dest_epoch_ns, options)?
        };

        let mut duration = nudge_result.normalized;
        if nudge_result.expanded && options.smallest_unit != TemporalUnit::Week {
            let start_unit = options.smallest_unit.max(TemporalUnit::Day);
            duration = duration.bubble_relative_duration(
                sign,
                nudge_result.nudge_epoch_ns,
                anchor,
                options.largest_unit,
                start_unit,
            )?;
        }

        let largest_unit = if options.largest_unit.is_date_unit() {
            TemporalUnit::Hour
        } else {
            options.largest_unit
        };
        let (_, time) =
            TimeDuration::from_normalized(duration.normalized_time_duration(), largest_unit)?;

        let date = duration.date();
        Duration::new(
            date.years,
            date.months,
            date.weeks,
            date.days,
            time.hours,
            time.minutes,
            time.seconds,
            time.milliseconds,
            time.microseconds,
            time.nanoseconds,
        )
    }
}
