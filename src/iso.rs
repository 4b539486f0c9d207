//! This module implements the internal ISO field slots.
//!
//! An `IsoDate` represents the `[[ISOYear]]`, `[[ISOMonth]]`, and `[[ISODay]]`
//! internal slots. It is the canonical linear representation of every date
//! regardless of the calendar the date is viewed through.

use crate::{
    error::TemporalError, options::ArithmeticOverflow, utils, TemporalResult, MAX_EPOCH_DAYS,
    MIN_EPOCH_DAYS,
};

/// `IsoDate` serves as a record for the `[[ISOYear]]`, `[[ISOMonth]]`,
/// and `[[ISODay]]` internal fields.
///
/// These fields are used for the `PlainDate` object and the
/// `PlainYearMonth` object.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    /// The epoch, `1970-01-01`.
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, regulating the month and day according to
    /// `overflow` and validating the result against the supported range.
    pub(crate) fn new_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<Self> {
        if month == 0 || day == 0 {
            return Err(TemporalError::range().with_message("month and day must be positive."));
        }
        let id = match overflow {
            ArithmeticOverflow::Constrain => {
                let month = month.min(12);
                let day = constrain_iso_day(year, month, day);
                Self::new_unchecked(year, month, day)
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_date(year, month, day) {
                    return Err(TemporalError::range().with_message("not a valid ISO date."));
                }
                Self::new_unchecked(year, month, day)
            }
        };

        id.is_valid_day_range()?;
        Ok(id)
    }

    /// Creates the `IsoDate` for a count of days since `1970-01-01`.
    pub(crate) fn from_epoch_days(epoch_days: i64) -> TemporalResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(TemporalError::range().with_message("Not in a valid ISO day range."));
        }
        let (year, month, day) = utils::gregorian_date_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Throws a `RangeError` if the date is outside of the supported range,
    /// `-271821-04-19` through `+275760-09-13`.
    pub(crate) fn is_valid_day_range(&self) -> TemporalResult<()> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&self.to_epoch_days()) {
            return Err(TemporalError::range().with_message("Not in a valid ISO day range."));
        }
        Ok(())
    }

    /// Equivalent to `IsoDateToEpochDays`
    #[inline]
    pub fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns if the current `IsoDate` is valid.
    pub(crate) fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }
}

/// Returns whether an ISO year and month fall within the supported
/// year-month range, `-271821-04` through `+275760-09`.
#[inline]
pub(crate) fn year_month_within_limits(year: i32, month: u8) -> bool {
    (-271_821, 4) <= (year, month) && (year, month) <= (275_760, 9)
}

#[inline]
// Determines if the month and day are valid for the given year.
fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    is_valid_iso_day(year, month, day)
}

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: u8, day: u8) -> u8 {
    let days_in_month = utils::iso_days_in_month(year, month);
    day.clamp(1, days_in_month)
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: u8, day: u8) -> bool {
    let days_in_month = utils::iso_days_in_month(year, month);
    (1..=days_in_month).contains(&day)
}
