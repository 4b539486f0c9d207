//! This module implements `PlainYearMonth` and any directly related algorithms.

use alloc::string::String;
use core::{cmp::Ordering, fmt};

use tinystr::TinyAsciiStr;
use writeable::Writeable;

use crate::{
    components::{
        calendar::{Calendar, CalendarFields},
        duration::normalized::NormalizedDurationRecord,
        Duration, PartialDate, PlainDate,
    },
    formatting::{FormattableCalendar, FormattableDate, FormattableYearMonth},
    iso::{self, IsoDate},
    options::{
        ArithmeticOverflow, CalendarName, DifferenceSettings, ResolvedRoundingOptions,
        RoundingIncrement, TemporalUnit,
    },
    Sign, TemporalError, TemporalResult, NS_PER_DAY,
};

/// The native Rust implementation of `Temporal.PlainYearMonth`.
///
/// A year-month is stored as the ISO date of a reference day, which by
/// default is the first day of the calendar month. The reference day only
/// decides which calendar month the value names.
///
/// ```rust
/// use temporal_calendar::{Calendar, Duration, PlainYearMonth};
///
/// let january = PlainYearMonth::try_new(2021, 1, None, Calendar::default()).unwrap();
/// let one_month = Duration::new(0, 1, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
/// let december = january.subtract(&one_month, None).unwrap();
/// assert_eq!(december.to_string(), "2020-12");
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainYearMonth {
    pub(crate) iso: IsoDate,
    calendar: Calendar,
}

// ==== Private API ====

impl PlainYearMonth {
    /// Creates an unvalidated `PlainYearMonth`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }

    /// Returns the calendar year and month of this year-month.
    fn calendar_fields(&self) -> CalendarFields {
        self.calendar.fields_for(&self.iso)
    }

    /// Returns the date for `day` of this year-month's calendar month.
    fn date_on_day(&self, day: u8, overflow: ArithmeticOverflow) -> TemporalResult<PlainDate> {
        let fields = self.calendar_fields();
        let partial = PartialDate {
            year: Some(fields.year),
            month: Some(fields.month),
            day: Some(day),
            era: None,
        };
        self.calendar.date_from_fields(&partial, overflow)
    }

    /// `AddDurationToOrSubtractDurationFromPlainYearMonth`
    ///
    /// The anchor day is moved in field space, since the first or last day
    /// of a year-month at the limits may lie outside the supported range.
    /// Only the resulting year-month is range checked.
    fn add_duration(
        &self,
        duration: &Duration,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<Self> {
        let days = duration.balance_time_into_days()?;
        let date_duration = duration.date().with_days(days);

        // Moving backwards starts from the last day of the month so that
        // whole months never skip past a shorter month.
        let day = if date_duration.sign() == Sign::Negative {
            self.days_in_month()
        } else {
            1
        };
        let fields = self.calendar_fields();
        let start = CalendarFields::new(fields.year, fields.month, day);
        let result =
            self.calendar
                .add_to_fields(start, &date_duration, ArithmeticOverflow::Constrain)?;

        let partial = PartialDate {
            year: Some(result.year),
            month: Some(result.month),
            day: None,
            era: None,
        };
        self.calendar.year_month_from_fields(&partial, overflow)
    }
}

// ==== Public API ====

impl PlainYearMonth {
    /// Creates a new `PlainYearMonth` from ISO fields, rejecting invalid values.
    ///
    /// `reference_day` defaults to 1.
    pub fn try_new(
        year: i32,
        month: u8,
        reference_day: Option<u8>,
        calendar: Calendar,
    ) -> TemporalResult<Self> {
        let iso = IsoDate::new_unchecked(year, month, reference_day.unwrap_or(1));
        if !iso.is_valid() {
            return Err(TemporalError::range().with_message("not a valid ISO year-month."));
        }
        if !iso::year_month_within_limits(year, month) {
            return Err(
                TemporalError::range().with_message("year-month is not within a valid range.")
            );
        }
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Creates a `PlainYearMonth` from calendar fields. The `day` field is
    /// optional and only validated.
    ///
    /// Equivalent: `CalendarYearMonthFromFields`
    pub fn from_partial(
        partial: PartialDate,
        calendar: Calendar,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        calendar.year_month_from_fields(&partial, overflow.unwrap_or_default())
    }

    /// Creates a new `PlainYearMonth` with the year, month, and era of
    /// `partial` replacing the current fields.
    pub fn with(
        &self,
        partial: PartialDate,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        if partial.year.is_none() && partial.month.is_none() {
            return Err(TemporalError::r#type()
                .with_message("A year-month requires a year or month field to merge."));
        }
        if partial.era.is_some() && partial.year.is_none() {
            return Err(TemporalError::r#type().with_message("An era requires an era year."));
        }
        let fields = self.calendar_fields();
        let merged = PartialDate {
            year: partial.year.or(Some(fields.year)),
            month: partial.month.or(Some(fields.month)),
            day: None,
            era: partial.era,
        };
        self.calendar
            .year_month_from_fields(&merged, overflow.unwrap_or_default())
    }

    /// Returns the iso year value for this `YearMonth`.
    #[inline]
    #[must_use]
    pub fn iso_year(&self) -> i32 {
        self.iso.year
    }

    /// Returns the iso month value for this `YearMonth`.
    #[inline]
    #[must_use]
    pub fn iso_month(&self) -> u8 {
        self.iso.month
    }

    /// Returns the ISO day of the reference date.
    #[inline]
    #[must_use]
    pub fn reference_day(&self) -> u8 {
        self.iso.day
    }

    /// Returns a reference to this year-month's calendar.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the identifier of this year-month's calendar.
    #[inline]
    #[must_use]
    pub fn calendar_id(&self) -> &'static str {
        self.calendar.identifier()
    }

    /// Returns the calendar year value.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.calendar.year(&self.iso)
    }

    /// Returns the calendar month value.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.calendar.month(&self.iso)
    }

    /// Returns the calendar era, if the calendar has eras.
    #[must_use]
    pub fn era(&self) -> Option<TinyAsciiStr<16>> {
        self.calendar.era(&self.iso)
    }

    /// Returns the year within the calendar era, if the calendar has eras.
    #[must_use]
    pub fn era_year(&self) -> Option<i32> {
        self.calendar.era_year(&self.iso)
    }

    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.calendar.days_in_month(&self.iso)
    }

    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        self.calendar.days_in_year(&self.iso)
    }

    #[must_use]
    pub fn months_in_year(&self) -> u8 {
        self.calendar.months_in_year(&self.iso)
    }

    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.calendar.in_leap_year(&self.iso)
    }

    /// Adds a `Duration` to the current year-month.
    pub fn add(
        &self,
        duration: &Duration,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        self.add_duration(duration, overflow.unwrap_or_default())
    }

    /// Subtracts a `Duration` from the current year-month.
    pub fn subtract(
        &self,
        duration: &Duration,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        self.add_duration(&duration.negated(), overflow.unwrap_or_default())
    }

    /// Returns the `Duration` from this year-month to `other` in years and
    /// months.
    ///
    /// The smallest unit defaults to months and the largest unit to years.
    /// Units smaller than a month are rejected.
    pub fn difference(&self, other: &Self, settings: DifferenceSettings) -> TemporalResult<Duration> {
        if self.calendar != other.calendar {
            #[cfg(feature = "log")]
            log::debug!(
                "rejected year-month difference between the {} and {} calendars",
                self.calendar,
                other.calendar
            );
            return Err(TemporalError::range()
                .with_message("Calendars for difference operation are not the same."));
        }

        let resolved = ResolvedRoundingOptions::from_diff_settings(
            settings,
            TemporalUnit::Month,
            TemporalUnit::Year,
            TemporalUnit::Month,
        )?;

        let this_fields = self.calendar_fields();
        let other_fields = other.calendar_fields();
        let this_first = CalendarFields::new(this_fields.year, this_fields.month, 1);
        let other_first = CalendarFields::new(other_fields.year, other_fields.month, 1);
        let result = self
            .calendar
            .fields_until(this_first, other_first, resolved.largest_unit)?;

        if resolved.smallest_unit == TemporalUnit::Month
            && resolved.increment == RoundingIncrement::ONE
        {
            return Ok(Duration::from_date_duration(&result));
        }

        // Rounding is anchored at the first day of this month, which must
        // be a supported date.
        let this_date = self.date_on_day(1, ArithmeticOverflow::Reject)?;
        let dest_epoch_ns = i128::from(self.calendar.epoch_days_from_fields(other_first))
            * i128::from(NS_PER_DAY);
        NormalizedDurationRecord::from_date_duration(result)?.round_relative_duration(
            dest_epoch_ns,
            Some(&this_date),
            resolved,
        )
    }

    /// Returns whether both year-months have the same reference date and calendar.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Compares the reference ISO dates, breaking ties by calendar identifier.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.iso
            .cmp(&other.iso)
            .then_with(|| self.calendar_id().cmp(other.calendar_id()))
    }

    /// Returns the date for `day` of this calendar month, rejecting a day
    /// that the month does not have.
    pub fn to_date_on_day(&self, day: u8) -> TemporalResult<PlainDate> {
        self.date_on_day(day, ArithmeticOverflow::Reject)
    }

    /// Returns the `YYYY-MM` string of this year-month. The reference day is
    /// written too whenever the calendar annotation is shown or the calendar
    /// is not ISO.
    #[inline]
    pub fn to_ixdtf_string(&self, display_calendar: CalendarName) -> String {
        self.to_ixdtf_writeable(display_calendar)
            .write_to_string()
            .into()
    }

    #[inline]
    pub fn to_ixdtf_writeable(&self, display_calendar: CalendarName) -> impl Writeable + '_ {
        FormattableYearMonth {
            date: FormattableDate(self.iso.year, self.iso.month, self.iso.day),
            calendar: FormattableCalendar {
                show: display_calendar,
                calendar: self.calendar.identifier(),
            },
        }
    }
}

// ==== Trait impls ====

impl PartialOrd for PlainYearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlainYearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for PlainYearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_ixdtf_writeable(CalendarName::Auto).write_to(f)
    }
}
