//! This module implements the calendar protocol and the built-in calendars.
//!
//! A calendar maps its own `(year, month, day)` fields to and from a linear
//! day ordinal, the days since `1970-01-01`. Every date and year-month
//! stores ISO fields and derives calendar fields on read through a
//! [`Calendar`].

use core::{fmt, str::FromStr};

use tinystr::TinyAsciiStr;

use crate::{
    components::{duration::DateDuration, PartialDate, PlainDate, PlainYearMonth},
    iso::IsoDate,
    options::{ArithmeticOverflow, TemporalUnit},
    utils, TemporalError, TemporalResult, MAX_EPOCH_DAYS, MIN_EPOCH_DAYS,
};

mod builtin;
mod types;

pub use types::CalendarFields;

/// The capabilities a calendar system provides to the date engine.
///
/// A calendar must express every date as a `(year, month, day)` triple with
/// a monotonic day ordinal. The provided methods implement field regulation
/// and arithmetic generically on top of the required queries, and may be
/// overridden when a calendar can do better.
pub trait CalendarProtocol: fmt::Debug + Sync {
    /// Returns the identifier of this calendar, e.g. `"iso8601"`.
    fn identifier(&self) -> &'static str;

    /// Returns the number of months in `year`.
    fn months_in_year(&self, year: i32) -> u8;

    /// Returns the number of days in `month` of `year`.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Returns whether `year` is a leap year.
    fn in_leap_year(&self, year: i32) -> bool;

    /// Returns the days since `1970-01-01` (ISO) for regulated `fields`.
    fn epoch_days_from_fields(&self, fields: CalendarFields) -> i64;

    /// Returns the calendar fields for a count of days since `1970-01-01` (ISO).
    fn fields_from_epoch_days(&self, epoch_days: i64) -> CalendarFields;

    fn days_in_year(&self, year: i32) -> u16 {
        (1..=self.months_in_year(year))
            .map(|month| u16::from(self.days_in_month(year, month)))
            .sum()
    }

    fn days_in_week(&self) -> u16 {
        7
    }

    /// Returns the era and era year for `year`, if this calendar uses eras.
    fn era_for_year(&self, _year: i32) -> Option<(TinyAsciiStr<16>, i32)> {
        None
    }

    /// Resolves an era and era year into this calendar's arithmetic year.
    fn year_from_era(&self, _era: TinyAsciiStr<16>, _era_year: i32) -> TemporalResult<i32> {
        Err(TemporalError::range().with_message("calendar does not support eras."))
    }

    /// `BalanceYearMonth` for a calendar with a fixed number of months.
    fn balance_year_month(&self, year: i64, month: i64) -> TemporalResult<(i32, u8)> {
        let months = i64::from(self.months_in_year(0));
        let balanced_year = year + (month - 1).div_euclid(months);
        let balanced_month = (month - 1).rem_euclid(months) + 1;
        let balanced_year = i32::try_from(balanced_year)
            .map_err(|_| TemporalError::range().with_message("year exceeds a valid range."))?;
        Ok((balanced_year, balanced_month as u8))
    }

    /// Regulates `fields` according to `overflow`.
    fn regulate_fields(
        &self,
        fields: CalendarFields,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<CalendarFields> {
        if fields.month == 0 || fields.day == 0 {
            return Err(TemporalError::range().with_message("month and day must be positive."));
        }
        let months_in_year = self.months_in_year(fields.year);
        match overflow {
            ArithmeticOverflow::Constrain => {
                let month = fields.month.min(months_in_year);
                let day = fields.day.min(self.days_in_month(fields.year, month));
                Ok(CalendarFields::new(fields.year, month, day))
            }
            ArithmeticOverflow::Reject => {
                if fields.month > months_in_year
                    || fields.day > self.days_in_month(fields.year, fields.month)
                {
                    return Err(
                        TemporalError::range().with_message("date fields are not in a valid range.")
                    );
                }
                Ok(fields)
            }
        }
    }

    /// Adds `duration` to `fields`, returning the resulting epoch days.
    ///
    /// Years are added first, then months, regulating the day with
    /// `overflow`, then weeks and days as a flat day offset.
    fn add_to_fields(
        &self,
        fields: CalendarFields,
        duration: &DateDuration,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<i64> {
        let (year, month) = self.balance_year_month(
            i64::from(fields.year) + duration.years,
            i64::from(fields.month) + duration.months,
        )?;
        let intermediate =
            self.regulate_fields(CalendarFields::new(year, month, fields.day), overflow)?;

        let days = duration
            .weeks
            .checked_mul(7)
            .and_then(|days| days.checked_add(duration.days))
            .ok_or(TemporalError::range().with_message("days exceed a valid range."))?;
        self.epoch_days_from_fields(intermediate)
            .checked_add(days)
            .ok_or(TemporalError::range().with_message("days exceed a valid range."))
    }

    /// Returns the exact difference from `one` to `two` with no unit larger
    /// than `largest_unit`.
    fn difference_fields(
        &self,
        one: CalendarFields,
        two: CalendarFields,
        largest_unit: TemporalUnit,
    ) -> TemporalResult<DateDuration> {
        let sign = -(one.cmp(&two) as i8);
        if sign == 0 {
            return Ok(DateDuration::default());
        }

        let mut years = 0;
        let mut months = 0;
        if largest_unit == TemporalUnit::Year {
            // Start one year short of the year difference to save iterations.
            let mut candidate_years = two.year - one.year;
            if candidate_years != 0 {
                candidate_years -= i32::from(sign);
            }
            while !CalendarFields::new(one.year + candidate_years, one.month, one.day)
                .surpasses(&two, sign)
            {
                years = candidate_years;
                candidate_years += i32::from(sign);
            }
        }

        if largest_unit == TemporalUnit::Year || largest_unit == TemporalUnit::Month {
            let months_in_year = i64::from(self.months_in_year(0));
            let mut candidate_months = i64::from(two.year - (one.year + years)) * months_in_year
                + i64::from(two.month)
                - i64::from(one.month);
            if candidate_months != 0 {
                candidate_months -= i64::from(sign);
            }
            loop {
                let (year, month) = self.balance_year_month(
                    i64::from(one.year + years),
                    i64::from(one.month) + candidate_months,
                )?;
                if CalendarFields::new(year, month, one.day).surpasses(&two, sign) {
                    break;
                }
                months = candidate_months;
                candidate_months += i64::from(sign);
            }
        }

        let (year, month) =
            self.balance_year_month(i64::from(one.year + years), i64::from(one.month) + months)?;
        let constrained = self.regulate_fields(
            CalendarFields::new(year, month, one.day),
            ArithmeticOverflow::Constrain,
        )?;
        let days = self.epoch_days_from_fields(two) - self.epoch_days_from_fields(constrained);

        let (weeks, days) = if largest_unit == TemporalUnit::Week {
            (days / 7, days % 7)
        } else {
            (0, days)
        };

        DateDuration::new(i64::from(years), months, weeks, days)
    }
}

/// The registry of built-in calendars.
static BUILTIN_CALENDARS: [&dyn CalendarProtocol; 5] = [
    &builtin::ISO8601,
    &builtin::GREGORIAN,
    &builtin::BUDDHIST,
    &builtin::ROC,
    &builtin::JULIAN,
];

/// A handle to a calendar system.
///
/// `Calendar` is a cheap `Copy` reference to a static calendar. Two
/// calendars are equal when their identifiers are equal.
#[derive(Debug, Clone, Copy)]
pub struct Calendar(&'static dyn CalendarProtocol);

impl Default for Calendar {
    fn default() -> Self {
        Self::ISO
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Calendar {}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Calendar {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_utf8(s.as_bytes())
    }
}

impl Calendar {
    /// The ISO 8601 calendar.
    pub const ISO: Self = Self(&builtin::ISO8601);

    /// Creates a `Calendar` from any static calendar implementation.
    #[must_use]
    pub const fn new(protocol: &'static dyn CalendarProtocol) -> Self {
        Self(protocol)
    }

    /// Looks up a built-in calendar by its case-insensitive identifier.
    pub fn from_utf8(identifier: &[u8]) -> TemporalResult<Self> {
        BUILTIN_CALENDARS
            .iter()
            .find(|cal| cal.identifier().as_bytes().eq_ignore_ascii_case(identifier))
            .map(|cal| Self(*cal))
            .ok_or_else(|| {
                #[cfg(feature = "log")]
                log::debug!(
                    "unknown calendar identifier: {}",
                    core::str::from_utf8(identifier).unwrap_or("<invalid utf-8>")
                );
                TemporalError::range().with_message("Not a builtin calendar.")
            })
    }

    /// Returns the identifiers of every built-in calendar.
    pub fn builtin_identifiers() -> impl Iterator<Item = &'static str> {
        BUILTIN_CALENDARS.iter().map(|cal| cal.identifier())
    }

    /// Returns the calendar identifier.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        self.0.identifier()
    }

    /// Returns whether the current calendar is `ISO`
    #[inline]
    #[must_use]
    pub fn is_iso(&self) -> bool {
        self.identifier() == builtin::ISO8601.identifier()
    }

    #[inline]
    pub(crate) fn fields_for(&self, iso: &IsoDate) -> CalendarFields {
        self.0.fields_from_epoch_days(iso.to_epoch_days())
    }

    /// Returns the days since `1970-01-01` for calendar fields.
    #[inline]
    pub(crate) fn epoch_days_from_fields(&self, fields: CalendarFields) -> i64 {
        self.0.epoch_days_from_fields(fields)
    }

    /// Adds `duration` to `fields` in this calendar's field space.
    ///
    /// Neither the start nor the result is checked against the supported
    /// range of dates.
    pub(crate) fn add_to_fields(
        &self,
        fields: CalendarFields,
        duration: &DateDuration,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<CalendarFields> {
        let epoch_days = self.0.add_to_fields(fields, duration, overflow)?;
        Ok(self.0.fields_from_epoch_days(epoch_days))
    }

    /// The field space difference behind `date_until`.
    pub(crate) fn fields_until(
        &self,
        one: CalendarFields,
        two: CalendarFields,
        largest_unit: TemporalUnit,
    ) -> TemporalResult<DateDuration> {
        if !largest_unit.is_date_unit() {
            return Err(TemporalError::range()
                .with_message("largestUnit must be a date unit for a date difference."));
        }
        self.0.difference_fields(one, two, largest_unit)
    }

    fn resolve_year(&self, partial: &PartialDate) -> TemporalResult<i32> {
        let year = partial
            .year
            .ok_or(TemporalError::r#type().with_message("Required year field is empty."))?;
        match partial.era {
            Some(era) => self.0.year_from_era(era, year),
            None => Ok(year),
        }
    }
}

// ==== Calendar operations ====

impl Calendar {
    /// `CalendarDateFromFields`
    pub fn date_from_fields(
        &self,
        partial: &PartialDate,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<PlainDate> {
        let year = self.resolve_year(partial)?;
        let month = partial
            .month
            .ok_or(TemporalError::r#type().with_message("Required month field is empty."))?;
        let day = partial
            .day
            .ok_or(TemporalError::r#type().with_message("Required day field is empty."))?;

        let fields = self
            .0
            .regulate_fields(CalendarFields::new(year, month, day), overflow)?;
        self.date_from_epoch_days(self.0.epoch_days_from_fields(fields))
    }

    /// `CalendarYearMonthFromFields`
    ///
    /// The day defaults to 1 and is only used to validate the fields. The
    /// resulting year-month is anchored on the first day of the month.
    pub fn year_month_from_fields(
        &self,
        partial: &PartialDate,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<PlainYearMonth> {
        let year = self.resolve_year(partial)?;
        let month = partial
            .month
            .ok_or(TemporalError::r#type().with_message("Required month field is empty."))?;
        let day = partial.day.unwrap_or(1);

        let fields = self
            .0
            .regulate_fields(CalendarFields::new(year, month, day), overflow)?;
        self.year_month_for(fields.year, fields.month)
    }

    /// Returns the year-month for a regulated calendar year and month.
    pub(crate) fn year_month_for(&self, year: i32, month: u8) -> TemporalResult<PlainYearMonth> {
        let first = self
            .0
            .epoch_days_from_fields(CalendarFields::new(year, month, 1));
        let last = first + i64::from(self.0.days_in_month(year, month)) - 1;
        // A year-month is valid when any of its days is in range.
        if last < MIN_EPOCH_DAYS || first > MAX_EPOCH_DAYS {
            return Err(
                TemporalError::range().with_message("year-month is not within a valid range.")
            );
        }
        let (iso_year, iso_month, iso_day) = utils::gregorian_date_from_epoch_days(first);
        Ok(PlainYearMonth::new_unchecked(
            IsoDate::new_unchecked(iso_year, iso_month, iso_day),
            *self,
        ))
    }

    /// `CalendarDateAdd`
    pub fn date_add(
        &self,
        date: &PlainDate,
        duration: &DateDuration,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<PlainDate> {
        let fields = self.add_to_fields(self.fields_for(&date.iso), duration, overflow)?;
        self.date_from_epoch_days(self.0.epoch_days_from_fields(fields))
    }

    /// `CalendarDateUntil`
    pub fn date_until(
        &self,
        one: &PlainDate,
        two: &PlainDate,
        largest_unit: TemporalUnit,
    ) -> TemporalResult<DateDuration> {
        self.fields_until(
            self.fields_for(&one.iso),
            self.fields_for(&two.iso),
            largest_unit,
        )
    }

    /// Returns the date in this calendar for a count of days since `1970-01-01`.
    pub fn date_from_epoch_days(&self, epoch_days: i64) -> TemporalResult<PlainDate> {
        Ok(PlainDate::new_unchecked(
            IsoDate::from_epoch_days(epoch_days)?,
            *self,
        ))
    }

    /// Returns the days since `1970-01-01` for `date`.
    #[must_use]
    pub fn epoch_days_for(&self, date: &PlainDate) -> i64 {
        date.iso.to_epoch_days()
    }

    /// `CalendarEra`
    #[must_use]
    pub fn era(&self, iso_date: &IsoDate) -> Option<TinyAsciiStr<16>> {
        self.0
            .era_for_year(self.fields_for(iso_date).year)
            .map(|(era, _)| era)
    }

    /// `CalendarEraYear`
    #[must_use]
    pub fn era_year(&self, iso_date: &IsoDate) -> Option<i32> {
        self.0
            .era_for_year(self.fields_for(iso_date).year)
            .map(|(_, era_year)| era_year)
    }

    /// `CalendarYear`
    #[must_use]
    pub fn year(&self, iso_date: &IsoDate) -> i32 {
        self.fields_for(iso_date).year
    }

    /// `CalendarMonth`
    #[must_use]
    pub fn month(&self, iso_date: &IsoDate) -> u8 {
        self.fields_for(iso_date).month
    }

    /// `CalendarDay`
    #[must_use]
    pub fn day(&self, iso_date: &IsoDate) -> u8 {
        self.fields_for(iso_date).day
    }

    /// `CalendarDayOfWeek`, where Monday is 1 and Sunday is 7.
    #[must_use]
    pub fn day_of_week(&self, iso_date: &IsoDate) -> u16 {
        utils::epoch_days_to_day_of_week(iso_date.to_epoch_days())
    }

    /// `CalendarDayOfYear`
    #[must_use]
    pub fn day_of_year(&self, iso_date: &IsoDate) -> u16 {
        let epoch_days = iso_date.to_epoch_days();
        let year = self.0.fields_from_epoch_days(epoch_days).year;
        let start = self.0.epoch_days_from_fields(CalendarFields::new(year, 1, 1));
        (epoch_days - start + 1) as u16
    }

    /// `CalendarWeekOfYear`
    ///
    /// Weeks start on Monday and the first week of a year is the week that
    /// contains its first Thursday.
    #[must_use]
    pub fn week_of_year(&self, iso_date: &IsoDate) -> u16 {
        let year = self.year(iso_date);
        let day_of_year = i32::from(self.day_of_year(iso_date));
        let day_of_week = i32::from(self.day_of_week(iso_date));

        let week = (day_of_year - day_of_week + 10).div_euclid(7);
        if week < 1 {
            return self.weeks_in_year(year - 1);
        }
        if week > i32::from(self.weeks_in_year(year)) {
            return 1;
        }
        week as u16
    }

    fn weeks_in_year(&self, year: i32) -> u16 {
        let start = self.0.epoch_days_from_fields(CalendarFields::new(year, 1, 1));
        let start_day_of_week = utils::epoch_days_to_day_of_week(start);
        let long_year = start_day_of_week == 4
            || (start_day_of_week == 3 && self.0.days_in_year(year) > 365);
        if long_year {
            53
        } else {
            52
        }
    }

    /// `CalendarDaysInWeek`
    #[must_use]
    pub fn days_in_week(&self, _iso_date: &IsoDate) -> u16 {
        self.0.days_in_week()
    }

    /// `CalendarDaysInMonth`
    #[must_use]
    pub fn days_in_month(&self, iso_date: &IsoDate) -> u8 {
        let fields = self.fields_for(iso_date);
        self.0.days_in_month(fields.year, fields.month)
    }

    /// `CalendarDaysInYear`
    #[must_use]
    pub fn days_in_year(&self, iso_date: &IsoDate) -> u16 {
        self.0.days_in_year(self.year(iso_date))
    }

    /// `CalendarMonthsInYear`
    #[must_use]
    pub fn months_in_year(&self, iso_date: &IsoDate) -> u8 {
        self.0.months_in_year(self.year(iso_date))
    }

    /// `CalendarInLeapYear`
    #[must_use]
    pub fn in_leap_year(&self, iso_date: &IsoDate) -> bool {
        self.0.in_leap_year(self.year(iso_date))
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use tinystr::tinystr;

    use super::{Calendar, CalendarFields};
    use crate::{
        components::{DateDuration, PartialDate},
        error::ErrorKind,
        iso::IsoDate,
        options::{ArithmeticOverflow, TemporalUnit},
    };

    fn partial(year: i32, month: u8, day: u8) -> PartialDate {
        PartialDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            era: None,
        }
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(Calendar::from_str("iso8601").unwrap(), Calendar::default());
        assert_eq!(Calendar::from_str("GREGORY").unwrap().identifier(), "gregory");
        assert_eq!(
            Calendar::from_str("japanese").unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(Calendar::builtin_identifiers().count(), 5);
        assert!(Calendar::ISO.is_iso());
        assert!(!Calendar::from_str("julian").unwrap().is_iso());
    }

    #[test]
    fn date_from_fields_overflow() {
        let iso = Calendar::default();
        let date = iso
            .date_from_fields(&partial(2021, 2, 30), ArithmeticOverflow::Constrain)
            .unwrap();
        assert_eq!(date.iso_year(), 2021);
        assert_eq!(date.iso_month(), 2);
        assert_eq!(date.iso_day(), 28);

        let err = iso
            .date_from_fields(&partial(2021, 2, 30), ArithmeticOverflow::Reject)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let constrained = iso
            .date_from_fields(&partial(2021, 13, 1), ArithmeticOverflow::Constrain)
            .unwrap();
        assert_eq!(constrained.iso_month(), 12);
    }

    #[test]
    fn date_from_fields_shape() {
        let iso = Calendar::default();
        let mut missing_day = partial(2021, 2, 1);
        missing_day.day = None;
        let err = iso
            .date_from_fields(&missing_day, ArithmeticOverflow::Constrain)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let mut with_era = partial(1, 1, 1);
        with_era.era = Some(tinystr!(16, "bce"));
        let err = iso
            .date_from_fields(&with_era, ArithmeticOverflow::Constrain)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let gregory = Calendar::from_str("gregory").unwrap();
        let date = gregory
            .date_from_fields(&with_era, ArithmeticOverflow::Reject)
            .unwrap();
        assert_eq!(date.iso_year(), 0);
        assert_eq!(date.era(), Some(tinystr!(16, "bce")));
        assert_eq!(date.era_year(), Some(1));
    }

    #[test]
    fn julian_fields() {
        let julian = Calendar::from_str("julian").unwrap();
        let date = julian
            .date_from_fields(&partial(1582, 10, 5), ArithmeticOverflow::Reject)
            .unwrap();
        assert_eq!(
            (date.iso_year(), date.iso_month(), date.iso_day()),
            (1582, 10, 15)
        );
        assert_eq!(date.year(), 1582);
        assert_eq!(date.day(), 5);

        // 1900 is a Julian leap year but not an ISO leap year.
        let leap_day = julian
            .date_from_fields(&partial(1900, 2, 29), ArithmeticOverflow::Reject)
            .unwrap();
        assert_eq!(leap_day.iso_month(), 3);
        assert_eq!(leap_day.iso_day(), 13);
        assert!(leap_day.in_leap_year());
    }

    #[test]
    fn calendar_arithmetic() {
        let iso = Calendar::default();
        let jan_31 = iso
            .date_from_fields(&partial(2019, 1, 31), ArithmeticOverflow::Reject)
            .unwrap();
        let one_month = DateDuration::new(0, 1, 0, 0).unwrap();
        let result = iso
            .date_add(&jan_31, &one_month, ArithmeticOverflow::Constrain)
            .unwrap();
        assert_eq!(result.iso_day(), 28);
        assert!(iso
            .date_add(&jan_31, &one_month, ArithmeticOverflow::Reject)
            .is_err());

        let mar_1 = iso
            .date_from_fields(&partial(2019, 3, 1), ArithmeticOverflow::Reject)
            .unwrap();
        let diff = iso.date_until(&jan_31, &mar_1, TemporalUnit::Month).unwrap();
        assert_eq!(diff, DateDuration::new(0, 1, 0, 1).unwrap());

        let diff = iso.date_until(&mar_1, &jan_31, TemporalUnit::Month).unwrap();
        assert_eq!(diff, DateDuration::new(0, -1, 0, -1).unwrap());

        let diff = iso.date_until(&jan_31, &mar_1, TemporalUnit::Week).unwrap();
        assert_eq!(diff, DateDuration::new(0, 0, 4, 1).unwrap());

        assert!(iso.date_until(&jan_31, &mar_1, TemporalUnit::Hour).is_err());
    }

    #[test]
    fn long_differences() {
        let iso = Calendar::default();
        let start = iso
            .date_from_fields(&partial(-200_000, 2, 29), ArithmeticOverflow::Reject)
            .unwrap();
        let end = iso
            .date_from_fields(&partial(200_000, 3, 1), ArithmeticOverflow::Reject)
            .unwrap();
        let diff = iso.date_until(&start, &end, TemporalUnit::Year).unwrap();
        assert_eq!(diff, DateDuration::new(400_000, 0, 0, 1).unwrap());

        let diff = iso.date_until(&start, &end, TemporalUnit::Month).unwrap();
        assert_eq!(diff, DateDuration::new(0, 4_800_000, 0, 1).unwrap());
    }

    #[test]
    fn calendar_queries() {
        let iso = Calendar::default();
        // 2021-01-03 is a Sunday in the last ISO week of 2020.
        let date = IsoDate::new_unchecked(2021, 1, 3);
        assert_eq!(iso.day_of_week(&date), 7);
        assert_eq!(iso.day_of_year(&date), 3);
        assert_eq!(iso.week_of_year(&date), 53);
        // 2019-12-30 is a Monday in the first ISO week of 2020.
        assert_eq!(iso.week_of_year(&IsoDate::new_unchecked(2019, 12, 30)), 1);
        assert_eq!(iso.week_of_year(&IsoDate::new_unchecked(2021, 6, 15)), 24);

        assert_eq!(iso.days_in_year(&IsoDate::new_unchecked(2020, 6, 1)), 366);
        assert_eq!(iso.days_in_month(&IsoDate::new_unchecked(2021, 2, 1)), 28);
        assert_eq!(iso.months_in_year(&date), 12);
        assert_eq!(iso.days_in_week(&date), 7);

        let buddhist = Calendar::from_str("buddhist").unwrap();
        assert_eq!(buddhist.year(&date), 2564);
        assert_eq!(
            buddhist.fields_for(&date),
            CalendarFields::new(2564, 1, 3)
        );
    }

    #[test]
    fn year_month_limits() {
        let iso = Calendar::default();
        assert!(iso.year_month_for(-271_821, 4).is_ok());
        assert!(iso.year_month_for(-271_821, 3).is_err());
        assert!(iso.year_month_for(275_760, 9).is_ok());
        assert!(iso.year_month_for(275_760, 10).is_err());
    }
}
