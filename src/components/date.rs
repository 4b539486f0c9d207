//! This module implements `PlainDate` and any directly related algorithms.

use alloc::string::String;
use core::{cmp::Ordering, fmt};

use tinystr::TinyAsciiStr;
use writeable::Writeable;

use crate::{
    components::{
        calendar::Calendar,
        duration::normalized::NormalizedDurationRecord,
        Duration, PlainYearMonth,
    },
    formatting::{FormattableCalendar, FormattableDate, FormattableIxdtf},
    iso::IsoDate,
    options::{
        ArithmeticOverflow, CalendarName, DifferenceSettings, ResolvedRoundingOptions,
        TemporalUnit,
    },
    TemporalError, TemporalResult, NS_PER_DAY,
};

/// A partial date record.
///
/// `year` is the calendar's arithmetic year unless `era` is set, in which
/// case it is the year within that era.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    /// A potentially set `year` field.
    pub year: Option<i32>,
    /// A potentially set `month` field.
    pub month: Option<u8>,
    /// A potentially set `day` field.
    pub day: Option<u8>,
    /// A potentially set `era` field.
    pub era: Option<TinyAsciiStr<16>>,
}

impl PartialDate {
    /// Returns whether every field is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The native Rust implementation of `Temporal.PlainDate`.
///
/// ```rust
/// use temporal_calendar::{options::DifferenceSettings, Calendar, PlainDate};
///
/// let start = PlainDate::try_new(2019, 3, 1, Calendar::default()).unwrap();
/// let end = PlainDate::try_new(2019, 1, 31, Calendar::default()).unwrap();
///
/// let mut settings = DifferenceSettings::default();
/// settings.largest_unit = Some(temporal_calendar::options::TemporalUnit::Month);
/// let difference = start.difference(&end, settings).unwrap();
/// assert_eq!(difference.months(), -1);
/// assert_eq!(difference.days(), -1);
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainDate {
    pub(crate) iso: IsoDate,
    calendar: Calendar,
}

// ==== Private API ====

impl PlainDate {
    /// Create a new `PlainDate` with the date values and calendar slot.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate, calendar: Calendar) -> Self {
        Self { iso, calendar }
    }

    /// Returns the calendar fields of this date as a complete partial record.
    fn to_partial(self) -> PartialDate {
        PartialDate {
            year: Some(self.year()),
            month: Some(self.month()),
            day: Some(self.day()),
            era: None,
        }
    }
}

// ==== Public API ====

impl PlainDate {
    /// Creates a new `PlainDate`, rejecting any invalid ISO fields.
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8, calendar: Calendar) -> TemporalResult<Self> {
        Self::new_with_overflow(year, month, day, calendar, ArithmeticOverflow::Reject)
    }

    /// Creates a new `PlainDate` from ISO fields, regulated with `overflow`.
    #[inline]
    pub fn new_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        calendar: Calendar,
        overflow: ArithmeticOverflow,
    ) -> TemporalResult<Self> {
        let iso = IsoDate::new_with_overflow(year, month, day, overflow)?;
        Ok(Self::new_unchecked(iso, calendar))
    }

    /// Creates a `PlainDate` from calendar fields.
    ///
    /// Equivalent: `CalendarDateFromFields`
    pub fn from_partial(
        partial: PartialDate,
        calendar: Calendar,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        calendar.date_from_fields(&partial, overflow.unwrap_or_default())
    }

    /// Creates a `PlainDate` from a count of days since `1970-01-01`.
    #[inline]
    pub fn from_epoch_days(epoch_days: i64, calendar: Calendar) -> TemporalResult<Self> {
        calendar.date_from_epoch_days(epoch_days)
    }

    /// Creates a new `PlainDate` with the fields of `partial` replacing the
    /// calendar fields of this date.
    ///
    /// Throws a `TypeError` if `partial` is empty, or if it holds an era
    /// without a year.
    pub fn with(
        &self,
        partial: PartialDate,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        if partial.is_empty() {
            return Err(TemporalError::r#type().with_message("A PartialDate must have a field."));
        }
        if partial.era.is_some() && partial.year.is_none() {
            return Err(TemporalError::r#type().with_message("An era requires an era year."));
        }
        let current = self.to_partial();
        let merged = PartialDate {
            year: partial.year.or(current.year),
            month: partial.month.or(current.month),
            day: partial.day.or(current.day),
            era: partial.era,
        };
        self.calendar
            .date_from_fields(&merged, overflow.unwrap_or_default())
    }

    /// Returns the same day viewed through another calendar.
    #[inline]
    #[must_use]
    pub fn with_calendar(&self, calendar: Calendar) -> Self {
        Self::new_unchecked(self.iso, calendar)
    }

    /// Returns this date's ISO year value.
    #[inline]
    #[must_use]
    pub const fn iso_year(&self) -> i32 {
        self.iso.year
    }

    /// Returns this date's ISO month value.
    #[inline]
    #[must_use]
    pub const fn iso_month(&self) -> u8 {
        self.iso.month
    }

    /// Returns this date's ISO day value.
    #[inline]
    #[must_use]
    pub const fn iso_day(&self) -> u8 {
        self.iso.day
    }

    /// Returns a reference to this date's calendar.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the identifier of this date's calendar.
    #[inline]
    #[must_use]
    pub fn calendar_id(&self) -> &'static str {
        self.calendar.identifier()
    }

    /// Returns the days since `1970-01-01`.
    #[inline]
    #[must_use]
    pub fn to_epoch_days(&self) -> i64 {
        self.calendar.epoch_days_for(self)
    }

    /// Adds a `Duration` to the current date.
    ///
    /// The time fields of `duration` are balanced into days first, dropping
    /// any remainder smaller than a day. `overflow` defaults to `constrain`.
    pub fn add(
        &self,
        duration: &Duration,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        let days = duration.balance_time_into_days()?;
        let date_duration = duration.date().with_days(days);
        self.calendar
            .date_add(self, &date_duration, overflow.unwrap_or_default())
    }

    /// Subtracts a `Duration` from the current date.
    #[inline]
    pub fn subtract(
        &self,
        duration: &Duration,
        overflow: Option<ArithmeticOverflow>,
    ) -> TemporalResult<Self> {
        self.add(&duration.negated(), overflow)
    }

    /// Returns the `Duration` from this date to `other`, rounded with `settings`.
    ///
    /// The smallest unit defaults to days and the largest unit to the larger
    /// of days and the smallest unit. Time units are rejected.
    pub fn difference(&self, other: &Self, settings: DifferenceSettings) -> TemporalResult<Duration> {
        if self.calendar != other.calendar {
            #[cfg(feature = "log")]
            log::debug!(
                "rejected difference between the {} and {} calendars",
                self.calendar,
                other.calendar
            );
            return Err(TemporalError::range()
                .with_message("Calendars are for difference operation are not the same."));
        }

        let resolved = ResolvedRoundingOptions::from_diff_settings(
            settings,
            TemporalUnit::Day,
            TemporalUnit::Day,
            TemporalUnit::Day,
        )?;

        let result = self.calendar.date_until(self, other, resolved.largest_unit)?;
        if resolved.is_noop() {
            return Ok(Duration::from_date_duration(&result));
        }

        let dest_epoch_ns = i128::from(other.to_epoch_days()) * i128::from(NS_PER_DAY);
        NormalizedDurationRecord::from_date_duration(result)?.round_relative_duration(
            dest_epoch_ns,
            Some(self),
            resolved,
        )
    }

    /// Returns whether this date and `other` are the same day in the same calendar.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Compares the ISO fields of two dates, breaking ties by calendar identifier.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.iso
            .cmp(&other.iso)
            .then_with(|| self.calendar_id().cmp(other.calendar_id()))
    }
}

// ==== Calendar-derived Public API ====

impl PlainDate {
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

    /// Returns the calendar day value.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.calendar.day(&self.iso)
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

    /// Returns the calendar day of week value.
    #[must_use]
    pub fn day_of_week(&self) -> u16 {
        self.calendar.day_of_week(&self.iso)
    }

    /// Returns the calendar day of year value.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.calendar.day_of_year(&self.iso)
    }

    /// Returns the calendar week of year value.
    #[must_use]
    pub fn week_of_year(&self) -> u16 {
        self.calendar.week_of_year(&self.iso)
    }

    /// Returns the calendar days in week value.
    #[must_use]
    pub fn days_in_week(&self) -> u16 {
        self.calendar.days_in_week(&self.iso)
    }

    /// Returns the calendar days in month value.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.calendar.days_in_month(&self.iso)
    }

    /// Returns the calendar days in year value.
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        self.calendar.days_in_year(&self.iso)
    }

    /// Returns the calendar months in year value.
    #[must_use]
    pub fn months_in_year(&self) -> u8 {
        self.calendar.months_in_year(&self.iso)
    }

    /// Returns returns whether the date in a leap year for the given calendar.
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.calendar.in_leap_year(&self.iso)
    }
}

// ==== ToX Methods ====

impl PlainDate {
    /// Converts the current `PlainDate` into a `PlainYearMonth`
    pub fn to_year_month(&self) -> TemporalResult<PlainYearMonth> {
        let partial = PartialDate {
            day: None,
            ..self.to_partial()
        };
        self.calendar
            .year_month_from_fields(&partial, ArithmeticOverflow::Constrain)
    }

    /// Returns the `YYYY-MM-DD` string of this date with the calendar
    /// annotation written according to `display_calendar`.
    #[inline]
    pub fn to_ixdtf_string(&self, display_calendar: CalendarName) -> String {
        self.to_ixdtf_writeable(display_calendar)
            .write_to_string()
            .into()
    }

    #[inline]
    pub fn to_ixdtf_writeable(&self, display_calendar: CalendarName) -> impl Writeable + '_ {
        FormattableIxdtf {
            date: FormattableDate(self.iso.year, self.iso.month, self.iso.day),
            calendar: FormattableCalendar {
                show: display_calendar,
                calendar: self.calendar.identifier(),
            },
        }
    }
}

// ==== Trait impls ====

impl PartialOrd for PlainDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlainDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_ixdtf_writeable(CalendarName::Auto).write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};
    use core::{cmp::Ordering, str::FromStr};

    use tinystr::tinystr;

    use super::{PartialDate, PlainDate};
    use crate::{
        components::{calendar::Calendar, Duration},
        error::ErrorKind,
        options::{
            ArithmeticOverflow, CalendarName, DifferenceSettings, RoundingIncrement,
            TemporalRoundingMode, TemporalUnit,
        },
    };

    fn iso(year: i32, month: u8, day: u8) -> PlainDate {
        PlainDate::try_new(year, month, day, Calendar::default()).unwrap()
    }

    fn days(days: i64) -> Duration {
        Duration::new(0, 0, 0, days, 0, 0, 0, 0, 0, 0).unwrap()
    }

    fn settings(largest: Option<TemporalUnit>, smallest: Option<TemporalUnit>) -> DifferenceSettings {
        DifferenceSettings {
            largest_unit: largest,
            smallest_unit: smallest,
            ..Default::default()
        }
    }

    #[test]
    fn new_date_limits() {
        assert!(PlainDate::try_new(-271_821, 4, 19, Calendar::default()).is_ok());
        assert!(PlainDate::try_new(-271_821, 4, 18, Calendar::default()).is_err());
        assert!(PlainDate::try_new(275_760, 9, 13, Calendar::default()).is_ok());
        assert!(PlainDate::try_new(275_760, 9, 14, Calendar::default()).is_err());
        assert!(PlainDate::try_new(2021, 2, 29, Calendar::default()).is_err());

        let constrained = PlainDate::new_with_overflow(
            2021,
            2,
            30,
            Calendar::default(),
            ArithmeticOverflow::Constrain,
        )
        .unwrap();
        assert_eq!(constrained, iso(2021, 2, 28));
    }

    #[test]
    fn add_month_constrains_day() {
        let one_month = Duration::new(0, 1, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
        let result = iso(2019, 1, 31).add(&one_month, None).unwrap();
        assert_eq!(result.to_string(), "2019-02-28");

        let err = iso(2019, 1, 31)
            .add(&one_month, Some(ArithmeticOverflow::Reject))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let leap_year = Duration::new(1, 0, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(
            iso(2020, 2, 29).add(&leap_year, None).unwrap(),
            iso(2021, 2, 28)
        );
    }

    #[test]
    fn add_balances_time_into_days() {
        let duration = Duration::new(0, 0, 0, 1, 47, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(
            iso(2020, 12, 31).add(&duration, None).unwrap(),
            iso(2021, 1, 2)
        );

        let duration = Duration::new(0, 0, 0, 0, -23, -59, 0, 0, 0, 0).unwrap();
        assert_eq!(
            iso(2021, 1, 1).add(&duration, None).unwrap(),
            iso(2021, 1, 1)
        );

        let weeks = Duration::new(0, 0, 2, 1, 0, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(
            iso(2021, 1, 1).subtract(&weeks, None).unwrap(),
            iso(2020, 12, 17)
        );
    }

    #[test]
    fn add_out_of_range() {
        let err = iso(275_760, 9, 13).add(&days(1), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = iso(-271_821, 4, 19).subtract(&days(1), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn add_subtract_round_trip() {
        let dates = [
            iso(2019, 1, 31),
            iso(2020, 2, 29),
            iso(-1, 12, 31),
            iso(1970, 1, 1),
        ];
        for date in dates {
            for n in [-100_000, -366, -1, 0, 1, 29, 365, 1_000_000] {
                let moved = date.add(&days(n), None).unwrap();
                assert!(moved.subtract(&days(n), None).unwrap().equals(&date));
            }
        }
    }

    #[test]
    fn difference_example() {
        let result = iso(2019, 3, 1)
            .difference(&iso(2019, 1, 31), settings(Some(TemporalUnit::Month), None))
            .unwrap();
        assert_eq!(result, Duration::new(0, -1, 0, -1, 0, 0, 0, 0, 0, 0).unwrap());

        let result = iso(2019, 1, 31)
            .difference(&iso(2019, 3, 1), settings(Some(TemporalUnit::Month), None))
            .unwrap();
        assert_eq!(result, Duration::new(0, 1, 0, 1, 0, 0, 0, 0, 0, 0).unwrap());

        let result = iso(2019, 1, 31)
            .difference(&iso(2019, 3, 1), DifferenceSettings::default())
            .unwrap();
        assert_eq!(result, days(29));
    }

    #[test]
    fn difference_inverse() {
        let dates = [
            iso(2019, 1, 31),
            iso(2020, 2, 29),
            iso(2021, 3, 1),
            iso(1900, 12, 31),
            iso(2400, 2, 29),
        ];
        for a in dates {
            for b in dates {
                for largest in [
                    TemporalUnit::Day,
                    TemporalUnit::Week,
                    TemporalUnit::Month,
                    TemporalUnit::Year,
                ] {
                    let difference = a.difference(&b, settings(Some(largest), None)).unwrap();
                    assert!(a.add(&difference, None).unwrap().equals(&b));
                    assert!(difference.sign() as i8 == a.compare(&b).reverse() as i8);
                }
            }
        }
    }

    #[test]
    fn difference_inverse_across_calendars() {
        // ISO dates that land on month ends and leap days in the other calendars.
        let iso_dates = [
            iso(2019, 3, 13),
            iso(2020, 3, 13),
            iso(2020, 3, 14),
            iso(2021, 1, 31),
            iso(1900, 3, 13),
            iso(1582, 10, 15),
            iso(-44, 3, 15),
        ];
        for id in ["julian", "buddhist", "roc"] {
            let calendar = Calendar::from_str(id).unwrap();
            let dates: Vec<PlainDate> = iso_dates
                .iter()
                .map(|date| date.with_calendar(calendar))
                .collect();
            for a in &dates {
                for b in &dates {
                    for largest in [
                        TemporalUnit::Year,
                        TemporalUnit::Month,
                        TemporalUnit::Week,
                        TemporalUnit::Day,
                    ] {
                        let difference =
                            a.difference(b, settings(Some(largest), None)).unwrap();
                        let sum = a.add(&difference, None).unwrap();
                        assert!(sum.equals(b), "{id}: {a} + {difference} != {b} ({largest})");
                    }
                }
            }
        }
    }

    #[test]
    fn difference_rejects_time_units_and_calendars() {
        let err = iso(2019, 1, 1)
            .difference(&iso(2019, 2, 1), settings(None, Some(TemporalUnit::Hour)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = iso(2019, 1, 1)
            .difference(&iso(2019, 2, 1), settings(Some(TemporalUnit::Hour), None))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = iso(2019, 1, 1)
            .difference(
                &iso(2019, 2, 1),
                settings(Some(TemporalUnit::Day), Some(TemporalUnit::Month)),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let julian = Calendar::from_str("julian").unwrap();
        let err = iso(2019, 1, 1)
            .difference(&iso(2019, 2, 1).with_calendar(julian), DifferenceSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn difference_with_rounding() {
        let mut options = settings(None, Some(TemporalUnit::Month));
        let result = iso(2019, 1, 31).difference(&iso(2019, 3, 1), options).unwrap();
        assert_eq!(result.months(), 1);
        assert_eq!(result.days(), 0);

        // February 15 is exactly halfway through February in both directions.
        let result = iso(2021, 2, 1).difference(&iso(2021, 2, 15), options).unwrap();
        assert_eq!(result.months(), 1);
        let result = iso(2021, 3, 1).difference(&iso(2021, 2, 15), options).unwrap();
        assert_eq!(result.months(), -1);

        options.rounding_mode = Some(TemporalRoundingMode::Trunc);
        let result = iso(2021, 2, 1).difference(&iso(2021, 2, 15), options).unwrap();
        assert!(result.is_zero());

        let mut options = settings(Some(TemporalUnit::Year), Some(TemporalUnit::Month));
        let result = iso(2020, 1, 1).difference(&iso(2020, 12, 20), options).unwrap();
        assert_eq!(result, Duration::new(1, 0, 0, 0, 0, 0, 0, 0, 0, 0).unwrap());

        options.smallest_unit = Some(TemporalUnit::Day);
        options.increment = Some(RoundingIncrement::try_new(10).unwrap());
        let result = iso(2020, 1, 1).difference(&iso(2020, 1, 16), options).unwrap();
        assert_eq!(result.days(), 20);
    }

    #[test]
    fn compare_is_total() {
        let julian = Calendar::from_str("julian").unwrap();
        let mut dates = Vec::from([
            iso(2021, 3, 1),
            iso(2019, 1, 31),
            iso(2021, 3, 1).with_calendar(julian),
            iso(-5, 6, 7),
        ]);
        dates.sort();
        assert_eq!(dates[0], iso(-5, 6, 7));
        assert_eq!(dates[1], iso(2019, 1, 31));
        // "iso8601" sorts before "julian".
        assert_eq!(dates[2], iso(2021, 3, 1));
        assert_eq!(dates[3].calendar_id(), "julian");

        for a in &dates {
            for b in &dates {
                assert_eq!(a.compare(b), b.compare(a).reverse());
                assert_eq!(a.equals(b), a.compare(b) == Ordering::Equal);
            }
        }
        assert!(!iso(2021, 3, 1).equals(&iso(2021, 3, 1).with_calendar(julian)));
    }

    #[test]
    fn calendar_fields() {
        let date = iso(2021, 1, 3);
        assert_eq!(date.year(), 2021);
        assert_eq!(date.day_of_week(), 7);
        assert_eq!(date.week_of_year(), 53);
        assert_eq!(date.days_in_month(), 31);
        assert_eq!(date.era(), None);

        let roc = date.with_calendar(Calendar::from_str("roc").unwrap());
        assert_eq!(roc.year(), 110);
        assert_eq!(roc.era(), Some(tinystr!(16, "roc")));
        assert_eq!(roc.era_year(), Some(110));
        assert_eq!(roc.months_in_year(), 12);
        assert!(!roc.in_leap_year());
    }

    #[test]
    fn from_partial_and_with() {
        let partial = PartialDate {
            year: Some(2021),
            month: Some(2),
            day: Some(30),
            era: None,
        };
        let date = PlainDate::from_partial(partial, Calendar::default(), None).unwrap();
        assert_eq!(date, iso(2021, 2, 28));
        let err = PlainDate::from_partial(
            partial,
            Calendar::default(),
            Some(ArithmeticOverflow::Reject),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let with_day = PartialDate {
            day: Some(31),
            ..Default::default()
        };
        assert_eq!(
            iso(2021, 1, 15).with(with_day, None).unwrap(),
            iso(2021, 1, 31)
        );
        assert!(iso(2021, 4, 15)
            .with(with_day, Some(ArithmeticOverflow::Reject))
            .is_err());

        let err = iso(2021, 1, 15).with(PartialDate::default(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let gregory = Calendar::from_str("gregory").unwrap();
        let bce = PartialDate {
            year: Some(10),
            era: Some(tinystr!(16, "bce")),
            ..Default::default()
        };
        let date = iso(2021, 1, 15).with_calendar(gregory).with(bce, None).unwrap();
        assert_eq!(date.iso_year(), -9);
        assert_eq!(date.era_year(), Some(10));
    }

    #[test]
    fn epoch_days_conversion() {
        let date = PlainDate::from_epoch_days(0, Calendar::default()).unwrap();
        assert_eq!(date, iso(1970, 1, 1));
        assert_eq!(iso(2000, 3, 1).to_epoch_days(), 11_017);
        assert!(PlainDate::from_epoch_days(100_000_001, Calendar::default()).is_err());
    }

    #[test]
    fn date_to_string() {
        assert_eq!(iso(2019, 2, 28).to_string(), "2019-02-28");
        assert_eq!(iso(-1, 1, 1).to_string(), "-000001-01-01");
        assert_eq!(iso(10_000, 1, 1).to_string(), "+010000-01-01");
        assert_eq!(
            iso(2019, 2, 28).to_ixdtf_string(CalendarName::Always),
            "2019-02-28[u-ca=iso8601]"
        );
        let buddhist = iso(2019, 2, 28).with_calendar(Calendar::from_str("buddhist").unwrap());
        assert_eq!(buddhist.to_string(), "2019-02-28[u-ca=buddhist]");
        assert_eq!(
            buddhist.to_ixdtf_string(CalendarName::Critical),
            "2019-02-28[!u-ca=buddhist]"
        );
        assert_eq!(buddhist.to_ixdtf_string(CalendarName::Never), "2019-02-28");
    }

    #[test]
    fn date_to_year_month() {
        let year_month = iso(2021, 2, 15).to_year_month().unwrap();
        assert_eq!(year_month.iso_year(), 2021);
        assert_eq!(year_month.iso_month(), 2);
        assert_eq!(year_month.reference_day(), 1);
    }
}
