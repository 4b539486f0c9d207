//! This module implements the IXDTF string output of dates, year-months,
//! and durations.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{options::CalendarName, Sign};

const ISO_CALENDAR: &str = "iso8601";

impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableCalendar<'_>);
impl_display_with_writeable!(FormattableIxdtf<'_>);
impl_display_with_writeable!(FormattableYearMonth<'_>);
impl_display_with_writeable!(FormattableDuration);

#[inline]
fn year_length(year: i32) -> usize {
    if (0..=9999).contains(&year) {
        4
    } else {
        7
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let (digits, _) = u32_to_digits(y.unsigned_abs());
    write_digit_slice(&digits[3..], sink)
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Splits `value` into nine decimal digits, most significant first, and
/// returns them with the index one past the last non-zero digit.
fn u32_to_digits(mut value: u32) -> ([u8; 9], usize) {
    let mut output = [0; 9];
    let mut precision = 0;
    let mut i = 9;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

fn write_digit_slice<W: core::fmt::Write + ?Sized>(digits: &[u8], sink: &mut W) -> core::fmt::Result {
    for digit in digits {
        digit.write_to(sink)?;
    }
    Ok(())
}

fn checked_write_u64_with_suffix<W: core::fmt::Write + ?Sized>(
    val: u64,
    suffix: char,
    sink: &mut W,
) -> core::fmt::Result {
    if val == 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

/// An ISO year, month, and day written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6 + year_length(self.0))
    }
}

/// The `[u-ca=<id>]` annotation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableCalendar<'a> {
    pub show: CalendarName,
    pub calendar: &'a str,
}

impl FormattableCalendar<'_> {
    fn is_shown(&self) -> bool {
        match self.show {
            CalendarName::Never => false,
            CalendarName::Auto => self.calendar != ISO_CALENDAR,
            CalendarName::Always | CalendarName::Critical => true,
        }
    }

    /// Whether a year-month must carry its reference day.
    fn requires_reference_day(&self) -> bool {
        self.calendar != ISO_CALENDAR || self.is_shown()
    }
}

impl Writeable for FormattableCalendar<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if !self.is_shown() {
            return Ok(());
        }
        sink.write_char('[')?;
        if self.show == CalendarName::Critical {
            sink.write_char('!')?;
        }
        sink.write_str("u-ca=")?;
        sink.write_str(self.calendar)?;
        sink.write_char(']')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if !self.is_shown() {
            return LengthHint::exact(0);
        }
        let critical = (self.show == CalendarName::Critical) as usize;
        LengthHint::exact(7 + critical + self.calendar.len())
    }
}

/// A calendar date with its annotation, e.g. `2021-03-01[u-ca=julian]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableIxdtf<'a> {
    pub date: FormattableDate,
    pub calendar: FormattableCalendar<'a>,
}

impl Writeable for FormattableIxdtf<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        self.calendar.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date.writeable_length_hint() + self.calendar.writeable_length_hint()
    }
}

/// A year-month, written as `YYYY-MM` unless the reference day is needed
/// to identify a non-ISO month or the annotation is shown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableYearMonth<'a> {
    pub date: FormattableDate,
    pub calendar: FormattableCalendar<'a>,
}

impl Writeable for FormattableYearMonth<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.date.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.date.1, sink)?;
        if self.calendar.requires_reference_day() {
            sink.write_char('-')?;
            write_padded_u8(self.date.2, sink)?;
        }

        self.calendar.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let base_length = self.calendar.writeable_length_hint()
            + LengthHint::exact(year_length(self.date.0) + 3);
        if self.calendar.requires_reference_day() {
            return base_length + LengthHint::exact(3);
        }
        base_length
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableDateDuration {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
}

/// The time part of a duration with the sub-second units folded into the
/// seconds as a nanosecond fraction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableTimeDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub fraction: u32,
}

/// An ISO 8601 duration, e.g. `-P1Y2M3W4DT5H6M7.008S`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormattableDuration {
    pub sign: Sign,
    pub date: Option<FormattableDateDuration>,
    pub time: FormattableTimeDuration,
}

impl Writeable for FormattableDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.sign == Sign::Negative {
            sink.write_char('-')?;
        }
        sink.write_char('P')?;
        if let Some(date) = self.date {
            checked_write_u64_with_suffix(date.years, 'Y', sink)?;
            checked_write_u64_with_suffix(date.months, 'M', sink)?;
            checked_write_u64_with_suffix(date.weeks, 'W', sink)?;
            checked_write_u64_with_suffix(date.days, 'D', sink)?;
        }

        let FormattableTimeDuration {
            hours,
            minutes,
            seconds,
            fraction,
        } = self.time;
        // A zero duration is written as `PT0S`.
        let unit_below_minute = self.date.is_none() && hours == 0 && minutes == 0;
        let write_second = seconds != 0 || fraction != 0 || unit_below_minute;

        if hours != 0 || minutes != 0 || write_second {
            sink.write_char('T')?;
        }
        checked_write_u64_with_suffix(hours, 'H', sink)?;
        checked_write_u64_with_suffix(minutes, 'M', sink)?;
        if write_second {
            seconds.write_to(sink)?;
            if fraction != 0 {
                sink.write_char('.')?;
                let (digits, precision) = u32_to_digits(fraction);
                write_digit_slice(&digits[..precision], sink)?;
            }
            sink.write_char('S')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use writeable::Writeable;

    use super::{
        FormattableCalendar, FormattableDate, FormattableDateDuration, FormattableDuration,
        FormattableIxdtf, FormattableTimeDuration, FormattableYearMonth,
    };
    use crate::{options::CalendarName, Sign};

    /// Checks the written string, its `Display` form, and that the length
    /// hint brackets the written length.
    fn assert_writes<W: Writeable + core::fmt::Display>(writeable: W, expected: &str) {
        let written = writeable.write_to_string();
        assert_eq!(written, expected);
        assert_eq!(writeable.to_string(), expected);
        let hint = writeable.writeable_length_hint();
        assert!(hint.0 <= written.len(), "{expected}");
        assert!(hint.1.map_or(true, |upper| written.len() <= upper), "{expected}");
    }

    #[test]
    fn padded_years() {
        assert_writes(FormattableDate(2019, 1, 9), "2019-01-09");
        assert_writes(FormattableDate(12, 12, 31), "0012-12-31");
        assert_writes(FormattableDate(-1, 1, 1), "-000001-01-01");
        assert_writes(FormattableDate(10_000, 1, 1), "+010000-01-01");
        assert_writes(FormattableDate(-271_821, 4, 19), "-271821-04-19");
    }

    #[test]
    fn calendar_annotations() {
        let julian = |show| FormattableCalendar {
            show,
            calendar: "julian",
        };
        let iso = |show| FormattableCalendar {
            show,
            calendar: "iso8601",
        };
        assert_writes(julian(CalendarName::Auto), "[u-ca=julian]");
        assert_writes(julian(CalendarName::Critical), "[!u-ca=julian]");
        assert_writes(julian(CalendarName::Never), "");
        assert_writes(iso(CalendarName::Auto), "");
        assert_writes(iso(CalendarName::Always), "[u-ca=iso8601]");

        let ixdtf = FormattableIxdtf {
            date: FormattableDate(2021, 3, 1),
            calendar: julian(CalendarName::Auto),
        };
        assert_writes(ixdtf, "2021-03-01[u-ca=julian]");
    }

    #[test]
    fn year_month_reference_day() {
        let year_month = |calendar, show| FormattableYearMonth {
            date: FormattableDate(2021, 2, 14),
            calendar: FormattableCalendar { show, calendar },
        };
        assert_writes(year_month("iso8601", CalendarName::Auto), "2021-02");
        assert_writes(year_month("iso8601", CalendarName::Never), "2021-02");
        assert_writes(
            year_month("iso8601", CalendarName::Always),
            "2021-02-14[u-ca=iso8601]"
        );
        assert_writes(year_month("julian", CalendarName::Never), "2021-02-14");
        assert_writes(
            year_month("julian", CalendarName::Auto),
            "2021-02-14[u-ca=julian]"
        );
    }

    #[test]
    fn duration_strings() {
        let time = |hours, minutes, seconds, fraction| FormattableTimeDuration {
            hours,
            minutes,
            seconds,
            fraction,
        };
        let zero = FormattableDuration {
            sign: Sign::Zero,
            date: None,
            time: time(0, 0, 0, 0),
        };
        assert_eq!(zero.to_string(), "PT0S");

        let date_only = FormattableDuration {
            sign: Sign::Negative,
            date: Some(FormattableDateDuration {
                years: 0,
                months: 0,
                weeks: 0,
                days: 1,
            }),
            time: time(0, 0, 0, 0),
        };
        assert_eq!(date_only.write_to_string(), "-P1D");

        let fraction = FormattableDuration {
            sign: Sign::Positive,
            date: None,
            time: time(0, 5, 0, 1_500_000),
        };
        assert_eq!(fraction.to_string(), "PT5M0.0015S");
    }
}
