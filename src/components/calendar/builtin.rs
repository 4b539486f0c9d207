//! The built-in calendar systems.

use tinystr::{tinystr, TinyAsciiStr};

use crate::{utils, TemporalError, TemporalResult};

use super::{types::CalendarFields, CalendarProtocol};

/// A calendar that shares the proleptic Gregorian months and leap year
/// rule, counting years from its own epoch.
#[derive(Debug)]
pub(crate) struct GregorianYearOffset {
    identifier: &'static str,
    /// The calendar year minus the ISO year.
    year_offset: i32,
    /// The era for years counted forward from year 1.
    era: Option<TinyAsciiStr<16>>,
    /// The era for years before year 1, counted backwards.
    inverse_era: Option<TinyAsciiStr<16>>,
}

impl GregorianYearOffset {
    #[inline]
    fn iso_year(&self, year: i32) -> i32 {
        year.saturating_sub(self.year_offset)
    }
}

pub(crate) static ISO8601: GregorianYearOffset = GregorianYearOffset {
    identifier: "iso8601",
    year_offset: 0,
    era: None,
    inverse_era: None,
};

pub(crate) static GREGORIAN: GregorianYearOffset = GregorianYearOffset {
    identifier: "gregory",
    year_offset: 0,
    era: Some(tinystr!(16, "ce")),
    inverse_era: Some(tinystr!(16, "bce")),
};

pub(crate) static BUDDHIST: GregorianYearOffset = GregorianYearOffset {
    identifier: "buddhist",
    year_offset: 543,
    era: Some(tinystr!(16, "be")),
    inverse_era: None,
};

pub(crate) static ROC: GregorianYearOffset = GregorianYearOffset {
    identifier: "roc",
    year_offset: -1911,
    era: Some(tinystr!(16, "roc")),
    inverse_era: Some(tinystr!(16, "broc")),
};

impl CalendarProtocol for GregorianYearOffset {
    fn identifier(&self) -> &'static str {
        self.identifier
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        utils::iso_days_in_month(self.iso_year(year), month)
    }

    fn in_leap_year(&self, year: i32) -> bool {
        utils::is_gregorian_leap_year(self.iso_year(year))
    }

    fn epoch_days_from_fields(&self, fields: CalendarFields) -> i64 {
        utils::epoch_days_from_gregorian_date(self.iso_year(fields.year), fields.month, fields.day)
    }

    fn fields_from_epoch_days(&self, epoch_days: i64) -> CalendarFields {
        let (year, month, day) = utils::gregorian_date_from_epoch_days(epoch_days);
        CalendarFields::new(year.saturating_add(self.year_offset), month, day)
    }

    fn era_for_year(&self, year: i32) -> Option<(TinyAsciiStr<16>, i32)> {
        match (self.era, self.inverse_era) {
            (Some(_), Some(inverse)) if year < 1 => Some((inverse, 1 - year)),
            (Some(era), _) => Some((era, year)),
            (None, _) => None,
        }
    }

    fn year_from_era(&self, era: TinyAsciiStr<16>, era_year: i32) -> TemporalResult<i32> {
        let era = era.to_ascii_lowercase();
        if self.era == Some(era) {
            Ok(era_year)
        } else if self.inverse_era == Some(era) {
            Ok(1i32.saturating_sub(era_year))
        } else {
            Err(TemporalError::range().with_message("era is not valid for this calendar."))
        }
    }
}

/// The proleptic Julian calendar.
#[derive(Debug)]
pub(crate) struct Julian;

pub(crate) static JULIAN: Julian = Julian;

impl CalendarProtocol for Julian {
    fn identifier(&self) -> &'static str {
        "julian"
    }

    fn months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        utils::days_in_solar_month(month, utils::is_julian_leap_year(year))
    }

    fn in_leap_year(&self, year: i32) -> bool {
        utils::is_julian_leap_year(year)
    }

    fn epoch_days_from_fields(&self, fields: CalendarFields) -> i64 {
        utils::epoch_days_from_julian_date(fields.year, fields.month, fields.day)
    }

    fn fields_from_epoch_days(&self, epoch_days: i64) -> CalendarFields {
        let (year, month, day) = utils::julian_date_from_epoch_days(epoch_days);
        CalendarFields::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::{BUDDHIST, GREGORIAN, ISO8601, JULIAN, ROC};
    use crate::components::calendar::{types::CalendarFields, CalendarProtocol};
    use tinystr::tinystr;

    #[test]
    fn offset_years() {
        let epoch = CalendarFields::new(1970, 1, 1);
        assert_eq!(ISO8601.epoch_days_from_fields(epoch), 0);
        assert_eq!(
            BUDDHIST.fields_from_epoch_days(0),
            CalendarFields::new(2513, 1, 1)
        );
        assert_eq!(ROC.fields_from_epoch_days(0), CalendarFields::new(59, 1, 1));
        assert_eq!(
            ROC.epoch_days_from_fields(CalendarFields::new(59, 1, 1)),
            0
        );
        // 2020 is a leap year in every Gregorian based calendar.
        assert!(BUDDHIST.in_leap_year(2563));
        assert!(ROC.in_leap_year(109));
        assert_eq!(ROC.days_in_month(109, 2), 29);
    }

    #[test]
    fn eras() {
        assert_eq!(ISO8601.era_for_year(2020), None);
        assert_eq!(GREGORIAN.era_for_year(2020), Some((tinystr!(16, "ce"), 2020)));
        assert_eq!(GREGORIAN.era_for_year(0), Some((tinystr!(16, "bce"), 1)));
        assert_eq!(ROC.era_for_year(-1), Some((tinystr!(16, "broc"), 2)));
        assert_eq!(BUDDHIST.era_for_year(-5), Some((tinystr!(16, "be"), -5)));

        assert_eq!(GREGORIAN.year_from_era(tinystr!(16, "BCE"), 1).unwrap(), 0);
        assert_eq!(ROC.year_from_era(tinystr!(16, "roc"), 110).unwrap(), 110);
        assert!(BUDDHIST.year_from_era(tinystr!(16, "ce"), 1).is_err());
        assert!(ISO8601.year_from_era(tinystr!(16, "ce"), 1).is_err());
    }

    #[test]
    fn julian_months() {
        assert!(JULIAN.in_leap_year(1900));
        assert_eq!(JULIAN.days_in_month(1900, 2), 29);
        assert_eq!(JULIAN.days_in_year(1900), 366);
        assert_eq!(JULIAN.fields_from_epoch_days(0), CalendarFields::new(1969, 12, 19));
    }
}
