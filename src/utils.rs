//! Utility date equations for the built-in calendars.

// ==== Begin Date Equations ====

/// Days in a 400 year Gregorian cycle.
const DAYS_PER_GREGORIAN_ERA: i64 = 146_097;
/// Days in a 4 year Julian cycle.
const DAYS_PER_JULIAN_ERA: i64 = 1_461;
/// Days from `0000-03-01` to `1970-01-01` in the proleptic Gregorian calendar.
const GREGORIAN_EPOCH_OFFSET: i64 = 719_468;
/// Days from `0000-03-01` to `1970-01-01` in the proleptic Julian calendar.
const JULIAN_EPOCH_OFFSET: i64 = 719_470;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
pub(crate) const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns whether `year` is a leap year in the proleptic Julian calendar.
#[inline]
pub(crate) const fn is_julian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Returns the length of `month` in a twelve month solar calendar.
#[inline]
pub(crate) const fn days_in_solar_month(month: u8, in_leap_year: bool) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if in_leap_year => 29,
        2 => 28,
        _ => 0,
    }
}

/// `ISODaysInMonth ( year, month )`
#[inline]
pub(crate) const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    days_in_solar_month(month, is_gregorian_leap_year(year))
}

// The day ordinal algorithms below count from a March 1st based year so
// that the leap day always falls at the end of the computational year.

#[inline]
const fn day_of_march_year(month: u8, day: u8) -> i64 {
    let mp = (month as i64 + 9) % 12;
    (153 * mp + 2) / 5 + day as i64 - 1
}

#[inline]
const fn month_and_day_from_march_year(day_of_year: i64) -> (u8, u8) {
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (month as u8, day as u8)
}

/// Returns the days since `1970-01-01` for a proleptic Gregorian date.
pub(crate) fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_march_year(month, day);
    era * DAYS_PER_GREGORIAN_ERA + day_of_era - GREGORIAN_EPOCH_OFFSET
}

/// Returns the proleptic Gregorian date for the days since `1970-01-01`.
pub(crate) fn gregorian_date_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let days = epoch_days + GREGORIAN_EPOCH_OFFSET;
    let era = days.div_euclid(DAYS_PER_GREGORIAN_ERA);
    let day_of_era = days - era * DAYS_PER_GREGORIAN_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let (month, day) = month_and_day_from_march_year(day_of_year);
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

/// Returns the days since `1970-01-01` (ISO) for a proleptic Julian date.
pub(crate) fn epoch_days_from_julian_date(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(4);
    let year_of_era = year - era * 4;
    let day_of_era = year_of_era * 365 + day_of_march_year(month, day);
    era * DAYS_PER_JULIAN_ERA + day_of_era - JULIAN_EPOCH_OFFSET
}

/// Returns the proleptic Julian date for the days since `1970-01-01` (ISO).
pub(crate) fn julian_date_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let days = epoch_days + JULIAN_EPOCH_OFFSET;
    let era = days.div_euclid(DAYS_PER_JULIAN_ERA);
    let day_of_era = days - era * DAYS_PER_JULIAN_ERA;
    let year_of_era = (day_of_era - day_of_era / 1460) / 365;
    let day_of_year = day_of_era - 365 * year_of_era;
    let (month, day) = month_and_day_from_march_year(day_of_year);
    let year = year_of_era + era * 4 + i64::from(month <= 2);
    (year as i32, month, day)
}

/// Returns the ISO day of the week, where Monday is 1 and Sunday is 7.
#[inline]
pub(crate) fn epoch_days_to_day_of_week(epoch_days: i64) -> u16 {
    // 1970-01-01 was a Thursday.
    ((epoch_days + 3).rem_euclid(7) + 1) as u16
}

// ==== End Date Equations ====

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_epoch_days() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_gregorian_date(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_gregorian_date(275_760, 9, 13), 100_000_000);
        assert_eq!(epoch_days_from_gregorian_date(-271_821, 4, 19), -100_000_001);

        assert_eq!(gregorian_date_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(gregorian_date_from_epoch_days(11_016), (2000, 2, 29));
        assert_eq!(gregorian_date_from_epoch_days(-719_528), (0, 1, 1));
        assert_eq!(
            gregorian_date_from_epoch_days(-100_000_001),
            (-271_821, 4, 19)
        );
    }

    #[test]
    fn gregorian_round_trip() {
        for days in (-800_000..800_000).step_by(97) {
            let (y, m, d) = gregorian_date_from_epoch_days(days);
            assert!(d >= 1 && d <= iso_days_in_month(y, m));
            assert_eq!(epoch_days_from_gregorian_date(y, m, d), days);
        }
    }

    #[test]
    fn julian_epoch_days() {
        // The Gregorian reform: Julian 1582-10-04 was followed by Gregorian 1582-10-15.
        let reform = epoch_days_from_gregorian_date(1582, 10, 15);
        assert_eq!(epoch_days_from_julian_date(1582, 10, 5), reform);
        assert_eq!(julian_date_from_epoch_days(reform - 1), (1582, 10, 4));
        assert_eq!(julian_date_from_epoch_days(0), (1969, 12, 19));

        for days in (-800_000..800_000).step_by(89) {
            let (y, m, d) = julian_date_from_epoch_days(days);
            assert!(d >= 1 && d <= days_in_solar_month(m, is_julian_leap_year(y)));
            assert_eq!(epoch_days_from_julian_date(y, m, d), days);
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(is_gregorian_leap_year(-4));
        assert!(is_julian_leap_year(1900));
        assert!(is_julian_leap_year(-4));
        assert!(!is_julian_leap_year(-1));
        assert_eq!(iso_days_in_month(2021, 2), 28);
        assert_eq!(iso_days_in_month(2020, 2), 29);
    }

    #[test]
    fn day_of_week() {
        assert_eq!(epoch_days_to_day_of_week(0), 4);
        // 2024-01-01 was a Monday.
        assert_eq!(
            epoch_days_to_day_of_week(epoch_days_from_gregorian_date(2024, 1, 1)),
            1
        );
        assert_eq!(epoch_days_to_day_of_week(-4), 7);
    }
}
