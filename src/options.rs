//! Native implementation of the `Temporal` options.
//!
//! Temporal has various instances where user's can define options for how an
//! operation may be completed.

use crate::{TemporalError, TemporalResult};
use core::{fmt, str::FromStr};

mod increment;

pub use increment::RoundingIncrement;

// ==== RoundingOptions / DifferenceSettings ====

/// The options accepted by `difference` on dates and year-months.
///
/// Any field left as `None` resolves to the operation's default.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct DifferenceSettings {
    pub largest_unit: Option<TemporalUnit>,
    pub smallest_unit: Option<TemporalUnit>,
    pub rounding_mode: Option<TemporalRoundingMode>,
    pub increment: Option<RoundingIncrement>,
}

/// The options accepted by `Duration::round`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct RoundingOptions {
    pub largest_unit: Option<TemporalUnit>,
    pub smallest_unit: Option<TemporalUnit>,
    pub rounding_mode: Option<TemporalRoundingMode>,
    pub increment: Option<RoundingIncrement>,
}

// Note: having both largest and smallest unit None would throw, so the
// default provides an `Auto` largest unit.
impl Default for RoundingOptions {
    fn default() -> Self {
        Self {
            largest_unit: Some(TemporalUnit::Auto),
            smallest_unit: None,
            rounding_mode: None,
            increment: None,
        }
    }
}

/// Internal options object that represents the resolved rounding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedRoundingOptions {
    pub(crate) largest_unit: TemporalUnit,
    pub(crate) smallest_unit: TemporalUnit,
    pub(crate) increment: RoundingIncrement,
    pub(crate) rounding_mode: TemporalRoundingMode,
}

impl ResolvedRoundingOptions {
    /// Resolves `DifferenceSettings` for an operation that can only produce
    /// units from `Year` down to `finest_unit`.
    pub(crate) fn from_diff_settings(
        options: DifferenceSettings,
        finest_unit: TemporalUnit,
        fallback_largest: TemporalUnit,
        fallback_smallest: TemporalUnit,
    ) -> TemporalResult<Self> {
        let increment = options.increment.unwrap_or_default();
        let rounding_mode = options.rounding_mode.unwrap_or_default();

        let smallest_unit = options.smallest_unit.unwrap_or(fallback_smallest);
        if smallest_unit == TemporalUnit::Auto {
            return Err(TemporalError::range().with_message("smallestUnit cannot be auto."));
        }
        if smallest_unit < finest_unit {
            return Err(TemporalError::range()
                .with_message("smallestUnit is not a valid unit for this difference."));
        }

        // The default largest unit is the larger of the fallback and smallestUnit.
        let default_largest = smallest_unit.max(fallback_largest);
        let largest_unit = match options.largest_unit {
            Some(TemporalUnit::Auto) | None => default_largest,
            Some(unit) => unit,
        };
        if largest_unit < finest_unit {
            return Err(TemporalError::range()
                .with_message("largestUnit is not a valid unit for this difference."));
        }

        if largest_unit.max(smallest_unit) != largest_unit {
            return Err(TemporalError::range().with_message(
                "largestUnit when rounding Duration was not the largest provided unit",
            ));
        }

        if let Some(max) = smallest_unit.to_maximum_rounding_increment() {
            increment.validate(max.into(), false)?;
        }

        Ok(Self {
            largest_unit,
            smallest_unit,
            increment,
            rounding_mode,
        })
    }

    /// Resolves `RoundingOptions` for rounding a duration whose own largest
    /// non-zero unit is `existing_largest`.
    pub(crate) fn from_duration_options(
        options: RoundingOptions,
        existing_largest: TemporalUnit,
    ) -> TemporalResult<Self> {
        if options.largest_unit.is_none() && options.smallest_unit.is_none() {
            return Err(TemporalError::range()
                .with_message("smallestUnit and largestUnit cannot both be None."));
        }

        let increment = options.increment.unwrap_or_default();
        let rounding_mode = options.rounding_mode.unwrap_or_default();

        let smallest_unit = match options.smallest_unit {
            Some(TemporalUnit::Auto) => {
                return Err(TemporalError::range().with_message("smallestUnit cannot be auto."))
            }
            Some(unit) => unit,
            None => TemporalUnit::Nanosecond,
        };

        let default_largest = existing_largest.max(smallest_unit);
        let largest_unit = match options.largest_unit {
            Some(TemporalUnit::Auto) | None => default_largest,
            Some(unit) => unit,
        };

        if largest_unit.max(smallest_unit) != largest_unit {
            return Err(TemporalError::range().with_message(
                "largestUnit when rounding Duration was not the largest provided unit",
            ));
        }

        if let Some(max) = smallest_unit.to_maximum_rounding_increment() {
            increment.validate(max.into(), false)?;
        }

        // An increment on a calendar unit only applies when it is the only unit.
        if increment != RoundingIncrement::ONE
            && largest_unit != smallest_unit
            && smallest_unit.is_date_unit()
        {
            return Err(TemporalError::range().with_message(
                "roundingIncrement > 1 requires largestUnit to equal a calendar smallestUnit.",
            ));
        }

        Ok(Self {
            largest_unit,
            smallest_unit,
            increment,
            rounding_mode,
        })
    }

    /// Returns whether rounding to these options leaves a day-precision
    /// difference unchanged.
    pub(crate) fn is_noop(&self) -> bool {
        self.smallest_unit <= TemporalUnit::Day && self.increment == RoundingIncrement::ONE
    }
}

// ==== Options enums and methods ====

/// A duration unit, ordered from `Auto` and `Nanosecond` up to `Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalUnit {
    /// Resolve the unit from the other options.
    Auto = 0,
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TemporalUnit {
    const ALL: [Self; 11] = [
        Self::Auto,
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
    ];

    /// Returns the singular option string of this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Returns the `MaximumRoundingIncrement` of a time unit.
    #[inline]
    #[must_use]
    pub fn to_maximum_rounding_increment(self) -> Option<u32> {
        match self {
            Self::Hour => Some(24),
            Self::Minute | Self::Second => Some(60),
            Self::Millisecond | Self::Microsecond | Self::Nanosecond => Some(1000),
            _ => None,
        }
    }

    /// Returns the nanosecond length of a time unit, or `None` for units
    /// without a fixed length.
    ///
    /// A day is treated as exactly 24 hours.
    #[must_use]
    pub fn as_nanoseconds(&self) -> Option<u64> {
        match self {
            Self::Day => Some(crate::NS_PER_DAY),
            Self::Hour => Some(3_600_000_000_000),
            Self::Minute => Some(60_000_000_000),
            Self::Second => Some(1_000_000_000),
            Self::Millisecond => Some(1_000_000),
            Self::Microsecond => Some(1_000),
            Self::Nanosecond => Some(1),
            Self::Year | Self::Month | Self::Week | Self::Auto => None,
        }
    }

    /// Returns whether the unit is `Year`, `Month` or `Week`.
    #[inline]
    #[must_use]
    pub fn is_calendar_unit(&self) -> bool {
        matches!(self, Self::Year | Self::Month | Self::Week)
    }

    /// Returns whether the unit is one of the date units, `Year` through `Day`.
    #[inline]
    #[must_use]
    pub fn is_date_unit(&self) -> bool {
        self.is_calendar_unit() || *self == TemporalUnit::Day
    }

    /// Returns the next larger unit, stopping at `Year`.
    pub(crate) fn larger(self) -> Self {
        match self {
            Self::Auto => Self::Microsecond,
            Self::Year => Self::Year,
            unit => Self::ALL[unit as usize + 1],
        }
    }
}

impl FromStr for TemporalUnit {
    type Err = TemporalError;

    /// Accepts the singular and plural option strings, e.g. `"month"` and `"months"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| {
                let name = unit.as_str();
                s == name || (*unit != Self::Auto && s.strip_suffix('s') == Some(name))
            })
            .ok_or(TemporalError::range().with_message("provided string was not a valid unit."))
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How out of range date fields are handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOverflow {
    /// Clamp each field into its valid range.
    #[default]
    Constrain,
    /// Throw a `RangeError` for any out of range field.
    Reject,
}

impl ArithmeticOverflow {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for ArithmeticOverflow {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Constrain, Self::Reject]
            .into_iter()
            .find(|overflow| overflow.as_str() == s)
            .ok_or(
                TemporalError::range()
                    .with_message("provided string was not a valid overflow value."),
            )
    }
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rounding mode of a rounding operation. The signed modes are
/// resolved into an unsigned mode once the sign of the rounded value is
/// known.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TemporalRoundingMode {
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
    /// Away from zero.
    Expand,
    /// Toward zero.
    Trunc,
    /// To the nearest increment, ties toward positive infinity.
    HalfCeil,
    /// To the nearest increment, ties toward negative infinity.
    HalfFloor,
    /// To the nearest increment, ties away from zero.
    #[default]
    HalfExpand,
    /// To the nearest increment, ties toward zero.
    HalfTrunc,
    /// To the nearest increment, ties to an even multiple.
    HalfEven,
}

impl TemporalRoundingMode {
    const ALL: [Self; 9] = [
        Self::Ceil,
        Self::Floor,
        Self::Expand,
        Self::Trunc,
        Self::HalfCeil,
        Self::HalfFloor,
        Self::HalfExpand,
        Self::HalfTrunc,
        Self::HalfEven,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Expand => "expand",
            Self::Trunc => "trunc",
            Self::HalfCeil => "halfCeil",
            Self::HalfFloor => "halfFloor",
            Self::HalfExpand => "halfExpand",
            Self::HalfTrunc => "halfTrunc",
            Self::HalfEven => "halfEven",
        }
    }
}

impl FromStr for TemporalRoundingMode {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(TemporalError::range().with_message("RoundingMode not an accepted value."))
    }
}

impl fmt::Display for TemporalRoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether to show the calendar annotation when formatting a date.
///
/// <https://tc39.es/proposal-temporal/#sec-temporal-gettemporalshowcalendarnameoption>
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CalendarName {
    /// The annotation is shown for non-ISO calendars.
    #[default]
    Auto,
    Always,
    Never,
    /// The annotation is shown with the `!` critical flag.
    Critical,
}

impl CalendarName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for CalendarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarName {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Auto, Self::Always, Self::Never, Self::Critical]
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(TemporalError::range().with_message("Invalid CalendarName provided."))
    }
}
