//! The `temporal_calendar` crate implements calendar-aware date and
//! duration arithmetic modeled on ECMAScript's Temporal built-ins.
//!
//! ```rust
//! use temporal_calendar::{Calendar, Duration, PlainDate};
//! use tinystr::tinystr;
//! use core::str::FromStr;
//!
//! // Create a date with an ISO calendar
//! let date = PlainDate::try_new(2019, 1, 31, Calendar::default()).unwrap();
//!
//! // Adding a month constrains the day to the end of February
//! let month = Duration::new(0, 1, 0, 0, 0, 0, 0, 0, 0, 0).unwrap();
//! let result = date.add(&month, None).unwrap();
//! assert_eq!(result.to_string(), "2019-02-28");
//!
//! // The same day viewed through the buddhist calendar
//! let buddhist = result.with_calendar(Calendar::from_str("buddhist").unwrap());
//! assert_eq!(buddhist.era(), Some(tinystr!(16, "be")));
//! assert_eq!(buddhist.year(), 2562);
//! assert_eq!(buddhist.to_string(), "2019-02-28[u-ca=buddhist]");
//! ```
//!
//! Dates are stored as an ISO 8601 year, month, and day. Every
//! calendar-specific field is derived on read through a [`Calendar`],
//! which is a handle onto one of the built-in calendar systems.
//!
//! [`Temporal`][proposal] is the Stage 3 proposal for ECMAScript that
//! provides new JS objects and functions for working with dates and
//! times that fully supports non-gregorian calendars.
//!
//! [proposal]: https://github.com/tc39/proposal-temporal
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in doc tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::let_unit_value,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

pub mod error;
pub mod iso;
pub mod options;
pub mod primitive;

mod components;

#[doc(hidden)]
pub(crate) mod formatting;

#[doc(hidden)]
pub(crate) mod rounding;
#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

/// Re-export of `TinyAsciiStr` from `tinystr`.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::TemporalError;

/// The `Temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub mod partial {
    //! Partial field records.
    //!
    //! The partial records are the loosely shaped inputs that get validated
    //! into dates, year-months, and durations.
    pub use crate::components::{duration::PartialDuration, PartialDate};
}

pub use crate::components::{
    calendar::{Calendar, CalendarProtocol},
    DateDuration, Duration, PlainDate, PlainYearMonth, TimeDuration,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait TemporalUnwrap {
    type Output;

    /// `temporal_calendar` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn temporal_unwrap(self) -> TemporalResult<Self::Output>;
}

impl<T> TemporalUnwrap for Option<T> {
    type Output = T;

    fn temporal_unwrap(self) -> TemporalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(TemporalError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! temporal_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::TemporalError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::TemporalError::assert());
        }
    };
}

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl From<Ordering> for Sign {
    fn from(value: Ordering) -> Self {
        Self::from(value as i8)
    }
}

impl Sign {
    /// Coerces the current `Sign` to be either negative or positive.
    pub(crate) fn as_sign_multiplier(&self) -> i8 {
        if matches!(self, Self::Zero) {
            return 1;
        }
        *self as i8
    }
}

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// The largest supported epoch day, `+275760-09-13`.
pub(crate) const MAX_EPOCH_DAYS: i64 = 100_000_000;
/// The smallest supported epoch day, `-271821-04-19`.
pub(crate) const MIN_EPOCH_DAYS: i64 = -100_000_001;
