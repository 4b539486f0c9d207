//! The primary date components provided by `temporal_calendar`.
//!
//! Every component stores ISO 8601 fields and derives calendar specific
//! fields on read through its [`calendar::Calendar`].

pub mod calendar;
pub mod duration;

mod date;
mod year_month;

#[doc(inline)]
pub use date::{PartialDate, PlainDate};
#[doc(inline)]
pub use duration::{DateDuration, Duration, TimeDuration};
#[doc(inline)]
pub use year_month::PlainYearMonth;
