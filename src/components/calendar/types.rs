//! Field records used by the calendar protocol.

/// A date expressed in a calendar's own year, month, and day.
///
/// The derived ordering is lexicographic over `(year, month, day)`, which
/// matches day ordinal order for every calendar with a monotonic day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarFields {
    /// Creates a new, non-regulated `CalendarFields` record.
    #[inline]
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns whether these fields lie beyond `other` in the direction of `sign`.
    #[inline]
    pub(crate) fn surpasses(&self, other: &Self, sign: i8) -> bool {
        self.cmp(other) as i8 * sign == 1
    }
}
