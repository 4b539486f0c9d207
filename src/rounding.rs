//! Implementation of increment rounding functionality

use crate::{options::TemporalRoundingMode, TemporalResult, TemporalUnwrap};

use core::{
    cmp::Ordering,
    num::NonZeroU128,
    ops::{Div, Neg},
};

use num_traits::{ConstZero, Euclid, NumCast, Signed};

pub(crate) trait Roundable: Euclid + Div + PartialOrd + Signed + NumCast + ConstZero + Copy {
    fn is_exact(dividend: Self, divisor: Self) -> bool;
    fn compare_remainder(dividend: Self, divisor: Self) -> Ordering;
    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool;
    fn result_floor(dividend: Self, divisor: Self) -> u128;
    fn result_ceil(dividend: Self, divisor: Self) -> u128;
}

/// A rounding mode applied to the magnitude of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnsignedRoundingMode {
    Infinity,
    Zero,
    HalfInfinity,
    HalfZero,
    HalfEven,
}

impl UnsignedRoundingMode {
    fn resolve(mode: TemporalRoundingMode, is_positive: bool) -> Self {
        use TemporalRoundingMode as Mode;
        match (mode, is_positive) {
            (Mode::Expand, _) | (Mode::Ceil, true) | (Mode::Floor, false) => Self::Infinity,
            (Mode::Trunc, _) | (Mode::Ceil, false) | (Mode::Floor, true) => Self::Zero,
            (Mode::HalfExpand, _) | (Mode::HalfCeil, true) | (Mode::HalfFloor, false) => {
                Self::HalfInfinity
            }
            (Mode::HalfTrunc, _) | (Mode::HalfCeil, false) | (Mode::HalfFloor, true) => {
                Self::HalfZero
            }
            (Mode::HalfEven, _) => Self::HalfEven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub(crate) struct IncrementRounder<T: Roundable> {
    sign: bool,
    dividend: T,
    divisor: T,
}

impl<T: Roundable> IncrementRounder<T> {
    #[inline]
    pub(crate) fn from_signed_num(number: T, increment: NonZeroU128) -> TemporalResult<Self> {
        let increment = <T as NumCast>::from(increment.get()).temporal_unwrap()?;
        Ok(Self {
            sign: number >= T::ZERO,
            dividend: number,
            divisor: increment,
        })
    }
}

impl<T: Roundable> IncrementRounder<T> {
    /// Rounds the dividend to a multiple of the increment.
    #[inline]
    pub fn round(&self, mode: TemporalRoundingMode) -> i128 {
        let unsigned_rounding_mode = UnsignedRoundingMode::resolve(mode, self.sign);
        let mut rounded =
            apply_unsigned_rounding_mode(self.dividend, self.divisor, unsigned_rounding_mode)
                as i128;
        if !self.sign {
            rounded = rounded.neg();
        }
        // The divisor was created from a `u128` increment, so the cast back is lossless.
        rounded * <i128 as NumCast>::from(self.divisor).unwrap_or(1)
    }

    /// Rounds the dividend, returning the number of increments rather than
    /// the rounded value.
    #[inline]
    pub fn round_as_quotient(&self, mode: TemporalRoundingMode) -> i128 {
        let unsigned_rounding_mode = UnsignedRoundingMode::resolve(mode, self.sign);
        let rounded =
            apply_unsigned_rounding_mode(self.dividend, self.divisor, unsigned_rounding_mode)
                as i128;
        if self.sign {
            rounded
        } else {
            rounded.neg()
        }
    }
}

impl Roundable for i128 {
    fn is_exact(dividend: Self, divisor: Self) -> bool {
        dividend.rem_euclid(divisor) == 0
    }

    fn compare_remainder(dividend: Self, divisor: Self) -> Ordering {
        // Compare the remainder to half of the divisor without losing odd divisors.
        ((dividend.abs() % divisor) * 2).cmp(&divisor)
    }

    fn is_even_cardinal(dividend: Self, divisor: Self) -> bool {
        Roundable::result_floor(dividend, divisor).rem_euclid(2) == 0
    }

    fn result_floor(dividend: Self, divisor: Self) -> u128 {
        (dividend / divisor).unsigned_abs()
    }

    fn result_ceil(dividend: Self, divisor: Self) -> u128 {
        (dividend / divisor).unsigned_abs() + 1
    }
}

/// Applies the unsigned rounding mode.
fn apply_unsigned_rounding_mode<T: Roundable>(
    dividend: T,
    divisor: T,
    unsigned_rounding_mode: UnsignedRoundingMode,
) -> u128 {
    // 1. If x is equal to r1, return r1.
    if Roundable::is_exact(dividend, divisor) {
        return Roundable::result_floor(dividend, divisor);
    }
    // 2. Assert: r1 < x < r2.
    // 3. Assert: unsignedRoundingMode is not undefined.

    // 4. If unsignedRoundingMode is zero, return r1.
    if unsigned_rounding_mode == UnsignedRoundingMode::Zero {
        return Roundable::result_floor(dividend, divisor);
    };
    // 5. If unsignedRoundingMode is infinity, return r2.
    if unsigned_rounding_mode == UnsignedRoundingMode::Infinity {
        return Roundable::result_ceil(dividend, divisor);
    };

    // 6. Let d1 be x – r1.
    // 7. Let d2 be r2 – x.
    // 8. If d1 < d2, return r1.
    // 9. If d2 < d1, return r2.
    match Roundable::compare_remainder(dividend, divisor) {
        Ordering::Less => Roundable::result_floor(dividend, divisor),
        Ordering::Greater => Roundable::result_ceil(dividend, divisor),
        Ordering::Equal => {
            // 10. Assert: d1 is equal to d2.
            // 11. If unsignedRoundingMode is half-zero, return r1.
            if unsigned_rounding_mode == UnsignedRoundingMode::HalfZero {
                return Roundable::result_floor(dividend, divisor);
            };
            // 12. If unsignedRoundingMode is half-infinity, return r2.
            if unsigned_rounding_mode == UnsignedRoundingMode::HalfInfinity {
                return Roundable::result_ceil(dividend, divisor);
            };
            // 13. Assert: unsignedRoundingMode is half-even.
            debug_assert!(unsigned_rounding_mode == UnsignedRoundingMode::HalfEven);
            // 14. Let cardinality be (r1 / (r2 – r1)) modulo 2.
            // 15. If cardinality is 0, return r1.
            if Roundable::is_even_cardinal(dividend, divisor) {
                return Roundable::result_floor(dividend, divisor);
            }
            // 16. Return r2.
            Roundable::result_ceil(dividend, divisor)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU128;

    use super::{IncrementRounder, TemporalRoundingMode, UnsignedRoundingMode};

    const MODES: [TemporalRoundingMode; 9] = [
        TemporalRoundingMode::Ceil,
        TemporalRoundingMode::Floor,
        TemporalRoundingMode::Expand,
        TemporalRoundingMode::Trunc,
        TemporalRoundingMode::HalfCeil,
        TemporalRoundingMode::HalfFloor,
        TemporalRoundingMode::HalfExpand,
        TemporalRoundingMode::HalfTrunc,
        TemporalRoundingMode::HalfEven,
    ];

    fn increment_rounder(value: i128, increment: u128) -> IncrementRounder<i128> {
        IncrementRounder::from_signed_num(value, NonZeroU128::new(increment).unwrap()).unwrap()
    }

    /// Checks `round` and `round_as_quotient` against one expected multiple
    /// per entry of `MODES`.
    fn check(value: i128, increment: u128, expected: [i128; 9]) {
        let rounder = increment_rounder(value, increment);
        for (mode, expected) in MODES.into_iter().zip(expected) {
            assert_eq!(rounder.round(mode), expected, "{value}/{increment} {mode:?}");
            assert_eq!(
                rounder.round_as_quotient(mode) * increment as i128,
                expected,
                "{value}/{increment} {mode:?} as quotient"
            );
        }
    }

    #[test]
    fn rounds_every_mode() {
        //                 ceil floor expand trunc hCeil hFloor hExpand hTrunc hEven
        check(0, 7, [0, 0, 0, 0, 0, 0, 0, 0, 0]);
        check(42, 7, [42, 42, 42, 42, 42, 42, 42, 42, 42]);
        check(7, 3, [9, 6, 9, 6, 6, 6, 6, 6, 6]);
        check(-8, 3, [-6, -9, -9, -6, -9, -9, -9, -9, -9]);
        check(15, 6, [18, 12, 18, 12, 18, 12, 18, 12, 12]);
        check(21, 6, [24, 18, 24, 18, 24, 18, 24, 18, 24]);
        check(-5, 2, [-4, -6, -6, -4, -4, -6, -6, -4, -4]);
        check(-35, 10, [-30, -40, -40, -30, -30, -40, -40, -30, -40]);
    }

    #[test]
    fn odd_divisor_ties() {
        // With an odd divisor the remainder is never exactly half.
        // 4/9 stays below the midpoint and 5/9 is above it.
        check(4, 9, [9, 0, 9, 0, 0, 0, 0, 0, 0]);
        check(5, 9, [9, 0, 9, 0, 9, 9, 9, 9, 9]);
        check(-5, 9, [0, -9, -9, 0, -9, -9, -9, -9, -9]);
        check(10, 7, [14, 7, 14, 7, 7, 7, 7, 7, 7]);
        check(11, 7, [14, 7, 14, 7, 14, 14, 14, 14, 14]);
        check(-11, 7, [-7, -14, -14, -7, -14, -14, -14, -14, -14]);
    }

    #[test]
    fn quotient_counts_increments() {
        let rounder = increment_rounder(100 * 86_400, 86_400);
        assert_eq!(rounder.round_as_quotient(TemporalRoundingMode::Trunc), 100);

        let rounder = increment_rounder(-1, 1_000_000_000);
        assert_eq!(rounder.round_as_quotient(TemporalRoundingMode::Trunc), 0);
        assert_eq!(rounder.round_as_quotient(TemporalRoundingMode::Floor), -1);
        assert_eq!(rounder.round_as_quotient(TemporalRoundingMode::Ceil), 0);
        assert_eq!(rounder.round_as_quotient(TemporalRoundingMode::HalfExpand), 0);
    }

    #[test]
    fn signed_modes_resolve_by_sign() {
        use TemporalRoundingMode as Mode;
        use UnsignedRoundingMode as Unsigned;
        let cases = [
            (Mode::Ceil, Unsigned::Infinity, Unsigned::Zero),
            (Mode::Floor, Unsigned::Zero, Unsigned::Infinity),
            (Mode::Expand, Unsigned::Infinity, Unsigned::Infinity),
            (Mode::Trunc, Unsigned::Zero, Unsigned::Zero),
            (Mode::HalfCeil, Unsigned::HalfInfinity, Unsigned::HalfZero),
            (Mode::HalfFloor, Unsigned::HalfZero, Unsigned::HalfInfinity),
            (Mode::HalfExpand, Unsigned::HalfInfinity, Unsigned::HalfInfinity),
            (Mode::HalfTrunc, Unsigned::HalfZero, Unsigned::HalfZero),
            (Mode::HalfEven, Unsigned::HalfEven, Unsigned::HalfEven),
        ];
        for (mode, positive, negative) in cases {
            assert_eq!(UnsignedRoundingMode::resolve(mode, true), positive);
            assert_eq!(UnsignedRoundingMode::resolve(mode, false), negative);
        }
    }

    #[test]
    fn nanosecond_difference_rounding() {
        let result = increment_rounder(-84_082_624_864_197_532, 1_800_000_000_000)
            .round(TemporalRoundingMode::HalfExpand);
        assert_eq!(result, -84_083_400_000_000_000);
    }
}
