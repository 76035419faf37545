//! Rounding division and overflow-checked primitives.
//!
//! Everything in this crate that divides goes through [`rounding_division`]
//! or [`rounding_division_i64`], so the rounding policy is fixed in exactly
//! one place: round to the nearest integer, ties away from zero.

use crate::Error;

/// Integer division rounded to the nearest integer.
///
/// Ties round away from zero, which for unsigned operands means up:
/// `rounding_division(5, 2) == 3`.
///
/// # Panics
///
/// Panics if `b == 0`. A zero divisor is a programming error, not a
/// recoverable condition.
pub const fn rounding_division(a: u64, b: u64) -> u64 {
    let quotient = a / b;
    let remainder = a % b;
    // remainder * 2 >= b, written so the doubling cannot overflow
    if remainder >= b - remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// Signed variant of [`rounding_division`] with the same tie policy.
///
/// The magnitude quotient is rounded half away from zero and the sign of
/// the true quotient is reapplied: `rounding_division_i64(-5, 2) == -3`.
///
/// # Panics
///
/// Panics if `b == 0`.
pub const fn rounding_division_i64(a: i64, b: i64) -> i64 {
    let negative = (a < 0) != (b < 0);
    let magnitude = rounding_division(a.unsigned_abs(), b.unsigned_abs()) as i64;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Multiplies two 32-bit magnitudes, failing instead of wrapping.
///
/// Returns [`Error::Overflow`] if the mathematical product does not fit
/// in a `u32`.
pub fn multiply(a: u32, b: u32) -> Result<u32, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

/// Absolute difference between two unsigned magnitudes.
///
/// Used as the cost metric for divider selection.
pub const fn distance(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_division_rounds_to_nearest() {
        assert_eq!(rounding_division(0, 5), 0);
        assert_eq!(rounding_division(1, 3), 0); // 0.33
        assert_eq!(rounding_division(2, 3), 1); // 0.67
        assert_eq!(rounding_division(7, 2), 4); // 3.5, tie up
        assert_eq!(rounding_division(9, 4), 2); // 2.25
        assert_eq!(rounding_division(11, 4), 3); // 2.75
        assert_eq!(rounding_division(1000, 400), 3); // 2.5, tie up
    }

    #[test]
    fn rounding_division_large_operands() {
        // The tie check must not overflow when the remainder exceeds
        // u64::MAX / 2.
        assert_eq!(rounding_division(u64::MAX, u64::MAX), 1);
        assert_eq!(rounding_division(u64::MAX - 1, u64::MAX), 1);
        assert_eq!(rounding_division(u64::MAX / 2, u64::MAX), 0);
        assert_eq!(rounding_division(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn rounding_division_i64_ties_away_from_zero() {
        assert_eq!(rounding_division_i64(5, 2), 3);
        assert_eq!(rounding_division_i64(-5, 2), -3);
        assert_eq!(rounding_division_i64(5, -2), -3);
        assert_eq!(rounding_division_i64(-5, -2), 3);
        assert_eq!(rounding_division_i64(-1, 3), 0);
        assert_eq!(rounding_division_i64(-2, 3), -1);
    }

    #[test]
    fn multiply_checks_overflow() {
        assert_eq!(multiply(60_000, 60_000), Ok(3_600_000_000));
        assert_eq!(multiply(0, u32::MAX), Ok(0));
        assert_eq!(multiply(u32::MAX, 2), Err(Error::Overflow));
        assert_eq!(multiply(65_536, 65_536), Err(Error::Overflow));
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance(125_000, 130_000), 5_000);
        assert_eq!(distance(130_000, 125_000), 5_000);
        assert_eq!(distance(7, 7), 0);
        assert_eq!(distance(0, u32::MAX), u32::MAX);
    }
}
