//! Bounded ratio type for expressing duty-cycle fractions.

use core::ops;

/// A fraction in the closed range [0, 1].
///
/// Fixed point with 32 fractional bits, so 1.0 is representable exactly
/// and `value * Percent::ONE == value` for every `u32`. Construction
/// clamps to the bounds; equality and ordering are exact on the raw
/// bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u64);

/// Raw representation of 1.0.
const RAW_ONE: u64 = 1 << 32;

impl Percent {
    /// 0%.
    pub const ZERO: Self = Percent(0);
    /// 100%.
    pub const ONE: Self = Percent(RAW_ONE);

    /// The fraction `numerator / denominator`, clamped to [0, 1].
    ///
    /// # Panics
    ///
    /// Panics if `denominator == 0`. A zero denominator is a programming
    /// error, not a recoverable condition.
    pub const fn from_ratio(numerator: u32, denominator: u32) -> Self {
        let raw = ((numerator as u64) << 32) / denominator as u64;
        if raw > RAW_ONE {
            Self::ONE
        } else {
            Percent(raw)
        }
    }

    /// The fraction `percent / 100`, clamped to [0, 1].
    pub const fn from_percent(percent: u8) -> Self {
        if percent >= 100 {
            Self::ONE
        } else {
            Self::from_ratio(percent as u32, 100)
        }
    }

    /// `floor(value * self)`. Never exceeds `value`.
    pub const fn scale(self, value: u32) -> u32 {
        // raw <= 2^32 and value < 2^32, so the product fits in a u64.
        ((value as u64 * self.0) >> 32) as u32
    }
}

impl ops::Mul<Percent> for u32 {
    type Output = u32;

    fn mul(self, percent: Percent) -> u32 {
        percent.scale(self)
    }
}
