//! Frequency and time-duration value types, and the conversions between
//! cycle counts and durations.

use core::ops;

use crate::math::{rounding_division, rounding_division_i64};
use crate::Error;

/// Hertz
///
/// The frequency of a signal as a single unsigned magnitude in Hz.
/// Immutable value type: operations return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hertz(pub u32);

impl Hertz {
    /// Create a `Hertz` from a value in hertz.
    pub const fn hz(hertz: u32) -> Self {
        Self(hertz)
    }

    /// Create a `Hertz` from a value in kilohertz.
    ///
    /// The scaled value is truncated to the 32-bit magnitude range.
    pub const fn khz(kilohertz: u32) -> Self {
        Self((kilohertz as u64 * 1_000) as u32)
    }

    /// Create a `Hertz` from a value in megahertz.
    ///
    /// The scaled value is truncated to the 32-bit magnitude range.
    pub const fn mhz(megahertz: u32) -> Self {
        Self((megahertz as u64 * 1_000_000) as u32)
    }

    /// Scale the frequency up by an integer factor.
    ///
    /// Returns [`Error::Overflow`] if the product exceeds the 32-bit
    /// magnitude range. There is no `Mul` operator on purpose: operators
    /// cannot report failure.
    pub fn checked_mul(self, scalar: u32) -> Result<Hertz, Error> {
        Ok(Hertz(crate::math::multiply(self.0, scalar)?))
    }
}

impl Default for Hertz {
    /// 100 kHz, a common default peripheral clock.
    fn default() -> Self {
        Hertz(100_000)
    }
}

/// Create a `Hertz` from a value in hertz.
pub const fn hz(hertz: u32) -> Hertz {
    Hertz::hz(hertz)
}

/// Create a `Hertz` from a value in kilohertz.
pub const fn khz(kilohertz: u32) -> Hertz {
    Hertz::khz(kilohertz)
}

/// Create a `Hertz` from a value in megahertz.
pub const fn mhz(megahertz: u32) -> Hertz {
    Hertz::mhz(megahertz)
}

impl ops::Div<u32> for Hertz {
    type Output = Hertz;

    /// Scale the frequency down by an integer divider, rounding to the
    /// nearest hertz.
    ///
    /// # Panics
    ///
    /// Panics if `divider == 0`.
    fn div(self, divider: u32) -> Hertz {
        // The rounded quotient never exceeds the dividend, so the
        // narrowing cast is lossless.
        Hertz(rounding_division(self.0 as u64, divider as u64) as u32)
    }
}

impl ops::Div<Hertz> for Hertz {
    type Output = u32;

    /// The integer divider that takes this source frequency to the
    /// target: how many source cycles make one target cycle.
    ///
    /// # Panics
    ///
    /// Panics if the target frequency is zero.
    fn div(self, target: Hertz) -> u32 {
        rounding_division(self.0 as u64, target.0 as u64) as u32
    }
}

/// A signed tick count with a compile-time unit ratio relative to one
/// second: one tick lasts `NOM / DENOM` seconds.
///
/// This is the shape of `std::chrono::duration`, which the conversion
/// functions below were designed against. Use the unit aliases
/// ([`Seconds`], [`Milliseconds`], ...) rather than spelling the ratio
/// out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDuration<const NOM: u64, const DENOM: u64>(pub i64);

impl<const NOM: u64, const DENOM: u64> TimeDuration<NOM, DENOM> {
    /// Create a duration from a tick count.
    pub const fn new(count: i64) -> Self {
        Self(count)
    }

    /// The raw tick count.
    pub const fn count(self) -> i64 {
        self.0
    }
}

/// Duration in units of 10^-15 s.
pub type Femtoseconds = TimeDuration<1, 1_000_000_000_000_000>;
/// Duration in units of 10^-12 s.
pub type Picoseconds = TimeDuration<1, 1_000_000_000_000>;
/// Duration in units of 10^-9 s.
pub type Nanoseconds = TimeDuration<1, 1_000_000_000>;
/// Duration in units of 10^-6 s.
pub type Microseconds = TimeDuration<1, 1_000_000>;
/// Duration in units of 10^-3 s.
pub type Milliseconds = TimeDuration<1, 1_000>;
/// Duration in whole seconds.
pub type Seconds = TimeDuration<1, 1>;

#[cfg(feature = "time")]
impl From<embassy_time::Duration> for Microseconds {
    fn from(duration: embassy_time::Duration) -> Self {
        Microseconds::new(duration.as_micros() as i64)
    }
}

/// The number of cycles of a frequency within a time duration.
///
/// This is what a timer driver asks to find out how many count cycles
/// reach a given time at a given input clock:
///
/// ```text
///                           / NOM   \
/// value_hz * |duration| *  | ------- |  = cycles
///                           \ DENOM /
/// ```
///
/// The sign of the duration is discarded; the result is the cycle count
/// of the magnitude and is always non-negative. Callers that care about
/// direction must track it separately.
///
/// All arithmetic is done on 64-bit intermediates. `|count| * value_hz *
/// NOM` must fit in 64 bits; for sub-second units (`NOM == 1`) that holds
/// for any 32-bit frequency and any duration a timer register can hold.
pub const fn cycles_per<const NOM: u64, const DENOM: u64>(
    source: Hertz,
    duration: TimeDuration<NOM, DENOM>,
) -> i64 {
    let count = duration.0.unsigned_abs();
    rounding_division(count * source.0 as u64 * NOM, DENOM) as i64
}

/// The time a frequency takes to oscillate a number of cycles, in
/// nanosecond resolution.
///
/// Inverse of [`cycles_per`]: `rounding_division(cycles * 10^9,
/// value_hz)`. The sign of `cycles` carries through to the result. The
/// cycle magnitude must stay below ~9.2 * 10^9 so the nanosecond
/// numerator fits in 64 bits; that covers the full 32-bit register
/// range.
///
/// # Panics
///
/// Panics if the frequency is zero.
pub const fn duration_from_cycles(source: Hertz, cycles: i64) -> Nanoseconds {
    const SCALE_DEN: i64 = 1_000_000_000; // Nanoseconds unit denominator
    Nanoseconds::new(rounding_division_i64(cycles * SCALE_DEN, source.0 as i64))
}

/// The length of one cycle of a frequency, in the caller-chosen unit.
///
/// `wavelength::<1, 1_000>(khz(1))` is one millisecond. The unit must
/// have a numerator of 1 (a frequency can be no lower than 1 Hz, so
/// coarser-than-second units cannot be computed meaningfully) and a
/// denominator of at most 10^18 (finer units cannot be resolved from a
/// 32-bit Hz value); both are rejected at compile time.
///
/// # Panics
///
/// Panics if the frequency is zero.
pub const fn wavelength<const NOM: u64, const DENOM: u64>(
    source: Hertz,
) -> TimeDuration<NOM, DENOM> {
    const {
        assert!(NOM == 1, "wavelength units must have a numerator of 1");
        assert!(
            DENOM <= 1_000_000_000_000_000_000,
            "wavelength unit denominator cannot exceed 10^18"
        );
    }
    TimeDuration::new(rounding_division(DENOM, source.0 as u64) as i64)
}
