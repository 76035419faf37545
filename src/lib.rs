#![no_std]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod divider;
pub mod duty_cycle;
pub mod math;
pub mod percent;
pub mod time;

pub use divider::{closest, DividerRule};
pub use duty_cycle::{calculate_duty_cycle, calculate_duty_cycle_from_duration, DutyCycle};
pub use percent::Percent;
pub use time::{
    cycles_per, duration_from_cycles, hz, khz, mhz, wavelength, Femtoseconds, Hertz, Microseconds,
    Milliseconds, Nanoseconds, Picoseconds, Seconds, TimeDuration,
};

/// Failures of the fallible arithmetic operations.
///
/// Every operation that can fail returns `Result<_, Error>` so callers
/// can retry with adjusted inputs or propagate upward. Zero divisors are
/// precondition violations and panic instead; see the individual
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A multiplication's true product exceeds the 32-bit destination
    /// width.
    Overflow,
    /// A computed cycle count exceeds the width required downstream.
    ValueTooLarge,
}
