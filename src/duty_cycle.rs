//! Duty-cycle cycle counts and the calculators that produce them.

use crate::percent::Percent;
use crate::time::{cycles_per, Hertz, TimeDuration};
use crate::Error;

/// Cycle counts for the high and low side of one signal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle {
    /// Number of cycles the signal stays in the HIGH state.
    pub high: u32,
    /// Number of cycles the signal stays in the LOW state.
    pub low: u32,
}

impl From<DutyCycle> for Percent {
    /// The proportion of the period spent high.
    ///
    /// `high + low` is taken in 64 bits; if it exceeds the 32-bit range,
    /// both values are halved before forming the ratio, trading one bit
    /// of precision to stay in native width.
    fn from(duty: DutyCycle) -> Percent {
        let total = duty.high as u64 + duty.low as u64;

        let (high, total) = if total > u32::MAX as u64 {
            (duty.high >> 1, (total >> 1) as u32)
        } else {
            (duty.high, total as u32)
        };

        Percent::from_ratio(high, total)
    }
}

/// Split a cycle count into a duty cycle at the given ratio.
///
/// `high = floor(cycles * percent)` and `low` is derived by subtraction
/// rather than a second multiplication, so `high + low == cycles` holds
/// exactly and `high` can never exceed `cycles`.
pub fn calculate_duty_cycle(cycles: u32, percent: Percent) -> DutyCycle {
    let high = cycles * percent;
    let low = cycles - high;

    DutyCycle { high, low }
}

/// Duty cycle for one period of the given duration, clocked by `source`.
///
/// Computes the cycle count of the duration at the source frequency, then
/// splits it at the given ratio. Returns [`Error::ValueTooLarge`] when
/// the count does not fit the 32-bit register width; retry with a shorter
/// duration or a slower source clock.
pub fn calculate_duty_cycle_from_duration<const NOM: u64, const DENOM: u64>(
    source: Hertz,
    duration: TimeDuration<NOM, DENOM>,
    percent: Percent,
) -> Result<DutyCycle, Error> {
    let cycles = cycles_per(source, duration);
    if cycles > u32::MAX as i64 {
        return Err(Error::ValueTooLarge);
    }

    Ok(calculate_duty_cycle(cycles as u32, percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{mhz, Milliseconds, Seconds};

    #[test]
    fn split_preserves_total() {
        for (cycles, num, den) in [
            (1_000, 1, 2),
            (1_000, 1, 4),
            (3, 1, 3),
            (48_000, 999, 1_000),
            (u32::MAX, 2, 3),
            (0, 1, 2),
        ] {
            let duty = calculate_duty_cycle(cycles, Percent::from_ratio(num, den));
            assert_eq!(duty.high as u64 + duty.low as u64, cycles as u64);
            assert!(duty.high <= cycles);
        }
    }

    #[test]
    fn split_at_common_ratios() {
        assert_eq!(
            calculate_duty_cycle(1_000, Percent::from_ratio(1, 2)),
            DutyCycle { high: 500, low: 500 }
        );
        assert_eq!(
            calculate_duty_cycle(1_000, Percent::ONE),
            DutyCycle { high: 1_000, low: 0 }
        );
        assert_eq!(
            calculate_duty_cycle(1_000, Percent::ZERO),
            DutyCycle { high: 0, low: 1_000 }
        );
    }

    #[test]
    fn ratio_round_trip_within_one_unit() {
        let duty = DutyCycle { high: 600, low: 400 };
        let ratio = Percent::from(duty);
        let rederived = calculate_duty_cycle(1_000, ratio).high;
        assert!((599..=600).contains(&rederived), "got {rederived}");
    }

    #[test]
    fn ratio_conversion_halves_oversized_totals() {
        // high + low exceeds u32::MAX, forcing the halving path.
        let duty = DutyCycle {
            high: 3_000_000_000,
            low: 2_000_000_000,
        };
        let ratio = Percent::from(duty);
        let rederived = calculate_duty_cycle(1_000, ratio).high;
        assert!((599..=600).contains(&rederived), "got {rederived}");
    }

    #[test]
    fn from_duration_splits_cycle_count() {
        let duty =
            calculate_duty_cycle_from_duration(mhz(1), Milliseconds::new(1), Percent::from_ratio(1, 2))
                .unwrap();
        assert_eq!(duty, DutyCycle { high: 500, low: 500 });
    }

    #[test]
    fn from_duration_rejects_oversized_counts() {
        // 4 GHz for 2 s is 8e9 cycles, past the 32-bit register range.
        let result = calculate_duty_cycle_from_duration(
            Hertz(4_000_000_000),
            Seconds::new(2),
            Percent::from_ratio(1, 2),
        );
        assert_eq!(result, Err(Error::ValueTooLarge));
    }
}
