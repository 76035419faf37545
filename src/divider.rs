//! Selection of the best integer clock divider from a hardware-supplied
//! candidate set.

use crate::math::distance;
use crate::time::Hertz;

/// Selection policy for [`closest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DividerRule {
    /// Only accept dividers whose resulting frequency is at or above the
    /// target.
    Higher,
    /// Only accept dividers whose resulting frequency is at or below the
    /// target.
    Lower,
    /// Accept any divider; minimize the distance to the target.
    Closest,
}

/// Find the divider whose resulting frequency comes closest to the
/// target under the given rule.
///
/// Each candidate `d` is scored by `|source / d - target|` after the
/// rule's filter. Ties go to the first candidate in iteration order, so
/// the result is deterministic and depends only on the input order.
///
/// Returns `None` when no candidate passes the filter. That is a normal
/// outcome the caller must check for (e.g. rule [`DividerRule::Higher`]
/// with a target above the source), not an error.
///
/// # Panics
///
/// Panics if a candidate divider is zero.
pub fn closest<I>(source: Hertz, dividers: I, target: Hertz, rule: DividerRule) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut best = None;
    let mut best_cost = u32::MAX;

    for divider in dividers {
        let candidate = source / divider;

        let applicable = match rule {
            DividerRule::Lower => candidate <= target,
            DividerRule::Higher => candidate >= target,
            DividerRule::Closest => true,
        };

        let cost = distance(candidate.0, target.0);
        if applicable && cost < best_cost {
            best = Some(divider);
            best_cost = cost;
        }
    }

    if let Some(divider) = best {
        trace!(
            "divider search: {} / {} = {} (target {}, off by {})",
            source.0,
            divider,
            (source / divider).0,
            target.0,
            best_cost
        );
    }

    best
}
