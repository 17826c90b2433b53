//! Alternating-mark invariant: placed marks alternate, X first.

use super::Invariant;
use crate::game::{Player, Timeline};

/// Invariant: the mark placed by entry k is X when k is odd, O when even.
///
/// Entry 0 is the initial empty board and places nothing; X moves first,
/// so entry 1 places X, entry 2 places O, and so on. The check reads the
/// placed mark out of the snapshot diff, so it also holds across branch
/// discards: a replayed entry k always carries the parity of k, not of
/// the branch it replaced.
pub struct AlternatingMarkInvariant;

impl Invariant<Timeline> for AlternatingMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let entry = index + 1;
                let expected = if entry % 2 == 1 { Player::X } else { Player::O };
                match Timeline::step_between(&pair[0], &pair[1]) {
                    Some((_, player)) => player == expected,
                    // Not a single step at all; SingleStepInvariant's
                    // territory, vacuously true here.
                    None => true,
                }
            })
    }

    fn description() -> &'static str {
        "Placed marks alternate between X and O, X first"
    }
}
