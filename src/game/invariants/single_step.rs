//! Single-step invariant: adjacent snapshots differ by one placed mark.

use super::Invariant;
use crate::game::Timeline;

/// Invariant: every snapshot extends its predecessor by exactly one mark.
///
/// For each entry k >= 1, exactly one square changes between entries k-1
/// and k, and that change is Empty -> Occupied. No square is ever cleared
/// or overwritten within the timeline.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .all(|pair| Timeline::step_between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one newly placed mark"
    }
}
