//! Cursor invariant: the viewed-snapshot cursor never dangles.

use super::Invariant;
use crate::game::Timeline;

/// Invariant: the cursor points at an existing snapshot.
///
/// The timeline always holds at least its initial snapshot, and the
/// cursor satisfies `cursor < len` after every transition.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        !timeline.snapshots().is_empty() && timeline.cursor() < timeline.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
