//! The board-snapshot timeline backing time travel.
//!
//! Every accepted move appends a complete board snapshot; the cursor
//! selects which snapshot is currently viewed. Recording from a past
//! cursor position discards the snapshots that followed it, which is the
//! branch-discard semantics of playing a move after jumping back.

use super::types::{Board, Player, Square};
use super::Position;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Ordered history of board snapshots plus the viewed-snapshot cursor.
///
/// Structural guarantees, checked by the invariant set after each
/// transition in debug builds:
/// - the timeline always holds at least the initial empty snapshot;
/// - adjacent snapshots differ by exactly one newly placed mark;
/// - placed marks alternate, X first;
/// - the cursor always points at an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(in crate::game) snapshots: Vec<Board>,
    pub(in crate::game) cursor: usize,
}

impl Timeline {
    /// Creates a timeline holding the initial empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the currently viewed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently viewed snapshot.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Records a new snapshot after the viewed one.
    ///
    /// Snapshots past the cursor are discarded first, then the new board
    /// is appended and the cursor moves onto it.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "discarding future branch");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to the given snapshot index.
    ///
    /// Callers generate jump targets from the timeline itself, so an
    /// out-of-range index is a programming error: fatal in debug builds,
    /// clamped to the last snapshot in release.
    #[instrument(skip(self))]
    pub fn rewind(&mut self, index: usize) {
        debug_assert!(index < self.snapshots.len(), "rewind index out of range");
        self.cursor = index.min(self.snapshots.len() - 1);
    }

    /// The single mark placed between two adjacent snapshots.
    ///
    /// Returns `None` when the pair is not a legal single step: any square
    /// cleared or overwritten, or not exactly one square filled. Linear
    /// scan over the 9 squares; recomputed freely at this scale.
    pub fn step_between(prev: &Board, next: &Board) -> Option<(Position, Player)> {
        let mut step = None;
        for pos in Position::iter() {
            match (prev.get(pos), next.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(player)) => {
                    if step.is_some() {
                        return None;
                    }
                    step = Some((pos, player));
                }
                _ => return None,
            }
        }
        step
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(timeline: &mut Timeline, position: Position, player: Player) {
        let next = timeline
            .current()
            .with(position, Square::Occupied(player));
        timeline.record(next);
    }

    #[test]
    fn test_new_timeline_has_empty_snapshot() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(*timeline.current(), Board::new());
    }

    #[test]
    fn test_record_advances_cursor() {
        let mut timeline = Timeline::new();
        play(&mut timeline, Position::Center, Player::X);
        play(&mut timeline, Position::TopLeft, Player::O);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(
            timeline.current().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_record_from_past_discards_future() {
        let mut timeline = Timeline::new();
        play(&mut timeline, Position::Center, Player::X);
        play(&mut timeline, Position::TopLeft, Player::O);
        timeline.rewind(1);

        play(&mut timeline, Position::BottomRight, Player::O);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert!(timeline.current().is_empty(Position::TopLeft));
        assert_eq!(
            timeline.current().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_rewind_does_not_alter_snapshots() {
        let mut timeline = Timeline::new();
        play(&mut timeline, Position::Center, Player::X);
        let snapshots = timeline.snapshots().to_vec();

        timeline.rewind(0);

        assert_eq!(timeline.snapshots(), snapshots.as_slice());
        assert_eq!(timeline.cursor(), 0);
    }

    #[test]
    fn test_step_between_adjacent_snapshots() {
        let mut timeline = Timeline::new();
        play(&mut timeline, Position::MiddleRight, Player::X);

        let step = Timeline::step_between(&timeline.snapshots()[0], &timeline.snapshots()[1]);
        assert_eq!(step, Some((Position::MiddleRight, Player::X)));
    }

    #[test]
    fn test_step_between_rejects_double_placement() {
        let prev = Board::new();
        let next = prev
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(Timeline::step_between(&prev, &next), None);
    }

    #[test]
    fn test_step_between_rejects_overwrite() {
        let prev = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let next = Board::new().with(Position::Center, Square::Occupied(Player::O));
        assert_eq!(Timeline::step_between(&prev, &next), None);
    }

    #[test]
    fn test_step_between_rejects_no_change() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert_eq!(Timeline::step_between(&board, &board.clone()), None);
    }
}
