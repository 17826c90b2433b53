//! The game session controller.
//!
//! Owns the snapshot [`Timeline`] and the presentation-only sort order,
//! and exposes the three state transitions the interface drives: playing
//! a move, jumping the view to a past snapshot, and toggling the order of
//! the rendered move list. Everything else (turn, status, move labels) is
//! derived from the timeline on demand.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::Timeline;
use super::rules::{self, WinLine};
use super::types::{Board, Player, Square};
use super::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the rendered move list. Presentation state only; it
/// never affects game semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Status of the currently viewed board, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing; `next` holds the active mark.
    InProgress {
        /// The player whose turn it is.
        next: Player,
    },
    /// Game ended in a win along the carried line.
    Won(WinLine),
    /// Board full with no winner.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One entry of the derived move list.
///
/// Entry 0 is the game start and carries no move; entry N carries the
/// move recovered by diffing snapshots N-1 and N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct MoveRecord {
    /// Move number (timeline index).
    number: usize,
    /// The placed mark, absent for the initial entry.
    action: Option<Move>,
}

impl MoveRecord {
    /// Label for a jump target entry.
    pub fn describe(&self) -> String {
        match &self.action {
            Some(mov) => format!(
                "Go to move #{} (col: {}, row: {})",
                self.number,
                mov.position().column(),
                mov.position().row()
            ),
            None if self.number == 0 => "Go to game start".to_string(),
            None => format!("Go to move #{}", self.number),
        }
    }

    /// Label for the currently viewed entry.
    pub fn describe_current(&self) -> String {
        match &self.action {
            Some(mov) => format!(
                "You are at move #{} (col: {}, row: {})",
                self.number,
                mov.position().column(),
                mov.position().row()
            ),
            None if self.number == 0 => "You are at game start".to_string(),
            None => format!("You are at move #{}", self.number),
        }
    }
}

/// Owns the timeline and the move-list sort order; the single writer of
/// game state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(in crate::game) timeline: Timeline,
    order: SortOrder,
}

impl GameSession {
    /// Creates a session at the game start, ascending move list.
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a session with the given starting sort order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            timeline: Timeline::new(),
            order,
        }
    }

    /// The snapshot timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The currently viewed board.
    pub fn board(&self) -> &Board {
        self.timeline.current()
    }

    /// Current move-list display order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The active mark, derived from cursor parity: X on even, O on odd.
    pub fn to_move(&self) -> Player {
        if self.timeline.cursor() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the currently viewed board.
    pub fn status(&self) -> GameStatus {
        let board = self.timeline.current();
        if let Some(line) = rules::check_winner(board) {
            GameStatus::Won(line)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Plays the active mark at `position` on the currently viewed board.
    ///
    /// Rejected without any state change when the square is occupied or
    /// the viewed board already has a winner. On acceptance the successor
    /// snapshot is recorded (discarding any future branch) and the view
    /// moves onto it.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] rejection reason; the interface layer
    /// drops it silently.
    #[instrument(skip(self), fields(cursor = self.timeline.cursor()))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        MoveContract::pre(self, &position)?;

        let mark = self.to_move();
        let next = self
            .timeline
            .current()
            .with(position, Square::Occupied(mark));

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.timeline.record(next);
        debug!(?position, player = %mark, "move accepted");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Moves the view to the given snapshot index. History is untouched.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        debug!(from = self.timeline.cursor(), to = index, "jumping view");
        self.timeline.rewind(index);
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "display order toggled");
    }

    /// The derived move list, one record per snapshot, oldest first.
    ///
    /// Each record's move is recovered by diffing adjacent snapshots
    /// (O(9) per entry, recomputed per render). Callers apply the display
    /// order; the records themselves are always in timeline order.
    pub fn moves(&self) -> Vec<MoveRecord> {
        let snapshots = self.timeline.snapshots();
        let mut records = Vec::with_capacity(snapshots.len());
        records.push(MoveRecord::new(0, None));
        for (index, pair) in snapshots.windows(2).enumerate() {
            let action = Timeline::step_between(&pair[0], &pair[1])
                .map(|(position, player)| Move::new(player, position));
            records.push(MoveRecord::new(index + 1, action));
        }
        records
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
