//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules;
use super::session::GameSession;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty on the
/// currently viewed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Validates the target square.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), MoveError> {
        if !session.board().is_empty(position) {
            Err(MoveError::SquareOccupied(position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The currently viewed board must not have a winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Validates that play can continue from the viewed snapshot.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if rules::check_winner(session.board()).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the viewed board is
/// undecided and the target square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), MoveError> {
        GameUndecided::check(session)?;
        SquareIsEmpty::check(position, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Target square is empty
///
/// Postconditions:
/// - All timeline invariants hold (single step, alternating marks,
///   cursor in bounds)
/// - The cursor sits on the newly recorded snapshot
pub struct MoveContract;

impl Contract<GameSession, Position> for MoveContract {
    fn pre(session: &GameSession, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(*action, session)
    }

    fn post(_before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after.timeline()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.timeline().cursor() != after.timeline().len() - 1 {
            warn!(
                cursor = after.timeline().cursor(),
                len = after.timeline().len(),
                "cursor left behind after record"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor not on the recorded snapshot".to_string(),
            ));
        }

        Ok(())
    }
}
