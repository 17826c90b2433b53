//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use tracing::instrument;

/// A completed line of three: the winning player and the cells that won.
///
/// The line is reported so the interface can distinguish the winning
/// squares once a winner exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WinLine {
    /// The player holding the line.
    player: Player,
    /// The three positions forming the line, in board order.
    line: [Position; 3],
}

impl WinLine {
    /// Whether the given position belongs to the winning line.
    pub fn contains(&self, position: Position) -> bool {
        self.line.contains(&position)
    }
}

/// The 8 winning lines, in detection priority order: rows top-to-bottom,
/// columns left-to-right, main diagonal, anti-diagonal. Only a malformed
/// board can satisfy more than one line at once; the first match is the
/// verdict either way.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the first line whose three squares hold the same mark, or
/// `None` otherwise. Total over arbitrary boards: no assumption is made
/// that the board is reachable under alternating play.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Some(player) = sq.mark() {
                return Some(WinLine { player, line });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X));

        let verdict = check_winner(&board).expect("top row wins");
        assert_eq!(*verdict.player(), Player::X);
        assert_eq!(
            *verdict.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::O));

        let verdict = check_winner(&board).expect("main diagonal wins");
        assert_eq!(*verdict.player(), Player::O);
        assert!(verdict.contains(Position::Center));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_match_wins_on_malformed_board() {
        // X fills the whole left column and the top row; the top row is
        // checked first, so it is the reported line.
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X))
            .with(Position::MiddleLeft, Square::Occupied(Player::X))
            .with(Position::BottomLeft, Square::Occupied(Player::X));

        let verdict = check_winner(&board).expect("malformed board still wins");
        assert_eq!(
            *verdict.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
