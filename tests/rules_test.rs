//! Tests for the win evaluator over arbitrary boards.

use rewind_tictactoe::{Board, Player, Position, Square, check_winner, is_full};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("valid board index")
}

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for (index, player) in marks {
        board = board.with(pos(*index), Square::Occupied(*player));
    }
    board
}

/// The 8 winning lines in detection order.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[test]
fn test_each_line_wins_with_exact_triple() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            // Fill the line, then scatter opponent marks off the line.
            let mut marks: Vec<(usize, Player)> =
                line.iter().map(|&i| (i, player)).collect();
            let opponent = player.opponent();
            for index in 0..9 {
                if !line.contains(&index) && marks.len() < 5 {
                    marks.push((index, opponent));
                }
            }

            let verdict = check_winner(&board_with(&marks)).expect("line should win");
            assert_eq!(*verdict.player(), player);
            let reported: Vec<usize> = verdict.line().iter().map(|p| p.index()).collect();
            assert_eq!(reported, line.to_vec());
        }
    }
}

#[test]
fn test_no_false_positive() {
    // A near-miss everywhere: X O X / X X O / O X O has no line of three.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::X),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::O),
    ]);
    assert_eq!(check_winner(&board), None);
    assert!(is_full(&board));
}

#[test]
fn test_partial_board_no_winner() {
    let board = board_with(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
    assert_eq!(check_winner(&board), None);
    assert!(!is_full(&board));
}

#[test]
fn test_detection_order_is_deterministic() {
    // X holds both the top row and the left column; the row is reported
    // because rows are checked first.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::X),
        (3, Player::X),
        (6, Player::X),
    ]);
    let verdict = check_winner(&board).expect("winner");
    let reported: Vec<usize> = verdict.line().iter().map(|p| p.index()).collect();
    assert_eq!(reported, vec![0, 1, 2]);
}

#[test]
fn test_evaluator_accepts_unreachable_boards() {
    // All nine squares X: unreachable under alternation, still a verdict.
    let marks: Vec<(usize, Player)> = (0..9).map(|i| (i, Player::X)).collect();
    let verdict = check_winner(&board_with(&marks)).expect("winner");
    assert_eq!(*verdict.player(), Player::X);
    let reported: Vec<usize> = verdict.line().iter().map(|p| p.index()).collect();
    assert_eq!(reported, vec![0, 1, 2]);
}
