//! Rewind Tic-Tac-Toe - terminal tic-tac-toe with a time-traveling move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Timeline**: ordered board snapshots plus the viewed-snapshot cursor
//! - **Session**: the state controller (play, jump, order toggle) and its
//!   derived views (turn, status, move labels)
//! - **TUI**: ratatui front end driving the session from keyboard events
//!
//! Playing a move from a past point in history discards the branch that
//! followed it; structural guarantees of the timeline are first-class
//! invariants checked after each move in debug builds.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center)?;
//! session.play(Position::TopLeft)?;
//! assert_eq!(session.to_move(), Player::X);
//!
//! // Time travel: view the first move, then branch from it.
//! session.jump_to(1);
//! session.play(Position::BottomRight)?;
//! assert_eq!(session.timeline().len(), 3);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod game;
mod settings;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Game core
pub use game::{
    Board, GameSession, GameStatus, Move, MoveError, MoveRecord, Player, Position, SortOrder,
    Square, Timeline, WinLine, check_winner, is_full,
};

// Crate-level exports - Settings
pub use settings::{SettingsError, UiSettings};

// Crate-level exports - TUI entry point
pub use tui::run_tui;
