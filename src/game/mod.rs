//! Game core: board model, rules, snapshot timeline, session controller.

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use history::Timeline;
pub use position::Position;
pub use rules::{WinLine, check_winner, is_full};
pub use session::{GameSession, GameStatus, MoveRecord, SortOrder};
pub use types::{Board, Player, Square};
