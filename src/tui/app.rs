//! Application state and key handling.

use crate::game::{GameSession, Position, SortOrder};
use crate::settings::UiSettings;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input;

/// Which panel currently receives arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board grid.
    Board,
    /// The move-history list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// One writer: the key handlers below. The render pass only reads.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected_row: usize,
    show_coordinates: bool,
}

impl App {
    /// Creates the application with the given display settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &UiSettings) -> Self {
        Self {
            session: GameSession::with_order(settings.start_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_row: 0,
            show_coordinates: settings.show_coordinates,
        }
    }

    /// Maps a display row of the move list to its timeline index.
    pub fn move_number_at(&self, row: usize) -> usize {
        match self.session.order() {
            SortOrder::Ascending => row,
            SortOrder::Descending => self.session.timeline().len() - 1 - row,
        }
    }

    /// Handles one key event to completion.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
                Focus::Moves => self.move_selection(code),
            },
        }
    }

    /// Enter on the board plays the cursor cell; on the move list it
    /// jumps to the selected entry.
    fn activate(&mut self) {
        match self.focus {
            Focus::Board => {
                // Occupied square or decided game: silently ignored.
                match self.session.play(self.cursor) {
                    Ok(()) => self.selected_row = self.move_number_at(self.session.timeline().cursor()),
                    Err(e) => debug!(error = %e, "move ignored"),
                }
            }
            Focus::Moves => {
                let target = self.move_number_at(self.selected_row);
                self.session.jump_to(target);
            }
        }
    }

    fn toggle_order(&mut self) {
        self.session.toggle_order();
        // Keep the same entry selected under the new order.
        self.selected_row = self.session.timeline().len() - 1 - self.selected_row;
    }

    fn move_selection(&mut self, key: KeyCode) {
        let count = self.session.timeline().len();
        self.selected_row = match key {
            KeyCode::Up => match self.selected_row {
                0 => count - 1,
                row => row - 1,
            },
            KeyCode::Down => (self.selected_row + 1) % count,
            _ => self.selected_row,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(&UiSettings::default())
    }

    #[test]
    fn test_enter_on_board_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session().timeline().len(), 2);
        assert!(!app.session().board().is_empty(Position::Center));
        assert_eq!(app.session().to_move(), Player::O);
    }

    #[test]
    fn test_enter_on_occupied_cell_is_silent() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session().timeline().len(), 2);
        assert!(matches!(
            app.session().status(),
            GameStatus::InProgress { next: Player::O }
        ));
    }

    #[test]
    fn test_tab_switches_focus_and_enter_jumps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(*app.focus(), Focus::Moves);

        // Selection starts on the current entry (row 1); move to row 0
        // (game start) and jump to it.
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.session().timeline().cursor(), 0);
        assert_eq!(app.session().timeline().len(), 2);
    }

    #[test]
    fn test_order_toggle_keeps_selection_on_entry() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        let selected = app.move_number_at(*app.selected_row());

        app.handle_key(key(KeyCode::Char('o')));

        assert_eq!(app.move_number_at(*app.selected_row()), selected);
        assert_eq!(app.session().order(), crate::game::SortOrder::Descending);
    }

    #[test]
    fn test_arrows_move_board_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(*app.cursor(), Position::TopCenter);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(*app.cursor(), Position::TopLeft);
    }
}
