//! Terminal UI: a synchronous event loop over the game session.
//!
//! All state transitions happen inside the handler for one key event,
//! and each handler runs to completion before the next event is read.

mod app;
mod input;
mod ui;

use crate::settings::UiSettings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use app::App;

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns terminal-setup and drawing failures; the terminal is restored
/// before the error propagates.
pub fn run_tui(settings: &UiSettings) -> Result<()> {
    info!("starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "event loop error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("user quit");
                        return Ok(());
                    }
                    _ => app.handle_key(key),
                }
            }
        }
    }
}
