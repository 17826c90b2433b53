//! Rewind Tic-Tac-Toe binary: parse arguments, set up logging, run the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::{Cli, SortOrder, UiSettings, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never interferes with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting rewind_tictactoe");

    let mut settings = UiSettings::load(&cli.settings)?;
    if cli.descending {
        settings.start_order = SortOrder::Descending;
    }

    run_tui(&settings)
}
