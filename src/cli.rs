//! Command-line interface for rewind_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with a time-traveling move history.
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with a time-traveling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the display-settings file (defaults apply if absent)
    #[arg(long, default_value = "rewind.toml")]
    pub settings: PathBuf,

    /// Path to the log file (logs go to a file so they never corrupt the
    /// terminal UI)
    #[arg(long, default_value = "rewind_tictactoe.log")]
    pub log_file: PathBuf,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,
}
