use ratatui::crossterm::{
    ExecutableCommand,
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{io::Write, path::PathBuf, time::Duration};

pub mod app_core;
pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod key_handler;
pub mod logging;
pub mod player;
pub mod power;
pub mod resolver;
pub mod session;
pub mod tui;
pub mod ui_state;

pub use error::PlaybackError;
pub use session::SessionController;
pub use ui_state::UiState;

/// How often the session controller polls the player. Input is read with the
/// same timeout, so this also bounds stop latency.
pub const POLL_RATE: Duration = Duration::from_millis(50);

const APP_DIRECTORY: &str = "Recite";

/// Per-user directory holding the config, history database and log
pub fn app_dir() -> error::Result<PathBuf> {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIRECTORY);

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn overwrite_line(message: &str) {
    let mut stdout = std::io::stdout();
    let _ = stdout
        .execute(MoveToColumn(0))
        .and_then(|s| s.execute(Clear(ClearType::CurrentLine)))
        .and_then(|s| s.execute(Print(message)));
    let _ = stdout.flush();
}
