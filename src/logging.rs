use crate::app_dir;
use anyhow::{Result, anyhow};
use std::{fs::OpenOptions, sync::Mutex};
use tracing_subscriber::EnvFilter;

const LOG_FILENAME: &str = "recite.log";

/// Logs go to a file; the terminal belongs to the TUI.
/// Verbosity follows `RUST_LOG`, defaulting to `info`.
pub fn init() -> Result<()> {
    let path = app_dir()?.join(LOG_FILENAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Could not initialize logging: {e}"))?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}
