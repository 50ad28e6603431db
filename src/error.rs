use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Neither candidate asset folder exists
    #[error("Audio folder not found! Looked in: {}", display_paths(.0))]
    ResourceNotFound(Vec<PathBuf>),

    /// The media player rejected the file or failed mid-session
    #[error("Playback failed: {0}")]
    PlaybackFailure(String),

    #[error("Malformed configuration: {0}")]
    ConfigParse(String),

    #[error("History storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlaybackError {
    /// Short name for the failure, used as a popup title
    pub fn kind(&self) -> &'static str {
        match self {
            PlaybackError::ResourceNotFound(_) => "Audio Missing",
            PlaybackError::PlaybackFailure(_) => "Playback",
            PlaybackError::ConfigParse(_) => "Config",
            PlaybackError::Storage(_) => "History",
            PlaybackError::Io(_) => "IO",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaybackError>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
