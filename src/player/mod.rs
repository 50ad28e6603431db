mod backend_rodio;

use crate::error::Result;
use std::path::Path;

pub use backend_rodio::RodioBackend;

/// Playback status as reported by a [`MediaPlayer`]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MediaState {
    /// Nothing loaded
    Idle,
    Playing,
    Paused,
    Stopped,
    /// The loaded media played through to its natural end
    Ended,
    Error,
}

/// The capability surface the session controller drives.
pub trait MediaPlayer {
    /// Prepares `path` for playback without starting it
    fn load(&mut self, path: &Path) -> Result<()>;

    /// Starts the loaded media from the top, or resumes it when paused
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn stop(&mut self);

    fn state(&self) -> MediaState;
}
