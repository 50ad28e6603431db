use super::{MediaPlayer, MediaState};
use crate::error::{PlaybackError, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

type BoxedSource = Box<dyn Source + Send>;

/// Turns a path into a playable source. Called once per run of the media.
type OpenFn = fn(&Path) -> Result<BoxedSource>;

pub struct RodioBackend {
    sink: Sink,
    _stream: Option<OutputStream>,
    open: OpenFn,

    loaded: Option<PathBuf>,
    pending: Option<BoxedSource>,
    started: bool,
    failed: bool,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::PlaybackFailure(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self::with_sink(sink, Some(stream), decode))
    }

    fn with_sink(sink: Sink, stream: Option<OutputStream>, open: OpenFn) -> Self {
        RodioBackend {
            sink,
            _stream: stream,
            open,
            loaded: None,
            pending: None,
            started: false,
            failed: false,
        }
    }

    /// No output device; the caller pulls samples from the returned queue.
    #[cfg(test)]
    fn detached(open: OpenFn) -> (Self, rodio::queue::SourcesQueueOutput) {
        let (sink, output) = Sink::new();
        (Self::with_sink(sink, None, open), output)
    }
}

impl MediaPlayer for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<()> {
        self.sink.stop();
        self.started = false;
        self.failed = false;

        let source = (self.open)(path)?;
        self.pending = Some(source);
        self.loaded = Some(path.to_path_buf());

        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.started && self.sink.is_paused() && !self.sink.empty() {
            self.sink.play();
            return Ok(());
        }

        let path = self
            .loaded
            .as_deref()
            .ok_or_else(|| PlaybackError::PlaybackFailure("No media loaded".into()))?;

        // A restart after the previous run drained needs a fresh source
        let source = match self.pending.take() {
            Some(source) => source,
            None => (self.open)(path).inspect_err(|_| self.failed = true)?,
        };

        self.sink.clear();
        self.sink.append(source);
        self.sink.play();
        self.started = true;

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.started = false;
    }

    fn state(&self) -> MediaState {
        match (&self.loaded, self.started) {
            _ if self.failed => MediaState::Error,
            (None, _) => MediaState::Idle,
            (Some(_), false) => MediaState::Stopped,
            (Some(_), true) if self.sink.empty() => MediaState::Ended,
            (Some(_), true) if self.sink.is_paused() => MediaState::Paused,
            (Some(_), true) => MediaState::Playing,
        }
    }
}

fn decode(path: &Path) -> Result<BoxedSource> {
    let file = File::open(path).map_err(|e| {
        PlaybackError::PlaybackFailure(format!("Cannot open {}: {e}", path.display()))
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| {
        PlaybackError::PlaybackFailure(format!("Cannot decode {}: {e}", path.display()))
    })?;

    Ok(Box::new(decoder))
}
