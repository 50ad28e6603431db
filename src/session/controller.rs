use super::{
    ControllerState, ElapsedTracker, Session, SessionSnapshot, Transition, parse_repeat_count,
};
use crate::{
    database::HistoryStore,
    domain::{HistoryRecord, Selection},
    error::{PlaybackError, Result},
    player::{MediaPlayer, MediaState},
    power::PowerControl,
    resolver::TrackResolver,
};

/// Drives one playback session at a time against a [`MediaPlayer`].
///
/// Nothing here blocks. The owner calls [`poll`](Self::poll) on a short
/// cadence and [`tick`](Self::tick) every [`TICK_INTERVAL`](super::TICK_INTERVAL);
/// each call advances the state machine by at most one step.
pub struct SessionController {
    player: Box<dyn MediaPlayer>,
    resolver: TrackResolver,
    history: Box<dyn HistoryStore>,
    power: Box<dyn PowerControl>,

    tracker: ElapsedTracker,
    session: Option<Session>,
    state: ControllerState,
    shutdown_on_finish: bool,
}

impl SessionController {
    pub fn new(
        player: Box<dyn MediaPlayer>,
        resolver: TrackResolver,
        history: Box<dyn HistoryStore>,
        power: Box<dyn PowerControl>,
    ) -> Self {
        SessionController {
            player,
            resolver,
            history,
            power,
            tracker: ElapsedTracker::default(),
            session: None,
            state: ControllerState::Idle,
            shutdown_on_finish: false,
        }
    }

    pub fn set_shutdown_on_finish(&mut self, enabled: bool) {
        self.shutdown_on_finish = enabled;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>> {
        self.history.list()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            selection: self.session.as_ref().map(|s| s.selection),
            repeat: self
                .session
                .as_ref()
                .map(|s| (s.repeat_index + 1, s.repeat_count)),
            elapsed: self.tracker.display(),
        }
    }
}

// =============
//    INTENTS
// =============
impl SessionController {
    /// The play/pause control: starts a session when none exists,
    /// otherwise flips between playing and paused.
    pub fn toggle(&mut self, selection: Selection, repeat_input: &str) -> Result<Transition> {
        match self.state {
            ControllerState::Idle | ControllerState::Ended => self.start(selection, repeat_input),
            ControllerState::Playing => Ok(self.pause()),
            ControllerState::Paused => self.resume(),
            ControllerState::Stopping => Ok(Transition::Unchanged),
        }
    }

    pub fn start(&mut self, selection: Selection, repeat_input: &str) -> Result<Transition> {
        if self.session.is_some() {
            return Ok(Transition::Unchanged);
        }

        let path = self.resolver.resolve(selection)?;
        let repeat_count = parse_repeat_count(repeat_input);

        if let Err(e) = self.player.load(&path) {
            tracing::error!("Could not load {}: {e}", path.display());
            return Err(e);
        }

        let mut session = Session::new(selection, path, repeat_count);

        if let Err(e) = self.player.play() {
            self.player.stop();
            tracing::error!("Could not start {}: {e}", session.path.display());
            return Err(e);
        }

        session.started = self.player_running();
        tracing::info!("Start playing {selection} ({repeat_count}x)");
        tracing::info!("repeat 1");

        self.session = Some(session);
        self.tracker.reset();
        self.state = ControllerState::Playing;

        Ok(Transition::Started {
            selection,
            repeat_count,
        })
    }

    pub fn pause(&mut self) -> Transition {
        match (self.state, self.session.as_mut()) {
            (ControllerState::Playing, Some(session)) => {
                session.paused = true;
                self.player.pause();
                self.state = ControllerState::Paused;
                tracing::info!("pause");
                Transition::Paused
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn resume(&mut self) -> Result<Transition> {
        match (self.state, self.session.as_mut()) {
            (ControllerState::Paused, Some(session)) => {
                session.paused = false;
                self.state = ControllerState::Playing;
                tracing::info!("continue");

                if let Err(e) = self.player.play() {
                    return Err(self.abort(e));
                }
                Ok(Transition::Resumed)
            }
            _ => Ok(Transition::Unchanged),
        }
    }

    /// Cooperative: the player is halted on the next [`poll`](Self::poll).
    pub fn stop(&mut self) -> Transition {
        match (self.state, self.session.as_mut()) {
            (ControllerState::Playing | ControllerState::Paused, Some(session)) => {
                session.stop_requested = true;
                self.state = ControllerState::Stopping;
                tracing::info!("Stop requested");
                Transition::StopRequested
            }
            _ => Transition::Unchanged,
        }
    }
}

// ===============
//    SCHEDULING
// ===============
impl SessionController {
    /// Elapsed-time step, run every tick interval
    pub fn tick(&mut self) {
        if let Some(session) = &self.session {
            if self.state != ControllerState::Stopping {
                self.tracker.tick(session.paused);
            }
        }
    }

    /// One polling step. In priority order: honour a pending stop, line the
    /// player up with the pause flag, then handle a natural end of media.
    pub fn poll(&mut self) -> Result<Transition> {
        let Some(session) = self.session.as_mut() else {
            if self.state == ControllerState::Ended {
                self.state = ControllerState::Idle;
            }
            return Ok(Transition::Unchanged);
        };

        if session.stop_requested {
            self.player.stop();
            tracing::info!("Playback stopped");
            let record = self.finish()?;
            return Ok(Transition::Stopped(record));
        }

        let actual = self.player.state();
        if matches!(actual, MediaState::Playing | MediaState::Paused) {
            session.started = true;
        }
        let started = session.started;

        match (session.paused, actual) {
            (true, MediaState::Playing) => {
                tracing::debug!("Player still running while paused, pausing");
                self.player.pause();
            }
            (false, MediaState::Paused) => {
                tracing::debug!("Player paused while playing, resuming");
                if let Err(e) = self.player.play() {
                    return Err(self.abort(e));
                }
            }
            _ => (),
        }

        match actual {
            MediaState::Ended if started => self.on_media_ended(),
            MediaState::Ended => {
                tracing::debug!("End reported before playback began, ignoring");
                Ok(Transition::Unchanged)
            }
            MediaState::Error => Err(self.abort(PlaybackError::PlaybackFailure(
                "Player reported an error".into(),
            ))),
            _ => Ok(Transition::Unchanged),
        }
    }

    fn on_media_ended(&mut self) -> Result<Transition> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Transition::Unchanged);
        };
        tracing::info!("Media file has ended");
        self.player.stop();

        if !session.is_last_repeat() {
            session.repeat_index += 1;
            let (index, repeat_count) = (session.repeat_index, session.repeat_count);
            tracing::info!("repeat {}", index + 1);

            if let Err(e) = self.player.play() {
                return Err(self.abort(e));
            }
            let running = self.player_running();
            if let Some(session) = self.session.as_mut() {
                session.started = running;
            }
            return Ok(Transition::Repeated {
                index,
                repeat_count,
            });
        }

        let record = self.finish()?;
        self.state = ControllerState::Ended;

        let shutdown = self.shutdown_on_finish;
        match shutdown {
            true => self.power.shutdown_machine(),
            false => tracing::info!("Finished, no shutdown"),
        }

        Ok(Transition::Completed { record, shutdown })
    }

    fn player_running(&self) -> bool {
        matches!(
            self.player.state(),
            MediaState::Playing | MediaState::Paused
        )
    }

    /// Ends the session and records it, whatever the elapsed time.
    fn finish(&mut self) -> Result<HistoryRecord> {
        let session = self.session.take();
        let info = self.tracker.display();
        self.tracker.reset();
        self.state = ControllerState::Idle;

        let title = session.map(|s| s.selection.label()).unwrap_or_default();

        self.history.append(&title, &info)
    }

    /// Drops the session without recording it
    fn abort(&mut self, err: PlaybackError) -> PlaybackError {
        tracing::error!("Session aborted: {err}");
        self.player.stop();
        self.session = None;
        self.tracker.reset();
        self.state = ControllerState::Idle;
        err
    }
}
