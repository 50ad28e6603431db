//! Session controller scenarios driven against fake collaborators.

use recite::{
    SessionController,
    database::{HistoryLog, HistoryStore},
    domain::{HistoryRecord, Selection},
    error::{PlaybackError, Result},
    player::{MediaPlayer, MediaState},
    power::PowerControl,
    resolver::{AssetProbe, TrackResolver},
    session::{ControllerState, Transition},
};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

// ===== Test Helpers =====

struct PlayerLog {
    state: MediaState,
    loads: Vec<PathBuf>,
    plays: usize,
    pauses: usize,
    stops: usize,
    fail_load: bool,
    /// `play` returns before the player reports itself running
    lazy_start: bool,
}

#[derive(Clone)]
struct FakePlayer(Rc<RefCell<PlayerLog>>);

impl FakePlayer {
    fn new() -> Self {
        FakePlayer(Rc::new(RefCell::new(PlayerLog {
            state: MediaState::Idle,
            loads: Vec::new(),
            plays: 0,
            pauses: 0,
            stops: 0,
            fail_load: false,
            lazy_start: false,
        })))
    }

    /// The media reaches its natural end
    fn finish_media(&self) {
        self.0.borrow_mut().state = MediaState::Ended;
    }

    fn force_state(&self, state: MediaState) {
        self.0.borrow_mut().state = state;
    }

    fn state(&self) -> MediaState {
        self.0.borrow().state
    }
}

impl MediaPlayer for FakePlayer {
    fn load(&mut self, path: &Path) -> Result<()> {
        let mut log = self.0.borrow_mut();
        if log.fail_load {
            return Err(PlaybackError::PlaybackFailure("unsupported format".into()));
        }
        log.loads.push(path.to_path_buf());
        log.state = MediaState::Stopped;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let mut log = self.0.borrow_mut();
        log.plays += 1;
        if !log.lazy_start {
            log.state = MediaState::Playing;
        }
        Ok(())
    }

    fn pause(&mut self) {
        let mut log = self.0.borrow_mut();
        log.pauses += 1;
        log.state = MediaState::Paused;
    }

    fn stop(&mut self) {
        let mut log = self.0.borrow_mut();
        log.stops += 1;
        log.state = MediaState::Stopped;
    }

    fn state(&self) -> MediaState {
        self.0.borrow().state
    }
}

#[derive(Clone, Default)]
struct MemoryHistory(Rc<RefCell<Vec<HistoryRecord>>>);

impl MemoryHistory {
    fn records(&self) -> Vec<HistoryRecord> {
        self.0.borrow().clone()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, title: &str, info: &str) -> Result<HistoryRecord> {
        let mut records = self.0.borrow_mut();
        let record = HistoryRecord {
            id: records.len() as i64 + 1,
            datetime: String::from("2024-01-01 00:00:00"),
            title: title.to_string(),
            info: info.to_string(),
        };
        records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.0.borrow().iter().rev().cloned().collect())
    }
}

#[derive(Clone, Default)]
struct FakePower(Rc<RefCell<usize>>);

impl FakePower {
    fn calls(&self) -> usize {
        *self.0.borrow()
    }
}

impl PowerControl for FakePower {
    fn shutdown_machine(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}

struct FolderProbe(bool);
impl AssetProbe for FolderProbe {
    fn exists(&self, _path: &Path) -> bool {
        self.0
    }
}

struct Harness {
    controller: SessionController,
    player: FakePlayer,
    history: MemoryHistory,
    power: FakePower,
}

fn resolver(folder_exists: bool) -> TrackResolver {
    TrackResolver::new(
        Box::new(FolderProbe(folder_exists)),
        vec![PathBuf::from("/work")],
    )
}

fn harness() -> Harness {
    harness_with(resolver(true))
}

fn harness_with(resolver: TrackResolver) -> Harness {
    let player = FakePlayer::new();
    let history = MemoryHistory::default();
    let power = FakePower::default();

    let controller = SessionController::new(
        Box::new(player.clone()),
        resolver,
        Box::new(history.clone()),
        Box::new(power.clone()),
    );

    Harness {
        controller,
        player,
        history,
        power,
    }
}

fn section(n: u8) -> Selection {
    Selection::new(n).unwrap()
}

fn ticks(controller: &mut SessionController, n: usize) {
    (0..n).for_each(|_| controller.tick());
}

// ===== Scenarios =====

#[test]
fn two_repeats_restart_once_then_complete() {
    let mut h = harness();

    let started = h.controller.toggle(section(1), "2").unwrap();
    assert_eq!(
        started,
        Transition::Started {
            selection: section(1),
            repeat_count: 2
        }
    );
    assert_eq!(h.controller.state(), ControllerState::Playing);
    assert_eq!(h.controller.poll().unwrap(), Transition::Unchanged);

    h.player.finish_media();
    assert_eq!(
        h.controller.poll().unwrap(),
        Transition::Repeated {
            index: 1,
            repeat_count: 2
        }
    );
    assert_eq!(h.player.state(), MediaState::Playing);
    assert_eq!(h.controller.snapshot().repeat, Some((2, 2)));

    h.player.finish_media();
    let Transition::Completed { record, shutdown } = h.controller.poll().unwrap() else {
        panic!("expected the session to complete");
    };
    assert!(!shutdown);
    assert_eq!(record.title, "Section 01");
    assert_eq!(h.controller.state(), ControllerState::Ended);

    // Ended settles into Idle on the next step
    assert_eq!(h.controller.poll().unwrap(), Transition::Unchanged);
    assert_eq!(h.controller.state(), ControllerState::Idle);

    let records = h.history.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Section 01");

    let log = h.player.0.borrow();
    assert_eq!(log.loads.len(), 1);
    assert_eq!(log.plays, 2);
    assert_eq!(h.power.calls(), 0);
}

#[test]
fn completed_session_records_exactly_once_for_any_count() {
    for count in 1..=6u32 {
        let mut h = harness();
        h.controller.start(section(3), &count.to_string()).unwrap();

        let mut completions = 0;
        for _ in 0..count {
            h.player.finish_media();
            if let Transition::Completed { .. } = h.controller.poll().unwrap() {
                completions += 1;
            }
        }

        assert_eq!(completions, 1, "repeat count {count}");
        assert_eq!(h.history.records().len(), 1, "repeat count {count}");
        assert!(!h.controller.is_active());
    }
}

#[test]
fn stop_during_any_repeat_records_accrued_time() {
    for k in 0..3 {
        let mut h = harness();
        h.controller.set_shutdown_on_finish(true);
        h.controller.start(section(2), "3").unwrap();

        for _ in 0..k {
            ticks(&mut h.controller, 30);
            h.player.finish_media();
            h.controller.poll().unwrap();
        }
        ticks(&mut h.controller, 25);

        assert_eq!(h.controller.stop(), Transition::StopRequested);
        assert_eq!(h.controller.state(), ControllerState::Stopping);
        // player keeps running until the next poll
        assert_eq!(h.player.state(), MediaState::Playing);

        // no accrual while stopping
        ticks(&mut h.controller, 10);

        let Transition::Stopped(record) = h.controller.poll().unwrap() else {
            panic!("expected stop at repeat {k}");
        };

        let expected_secs = (k * 30 + 25) / 10;
        assert_eq!(record.info, format!("00:00:{expected_secs:02}"));
        assert_eq!(record.title, "Section 02");

        assert_eq!(h.player.state(), MediaState::Stopped);
        assert_eq!(h.controller.state(), ControllerState::Idle);
        assert_eq!(h.history.records().len(), 1);
        assert_eq!(h.controller.snapshot().elapsed, "00:00:00");
        assert_eq!(h.power.calls(), 0, "stop never triggers shutdown");
    }
}

#[test]
fn stopping_immediately_still_records() {
    let mut h = harness();
    h.controller.start(section(1), "15").unwrap();
    h.controller.stop();

    let Transition::Stopped(record) = h.controller.poll().unwrap() else {
        panic!("expected stop");
    };
    assert_eq!(record.info, "00:00:00");
    assert_eq!(h.history.records().len(), 1);
}

#[test]
fn pause_and_resume_preserve_elapsed_time() {
    let mut h = harness();
    h.controller.toggle(section(4), "1").unwrap();

    ticks(&mut h.controller, 100);
    assert_eq!(h.controller.toggle(section(4), "1").unwrap(), Transition::Paused);
    assert_eq!(h.player.state(), MediaState::Paused);

    ticks(&mut h.controller, 50);
    assert_eq!(h.controller.snapshot().elapsed, "00:00:10");

    assert_eq!(h.controller.toggle(section(4), "1").unwrap(), Transition::Resumed);
    assert_eq!(h.player.state(), MediaState::Playing);

    ticks(&mut h.controller, 50);
    assert_eq!(h.controller.snapshot().elapsed, "00:00:15");
}

#[test]
fn poll_reconciles_player_with_pause_flag() {
    let mut h = harness();
    h.controller.start(section(5), "1").unwrap();

    h.controller.pause();
    h.player.force_state(MediaState::Playing);
    h.controller.poll().unwrap();
    assert_eq!(h.player.state(), MediaState::Paused);

    h.controller.resume().unwrap();
    h.player.force_state(MediaState::Paused);
    h.controller.poll().unwrap();
    assert_eq!(h.player.state(), MediaState::Playing);
}

#[test]
fn stop_takes_priority_over_end_of_media() {
    let mut h = harness();
    h.controller.start(section(1), "5").unwrap();

    h.controller.stop();
    h.player.finish_media();

    assert!(matches!(
        h.controller.poll().unwrap(),
        Transition::Stopped(_)
    ));
    assert_eq!(h.history.records().len(), 1);
}

#[test]
fn end_before_playback_begins_is_ignored() {
    let mut h = harness();
    h.player.0.borrow_mut().lazy_start = true;
    h.controller.start(section(6), "2").unwrap();

    // left over from a previous run
    h.player.finish_media();
    assert_eq!(h.controller.poll().unwrap(), Transition::Unchanged);
    assert_eq!(h.controller.snapshot().repeat, Some((1, 2)));

    h.player.force_state(MediaState::Playing);
    h.controller.poll().unwrap();
    h.player.finish_media();
    assert!(matches!(
        h.controller.poll().unwrap(),
        Transition::Repeated { index: 1, .. }
    ));

    // the restart has not been seen running yet
    assert_eq!(h.controller.poll().unwrap(), Transition::Unchanged);
    assert_eq!(h.controller.snapshot().repeat, Some((2, 2)));

    h.player.force_state(MediaState::Playing);
    h.controller.poll().unwrap();
    h.player.finish_media();
    assert!(matches!(
        h.controller.poll().unwrap(),
        Transition::Completed { .. }
    ));
    assert_eq!(h.history.records().len(), 1);
}

#[test]
fn unparsable_repeat_count_plays_once() {
    let mut h = harness();
    h.controller.start(section(1), "lots").unwrap();
    assert_eq!(h.controller.snapshot().repeat, Some((1, 1)));

    h.player.finish_media();
    assert!(matches!(
        h.controller.poll().unwrap(),
        Transition::Completed { .. }
    ));
}

#[test]
fn shutdown_runs_only_after_completion() {
    let mut h = harness();
    h.controller.set_shutdown_on_finish(true);
    h.controller.start(section(30), "1").unwrap();

    h.player.finish_media();
    let transition = h.controller.poll().unwrap();

    assert!(matches!(
        transition,
        Transition::Completed { shutdown: true, .. }
    ));
    assert_eq!(h.power.calls(), 1);
}

#[test]
fn missing_assets_leave_controller_idle() {
    let mut h = harness_with(resolver(false));

    let err = h.controller.toggle(section(1), "15").unwrap_err();

    assert!(matches!(err, PlaybackError::ResourceNotFound(_)));
    assert_eq!(h.controller.state(), ControllerState::Idle);
    assert!(h.player.0.borrow().loads.is_empty());
    assert!(h.history.records().is_empty());
}

#[test]
fn load_failure_records_nothing() {
    let mut h = harness();
    h.player.0.borrow_mut().fail_load = true;

    let err = h.controller.start(section(1), "15").unwrap_err();

    assert!(matches!(err, PlaybackError::PlaybackFailure(_)));
    assert_eq!(h.controller.state(), ControllerState::Idle);
    assert!(!h.controller.is_active());
    assert!(h.history.records().is_empty());
}

#[test]
fn player_error_mid_session_aborts_without_record() {
    let mut h = harness();
    h.controller.start(section(1), "3").unwrap();
    ticks(&mut h.controller, 10);

    h.player.force_state(MediaState::Error);
    let err = h.controller.poll().unwrap_err();

    assert!(matches!(err, PlaybackError::PlaybackFailure(_)));
    assert_eq!(h.controller.state(), ControllerState::Idle);
    assert!(h.history.records().is_empty());
}

#[test]
fn intents_without_a_session_are_ignored() {
    let mut h = harness();

    assert_eq!(h.controller.pause(), Transition::Unchanged);
    assert_eq!(h.controller.resume().unwrap(), Transition::Unchanged);
    assert_eq!(h.controller.stop(), Transition::Unchanged);
    assert_eq!(h.controller.poll().unwrap(), Transition::Unchanged);

    ticks(&mut h.controller, 20);
    assert_eq!(h.controller.snapshot().elapsed, "00:00:00");
    assert_eq!(h.player.0.borrow().stops, 0);
}

#[test]
fn only_one_session_at_a_time() {
    let mut h = harness();
    h.controller.start(section(1), "2").unwrap();

    assert_eq!(
        h.controller.start(section(9), "2").unwrap(),
        Transition::Unchanged
    );
    assert_eq!(h.controller.snapshot().selection, Some(section(1)));
    assert_eq!(h.player.0.borrow().loads.len(), 1);
}

#[test]
fn sessions_persist_to_sqlite_history() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("history.db");
    let player = FakePlayer::new();

    let mut controller = SessionController::new(
        Box::new(player.clone()),
        resolver(true),
        Box::new(HistoryLog::new(&db_path)),
        Box::new(FakePower::default()),
    );

    for n in 1..=3 {
        controller.start(section(n), "1").unwrap();
        player.finish_media();
        controller.poll().unwrap();
        controller.poll().unwrap();
    }

    let titles: Vec<String> = controller
        .history()
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["Section 03", "Section 02", "Section 01"]);
}
