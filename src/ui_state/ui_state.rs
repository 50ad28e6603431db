use super::{Mode, Pane, PopupState, PopupType, new_textarea};
use crate::{
    config::AppConfig,
    domain::Selection,
    error::PlaybackError,
    session::{ControllerState, DEFAULT_REPEAT_COUNT, SessionSnapshot, Transition, format_hms},
};
use anyhow::Error;
use ratatui::{crossterm::event::KeyEvent, widgets::ListState};
use std::time::Duration;
use tui_textarea::TextArea;

pub struct UiState {
    pub(crate) selection: Selection,
    pub(crate) section_list: ListState,
    pub(crate) repeat_input: TextArea<'static>,
    pub(crate) shutdown: bool,

    pub(crate) popup: PopupState,
    pub(crate) snapshot: SessionSnapshot,

    status: String,
    mode: Mode,
    pane: Pane,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        let mut repeat_input = new_textarea("count");
        repeat_input.insert_str(DEFAULT_REPEAT_COUNT.to_string());

        let mut section_list = ListState::default();
        section_list.select(Some(config.selection.index()));

        UiState {
            selection: config.selection,
            section_list,
            repeat_input,
            shutdown: config.shutdown,

            popup: PopupState::new(),
            snapshot: SessionSnapshot {
                state: ControllerState::Idle,
                selection: None,
                repeat: None,
                elapsed: format_hms(Duration::ZERO),
            },

            status: String::new(),
            mode: Mode::default(),
            pane: Pane::default(),
        }
    }

    /// The config to persist on exit
    pub fn to_config(&self, base: &AppConfig) -> AppConfig {
        AppConfig {
            selection: self.selection,
            shutdown: self.shutdown,
            ..base.clone()
        }
    }
}

impl UiState {
    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode
    }

    pub fn get_pane(&self) -> Pane {
        self.pane
    }

    pub fn set_pane(&mut self, pane: Pane) {
        self.pane = pane
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Sections => Pane::Repeat,
            Pane::Repeat => Pane::Sections,
            Pane::Popup => Pane::Popup,
        }
    }

    pub fn set_error(&mut self, e: Error) {
        let kind = e
            .downcast_ref::<PlaybackError>()
            .map_or("Error", PlaybackError::kind);

        tracing::warn!("{kind}: {e}");
        self.show_popup(PopupType::Error {
            kind,
            message: e.to_string(),
        });
    }

    /// Kind and message of the open error popup
    pub fn get_error(&self) -> Option<(&'static str, &str)> {
        match &self.popup.current {
            PopupType::Error { kind, message } => Some((*kind, message.as_str())),
            _ => None,
        }
    }

    pub fn soft_reset(&mut self) {
        match self.popup.is_open() {
            true => self.close_popup(),
            false => self.set_pane(Pane::Sections),
        }
    }
}

// ==============
//    CONTROLS
// ==============
impl UiState {
    /// Section and repeat count are fixed for the length of a session
    pub fn is_locked(&self) -> bool {
        !matches!(
            self.snapshot.state,
            ControllerState::Idle | ControllerState::Ended
        )
    }

    pub fn select_next(&mut self) {
        if !self.is_locked() {
            self.set_selection(self.selection.next());
        }
    }

    pub fn select_prev(&mut self) {
        if !self.is_locked() {
            self.set_selection(self.selection.prev());
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.section_list.select(Some(selection.index()));
        tracing::debug!("{selection} selected");
    }

    pub fn repeat_text(&self) -> String {
        self.repeat_input.lines().concat()
    }

    pub fn input_repeat(&mut self, key: KeyEvent) {
        if !self.is_locked() {
            self.repeat_input.input(key);
        }
    }

    pub fn toggle_shutdown(&mut self) {
        self.shutdown = !self.shutdown;
    }

    pub fn get_status(&self) -> &str {
        &self.status
    }
}

// ===============
//    PLAYBACK
// ===============
impl UiState {
    pub fn sync_snapshot(&mut self, snapshot: SessionSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn is_paused(&self) -> bool {
        self.snapshot.state == ControllerState::Paused
    }

    pub fn apply_transition(&mut self, transition: &Transition) {
        let status = match transition {
            Transition::Unchanged => return,
            Transition::Started { selection, .. } => format!("Playing {selection} (1)"),
            Transition::Repeated { index, .. } => {
                format!("Playing {} ({})", self.selection, index + 1)
            }
            Transition::Paused => String::from("Paused"),
            Transition::Resumed => match self.snapshot.repeat {
                Some((k, _)) => format!("Playing {} ({k})", self.selection),
                None => String::from("Playing"),
            },
            Transition::StopRequested => String::from("Stopping..."),
            Transition::Stopped(_) => String::from("Stop playing"),
            Transition::Completed { .. } => String::from("Finished"),
        };
        self.status = status;
    }
}
