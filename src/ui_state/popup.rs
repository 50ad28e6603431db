use crate::{
    domain::HistoryRecord,
    ui_state::{Pane, UiState},
};
use ratatui::widgets::TableState;

#[derive(PartialEq)]
pub enum PopupType {
    None,
    Error { kind: &'static str, message: String },
    History(Vec<HistoryRecord>),
}

pub struct PopupState {
    pub current: PopupType,
    pub selection: TableState,
    pub cached: Pane,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
            selection: TableState::default(),
            cached: Pane::Sections,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    fn open(&mut self, popup: PopupType) {
        let selected = match &popup {
            PopupType::History(rows) if !rows.is_empty() => Some(0),
            _ => None,
        };
        self.selection.select(selected);
        self.current = popup;
    }

    fn close(&mut self) -> Pane {
        self.current = PopupType::None;
        self.selection.select(None);
        self.cached
    }
}

impl UiState {
    pub fn show_popup(&mut self, popup: PopupType) {
        if !self.popup.is_open() {
            self.popup.cached = self.get_pane();
        }
        self.popup.open(popup);
        self.set_pane(Pane::Popup);
    }

    pub fn close_popup(&mut self) {
        let pane = self.popup.close();
        self.set_pane(pane);
    }

    pub fn scroll_popup(&mut self, down: bool) {
        let len = match &self.popup.current {
            PopupType::History(rows) => rows.len(),
            _ => return,
        };
        if len == 0 {
            return;
        }

        let current = self.popup.selection.selected().unwrap_or(0);
        let next = match down {
            true => (current + 1).min(len - 1),
            false => current.saturating_sub(1),
        };
        self.popup.selection.select(Some(next));
    }
}
