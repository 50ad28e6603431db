mod action;

pub use action::{handle_key_event, next_event};

use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    // Player Controls
    TogglePlay,
    Stop,

    // Controls
    SelectNext,
    SelectPrev,
    FocusNext,
    RepeatInput(KeyEvent),
    ToggleShutdown,

    // Popups
    ViewHistory,
    PopupScroll(MoveDirection),
    SoftReset,

    QUIT,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}
