use super::{Action, C, MoveDirection, S, X};
use crate::{
    POLL_RATE,
    ui_state::{Pane, UiState},
};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode::*, KeyEvent};

/// Waits at most one poll interval for terminal input
pub fn next_event() -> Result<Option<Event>> {
    match event::poll(POLL_RATE)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.get_pane() {
        Pane::Popup => handle_popup(&key_event),
        Pane::Repeat => handle_repeat_field(key_event),
        Pane::Sections => handle_sections(&key_event),
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::SoftReset),
        (X, Tab) | (S, BackTab) => Some(Action::FocusNext),
        (C, Char(' ')) => Some(Action::TogglePlay),
        (C, Char('s')) => Some(Action::Stop),
        _ => None,
    }
}

fn handle_sections(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) | (X, Enter) => Some(Action::TogglePlay),
        (X, Char('s')) => Some(Action::Stop),

        (X, Char('j')) | (X, Down) => Some(Action::SelectNext),
        (X, Char('k')) | (X, Up) => Some(Action::SelectPrev),

        (X, Char('x')) => Some(Action::ToggleShutdown),
        (X, Char('h')) => Some(Action::ViewHistory),
        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_repeat_field(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::FocusNext),
        (X, Char(c)) if c.is_ascii_digit() => Some(Action::RepeatInput(key)),
        (X, Backspace | Delete | Left | Right | Home | End) => Some(Action::RepeatInput(key)),
        _ => None,
    }
}

fn handle_popup(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) | (X, Char('q')) | (X, Char('h')) => Some(Action::SoftReset),
        (X, Char('j')) | (X, Down) => Some(Action::PopupScroll(MoveDirection::Down)),
        (X, Char('k')) | (X, Up) => Some(Action::PopupScroll(MoveDirection::Up)),
        _ => None,
    }
}
