use super::{AppLayout, BufferLine, Controls, ErrorMsg, HistoryPopup, SectionList};
use crate::ui_state::{DARK_GRAY, PopupType, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    widgets::{Block, Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area());

    Block::new().bg(DARK_GRAY).render(f.area(), f.buffer_mut());

    SectionList.render(layout.sections, f.buffer_mut(), state);
    Controls.render(layout.controls, f.buffer_mut(), state);
    BufferLine.render(layout.buffer_line, f.buffer_mut(), state);

    if state.popup.is_open() {
        let is_history = matches!(state.popup.current, PopupType::History(_));
        let popup_rect = match is_history {
            true => centered_rect(70, 70, f.area()),
            false => centered_rect(50, 30, f.area()),
        };

        Clear.render(popup_rect, f.buffer_mut());
        match is_history {
            true => HistoryPopup.render(popup_rect, f.buffer_mut(), state),
            false => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
