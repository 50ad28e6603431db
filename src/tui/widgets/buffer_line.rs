use super::PAUSE_ICON;
use crate::ui_state::{DARK_WHITE, GOLD_FADED, MID_GRAY, UiState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

pub struct BufferLine;

impl StatefulWidget for BufferLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .areas(area);

        let separator = match state.is_paused() {
            true => Span::from(format!(" {PAUSE_ICON} ")).fg(DARK_WHITE),
            false => Span::from(" ✧ ").fg(MID_GRAY),
        };

        Line::from_iter([
            separator,
            Span::from(state.get_status().to_string()).fg(GOLD_FADED),
        ])
        .left_aligned()
        .render(left, buf);

        Line::from(format!("{} ", state.selection))
            .fg(MID_GRAY)
            .right_aligned()
            .render(right, buf);
    }
}
