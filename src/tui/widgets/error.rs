use super::POPUP_PADDING;
use crate::ui_state::{DARK_WHITE, GOLD, UiState};
use ratatui::{
    style::{Color, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

const ERROR_BG: Color = Color::Rgb(120, 30, 30);

pub struct ErrorMsg;
impl StatefulWidget for ErrorMsg {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some((kind, message)) = state.get_error() else {
            return;
        };

        // "Audio folder not found! Looked in: a, b" reads better on two lines
        let body = match message.split_once(": ") {
            Some((head, detail)) => Text::from_iter([
                Line::from(head.to_string()).bold(),
                Line::default(),
                Line::from(detail.to_string()),
            ]),
            None => Text::from(message.to_string()),
        };

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(DARK_WHITE)
            .title_top(Line::from(format!(" ✗ {kind} ")).centered().fg(GOLD).bold())
            .title_bottom(Line::from(" [Esc] dismiss ").centered())
            .padding(POPUP_PADDING);

        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .centered()
            .fg(DARK_WHITE)
            .bg(ERROR_BG)
            .block(block)
            .render(area, buf);
    }
}
