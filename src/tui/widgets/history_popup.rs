use super::POPUP_PADDING;
use crate::ui_state::{DARK_GRAY, DARK_WHITE, GOLD, GOOD_RED, MID_GRAY, PopupType, UiState};
use ratatui::{
    layout::Constraint,
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Row, StatefulWidget, Table, Widget},
};

pub struct HistoryPopup;
impl StatefulWidget for HistoryPopup {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let PopupType::History(records) = &state.popup.current else {
            return;
        };

        let block = Block::bordered()
            .title(format!(" History [{}] ", records.len()))
            .title_bottom(" [j/k] scroll / [Esc] close ")
            .title_alignment(ratatui::layout::Alignment::Center)
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(GOOD_RED))
            .bg(DARK_GRAY)
            .padding(POPUP_PADDING);

        if records.is_empty() {
            Paragraph::new("No sessions recorded yet.")
                .centered()
                .fg(MID_GRAY)
                .block(block)
                .render(area, buf);
            return;
        }

        let rows = records.iter().map(|r| {
            Row::new([r.datetime.clone(), r.title.clone(), r.info.clone()]).fg(DARK_WHITE)
        });

        let header = Row::new(["Datetime", "Title", "Info"])
            .bold()
            .fg(GOLD)
            .bottom_margin(1);

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::new().fg(GOLD));

        StatefulWidget::render(table, area, buf, &mut state.popup.selection);
    }
}
