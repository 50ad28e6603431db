use crate::{
    domain::Selection,
    ui_state::{DARK_WHITE, GOLD, GOLD_FADED, MID_GRAY, Pane, UiState},
};
use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, HighlightSpacing, List, ListItem, Padding, StatefulWidget},
};

pub struct SectionList;
impl StatefulWidget for SectionList {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let focused = state.get_pane() == Pane::Sections;
        let locked = state.is_locked();

        let text_color = match locked {
            true => MID_GRAY,
            false => DARK_WHITE,
        };

        let list_items = Selection::all().map(|s| ListItem::new(s.label()).fg(text_color));

        let border = match focused {
            true => GOLD,
            false => MID_GRAY,
        };

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(border)
            .title_top(Line::from(" Sections ").left_aligned().fg(GOLD))
            .padding(Padding::horizontal(1));

        let highlight = match locked {
            true => Style::new().fg(GOLD_FADED),
            false => Style::new().fg(GOLD).bold(),
        };

        List::new(list_items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("» ")
            .highlight_spacing(HighlightSpacing::Always)
            .render(area, buf, &mut state.section_list);
    }
}
