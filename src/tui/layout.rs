use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SECTION_LIST_WIDTH: u16 = 20;

pub struct AppLayout {
    pub sections: Rect,
    pub controls: Rect,
    pub buffer_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [upper_block, buffer_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .areas(area);

        let [sections, _, controls] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SECTION_LIST_WIDTH),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(upper_block);

        AppLayout {
            sections,
            controls,
            buffer_line,
        }
    }
}
