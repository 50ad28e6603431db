mod mode;
mod popup;
mod ui_state;

pub use mode::{Mode, Pane};
pub use popup::{PopupState, PopupType};
pub use ui_state::UiState;

use ratatui::style::Color;

pub const DARK_WHITE: Color = Color::Rgb(210, 210, 210);
pub const MID_GRAY: Color = Color::Rgb(100, 100, 100);
pub const DARK_GRAY: Color = Color::Rgb(25, 25, 25);
pub const GOOD_RED: Color = Color::Rgb(255, 70, 70);
pub const GOOD_GREEN: Color = Color::Rgb(22, 163, 74);
pub const GOLD: Color = Color::Rgb(220, 220, 100);
pub const GOLD_FADED: Color = Color::Rgb(130, 130, 60);

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder} "));

    input
}
