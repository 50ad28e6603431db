mod buffer_line;
mod controls;
mod error;
mod history_popup;
mod section_list;

pub use buffer_line::BufferLine;
pub use controls::Controls;
pub use error::ErrorMsg;
pub use history_popup::HistoryPopup;
pub use section_list::SectionList;

const PAUSE_ICON: &str = "⏸";
const PLAY_ICON: &str = "▶";

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
