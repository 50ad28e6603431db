mod layout;
mod renderer;
mod widgets;

pub use layout::AppLayout;
pub use renderer::render;
pub use widgets::{BufferLine, Controls, ErrorMsg, HistoryPopup, SectionList};
