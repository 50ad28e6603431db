mod history_record;
mod selection;

pub use history_record::HistoryRecord;
pub use selection::{SECTION_COUNT, Selection};
