use rusqlite::Row;

/// A persisted playback session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: i64,
    pub datetime: String,
    pub title: String,
    pub info: String,
}

impl HistoryRecord {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(HistoryRecord {
            id: row.get("id")?,
            datetime: row.get("datetime")?,
            title: row.get("title")?,
            info: row.get("info")?,
        })
    }
}
