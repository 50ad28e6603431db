use super::{
    Database,
    queries::{GET_HISTORY_ENTRY, INSERT_INTO_HISTORY, LOAD_HISTORY},
};
use crate::{domain::HistoryRecord, error::Result};
use rusqlite::params;
use std::path::PathBuf;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only log of playback sessions.
pub trait HistoryStore {
    /// Persists a record stamped with the current local time.
    /// The write is committed before this returns.
    fn append(&mut self, title: &str, info: &str) -> Result<HistoryRecord>;

    /// All records, most recent first
    fn list(&self) -> Result<Vec<HistoryRecord>>;
}

impl Database {
    pub fn insert_history(&mut self, title: &str, info: &str) -> Result<HistoryRecord> {
        let datetime = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_INTO_HISTORY, params![datetime, title, info])?;
        let id = tx.last_insert_rowid();
        let record = tx.query_row(GET_HISTORY_ENTRY, params![id], HistoryRecord::from_row)?;
        tx.commit()?;

        Ok(record)
    }

    pub fn get_history(&self) -> Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(LOAD_HISTORY)?;

        let records = stmt
            .query_map([], HistoryRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }
}

/// Sqlite-backed history. A connection is opened for each operation and
/// dropped right after.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryLog { path: path.into() }
    }

    pub fn open_default() -> Result<Self> {
        Ok(HistoryLog::new(super::default_path()?))
    }
}

impl HistoryStore for HistoryLog {
    fn append(&mut self, title: &str, info: &str) -> Result<HistoryRecord> {
        let mut db = Database::open_at(&self.path)?;
        let record = db.insert_history(title, info)?;
        tracing::info!("Data saved: {} ({})", record.title, record.info);

        Ok(record)
    }

    fn list(&self) -> Result<Vec<HistoryRecord>> {
        Database::open_at(&self.path)?.get_history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log() -> (tempfile::TempDir, HistoryLog) {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("history.db"));
        (dir, log)
    }

    #[test]
    fn schema_is_created_on_first_use() {
        let (_dir, log) = temp_log();
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn lists_most_recent_first() {
        let (_dir, mut log) = temp_log();

        log.append("Section 01", "00:00:10").unwrap();
        log.append("Section 02", "00:01:00").unwrap();
        log.append("Section 03", "01:00:00").unwrap();

        let records = log.list().unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, ["Section 03", "Section 02", "Section 01"]);
        assert!(records.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn append_returns_the_committed_row() {
        let (_dir, mut log) = temp_log();

        let record = log.append("Section 05", "00:02:30").unwrap();
        assert_eq!(record.info, "00:02:30");
        assert_eq!(record.datetime.len(), "2024-01-01 00:00:00".len());

        // a fresh log on the same file sees the row
        let reopened = HistoryLog::new(&log.path);
        assert_eq!(reopened.list().unwrap(), vec![record]);
    }
}
