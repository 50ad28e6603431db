use crate::{app_dir, error::Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

mod history;
mod queries;
mod tables;

pub use history::{HistoryLog, HistoryStore};

const DATABASE_FILENAME: &str = "history.db";

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path.as_ref())?;
        tracing::trace!("Database connected: {}", path.as_ref().display());

        let mut db = Database { conn };
        db.create_tables()?;

        Ok(db)
    }

    fn create_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(tables::CREATE_TABLES)?;
        tx.commit()?;

        Ok(())
    }
}

pub fn default_path() -> Result<PathBuf> {
    Ok(app_dir()?.join(DATABASE_FILENAME))
}
