//! SQLite audit log (feature `sqlite`).
//!
//! Rows go to an `audit_log` table in the given database file, created on
//! first open.

use std::path::Path;

use rusqlite::Connection;

use crate::audit::{AuditLog, AuditRecord};
use crate::OutputResult;

pub struct SqliteAuditLog {
    conn:     Connection,
    finished: bool,
}

impl SqliteAuditLog {
    pub fn open(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS audit_log (
                 id            INTEGER PRIMARY KEY AUTOINCREMENT,
                 timestamp     TEXT NOT NULL,
                 email         TEXT NOT NULL,
                 intersections TEXT NOT NULL,
                 file_link     TEXT NOT NULL,
                 status        TEXT NOT NULL
             );",
        )?;
        Ok(Self { conn, finished: false })
    }
}

impl AuditLog for SqliteAuditLog {
    fn append(&mut self, record: &AuditRecord) -> OutputResult<()> {
        let [timestamp, email, intersections, file_link, status] = record.fields();
        self.conn.execute(
            "INSERT INTO audit_log (timestamp, email, intersections, file_link, status) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![timestamp, email, intersections, file_link, status],
        )?;
        self.finished = false;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
