//! Usage audit log: one row per generation attempt.
//!
//! Row layout: timestamp (`YYYY-MM-DD HH:MM:SS`), user email, intersection
//! names joined by `", "`, archive link or `N/A`, status.

use std::fs::{File, OpenOptions};
use std::path::Path;

use chrono::NaiveDateTime;
use csv::{Writer, WriterBuilder};

use crate::OutputResult;

pub const AUDIT_HEADER: [&str; 5] = ["timestamp", "email", "intersections", "file_link", "status"];

/// One audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp:     NaiveDateTime,
    pub email:         String,
    pub intersections: Vec<String>,
    pub file_link:     Option<String>,
    pub status:        String,
}

impl AuditRecord {
    /// The five cells as written to the log.
    pub fn fields(&self) -> [String; 5] {
        [
            self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.email.clone(),
            self.intersections.join(", "),
            self.file_link.clone().unwrap_or_else(|| "N/A".to_string()),
            self.status.clone(),
        ]
    }
}

/// Trait implemented by the CSV and SQLite audit logs.
pub trait AuditLog {
    fn append(&mut self, record: &AuditRecord) -> OutputResult<()>;

    /// Flush buffered rows.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Appends audit rows to a CSV file, writing the header only when the file
/// is new or empty.
pub struct CsvAuditLog {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvAuditLog {
    pub fn open(path: &Path) -> OutputResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let fresh = file.metadata()?.len() == 0;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if fresh {
            writer.write_record(AUDIT_HEADER)?;
        }
        Ok(Self { writer, finished: false })
    }
}

impl AuditLog for CsvAuditLog {
    fn append(&mut self, record: &AuditRecord) -> OutputResult<()> {
        self.writer.write_record(record.fields())?;
        self.finished = false;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for CsvAuditLog {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            log::warn!("audit log flush failed: {e}");
        }
    }
}
