//! Archiving a copy of each generated document.
//!
//! An archive takes the finished bytes and a file name and hands back a
//! link the audit log can record.  Archiving is best-effort: callers log a
//! failure and carry on.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::OutputResult;

/// `{email}_{YYYYMMDD_HHMMSS}_{base}`.
///
/// ```
/// use chrono::NaiveDate;
/// use sn_output::archive_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 5, 7).unwrap();
/// assert_eq!(
///     archive_file_name("eng@example.com", at, "synchro_network.txt"),
///     "eng@example.com_20240309_140507_synchro_network.txt",
/// );
/// ```
pub fn archive_file_name(email: &str, at: NaiveDateTime, base: &str) -> String {
    format!("{email}_{}_{base}", at.format("%Y%m%d_%H%M%S"))
}

/// Destination for archived documents.
pub trait Archive {
    /// Store `contents` under `file_name` and return a link to the copy.
    fn store(&mut self, file_name: &str, contents: &[u8]) -> OutputResult<String>;
}

/// Archives into a local directory; the link is the written file's path.
#[derive(Debug, Clone)]
pub struct DirArchive {
    dir: PathBuf,
}

impl DirArchive {
    /// The directory is created on first use, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Archive for DirArchive {
    fn store(&mut self, file_name: &str, contents: &[u8]) -> OutputResult<String> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, contents)?;
        log::debug!("archived {} bytes to {}", contents.len(), path.display());
        Ok(path.display().to_string())
    }
}
