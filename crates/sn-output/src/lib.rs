//! `sn-output` — everything that happens to a finished network.
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`utdf`]    | `UtdfWriter` (six-section UTDF text), `to_csv_variant`    |
//! | [`archive`] | `archive_file_name`, `Archive` trait, `DirArchive`        |
//! | [`audit`]   | `AuditRecord`, `AuditLog` trait, `CsvAuditLog`            |
//! | `sqlite`    | `SqliteAuditLog` (feature `sqlite`)                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sn_output::{to_csv_variant, UtdfWriter};
//!
//! let doc = UtdfWriter::now().render(&generation.network);
//! std::fs::write("network.txt", &doc)?;
//! std::fs::write("network.csv", to_csv_variant(&doc))?;
//! ```

pub mod archive;
pub mod audit;
pub mod error;
pub mod utdf;

mod lanes;
mod row;
mod timing;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use archive::{archive_file_name, Archive, DirArchive};
pub use audit::{AuditLog, AuditRecord, CsvAuditLog};
pub use error::{OutputError, OutputResult};
pub use utdf::{to_csv_variant, UtdfWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteAuditLog;
