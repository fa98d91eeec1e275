//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `SnError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

/// The error type for `sn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for `sn-core`.
pub type SnResult<T> = Result<T, SnError>;
