//! Geocoding error type.

use thiserror::Error;

/// Errors produced by `sn-geocode`.
///
/// Callers building a network treat every variant the same as "no match";
/// the variants exist so the failure can be logged with its cause.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[cfg(feature = "arcgis")]
    #[error("geocoder transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geocoder returned HTTP {0}")]
    Status(u16),

    #[error("malformed geocoder response: {0}")]
    Malformed(String),

    #[error("geocode table error: {0}")]
    Table(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeocodeResult<T> = Result<T, GeocodeError>;
