//! `sn-geocode` — resolving intersection descriptions to coordinates.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`geocoder`]| `Geocoder` trait, `GeocodeHit`                              |
//! | [`table`]   | `TableGeocoder` (in-memory / CSV-backed lookups)            |
//! | [`arcgis`]  | `ArcGisGeocoder` (feature = `"arcgis"` only)                |
//! | [`error`]   | `GeocodeError`, `GeocodeResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                      |
//! |----------|-------------------------------------------------------------|
//! | `arcgis` | Enables the blocking HTTP client for the ArcGIS geocoder.   |

pub mod error;
pub mod geocoder;
pub mod table;

#[cfg(feature = "arcgis")]
pub mod arcgis;

#[cfg(test)]
mod tests;

pub use error::{GeocodeError, GeocodeResult};
pub use geocoder::{GeocodeHit, Geocoder};
pub use table::TableGeocoder;

#[cfg(feature = "arcgis")]
pub use arcgis::ArcGisGeocoder;
