//! The geocoder contract.
//!
//! # Pluggability
//!
//! The network builder only talks to the [`Geocoder`] trait, so the HTTP
//! client, an offline table, or a test stub can be swapped in freely.
//!
//! # Result semantics
//!
//! `Ok(Some(hit))` is a match, `Ok(None)` is "no match".  An `Err` is a
//! transport or decoding failure; the builder treats it exactly like
//! `Ok(None)` after logging it.

use sn_core::GeoPoint;

use crate::GeocodeResult;

/// A successful geocoder response.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub location: GeoPoint,
    /// The geocoder's own rendering of the matched address.
    pub address:  String,
}

impl GeocodeHit {
    pub fn new(lat: f64, lon: f64, address: impl Into<String>) -> Self {
        Self { location: GeoPoint::new(lat, lon), address: address.into() }
    }
}

/// Resolves a free-text intersection description to a coordinate.
pub trait Geocoder {
    /// Look up `query`.  Called once per intersection, sequentially.
    fn geocode(&self, query: &str) -> GeocodeResult<Option<GeocodeHit>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> GeocodeResult<Option<GeocodeHit>> {
        (**self).geocode(query)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, query: &str) -> GeocodeResult<Option<GeocodeHit>> {
        (**self).geocode(query)
    }
}
