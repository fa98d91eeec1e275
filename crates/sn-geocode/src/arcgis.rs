//! ArcGIS World geocoder client (Cargo feature `arcgis`).
//!
//! Issues one blocking `findAddressCandidates` request per query with
//! `maxLocations=1` and takes the first candidate.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::{GeocodeError, GeocodeHit, GeocodeResult, Geocoder};

pub struct ArcGisGeocoder {
    client:  Client,
    url:     String,
    timeout: Duration,
}

impl ArcGisGeocoder {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }
}

impl Geocoder for ArcGisGeocoder {
    fn geocode(&self, query: &str) -> GeocodeResult<Option<GeocodeHit>> {
        let resp = self
            .client
            .get(&self.url)
            .query(&[("f", "json"), ("singleLine", query), ("maxLocations", "1")])
            .timeout(self.timeout)
            .send()?;
        if !resp.status().is_success() {
            return Err(GeocodeError::Status(resp.status().as_u16()));
        }
        let body: CandidatesResponse = resp.json()?;
        body.first_hit()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatesResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) error:      Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub(crate) address:  String,
    pub(crate) location: Location,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Location {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceError {
    #[serde(default)]
    pub(crate) code:    i64,
    #[serde(default)]
    pub(crate) message: String,
}

impl CandidatesResponse {
    /// The service reports failures in-band with HTTP 200.
    pub(crate) fn first_hit(self) -> GeocodeResult<Option<GeocodeHit>> {
        if let Some(err) = self.error {
            return Err(GeocodeError::Malformed(format!(
                "service error {}: {}",
                err.code, err.message
            )));
        }
        Ok(self
            .candidates
            .into_iter()
            .next()
            .map(|c| GeocodeHit::new(c.location.y, c.location.x, c.address)))
    }
}
