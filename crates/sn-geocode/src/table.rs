//! Offline geocoder backed by a lookup table.
//!
//! # CSV format
//!
//! ```csv
//! name,lat,lon,address
//! "Main St and 1st Ave, City, State",42.0,-83.0,"Main St & 1st Ave, City"
//! ```
//!
//! `address` may be empty, in which case the name is echoed back.  Keys are
//! matched after trimming and ASCII-lowercasing, so the table tolerates the
//! casing differences users type.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{GeocodeError, GeocodeHit, GeocodeResult, Geocoder};

#[derive(Deserialize)]
struct TableRecord {
    name:    String,
    lat:     f64,
    lon:     f64,
    #[serde(default)]
    address: String,
}

/// Deterministic geocoder answering from a fixed name → coordinate table.
#[derive(Debug, Clone, Default)]
pub struct TableGeocoder {
    entries: FxHashMap<String, GeocodeHit>,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.insert(name, GeocodeHit::new(lat, lon, name));
        self
    }

    pub fn insert(&mut self, name: &str, hit: GeocodeHit) {
        self.entries.insert(normalize(name), hit);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a table from a CSV file.
    pub fn from_csv(path: &Path) -> GeocodeResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Like [`from_csv`](Self::from_csv) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> GeocodeResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut table = Self::new();
        for result in csv_reader.deserialize::<TableRecord>() {
            let row = result.map_err(|e| GeocodeError::Table(e.to_string()))?;
            let address = if row.address.trim().is_empty() { row.name.clone() } else { row.address };
            table.insert(&row.name, GeocodeHit::new(row.lat, row.lon, address));
        }
        log::debug!("loaded {} geocode table entries", table.len());
        Ok(table)
    }
}

impl Geocoder for TableGeocoder {
    fn geocode(&self, query: &str) -> GeocodeResult<Option<GeocodeHit>> {
        Ok(self.entries.get(&normalize(query)).cloned())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
