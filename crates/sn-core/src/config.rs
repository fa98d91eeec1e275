//! Generator configuration.
//!
//! Every field has a default matching the values the interchange files have
//! always been produced with, so an empty JSON object `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::projection::FEET_PER_DEGREE;
use crate::{SnError, SnResult};

/// ArcGIS World geocoder endpoint used when no other URL is configured.
pub const DEFAULT_GEOCODER_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// Tunables for a generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Distance from a center node to each of its approach nodes, in feet.
    pub approach_distance_ft: i64,
    /// Feet per degree of latitude for the local projection.
    pub feet_per_degree: f64,
    /// Geocoder endpoint (`findAddressCandidates`-compatible).
    pub geocoder_url: String,
    /// Per-request geocoder timeout.  A timeout counts as "not found".
    pub geocoder_timeout_secs: u64,
    /// Base file name for the generated document, without extension.
    pub output_base_name: String,
}

impl GeneratorConfig {
    /// Read a JSON config file.  Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> SnResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SnResult<()> {
        if self.approach_distance_ft <= 0 {
            return Err(SnError::Config(format!(
                "approach_distance_ft must be positive, got {}",
                self.approach_distance_ft
            )));
        }
        if self.feet_per_degree.is_nan() || self.feet_per_degree <= 0.0 {
            return Err(SnError::Config(format!(
                "feet_per_degree must be positive, got {}",
                self.feet_per_degree
            )));
        }
        if self.geocoder_timeout_secs == 0 {
            return Err(SnError::Config("geocoder_timeout_secs must be at least 1".into()));
        }
        if self.output_base_name.trim().is_empty() {
            return Err(SnError::Config("output_base_name must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            approach_distance_ft:  1_500,
            feet_per_degree:       FEET_PER_DEGREE,
            geocoder_url:          DEFAULT_GEOCODER_URL.to_string(),
            geocoder_timeout_secs: 10,
            output_base_name:      "synchro_network".to_string(),
        }
    }
}
