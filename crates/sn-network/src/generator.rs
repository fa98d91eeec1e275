//! The single entry point for a generation run.
//!
//! A [`NetworkGenerator`] holds only the configuration and the geocoder;
//! every call to [`generate`](NetworkGenerator::generate) builds a fresh
//! projector, arena, and link list owned by that call.  Nothing carries
//! over between runs.
//!
//! # Example
//!
//! ```
//! use sn_core::{GeneratorConfig, IntersectionIdx};
//! use sn_geocode::TableGeocoder;
//! use sn_network::{Connections, IntersectionSpec, NetworkGenerator};
//!
//! let geocoder = TableGeocoder::new()
//!     .with("Main St and 1st Ave", 42.0, -83.0)
//!     .with("Main St and 2nd Ave", 42.0, -82.995);
//! let specs = vec![
//!     IntersectionSpec::new("Main St and 1st Ave"),
//!     IntersectionSpec::new("Main St and 2nd Ave"),
//! ];
//! let connections: Connections = [(IntersectionIdx(0), IntersectionIdx(1))].into_iter().collect();
//!
//! let run = NetworkGenerator::new(GeneratorConfig::default(), geocoder)
//!     .generate(&specs, &connections);
//! assert_eq!(run.network.node_count(), 9);
//! ```

use sn_core::{GeneratorConfig, IntersectionIdx};
use sn_geocode::Geocoder;

use crate::builder::NetworkBuilder;
use crate::intersection::Connections;
use crate::merge::{merge_corridors, MergeReport};
use crate::network::Network;
use crate::spec::IntersectionSpec;

/// Summary of what a run did with its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub requested: usize,
    /// Indices that geocoded and were built.
    pub built:     Vec<IntersectionIdx>,
    /// Specs the geocoder could not resolve, by index and name.
    pub dropped:   Vec<(IntersectionIdx, String)>,
    pub merges:    MergeReport,
}

/// Result of one run: the finished graph and its report.
#[derive(Debug, Clone)]
pub struct Generation {
    pub network: Network,
    pub report:  GenerationReport,
}

pub struct NetworkGenerator<G: Geocoder> {
    config:   GeneratorConfig,
    geocoder: G,
}

impl<G: Geocoder> NetworkGenerator<G> {
    pub fn new(config: GeneratorConfig, geocoder: G) -> Self {
        Self { config, geocoder }
    }

    /// Geocode, project, build, and merge.  Never fails: unresolvable
    /// intersections are left out and connections naming them are ignored.
    pub fn generate(&self, specs: &[IntersectionSpec], connections: &Connections) -> Generation {
        let mut builder = NetworkBuilder::new(&self.config);
        let mut report = GenerationReport { requested: specs.len(), ..Default::default() };

        for (i, spec) in specs.iter().enumerate() {
            let index = IntersectionIdx(i as u32);
            let hit = match self.geocoder.geocode(&spec.name) {
                Ok(hit) => hit,
                Err(e) => {
                    log::warn!("geocoding {:?} failed: {e}", spec.name);
                    None
                }
            };
            let Some(hit) = hit else {
                log::debug!("dropping {:?}: not found", spec.name);
                report.dropped.push((index, spec.name.clone()));
                continue;
            };
            builder.add_intersection(index, spec.clone(), hit.location, &hit.address);
            report.built.push(index);
        }

        let mut network = builder.build();
        report.merges = merge_corridors(&mut network, connections);

        log::info!(
            "generated {} of {} intersections ({} nodes, {} links, {} merges)",
            report.built.len(),
            report.requested,
            network.node_count(),
            network.link_count(),
            report.merges.merged(),
        );
        Generation { network, report }
    }
}
