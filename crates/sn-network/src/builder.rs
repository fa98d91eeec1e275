//! Incremental construction of a [`Network`].
//!
//! For each geocoded intersection the builder allocates, in order:
//!
//! 1. the center node at the projected position;
//! 2. four approach nodes (NB, SB, EB, WB) at the standard approach
//!    distance along the matching axis;
//! 3. per approach, an inbound link (approach → center) carrying that
//!    direction's spec, then an outbound link (center → approach) labelled
//!    and configured with the opposite direction's spec.
//!
//! # Example
//!
//! ```
//! use sn_core::{GeneratorConfig, GeoPoint, IntersectionIdx};
//! use sn_network::{IntersectionSpec, NetworkBuilder};
//!
//! let mut b = NetworkBuilder::new(&GeneratorConfig::default());
//! b.add_intersection(
//!     IntersectionIdx(0),
//!     IntersectionSpec::new("Main St and 1st Ave"),
//!     GeoPoint::new(42.0, -83.0),
//!     "Main St & 1st Ave",
//! );
//! let net = b.build();
//! assert_eq!(net.node_count(), 5);
//! assert_eq!(net.link_count(), 8);
//! ```

use sn_core::{Direction, GeneratorConfig, GeoPoint, IntersectionIdx, LocalProjector, NodeId};

use crate::intersection::Intersection;
use crate::link::Link;
use crate::naming::parse_intersection_name;
use crate::network::Network;
use crate::node::{CenterInfo, NodeKind};
use crate::spec::IntersectionSpec;

pub struct NetworkBuilder {
    projector:         LocalProjector,
    approach_distance: i64,
    network:           Network,
}

impl NetworkBuilder {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            projector:         LocalProjector::new(config.feet_per_degree),
            approach_distance: config.approach_distance_ft,
            network:           Network::new(),
        }
    }

    /// Add one intersection located at `geo`.  The first intersection added
    /// becomes the projection origin.
    ///
    /// Returns the new center's id.
    pub fn add_intersection(
        &mut self,
        index:   IntersectionIdx,
        spec:    IntersectionSpec,
        geo:     GeoPoint,
        address: &str,
    ) -> NodeId {
        let pos = self.projector.project(geo);
        let streets = parse_intersection_name(&spec.name);
        if !streets.is_parsed() {
            log::debug!("no street separator in {:?}; street names left blank", spec.name);
        }

        let dist = self.approach_distance;
        let net = &mut self.network;
        let center = net.nodes.alloc(
            pos,
            NodeKind::Center(CenterInfo {
                name: spec.name.clone(),
                streets,
                geo,
                address: address.to_string(),
            }),
        );

        let approaches = Direction::ALL.map(|direction| {
            let (ux, uy) = direction.unit_offset();
            net.nodes.alloc(
                pos.offset(ux * dist, uy * dist),
                NodeKind::Approach { direction, center },
            )
        });

        for (direction, &approach) in Direction::ALL.iter().zip(&approaches) {
            let inbound = spec.approach(*direction);
            net.push_link(Link {
                from:        approach,
                to:          center,
                direction:   *direction,
                lanes:       inbound.lanes,
                distance_ft: dist,
                speed_mph:   inbound.speed_mph,
                twltl:       inbound.twltl,
            });

            let back = direction.opposite();
            let outbound = spec.approach(back);
            net.push_link(Link {
                from:        center,
                to:          approach,
                direction:   back,
                lanes:       outbound.lanes,
                distance_ft: dist,
                speed_mph:   outbound.speed_mph,
                twltl:       outbound.twltl,
            });
        }

        log::debug!("intersection {} {:?}: center {} at {}", index.0, spec.name, center.0, pos);
        net.intersections.insert(index, Intersection::new(index, center, approaches, spec));
        center
    }

    /// Consume the builder and return the network.
    pub fn build(self) -> Network {
        self.network
    }
}
