//! Directed links between nodes.

use sn_core::{Direction, NodeId};

/// Feet per mile, for travel-time conversion.
const FEET_PER_MILE: f64 = 5_280.0;

/// A directed road link.
///
/// `direction` is the direction-of-travel label the interchange format files
/// the link under; it is not derived from either endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub from:        NodeId,
    pub to:          NodeId,
    pub direction:   Direction,
    pub lanes:       u32,
    /// Length in feet, always positive.
    pub distance_ft: i64,
    /// Speed in mph, always positive.
    pub speed_mph:   u32,
    pub twltl:       u8,
}

impl Link {
    /// Free-flow travel time in seconds.
    pub fn travel_time_secs(&self) -> f64 {
        self.distance_ft as f64 / self.speed_mph as f64 * 3_600.0 / FEET_PER_MILE
    }

    /// `true` if either endpoint is `node`.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint that is not `node`.
    #[inline]
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.from == node { self.to } else { self.from }
    }
}
