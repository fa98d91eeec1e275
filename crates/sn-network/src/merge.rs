//! Corridor merging: fusing the facing approaches of two connected
//! intersections into one shared node.
//!
//! # Algorithm (per connection `(i, j)`, in submission order)
//!
//! ```text
//! ① look up both intersections            — missing either → ignored
//! ② axis: |Δx| > |Δy| → east–west, else north–south (ties go north–south)
//! ③ directions: Δx > 0 → (i.EB, j.WB), Δx ≤ 0 → (i.WB, j.EB)
//!               Δy > 0 → (i.NB, j.SB), Δy ≤ 0 → (i.SB, j.NB)
//!               missing approach on either side → ignored
//! ④ move i's approach to the integer midpoint, re-point j's approach
//!    links at it, tombstone j's approach
//! ⑤ every link touching the kept node gets length = |midpoint − other end|
//! ```
//!
//! Speeds, lanes and TWLTL flags on the re-pointed links keep their spec
//! values.  j's intersection loses the absorbed leg: its approach slot is
//! cleared rather than aliased to i's node.

use sn_core::{Direction, IntersectionIdx, LocalPoint, NodeId};

use crate::intersection::Connections;
use crate::network::Network;

/// What happened to one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged {
        kept:    NodeId,
        removed: NodeId,
    },
    /// An index named by the connection has no built intersection (never
    /// submitted, or dropped by the geocoder).
    UnknownIntersection(IntersectionIdx),
    /// The facing approach was already gone on one side.
    MissingApproach(IntersectionIdx, Direction),
}

/// Per-connection outcomes, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub outcomes: Vec<((IntersectionIdx, IntersectionIdx), MergeOutcome)>,
}

impl MergeReport {
    pub fn merged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, MergeOutcome::Merged { .. }))
            .count()
    }

    pub fn ignored(&self) -> usize {
        self.outcomes.len() - self.merged()
    }
}

/// Apply every connection to `network`, in order.
pub fn merge_corridors(network: &mut Network, connections: &Connections) -> MergeReport {
    let mut report = MergeReport::default();
    for (i, j) in connections.iter() {
        let outcome = merge_pair(network, i, j);
        match outcome {
            MergeOutcome::Merged { kept, removed } => {
                log::debug!("merged node {} into {} for connection ({}, {})", removed.0, kept.0, i.0, j.0);
            }
            other => {
                log::warn!("connection ({}, {}) ignored: {:?}", i.0, j.0, other);
            }
        }
        report.outcomes.push(((i, j), outcome));
    }
    report
}

fn merge_pair(net: &mut Network, i: IntersectionIdx, j: IntersectionIdx) -> MergeOutcome {
    let Some(a) = net.intersections.get(&i) else {
        return MergeOutcome::UnknownIntersection(i);
    };
    let Some(b) = net.intersections.get(&j) else {
        return MergeOutcome::UnknownIntersection(j);
    };
    let (Some(ca), Some(cb)) = (net.nodes.get(a.center), net.nodes.get(b.center)) else {
        return MergeOutcome::UnknownIntersection(i);
    };

    let (dir_a, dir_b) = facing_directions(ca.pos, cb.pos);
    let Some(kept) = a.approach(dir_a) else {
        return MergeOutcome::MissingApproach(i, dir_a);
    };
    let Some(removed) = b.approach(dir_b) else {
        return MergeOutcome::MissingApproach(j, dir_b);
    };
    let (Some(kept_node), Some(removed_node)) = (net.nodes.get(kept), net.nodes.get(removed)) else {
        return MergeOutcome::MissingApproach(j, dir_b);
    };

    let mid = kept_node.pos.midpoint(removed_node.pos);
    if let Some(node) = net.nodes.get_mut(kept) {
        node.pos = mid;
    }
    net.replace_node(removed, kept);
    if let Some(b) = net.intersections.get_mut(&j) {
        b.clear_approach(dir_b);
    }

    for li in net.incident_indices(kept) {
        let other = net.links[li].other_end(kept);
        let Some(other_pos) = net.nodes.get(other).map(|n| n.pos) else {
            continue;
        };
        // Truncated, and never zero so the length stays positive.
        net.links[li].distance_ft = (mid.distance_ft(other_pos) as i64).max(1);
    }

    MergeOutcome::Merged { kept, removed }
}

/// The approach of the first center and of the second center that face each
/// other.
pub fn facing_directions(first: LocalPoint, second: LocalPoint) -> (Direction, Direction) {
    let dx = second.x - first.x;
    let dy = second.y - first.y;
    if dx.abs() > dy.abs() {
        if dx > 0 { (Direction::EB, Direction::WB) } else { (Direction::WB, Direction::EB) }
    } else if dy > 0 {
        (Direction::NB, Direction::SB)
    } else {
        (Direction::SB, Direction::NB)
    }
}
