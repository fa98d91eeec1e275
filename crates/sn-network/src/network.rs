//! The assembled road network of one generation run.
//!
//! # Data layout
//!
//! - `nodes`: [`NodeArena`], id-addressed with tombstones.
//! - `links`: a flat `Vec<Link>` in creation order.
//! - `incident`: node id → indices into `links` of every link with that node
//!   as an endpoint.  Lets the merge step re-point a node's links by key
//!   instead of scanning the whole link list.
//! - `intersections`: creation-order index → [`Intersection`], ordered.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use sn_core::{IntersectionIdx, NodeId};

use crate::intersection::Intersection;
use crate::link::Link;
use crate::naming::StreetNames;
use crate::node::{Node, NodeArena};

#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(crate) nodes:         NodeArena,
    pub(crate) links:         Vec<Link>,
    pub(crate) incident:      FxHashMap<NodeId, Vec<usize>>,
    pub(crate) intersections: BTreeMap<IntersectionIdx, Intersection>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn intersection(&self, idx: IntersectionIdx) -> Option<&Intersection> {
        self.intersections.get(&idx)
    }

    /// Intersections in creation order.
    pub fn intersections(&self) -> impl Iterator<Item = &Intersection> + '_ {
        self.intersections.values()
    }

    /// Links departing `node`.
    pub fn links_from(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.incident_links(node).filter(move |l| l.from == node)
    }

    /// Links arriving at `node`.
    pub fn links_to(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.incident_links(node).filter(move |l| l.to == node)
    }

    /// The link from `from` to `to`, if any.
    pub fn link_between(&self, from: NodeId, to: NodeId) -> Option<&Link> {
        self.links_from(from).find(|l| l.to == to)
    }

    fn incident_links(&self, node: NodeId) -> impl Iterator<Item = &Link> + '_ {
        self.incident
            .get(&node)
            .into_iter()
            .flatten()
            .map(|&i| &self.links[i])
    }

    /// Street names of the intersection `node` belongs to: the center's own
    /// names for a center node, the owning center's for an approach.
    pub fn streets_of(&self, node: NodeId) -> Option<&StreetNames> {
        let owner = self.nodes.get(node)?.owner();
        self.nodes.get(owner)?.center_info().map(|c| &c.streets)
    }

    // ── Mutation (crate-internal) ─────────────────────────────────────────

    pub(crate) fn push_link(&mut self, link: Link) {
        let idx = self.links.len();
        self.incident.entry(link.from).or_default().push(idx);
        self.incident.entry(link.to).or_default().push(idx);
        self.links.push(link);
    }

    /// Re-point every link endpoint equal to `old` at `new`, then tombstone
    /// `old`.  No link references `old` afterwards.
    pub(crate) fn replace_node(&mut self, old: NodeId, new: NodeId) {
        let moved = self.incident.remove(&old).unwrap_or_default();
        for &i in &moved {
            let link = &mut self.links[i];
            if link.from == old {
                link.from = new;
            }
            if link.to == old {
                link.to = new;
            }
        }
        let target = self.incident.entry(new).or_default();
        for i in moved {
            if !target.contains(&i) {
                target.push(i);
            }
        }
        self.nodes.remove(old);
    }

    /// Indices of the links touching `node`.
    pub(crate) fn incident_indices(&self, node: NodeId) -> Vec<usize> {
        self.incident.get(&node).cloned().unwrap_or_default()
    }
}
