//! Network nodes and the id-addressed arena that owns them.
//!
//! # Arena layout
//!
//! Ids start at 1 and are allocated densely, so node `n` lives in slot
//! `n - 1`.  Removing a node leaves a tombstone (`None`) in its slot rather
//! than shrinking the vector: ids stay stable, lookups stay O(1), and an id
//! is never handed out twice within a run.

use sn_core::{Direction, GeoPoint, LocalPoint, NodeId};

use crate::naming::StreetNames;

/// Extra data carried by an intersection's center node.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterInfo {
    /// The description the user typed.
    pub name:    String,
    pub streets: StreetNames,
    /// Geocoded position before projection.
    pub geo:     GeoPoint,
    /// Address string returned by the geocoder.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Center(CenterInfo),
    Approach {
        direction: Direction,
        /// Center node of the intersection that owns this approach.
        center:    NodeId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id:   NodeId,
    pub pos:  LocalPoint,
    pub kind: NodeKind,
}

impl Node {
    /// Node TYPE code written to the interchange file.
    pub fn type_code(&self) -> u8 {
        match self.kind {
            NodeKind::Center(_) => 1,
            NodeKind::Approach { .. } => 0,
        }
    }

    pub fn is_center(&self) -> bool {
        matches!(self.kind, NodeKind::Center(_))
    }

    pub fn center_info(&self) -> Option<&CenterInfo> {
        match &self.kind {
            NodeKind::Center(info) => Some(info),
            NodeKind::Approach { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            NodeKind::Approach { direction, .. } => Some(direction),
            NodeKind::Center(_) => None,
        }
    }

    /// The owning center: itself for a center node.
    pub fn owner(&self) -> NodeId {
        match self.kind {
            NodeKind::Center(_) => self.id,
            NodeKind::Approach { center, .. } => center,
        }
    }
}

// ── NodeArena ─────────────────────────────────────────────────────────────────

/// Owns every node of one run, addressed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    slots: Vec<Option<Node>>,
    live:  usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next [`alloc`](Self::alloc) will return.
    pub fn next_id(&self) -> NodeId {
        NodeId(NodeId::FIRST.0 + self.slots.len() as u32)
    }

    pub fn alloc(&mut self, pos: LocalPoint, kind: NodeKind) -> NodeId {
        let id = self.next_id();
        self.slots.push(Some(Node { id, pos, kind }));
        self.live += 1;
        id
    }

    #[inline]
    fn slot(id: NodeId) -> Option<usize> {
        id.index().checked_sub(NodeId::FIRST.index())
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        Self::slot(id).and_then(|i| self.slots.get(i)).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        Self::slot(id).and_then(|i| self.slots.get_mut(i)).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Tombstone `id`.  Returns the removed node, or `None` if it was not live.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let removed = Self::slot(id).and_then(|i| self.slots.get_mut(i)).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    /// Live node count.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total ids ever allocated, including removed ones.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Live nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }
}
