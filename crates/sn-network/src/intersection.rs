//! Intersection aggregates and the connection list that drives merging.

use rustc_hash::FxHashSet;

use sn_core::{Direction, IntersectionIdx, NodeId};

use crate::spec::IntersectionSpec;

/// One built intersection: its center node, its approach nodes by direction,
/// and the `IntersectionSpec` it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub index:  IntersectionIdx,
    pub center: NodeId,
    /// Approach node per direction, indexed by [`Direction::column`].  All
    /// four are present after building; a corridor merge may clear the slot
    /// of the approach it absorbed.
    approaches: [Option<NodeId>; 4],
    pub spec:   IntersectionSpec,
}

impl Intersection {
    pub fn new(
        index:      IntersectionIdx,
        center:     NodeId,
        approaches: [NodeId; 4],
        spec:       IntersectionSpec,
    ) -> Self {
        Self { index, center, approaches: approaches.map(Some), spec }
    }

    #[inline]
    pub fn approach(&self, dir: Direction) -> Option<NodeId> {
        self.approaches[dir.column()]
    }

    /// Present approaches in `Direction::ALL` order.
    pub fn approaches(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.approach(d).map(|n| (d, n)))
    }

    pub(crate) fn clear_approach(&mut self, dir: Direction) -> Option<NodeId> {
        self.approaches[dir.column()].take()
    }

    /// `true` while all four legs are still present.
    pub fn is_full(&self) -> bool {
        self.approaches.iter().all(Option::is_some)
    }
}

// ── Connections ───────────────────────────────────────────────────────────────

/// Ordered list of unordered intersection pairs to merge.
///
/// Pairs are kept in submission order.  Self-pairs and repeats of an
/// already-recorded pair (in either orientation) are rejected at insertion.
#[derive(Debug, Clone, Default)]
pub struct Connections {
    pairs: Vec<(IntersectionIdx, IntersectionIdx)>,
    seen:  FxHashSet<(IntersectionIdx, IntersectionIdx)>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a connection between `i` and `j`.  Returns `false` if the pair
    /// was rejected (self-reference or duplicate).
    pub fn add(&mut self, i: IntersectionIdx, j: IntersectionIdx) -> bool {
        if i == j {
            return false;
        }
        let key = if i < j { (i, j) } else { (j, i) };
        if !self.seen.insert(key) {
            return false;
        }
        self.pairs.push((i, j));
        true
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in submission order, orientation preserved.
    pub fn iter(&self) -> impl Iterator<Item = (IntersectionIdx, IntersectionIdx)> + '_ {
        self.pairs.iter().copied()
    }
}

impl FromIterator<(IntersectionIdx, IntersectionIdx)> for Connections {
    fn from_iter<T: IntoIterator<Item = (IntersectionIdx, IntersectionIdx)>>(iter: T) -> Self {
        let mut c = Connections::new();
        for (i, j) in iter {
            c.add(i, j);
        }
        c
    }
}
