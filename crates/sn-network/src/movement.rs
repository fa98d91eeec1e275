//! Turning-movement destinations.
//!
//! Purely compass-based: from approach `d`, through traffic leaves by the
//! `opposite(d)` leg, left turns by `left_of(d)`, right turns by
//! `right_of(d)`.  Lane configuration plays no part.  A leg missing from the
//! intersection (absorbed by a corridor merge) yields an absent destination.

use sn_core::{Direction, NodeId};

use crate::intersection::Intersection;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Turn {
    Left,
    Through,
    Right,
}

impl Turn {
    /// Column order of lane groups within one approach.
    pub const ALL: [Turn; 3] = [Turn::Left, Turn::Through, Turn::Right];

    /// Leg a vehicle approaching on `from` leaves by.
    pub fn exit_leg(self, from: Direction) -> Direction {
        match self {
            Turn::Left    => from.left_of(),
            Turn::Through => from.opposite(),
            Turn::Right   => from.right_of(),
        }
    }
}

/// Destination node per turn for one approach.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Movement {
    pub left:    Option<NodeId>,
    pub through: Option<NodeId>,
    pub right:   Option<NodeId>,
}

impl Movement {
    pub fn get(&self, turn: Turn) -> Option<NodeId> {
        match turn {
            Turn::Left    => self.left,
            Turn::Through => self.through,
            Turn::Right   => self.right,
        }
    }
}

/// Movements for all four approaches, indexed by [`Direction::column`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MovementTable([Movement; 4]);

impl MovementTable {
    #[inline]
    pub fn get(&self, from: Direction) -> &Movement {
        &self.0[from.column()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Movement)> + '_ {
        Direction::ALL.into_iter().zip(self.0.iter())
    }
}

/// Derive the movement table for `intersection`.
pub fn movements(intersection: &Intersection) -> MovementTable {
    MovementTable(Direction::ALL.map(|from| Movement {
        left:    intersection.approach(Turn::Left.exit_leg(from)),
        through: intersection.approach(Turn::Through.exit_leg(from)),
        right:   intersection.approach(Turn::Right.exit_leg(from)),
    }))
}
