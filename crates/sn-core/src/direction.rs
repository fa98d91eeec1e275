//! Compass direction enum shared by every crate that touches approaches,
//! links, or lane groups.
//!
//! The two lookup tables (`opposite`, `left_of`) are the only place the
//! rotation rules are written down; `right_of` is derived from `left_of`.

use std::fmt;

/// One of the four legs of an orthogonal intersection.
///
/// On an approach node this names the leg; on a link it names the
/// direction label of travel used by the interchange format.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    NB,
    SB,
    EB,
    WB,
}

impl Direction {
    /// Column order used throughout the interchange file.
    pub const ALL: [Direction; 4] = [Direction::NB, Direction::SB, Direction::EB, Direction::WB];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NB => Direction::SB,
            Direction::SB => Direction::NB,
            Direction::EB => Direction::WB,
            Direction::WB => Direction::EB,
        }
    }

    /// 90° rotation giving the leg a left turn from `self` ends on.
    #[inline]
    pub fn left_of(self) -> Direction {
        match self {
            Direction::NB => Direction::WB,
            Direction::WB => Direction::SB,
            Direction::SB => Direction::EB,
            Direction::EB => Direction::NB,
        }
    }

    /// Inverse of [`left_of`](Self::left_of).
    #[inline]
    pub fn right_of(self) -> Direction {
        self.left_of().opposite()
    }

    /// `true` for NB/SB, the legs laid out along the y-axis.
    #[inline]
    pub fn is_north_south(self) -> bool {
        matches!(self, Direction::NB | Direction::SB)
    }

    /// Unit offset of the approach node for this leg, in (x, y).
    pub fn unit_offset(self) -> (i64, i64) {
        match self {
            Direction::NB => (0, 1),
            Direction::SB => (0, -1),
            Direction::EB => (1, 0),
            Direction::WB => (-1, 0),
        }
    }

    /// Column position in `ALL`.
    #[inline]
    pub fn column(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NB => "NB",
            Direction::SB => "SB",
            Direction::EB => "EB",
            Direction::WB => "WB",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
