//! User-supplied intersection descriptions.
//!
//! A spec is immutable once it has been handed to the generator; the
//! builder copies it into the resulting [`Intersection`](crate::Intersection).

use sn_core::Direction;

use crate::{NetworkError, NetworkResult};

/// Lane/speed/turn-lane configuration for one approach of an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproachSpec {
    /// Through lanes, at least 1.
    pub lanes:                 u32,
    /// Posted speed in mph.
    pub speed_mph:             u32,
    /// Two-way left-turn lane flag, 0 or 1.
    pub twltl:                 u8,
    /// Right turns share the outside through lane.
    pub right_turn_shared:     bool,
    /// Exclusive right-turn bay length in feet.  Only used when the right
    /// turn is not shared.
    pub right_turn_storage_ft: u32,
}

impl ApproachSpec {
    pub const DEFAULT_LANES:          u32 = 2;
    pub const DEFAULT_SPEED_MPH:      u32 = 30;
    pub const DEFAULT_RT_STORAGE_FT:  u32 = 150;

    pub fn new(lanes: u32, speed_mph: u32) -> Self {
        Self { lanes, speed_mph, ..Self::default() }
    }

    pub fn with_twltl(mut self, twltl: bool) -> Self {
        self.twltl = twltl as u8;
        self
    }

    /// Give the approach an exclusive right-turn bay of `storage_ft`.
    pub fn with_right_turn_bay(mut self, storage_ft: u32) -> Self {
        self.right_turn_shared = false;
        self.right_turn_storage_ft = storage_ft;
        self
    }

    fn check(&self, dir: Direction) -> Result<(), String> {
        if self.lanes < 1 {
            return Err(format!("{dir} lanes must be at least 1"));
        }
        if self.speed_mph < 1 {
            return Err(format!("{dir} speed must be positive"));
        }
        if self.twltl > 1 {
            return Err(format!("{dir} twltl must be 0 or 1, got {}", self.twltl));
        }
        if !self.right_turn_shared && self.right_turn_storage_ft < 1 {
            return Err(format!("{dir} right-turn storage must be positive"));
        }
        Ok(())
    }
}

impl Default for ApproachSpec {
    fn default() -> Self {
        Self {
            lanes:                 Self::DEFAULT_LANES,
            speed_mph:             Self::DEFAULT_SPEED_MPH,
            twltl:                 0,
            right_turn_shared:     true,
            right_turn_storage_ft: Self::DEFAULT_RT_STORAGE_FT,
        }
    }
}

/// One intersection as the user described it.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSpec {
    /// Free-text description, e.g. `"Main St and 1st Ave, City, State"`.
    /// Used both as the geocoder query and for street-name parsing.
    pub name:       String,
    /// Per-direction configuration, indexed by [`Direction::column`].
    pub approaches: [ApproachSpec; 4],
}

impl IntersectionSpec {
    /// A spec with the default configuration on every approach.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), approaches: [ApproachSpec::default(); 4] }
    }

    pub fn with_approach(mut self, dir: Direction, approach: ApproachSpec) -> Self {
        self.approaches[dir.column()] = approach;
        self
    }

    #[inline]
    pub fn approach(&self, dir: Direction) -> &ApproachSpec {
        &self.approaches[dir.column()]
    }

    pub fn validate(&self) -> NetworkResult<()> {
        if self.name.trim().is_empty() {
            return Err(NetworkError::InvalidSpec {
                name:   self.name.clone(),
                reason: "name must not be empty".into(),
            });
        }
        for dir in Direction::ALL {
            self.approach(dir).check(dir).map_err(|reason| NetworkError::InvalidSpec {
                name: self.name.clone(),
                reason,
            })?;
        }
        Ok(())
    }
}
