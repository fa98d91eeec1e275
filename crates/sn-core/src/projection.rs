//! Flat-earth projection from lat/lon to local feet.
//!
//! # Model
//!
//! The first point projected by a [`LocalProjector`] becomes the origin and
//! maps to `(0, 0)`.  Every later point is an equirectangular offset:
//!
//! ```text
//! x = trunc((lon - lon0) * K * cos(lat0))
//! y = trunc((lat - lat0) * K)
//! ```
//!
//! with `K` feet per degree of latitude (364 000 by default).  Distortion is
//! acceptable at city scale only; nothing corrects for it.

use crate::{GeoPoint, LocalPoint};

/// Feet per degree of latitude used by the default configuration.
pub const FEET_PER_DEGREE: f64 = 364_000.0;

/// Projects geographic coordinates onto a plane anchored at the first point
/// it sees.  One projector belongs to one generation run.
#[derive(Clone, Debug)]
pub struct LocalProjector {
    feet_per_degree: f64,
    origin:          Option<GeoPoint>,
}

impl LocalProjector {
    pub fn new(feet_per_degree: f64) -> Self {
        Self { feet_per_degree, origin: None }
    }

    /// The anchor point, once the first projection has happened.
    pub fn origin(&self) -> Option<GeoPoint> {
        self.origin
    }

    /// Project `p`, fixing the origin on the first call.
    pub fn project(&mut self, p: GeoPoint) -> LocalPoint {
        let Some(origin) = self.origin else {
            self.origin = Some(p);
            return LocalPoint::ORIGIN;
        };

        let lon_feet = self.feet_per_degree * origin.lat.to_radians().cos();
        // `as` truncates toward zero.
        let x = ((p.lon - origin.lon) * lon_feet) as i64;
        let y = ((p.lat - origin.lat) * self.feet_per_degree) as i64;
        LocalPoint::new(x, y)
    }
}

impl Default for LocalProjector {
    fn default() -> Self {
        Self::new(FEET_PER_DEGREE)
    }
}
