//! Geographic and local planar coordinate types.
//!
//! `GeoPoint` keeps the geocoder's `f64` precision; the projected
//! `LocalPoint` is integral feet, which is what the interchange format
//! stores for node coordinates.

/// A WGS-84 coordinate as returned by the geocoder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A point on the local plane, in whole feet from the run's origin.
/// `z` is always 0 for generated networks but is carried for the file format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LocalPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl LocalPoint {
    pub const ORIGIN: LocalPoint = LocalPoint { x: 0, y: 0, z: 0 };

    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y, z: 0 }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, z: self.z }
    }

    /// Integer midpoint, rounding each axis toward negative infinity.
    pub fn midpoint(self, other: LocalPoint) -> LocalPoint {
        LocalPoint {
            x: (self.x + other.x).div_euclid(2),
            y: (self.y + other.y).div_euclid(2),
            z: (self.z + other.z).div_euclid(2),
        }
    }

    /// Euclidean distance in the x/y plane, in feet.
    pub fn distance_ft(self, other: LocalPoint) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

impl std::fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
