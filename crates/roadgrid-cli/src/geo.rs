//! Linear mapping from grid points to latitude/longitude for display.
//!
//! One grid unit is `step` degrees on each axis: x moves east, y moves north.

use std::fmt;

use roadgrid_core::Point;

pub const DEFAULT_ORIGIN_LAT: f64 = 17.3850;
pub const DEFAULT_ORIGIN_LNG: f64 = 78.4867;
pub const DEFAULT_STEP: f64 = 0.001;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Grid origin and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub step: f64,
}

impl Default for GeoTransform {
    fn default() -> Self {
        Self {
            origin_lat: DEFAULT_ORIGIN_LAT,
            origin_lng: DEFAULT_ORIGIN_LNG,
            step: DEFAULT_STEP,
        }
    }
}

impl GeoTransform {
    /// Geographic coordinate of grid point `p`.
    #[inline]
    pub fn to_latlng(&self, p: Point) -> LatLng {
        LatLng {
            lat: self.origin_lat + f64::from(p.y) * self.step,
            lng: self.origin_lng + f64::from(p.x) * self.step,
        }
    }
}
