use std::f64::consts::TAU;

use geo::{Coord, LineString, Polygon};

use crate::LatLng;

use super::ZoneState;

/// Mean length of one degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Ring vertices used when a caller asks for fewer.
const MIN_SEGMENTS: usize = 8;

/// Planar approximation of a circle of `radius_km` around `center`, as a
/// closed lon/lat ring. Longitude spacing is scaled by `cos(lat)`.
pub fn zone_polygon(center: LatLng, radius_km: f64, segments: usize) -> Polygon<f64> {
    let segments = segments.max(MIN_SEGMENTS);
    let dlat = radius_km / KM_PER_DEGREE;
    let dlng = radius_km / (KM_PER_DEGREE * center.lat.to_radians().cos().max(1e-6));

    let ring: Vec<Coord<f64>> = (0..segments)
        .map(|i| {
            let t = TAU * i as f64 / segments as f64;
            Coord { x: center.lng + dlng * t.cos(), y: center.lat + dlat * t.sin() }
        })
        .collect();

    Polygon::new(LineString::from(ring), vec![])
}

impl ZoneState {
    /// The zone circle at the current center and radius.
    pub fn circle(&self, segments: usize) -> Polygon<f64> {
        zone_polygon(self.center, self.radius_km, segments)
    }
}
