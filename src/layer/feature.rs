use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::common::escape_markup;

/// A WGS84 position in (latitude, longitude) order.
///
/// GeoJSON and `geo` both use (x = longitude, y = latitude); conversions to
/// and from those go through [`LatLng::from_lon_lat`] and `Coord::from`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self { Self { lat, lng } }

    /// Build from a GeoJSON-ordered `[lon, lat]` pair.
    pub const fn from_lon_lat(lon: f64, lat: f64) -> Self { Self { lat, lng: lon } }

    /// Finite and within [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self { Self { lat, lng } }
}

impl From<LatLng> for Coord<f64> {
    fn from(p: LatLng) -> Self { Coord { x: p.lng, y: p.lat } }
}

/// One labeled marker extracted from a GeoJSON Point feature.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl PointFeature {
    pub fn new(position: LatLng, label: impl Into<String>) -> Self {
        Self { latitude: position.lat, longitude: position.lng, label: label.into() }
    }

    pub fn position(&self) -> LatLng { LatLng::new(self.latitude, self.longitude) }

    /// Popup body for this marker: layer name in bold, then the label.
    pub fn popup_html(&self, layer_name: &str) -> String {
        format!("<strong>{}</strong><br>{}", escape_markup(layer_name), escape_markup(&self.label))
    }
}
