use geo::Polygon;

use crate::{LatLng, Layer, MarkerStyle, TileLayer};

/// Tooltip on the zone center marker.
pub(crate) const CENTER_TOOLTIP: &str =
    "Zentrum der Radiozone (klicken Sie irgendwo auf die Karte, um es zu ändern)";

/// Everything a shell needs to draw one render pass.
///
/// Layers that failed to load are not in `layers`; their messages are in
/// `warnings`.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub layers: &'a [Layer],
    pub center: LatLng,
    pub radius_km: f64,
    pub zoom: u8,
    pub tiles: &'a TileLayer,
    pub marker_style: &'a MarkerStyle,
    /// Zone circle ring in lon/lat.
    pub zone: Polygon<f64>,
    pub status: String,
    pub warnings: Vec<String>,
}

impl ViewModel<'_> {
    /// Popup text of the zone circle.
    pub fn zone_popup(&self) -> String {
        format!("Radiozone: {} km", self.radius_km)
    }

    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }
}
