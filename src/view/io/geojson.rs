use std::path::Path;

use anyhow::{Context, Result};
use geo::CoordsIter;
use serde_json::{json, Value};

use crate::{
    common::ensure_parent_dir_exists,
    layer::point_feature_json,
    view::{model::CENTER_TOOLTIP, ViewModel},
};

impl ViewModel<'_> {
    /// Export the view as one GeoJSON FeatureCollection: every marker
    /// (`role: "marker"`), the zone ring (`role: "zone"`) and the center
    /// (`role: "center"`). Map settings go in a top-level `view` member.
    pub fn to_geojson(&self) -> Value {
        let mut features = Vec::with_capacity(self.marker_count() + 2);

        for layer in self.layers {
            for feature in layer.iter() {
                let mut value = point_feature_json(feature, &layer.name);
                value["properties"]["role"] = json!("marker");
                value["properties"]["popup"] = json!(feature.popup_html(&layer.name));
                features.push(value);
            }
        }

        let ring: Vec<[f64; 2]> = self.zone.exterior().coords_iter()
            .map(|c| [c.x, c.y])
            .collect();
        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [ring] },
            "properties": {
                "role": "zone",
                "radius_km": self.radius_km,
                "popup": self.zone_popup(),
            }
        }));

        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [self.center.lng, self.center.lat] },
            "properties": { "role": "center", "tooltip": CENTER_TOOLTIP }
        }));

        json!({
            "type": "FeatureCollection",
            "features": features,
            "view": {
                "center": self.center,
                "radius_km": self.radius_km,
                "zoom": self.zoom,
                "tiles": self.tiles,
                "marker": self.marker_style,
                "layers": self.layers.iter().map(|l| json!({ "name": l.name, "count": l.len() })).collect::<Vec<_>>(),
                "status": self.status,
                "warnings": self.warnings,
            }
        })
    }

    /// Write [`ViewModel::to_geojson`] to `path`, creating parent directories.
    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        ensure_parent_dir_exists(path)?;
        let bytes = serde_json::to_vec_pretty(&self.to_geojson())
            .context("[view::geojson] Failed to serialize view")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("[view::geojson] Failed to write {}", path.display()))
    }
}
