use std::{collections::HashSet, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DataSource, LatLng, MAX_RADIUS_KM, MIN_RADIUS_KM};

/// One configured marker layer: display name and the source it loads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub source: String,
}

impl LayerSpec {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }
}

/// Custom marker icon, sizes in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    pub path: String,
    #[serde(default = "IconSpec::default_size")]
    pub size: [u32; 2],
    /// Pixel of the icon placed on the marker position.
    #[serde(default = "IconSpec::default_anchor")]
    pub anchor: [u32; 2],
}

impl IconSpec {
    fn default_size() -> [u32; 2] { [26, 26] }

    fn default_anchor() -> [u32; 2] { [13, 26] }
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            path: "icons/lighthouse.svg".into(),
            size: Self::default_size(),
            anchor: Self::default_anchor(),
        }
    }
}

/// Background tile reference handed to the shell as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayer {
    pub name: String,
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            name: "OpenStreetMap".into(),
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap-Mitwirkende".into(),
        }
    }
}

/// How markers are drawn, decided once when the session starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkerStyle {
    Icon(IconSpec),
    Default,
}

/// Static map configuration. Every key is optional; missing keys take the
/// Berlin defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub default_radius_km: u32,
    pub layers: Vec<LayerSpec>,
    /// `null` disables the custom icon.
    pub icon: Option<IconSpec>,
    pub tiles: TileLayer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(52.52, 13.405), // Berlin Mitte
            default_zoom: 11,
            default_radius_km: 3,
            layers: vec![
                LayerSpec::new("Feuerwachen", "data/feuerwehr.geojson"),
                LayerSpec::new("Polizeiwachen", "data/polizei.geojson"),
                LayerSpec::new("Schulen", "data/schulen.geojson"),
            ],
            icon: Some(IconSpec::default()),
            tiles: TileLayer::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Config = serde_json::from_slice(bytes)
            .context("[config] Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_bytes(&bytes)
            .with_context(|| format!("[config] Invalid configuration in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_center.is_valid() {
            bail!("[config] default_center {:?} is not a valid position", self.default_center);
        }

        let radius = self.default_radius_km as f64;
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius) {
            bail!("[config] default_radius_km must be within {MIN_RADIUS_KM}..={MAX_RADIUS_KM}, got {radius}");
        }

        let mut seen = HashSet::new();
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                bail!("[config] layer with source {:?} has an empty name", layer.source);
            }
            if !seen.insert(layer.name.as_str()) {
                bail!("[config] duplicate layer name {:?}", layer.name);
            }
        }

        Ok(())
    }

    /// Use the configured icon if the source has it, else default markers.
    pub fn resolve_marker_style(&self, source: &dyn DataSource) -> MarkerStyle {
        match &self.icon {
            Some(icon) if source.has(&icon.path) => MarkerStyle::Icon(icon.clone()),
            Some(icon) => {
                debug!(path = %icon.path, "marker icon missing, using default markers");
                MarkerStyle::Default
            }
            None => MarkerStyle::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemSource;

    #[test]
    fn empty_document_takes_defaults() {
        let config = Config::from_json_bytes(b"{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layers.len(), 3);
        assert_eq!(config.layers[2], LayerSpec::new("Schulen", "data/schulen.geojson"));
    }

    #[test]
    fn partial_document_overrides() {
        let config = Config::from_json_bytes(br#"{
            "default_center": { "lat": 48.137, "lng": 11.575 },
            "default_radius_km": 5,
            "layers": [{ "name": "Schulen", "source": "schulen.geojson" }],
            "icon": null
        }"#).unwrap();

        assert_eq!(config.default_center, LatLng::new(48.137, 11.575));
        assert_eq!(config.default_radius_km, 5);
        assert_eq!(config.default_zoom, 11);
        assert_eq!(config.layers, vec![LayerSpec::new("Schulen", "schulen.geojson")]);
        assert_eq!(config.icon, None);
        assert_eq!(config.tiles, TileLayer::default());
    }

    #[test]
    fn icon_sizes_default() {
        let config = Config::from_json_bytes(br#"{ "icon": { "path": "icons/pin.svg" } }"#).unwrap();
        let icon = config.icon.unwrap();
        assert_eq!(icon.path, "icons/pin.svg");
        assert_eq!(icon.size, [26, 26]);
        assert_eq!(icon.anchor, [13, 26]);
    }

    #[test]
    fn rejects_radius_out_of_range() {
        assert!(Config::from_json_bytes(br#"{ "default_radius_km": 0 }"#).is_err());
        assert!(Config::from_json_bytes(br#"{ "default_radius_km": 21 }"#).is_err());
        assert!(Config::from_json_bytes(br#"{ "default_radius_km": 20 }"#).is_ok());
    }

    #[test]
    fn rejects_invalid_center() {
        assert!(Config::from_json_bytes(br#"{ "default_center": { "lat": 91.0, "lng": 0.0 } }"#).is_err());
    }

    #[test]
    fn rejects_duplicate_and_empty_layer_names() {
        let dup = br#"{ "layers": [
            { "name": "Schulen", "source": "a.geojson" },
            { "name": "Schulen", "source": "b.geojson" }
        ] }"#;
        assert!(Config::from_json_bytes(dup).is_err());

        let empty = br#"{ "layers": [{ "name": " ", "source": "a.geojson" }] }"#;
        assert!(Config::from_json_bytes(empty).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Config::from_json_bytes(b"{ layers: ").unwrap_err();
        assert!(err.to_string().contains("[config]"));
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radiozone.json");
        std::fs::write(&path, br#"{ "default_zoom": 13 }"#).unwrap();
        assert_eq!(Config::read(&path).unwrap().default_zoom, 13);

        assert!(Config::read(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn marker_style_follows_icon_availability() {
        let config = Config::default();
        let with_icon = MemSource::default().with("icons/lighthouse.svg", b"<svg/>".to_vec());
        assert_eq!(config.resolve_marker_style(&with_icon), MarkerStyle::Icon(IconSpec::default()));
        assert_eq!(config.resolve_marker_style(&MemSource::default()), MarkerStyle::Default);

        let no_icon = Config { icon: None, ..Config::default() };
        assert_eq!(no_icon.resolve_marker_style(&with_icon), MarkerStyle::Default);
    }
}
