use serde_json::{json, Value};

use crate::{layer::{LatLng, Layer, PointFeature}, LoadError};

/// Property keys tried, in order, for a marker label.
pub const LABEL_KEYS: [&str; 3] = ["name", "titel", "title"];

impl Layer {
    /// Parse a GeoJSON FeatureCollection into a layer of point markers.
    ///
    /// Only the shape needed for extraction is checked. Features that are not
    /// Points, or whose coordinates are short, non-numeric or out of range,
    /// are skipped. A missing or non-array `features` key gives an empty layer.
    pub fn from_geojson_bytes(name: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|source| LoadError::Parse { name: name.to_string(), source })?;
        Self::from_geojson(name, &value)
    }

    /// Same as [`Layer::from_geojson_bytes`], from an already-parsed document.
    pub fn from_geojson(name: &str, value: &Value) -> Result<Self, LoadError> {
        let root = value.as_object()
            .ok_or_else(|| LoadError::Shape { name: name.to_string() })?;

        let features = root.get("features")
            .and_then(Value::as_array)
            .map(|features| features.iter().filter_map(read_point_feature).collect())
            .unwrap_or_default();

        Ok(Self::with_features(name, features))
    }

    /// Export the layer as a GeoJSON FeatureCollection of Points.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.features.iter()
            .map(|feature| point_feature_json(feature, &self.name))
            .collect();

        json!({
            "type": "FeatureCollection",
            "name": self.name,
            "features": features,
        })
    }
}

/// GeoJSON Feature for a marker, with its layer and label as properties.
/// The label is also written under `name` so the export reads back.
pub(crate) fn point_feature_json(feature: &PointFeature, layer_name: &str) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [feature.longitude, feature.latitude],
        },
        "properties": {
            "layer": layer_name,
            "name": feature.label,
            "label": feature.label,
        }
    })
}

fn read_point_feature(feature: &Value) -> Option<PointFeature> {
    let geometry = feature.get("geometry")?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") { return None }

    let coords = geometry.get("coordinates")?.as_array()?;
    if coords.len() < 2 { return None }

    // GeoJSON positions are [lon, lat, (alt)]
    let position = LatLng::from_lon_lat(coords[0].as_f64()?, coords[1].as_f64()?);
    if !position.is_valid() { return None }

    Some(PointFeature::new(position, read_label(feature.get("properties"))))
}

/// First non-empty value among [`LABEL_KEYS`], else "".
fn read_label(properties: Option<&Value>) -> String {
    let Some(properties) = properties.and_then(Value::as_object) else { return String::new() };

    LABEL_KEYS.iter()
        .find_map(|key| properties.get(*key).and_then(label_text))
        .unwrap_or_default()
}

/// Text for a label value: non-empty strings, non-zero numbers and `true`.
/// `null`, `false`, `0`, `""`, `[]` and `{}` count as absent.
fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(coords: Value, properties: Value) -> Value {
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": coords },
            "properties": properties,
        })
    }

    fn collection(features: Vec<Value>) -> Vec<u8> {
        serde_json::to_vec(&json!({ "type": "FeatureCollection", "features": features })).unwrap()
    }

    #[test]
    fn coordinates_are_swapped_to_lat_lng() {
        let bytes = collection(vec![point(json!([13.405, 52.52]), json!({ "name": "Mitte" }))]);
        let layer = Layer::from_geojson_bytes("Feuerwachen", &bytes).unwrap();

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.features[0].latitude, 52.52);
        assert_eq!(layer.features[0].longitude, 13.405);
    }

    #[test]
    fn non_point_geometries_are_skipped() {
        let polygon = json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[13.0, 52.0], [13.1, 52.0], [13.1, 52.1], [13.0, 52.0]]],
            },
            "properties": { "name": "Area" },
        });
        let bytes = collection(vec![point(json!([13.4, 52.5]), json!({ "name": "P" })), polygon]);
        let layer = Layer::from_geojson_bytes("Schulen", &bytes).unwrap();

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.features[0].label, "P");
    }

    #[test]
    fn label_fallback_order() {
        let bytes = collection(vec![
            point(json!([13.4, 52.5]), json!({ "titel": "A", "title": "B" })),
            point(json!([13.4, 52.5]), json!({ "other": "x" })),
            point(json!([13.4, 52.5]), json!({ "name": "N", "titel": "A", "title": "B" })),
            point(json!([13.4, 52.5]), json!({ "title": "B" })),
        ]);
        let layer = Layer::from_geojson_bytes("Schulen", &bytes).unwrap();
        let labels: Vec<&str> = layer.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["A", "", "N", "B"]);
    }

    #[test]
    fn empty_labels_fall_through() {
        let bytes = collection(vec![
            point(json!([13.4, 52.5]), json!({ "name": "", "titel": "A" })),
            point(json!([13.4, 52.5]), json!({ "name": null, "title": "B" })),
            point(json!([13.4, 52.5]), json!({ "name": 0, "titel": false, "title": "C" })),
            point(json!([13.4, 52.5]), json!({ "name": [], "titel": {} })),
            point(json!([13.4, 52.5]), Value::Null),
        ]);
        let layer = Layer::from_geojson_bytes("Schulen", &bytes).unwrap();
        let labels: Vec<&str> = layer.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "", ""]);
    }

    #[test]
    fn numeric_and_boolean_labels_are_shown() {
        let bytes = collection(vec![
            point(json!([13.4, 52.5]), json!({ "name": 112 })),
            point(json!([13.4, 52.5]), json!({ "titel": 2.5 })),
            point(json!([13.4, 52.5]), json!({ "name": "", "title": true })),
        ]);
        let layer = Layer::from_geojson_bytes("Feuerwachen", &bytes).unwrap();
        let labels: Vec<&str> = layer.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["112", "2.5", "true"]);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = Layer::from_geojson_bytes("Schulen", b"not json at all").unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref name, .. } if name == "Schulen"));
        assert!(err.is_parse());
    }

    #[test]
    fn non_object_document_is_a_shape_error() {
        let err = Layer::from_geojson_bytes("Schulen", b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
        assert!(err.is_parse());
    }

    #[test]
    fn missing_or_wrong_features_key_is_empty() {
        let docs: [&[u8]; 3] = [
            br#"{"type":"FeatureCollection"}"#,
            br#"{"features":{"a":1}}"#,
            br#"{"features":null}"#,
        ];
        for doc in docs {
            let layer = Layer::from_geojson_bytes("Schulen", doc).unwrap();
            assert!(layer.is_empty());
        }
    }

    #[test]
    fn malformed_coordinates_are_skipped() {
        let bytes = collection(vec![
            point(json!([13.4]), json!({ "name": "short" })),
            point(json!([]), json!({ "name": "empty" })),
            point(json!(["13.4", "52.5"]), json!({ "name": "strings" })),
            point(json!([13.4, 95.0]), json!({ "name": "lat out of range" })),
            point(json!([190.0, 52.5]), json!({ "name": "lng out of range" })),
            json!({ "type": "Feature", "geometry": { "type": "Point" }, "properties": { "name": "no coords" } }),
            json!({ "type": "Feature", "geometry": null, "properties": { "name": "null geometry" } }),
            json!("not a feature"),
            point(json!([13.4, 52.5, 34.0]), json!({ "name": "with altitude" })),
        ]);
        let layer = Layer::from_geojson_bytes("Schulen", &bytes).unwrap();

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.features[0].label, "with altitude");
        assert_eq!(layer.features[0].position(), LatLng::new(52.5, 13.4));
    }

    #[test]
    fn source_order_is_preserved() {
        let bytes = collection(vec![
            point(json!([13.1, 52.1]), json!({ "name": "1" })),
            point(json!([13.2, 52.2]), json!({ "name": "2" })),
            point(json!([13.3, 52.3]), json!({ "name": "3" })),
        ]);
        let layer = Layer::from_geojson_bytes("Schulen", &bytes).unwrap();
        let labels: Vec<&str> = layer.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["1", "2", "3"]);
    }

    #[test]
    fn export_reads_back_with_labels() {
        let layer = Layer::with_features("Schulen", vec![
            PointFeature::new(LatLng::new(52.5, 13.4), "A"),
            PointFeature::new(LatLng::new(52.6, 13.5), ""),
        ]);
        let value = layer.to_geojson();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([13.4, 52.5]));
        assert_eq!(value["features"][0]["properties"]["label"], "A");

        let reread = Layer::from_geojson("Schulen", &value).unwrap();
        assert_eq!(reread, layer);
    }
}
