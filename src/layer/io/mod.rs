mod geojson;

pub use geojson::LABEL_KEYS;
pub(crate) use geojson::point_feature_json;
