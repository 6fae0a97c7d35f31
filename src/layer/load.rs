use crate::{DataSource, LoadError};

use super::Layer;

/// Load one layer from raw document bytes, or from a missing source (`None`).
///
/// On failure the layer is still returned, empty, alongside the error.
pub fn load(name: &str, source: Option<&[u8]>) -> (Layer, Option<LoadError>) {
    let result = match source {
        Some(bytes) => Layer::from_geojson_bytes(name, bytes),
        None => Err(LoadError::not_found(name)),
    };

    match result {
        Ok(layer) => (layer, None),
        Err(err) => (Layer::new(name), Some(err)),
    }
}

/// Load layer `name` from the document `id` of a [`DataSource`].
pub fn load_from(source: &dyn DataSource, name: &str, id: &str) -> (Layer, Option<LoadError>) {
    match source.get(id) {
        Ok(bytes) => load(name, Some(&bytes[..])),
        Err(err) => (Layer::new(name), Some(err)),
    }
}
