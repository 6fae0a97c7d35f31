use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use js_sys::{Object, Reflect, Uint8Array};
use radiozone_core::MemSource;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Contents of one source handed over from the page.
#[derive(Debug, PartialEq)]
pub(crate) enum FileBody {
    Bytes(Vec<u8>),
    /// GeoJSON or SVG text, stored as UTF-8.
    Text(String),
    /// Anything else, with its JS `typeof`.
    Unsupported(String),
}

impl FileBody {
    fn from_js(value: JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return Self::Text(text);
        }
        match value.dyn_into::<Uint8Array>() {
            Ok(array) => Self::Bytes(array.to_vec()),
            Err(value) => Self::Unsupported(value.js_typeof().as_string().unwrap_or_default()),
        }
    }

    fn into_bytes(self, id: &str) -> Result<Arc<[u8]>> {
        match self {
            Self::Bytes(bytes) => Ok(Arc::from(bytes)),
            Self::Text(text) => Ok(Arc::from(text.into_bytes())),
            Self::Unsupported(kind) => {
                bail!("source '{id}' must be a Uint8Array or a string, got {kind}")
            }
        }
    }
}

/// Build a [`MemSource`] from `{ "data/schulen.geojson": Uint8Array | string, ... }`.
/// Any other value type is rejected with the offending source id.
pub(crate) fn js_files_to_mem_source(files: JsValue) -> Result<MemSource> {
    let obj: Object = files.dyn_into().map_err(|_| anyhow!("files must be an object"))?;
    let keys = Object::keys(&obj);

    let mut source = MemSource::default();
    for i in 0..keys.length() {
        let id = keys.get(i).as_string().ok_or_else(|| anyhow!("non-string source id"))?;
        let value = Reflect::get(&obj, &JsValue::from_str(&id))
            .map_err(|e| anyhow!("cannot read source '{id}': {e:?}"))?;

        let bytes = FileBody::from_js(value).into_bytes(&id)?;
        source.insert(id, bytes);
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_and_text_are_kept() {
        let bytes = FileBody::Bytes(b"{}".to_vec()).into_bytes("data/schulen.geojson").unwrap();
        assert_eq!(&bytes[..], b"{}");

        let text = FileBody::Text(r#"{"type":"FeatureCollection"}"#.into())
            .into_bytes("data/schulen.geojson")
            .unwrap();
        assert_eq!(&text[..], br#"{"type":"FeatureCollection"}"#);
    }

    #[test]
    fn other_values_are_rejected_with_their_id() {
        let err = FileBody::Unsupported("number".into())
            .into_bytes("data/schulen.geojson")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("data/schulen.geojson"));
        assert!(msg.contains("number"));
    }
}
