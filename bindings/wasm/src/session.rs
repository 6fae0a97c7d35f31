use radiozone_core::{Config, LatLng, Session};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

/// One browser map session. The page calls `click` (or `no_click`) once per
/// render pass and redraws only when it returns true.
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// config: configuration JSON text
    /// files: { "data/schulen.geojson": Uint8Array | string, "icons/lighthouse.svg": ..., ... }
    #[wasm_bindgen(constructor)]
    pub fn new(config: &str, files: JsValue) -> Result<WasmSession, JsValue> {
        let config = Config::from_json_bytes(config.as_bytes()).map_err(js_err)?;
        let source = js_files_to_mem_source(files).map_err(js_err)?;
        let inner = Session::new(config, &source);

        for failure in inner.failures() {
            web_sys::console::warn_1(&JsValue::from_str(&failure.error.to_string()));
        }

        Ok(WasmSession { inner })
    }

    /// Render pass with the map's last reported click.
    pub fn click(&mut self, lat: f64, lng: f64) -> bool {
        self.inner.pass(Some(LatLng::new(lat, lng)))
    }

    /// Render pass without a click.
    pub fn no_click(&mut self) -> bool {
        self.inner.pass(None)
    }

    pub fn reset(&mut self) {
        self.inner.reset()
    }

    pub fn set_radius(&mut self, radius_km: f64) {
        self.inner.set_radius(radius_km)
    }

    pub fn radius_km(&self) -> f64 {
        self.inner.state().radius_km
    }

    /// Current zone center as { lat, lng }.
    pub fn center(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.state().center).map_err(|e| e.into())
    }

    pub fn status(&self) -> String {
        self.inner.state().status_label()
    }

    /// Messages for layers that could not be loaded.
    pub fn warnings(&self) -> Result<JsValue, JsValue> {
        let out: Vec<String> = self.inner.failures().iter().map(|f| f.error.to_string()).collect();
        serde_wasm_bindgen::to_value(&out).map_err(|e| e.into())
    }

    /// The current view as a GeoJSON FeatureCollection (JavaScript object).
    #[wasm_bindgen(js_name = "to_geojson")]
    pub fn to_geojson(&self) -> Result<JsValue, JsValue> {
        let geojson = self.inner.view().to_geojson();

        // Serialize to a string and parse in JS rather than building the object field by field
        let json_string = serde_json::to_string(&geojson)
            .map_err(|e| js_err(format!("Failed to serialize GeoJSON to string: {}", e)))?;

        js_sys::JSON::parse(&json_string)
            .map_err(|e| js_err(format!("Failed to parse GeoJSON string: {:?}", e)))
    }

    /// The current view as SVG text.
    #[wasm_bindgen(js_name = "to_svg")]
    pub fn to_svg(&self) -> Result<String, JsValue> {
        self.inner.view().to_svg_string().map_err(js_err)
    }
}
