use tracing::{debug, info, warn};

use crate::{
    load_from, reconcile, reset, with_radius, Config, DataSource, LatLng, Layer, LoadError,
    MarkerStyle, ZoneState,
};

use super::ViewModel;

/// Vertices of the zone ring handed to renderers.
const ZONE_SEGMENTS: usize = 72;

/// A configured layer that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub layer: String,
    pub error: LoadError,
}

/// One user's map session: the loaded layers and the zone state threaded
/// through render passes.
///
/// The shell calls [`Session::pass`] exactly once per render pass with the
/// click it observed (or `None`), and renders again only when that returns
/// `true`.
#[derive(Debug)]
pub struct Session {
    config: Config,
    state: ZoneState,
    marker_style: MarkerStyle,
    layers: Vec<Layer>,
    failures: Vec<LoadFailure>,
}

impl Session {
    /// Resolve the marker style and load every configured layer from `source`.
    pub fn new(config: Config, source: &dyn DataSource) -> Self {
        let marker_style = config.resolve_marker_style(source);
        let state = ZoneState::new(config.default_center, config.default_radius_km as f64);

        let mut session = Self {
            config,
            state,
            marker_style,
            layers: Vec::new(),
            failures: Vec::new(),
        };
        session.reload(source);

        info!(
            layers = session.layers.len(),
            failed = session.failures.len(),
            markers = session.layers.iter().map(Layer::len).sum::<usize>(),
            "session ready"
        );
        session
    }

    /// Reload all layers. Zone state is left as is.
    pub fn reload(&mut self, source: &dyn DataSource) {
        self.layers.clear();
        self.failures.clear();

        for spec in &self.config.layers {
            match load_from(source, &spec.name, &spec.source) {
                (layer, None) => {
                    debug!(layer = %spec.name, features = layer.len(), "layer loaded");
                    self.layers.push(layer);
                }
                (_, Some(error)) => {
                    warn!(layer = %spec.name, %error, "layer omitted");
                    self.failures.push(LoadFailure { layer: spec.name.clone(), error });
                }
            }
        }
    }

    /// Feed this pass's click, if any. Returns whether to render again.
    pub fn pass(&mut self, click: Option<LatLng>) -> bool {
        let (next, rerender) = reconcile(self.state, click);
        self.state = next;
        rerender
    }

    /// Explicit "reset center" action.
    pub fn reset(&mut self) {
        self.state = reset(self.state);
    }

    /// Radius slider; clamped to 1..=20 km.
    pub fn set_radius(&mut self, radius_km: f64) {
        self.state = with_radius(self.state, radius_km);
    }

    pub fn state(&self) -> ZoneState { self.state }

    pub fn config(&self) -> &Config { &self.config }

    pub fn layers(&self) -> &[Layer] { &self.layers }

    pub fn failures(&self) -> &[LoadFailure] { &self.failures }

    pub fn marker_style(&self) -> &MarkerStyle { &self.marker_style }

    /// Assemble the view for the current state.
    pub fn view(&self) -> ViewModel<'_> {
        ViewModel {
            layers: &self.layers,
            center: self.state.center,
            radius_km: self.state.radius_km,
            zoom: self.config.default_zoom,
            tiles: &self.config.tiles,
            marker_style: &self.marker_style,
            zone: self.state.circle(ZONE_SEGMENTS),
            status: self.state.status_label(),
            warnings: self.failures.iter().map(|f| f.error.to_string()).collect(),
        }
    }
}
