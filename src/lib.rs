#![doc = "Radiozone public API"]
mod common;
mod config;
mod error;
mod io;
mod layer;
mod source;
mod view;
mod zone;

#[doc(inline)]
pub use config::{Config, IconSpec, LayerSpec, MarkerStyle, TileLayer};

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use layer::{load, load_from, LatLng, Layer, PointFeature, LABEL_KEYS};

#[doc(inline)]
pub use source::{DataSource, DiskSource, MemSource};

#[doc(inline)]
pub use view::{LoadFailure, Session, ViewModel};

#[doc(inline)]
pub use zone::{
    reconcile, reset, with_radius, zone_polygon, ClickKey, Phase, ZoneState, MAX_RADIUS_KM,
    MIN_RADIUS_KM,
};
