mod circle;
mod reconcile;
mod state;

pub use circle::zone_polygon;
pub use reconcile::{reconcile, reset, with_radius};
pub use state::{ClickKey, Phase, ZoneState, MAX_RADIUS_KM, MIN_RADIUS_KM};
