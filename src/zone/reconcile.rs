use tracing::{debug, trace};

use crate::LatLng;

use super::state::{clamp_radius, ClickKey, ZoneState};

/// Decide whether this pass's click is new information.
///
/// The map keeps reporting its last click on every pass. A click whose
/// rounded position equals `last_observed_click` is that echo and must not
/// move the center, otherwise each pass would trigger another one.
///
/// Returns the next state and whether the view has to be rendered again.
pub fn reconcile(state: ZoneState, click: Option<LatLng>) -> (ZoneState, bool) {
    let Some(click) = click else { return (state, false) };

    let key = ClickKey::from_position(click);
    if state.last_observed_click == Some(key) {
        trace!(lat = click.lat, lng = click.lng, "repeated click ignored");
        return (state, false);
    }

    debug!(lat = click.lat, lng = click.lng, "zone center moved");
    let next = ZoneState {
        center: click,
        last_observed_click: Some(key),
        ..state
    };
    (next, true)
}

/// Back to the default center with no observed click. Radius is kept.
pub fn reset(state: ZoneState) -> ZoneState {
    ZoneState {
        center: state.default_center,
        last_observed_click: None,
        ..state
    }
}

/// Change the radius, clamped to the slider range. Center and click key are kept.
pub fn with_radius(state: ZoneState, radius_km: f64) -> ZoneState {
    ZoneState { radius_km: clamp_radius(radius_km), ..state }
}
