use crate::LatLng;

/// Smallest radius the zone can be set to, in km.
pub const MIN_RADIUS_KM: f64 = 1.0;

/// Largest radius the zone can be set to, in km.
pub const MAX_RADIUS_KM: f64 = 20.0;

/// Clicks are compared at 6 fractional digits.
const CLICK_SCALE: f64 = 1_000_000.0;

/// A click position rounded to micro-degrees.
///
/// This is the de-duplication key for repeated click reports, not a display
/// value. Stored as integers so `52.5` and `52.500000` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickKey {
    lat_e6: i64,
    lng_e6: i64,
}

impl ClickKey {
    pub fn from_position(p: LatLng) -> Self {
        Self {
            lat_e6: (p.lat * CLICK_SCALE).round() as i64,
            lng_e6: (p.lng * CLICK_SCALE).round() as i64,
        }
    }

    /// The rounded position this key stands for.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat_e6 as f64 / CLICK_SCALE, self.lng_e6 as f64 / CLICK_SCALE)
    }
}

/// Whether a click has been accepted since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Observed,
}

/// The zone circle and the interaction state that moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneState {
    pub center: LatLng,
    pub radius_km: f64,
    pub last_observed_click: Option<ClickKey>,
    /// Where `center` returns to on reset.
    pub default_center: LatLng,
}

impl ZoneState {
    /// Initial `Idle` state centered on `default_center`.
    pub fn new(default_center: LatLng, radius_km: f64) -> Self {
        Self {
            center: default_center,
            radius_km: clamp_radius(radius_km),
            last_observed_click: None,
            default_center,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.last_observed_click {
            Some(_) => Phase::Observed,
            None => Phase::Idle,
        }
    }

    /// Human-readable center and radius, as shown next to the map.
    pub fn status_label(&self) -> String {
        format!("Zentrum: {:.5}, {:.5} | Radius: {} km", self.center.lat, self.center.lng, self.radius_km)
    }
}

pub(crate) fn clamp_radius(km: f64) -> f64 {
    if km.is_nan() { return MIN_RADIUS_KM }
    km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
}
