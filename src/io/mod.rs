//! IO module for format-specific writing operations.
//!
//! - `svg` - SVG format for static map export
//!
//! Note: GeoJSON reading and writing is implemented as methods on `Layer`
//! and `ViewModel` in their own `io/geojson.rs` files.

pub(crate) mod svg;
