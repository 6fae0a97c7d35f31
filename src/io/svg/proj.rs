use geo::{BoundingRect, Coord, CoordsIter, LineString, Polygon, Rect};

/// Equirectangular lon/lat -> SVG (x, y) for a fixed output width.
///
/// Longitudes are compressed by `cos(mid latitude)` so the zone circle stays
/// round; y grows downward.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    pub(crate) bounds: Rect<f64>,
    pub(crate) margin: f64,
    pub(crate) scale: f64,
    x_factor: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Projection {
    pub(crate) fn fit(bounds: Rect<f64>, width: f64, margin: f64) -> Self {
        let x_factor = bounds.center().y.to_radians().cos().max(1e-6);
        let span_x = (bounds.width() * x_factor).max(1e-9);
        let scale = (width - 2.0 * margin) / span_x;
        let height = bounds.height() * scale + 2.0 * margin;
        Self { bounds, margin, scale, x_factor, width, height }
    }

    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.bounds.min().x) * self.x_factor * self.scale;
        let y = self.margin + (self.bounds.max().y - coord.y) * self.scale; // invert vertically
        (x, y)
    }
}

/// Smallest rect covering the polygon and every extra coordinate.
pub(crate) fn bounds_of(polygon: &Polygon<f64>, extra: impl IntoIterator<Item = Coord<f64>>) -> Option<Rect<f64>> {
    let mut rect = polygon.bounding_rect()?;
    for c in extra {
        let (min, max) = (rect.min(), rect.max());
        rect = Rect::new(
            Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
            Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
        );
    }
    Some(rect)
}

/// Build a compact SVG path string for a polygon's exterior ring.
pub(crate) fn ring_to_path(ring: &LineString<f64>, proj: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| proj.project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!("M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}
