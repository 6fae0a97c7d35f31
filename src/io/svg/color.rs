//! Color utilities for SVG map export.

use std::fmt;

/// HSL color: h in degrees, s and l in [0.0, 1.0].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Hsl {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) l: f64,
}

impl fmt::Display for Hsl {
    /// Format as CSS HSL:
    ///   hsl({h:.1},{s:.0}%,{l:.0}%)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalize hue into [0,360)
        let h = (self.h % 360.0 + 360.0) % 360.0;
        let s = (self.s * 100.0).clamp(0.0, 100.0);
        let l = (self.l * 100.0).clamp(0.0, 100.0);
        write!(f, "hsl({:.1},{:.0}%,{:.0}%)", h, s, l)
    }
}

const GOLDEN_ANGLE: f64 = 137.50776405;

/// Well-separated marker colors for successive layers.
pub(crate) fn layer_color(index: usize) -> Hsl {
    Hsl { h: ((index as f64) * GOLDEN_ANGLE + 210.0) % 360.0, s: 0.70, l: 0.45 }
}

/// Zone circle stroke and fill.
pub(crate) const ZONE_COLOR: &str = "#ff6600";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formats_as_css() {
        let c = Hsl { h: -30.0, s: 0.5, l: 1.2 };
        assert_eq!(c.to_string(), "hsl(330.0,50%,100%)");
    }

    #[test]
    fn successive_layers_differ() {
        let a = layer_color(0).to_string();
        let b = layer_color(1).to_string();
        let c = layer_color(2).to_string();
        assert!(a != b && b != c && a != c);
    }
}
