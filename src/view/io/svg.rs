use std::{io::Write, path::Path};

use anyhow::{anyhow, Result};
use geo::Coord;

use crate::{
    common::{ensure_parent_dir_exists, escape_markup},
    io::svg::{
        bounds_of, layer_color, ring_to_path, write_svg_footer, write_svg_header,
        write_svg_styles, Hsl, Projection, SvgStringWriter, SvgWriter,
    },
    view::{model::CENTER_TOOLTIP, ViewModel},
    MarkerStyle, PointFeature,
};

const SVG_WIDTH: f64 = 1200.0;
const SVG_MARGIN: f64 = 32.0;
const MARKER_RADIUS: f64 = 5.0;

impl ViewModel<'_> {
    /// Render the view as SVG text (for browser shells).
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.draw_svg(&mut writer)?;
        writer.into_string()
    }

    /// Render the view to an SVG file, creating parent directories.
    pub fn write_svg(&self, path: &Path) -> Result<()> {
        ensure_parent_dir_exists(path)?;
        let mut writer = SvgWriter::new(path)?;
        self.draw_svg(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn draw_svg(&self, writer: &mut impl Write) -> Result<()> {
        let markers = self.layers.iter()
            .flat_map(|layer| layer.iter().map(|f| Coord::from(f.position())));
        let bounds = bounds_of(&self.zone, markers)
            .ok_or_else(|| anyhow!("[to_svg] Could not determine bounds; nothing to draw."))?;
        let proj = Projection::fit(bounds, SVG_WIDTH, SVG_MARGIN);

        write_svg_header(writer, &proj)?;
        write_svg_styles(writer)?;

        writeln!(writer, r#"<path class="zone" d="{}"><title>{}</title></path>"#,
            ring_to_path(self.zone.exterior(), &proj),
            escape_markup(&self.zone_popup()),
        )?;

        for (index, layer) in self.layers.iter().enumerate() {
            let color = layer_color(index);
            writeln!(writer, r#"<g class="layer" data-name="{}">"#, escape_markup(&layer.name))?;
            for feature in layer.iter() {
                self.draw_marker(writer, &proj, feature, &layer.name, color)?;
            }
            writeln!(writer, "</g>")?;
        }

        let (cx, cy) = proj.project(&self.center.into());
        writeln!(writer, r#"<circle class="center" cx="{cx:.3}" cy="{cy:.3}" r="6"><title>{}</title></circle>"#,
            escape_markup(CENTER_TOOLTIP))?;

        self.draw_legend(writer)?;

        let bottom = proj.height - 10.0;
        writeln!(writer, r#"<text class="status" x="{:.3}" y="{bottom:.3}">{}</text>"#,
            SVG_MARGIN, escape_markup(&self.status))?;
        writeln!(writer, r#"<text class="attribution" x="{:.3}" y="{bottom:.3}" text-anchor="end">{}</text>"#,
            proj.width - SVG_MARGIN, escape_markup(&self.tiles.attribution))?;

        write_svg_footer(writer)
    }

    fn draw_marker(
        &self,
        writer: &mut impl Write,
        proj: &Projection,
        feature: &PointFeature,
        layer_name: &str,
        color: Hsl,
    ) -> Result<()> {
        let (x, y) = proj.project(&feature.position().into());
        let title = match feature.label.as_str() {
            "" => escape_markup(layer_name),
            label => escape_markup(&format!("{layer_name}: {label}")),
        };

        match self.marker_style {
            MarkerStyle::Icon(icon) => {
                let [w, h] = icon.size;
                let [ax, ay] = icon.anchor;
                writeln!(writer,
                    r#"<image class="marker" href="{}" x="{:.3}" y="{:.3}" width="{w}" height="{h}"><title>{title}</title></image>"#,
                    escape_markup(&icon.path), x - ax as f64, y - ay as f64,
                )?;
            }
            MarkerStyle::Default => {
                writeln!(writer,
                    r#"<circle class="marker" cx="{x:.3}" cy="{y:.3}" r="{MARKER_RADIUS}" fill="{color}"><title>{title}</title></circle>"#,
                )?;
            }
        }
        Ok(())
    }

    /// Layer swatches with marker counts, top left.
    fn draw_legend(&self, writer: &mut impl Write) -> Result<()> {
        for (index, layer) in self.layers.iter().enumerate() {
            let y = SVG_MARGIN + 18.0 * index as f64;
            writeln!(writer, r#"<circle cx="{:.3}" cy="{:.3}" r="{MARKER_RADIUS}" fill="{}"/>"#,
                SVG_MARGIN, y - 4.0, layer_color(index))?;
            writeln!(writer, r#"<text class="legend" x="{:.3}" y="{y:.3}">{} ({})</text>"#,
                SVG_MARGIN + 10.0, escape_markup(&layer.name), layer.len())?;
        }
        Ok(())
    }
}
