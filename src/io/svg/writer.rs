//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use super::{Projection, ZONE_COLOR};

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for WASM/browser use
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration, the opening <svg> tag and the background.
/// The lon/lat extent and scale are recorded as data attributes so a
/// browser shell can map clicks back to coordinates.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, proj: &Projection) -> Result<()> {
    let (width, height) = (proj.width, proj.height);
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"
        width="{width:.0}" height="{height:.0}"
        viewBox="0 0 {width:.3} {height:.3}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}"
        data-margin="{margin}" data-scale="{scale}">"##,
        lon_min = proj.bounds.min().x,
        lon_max = proj.bounds.max().x,
        lat_min = proj.bounds.min().y,
        lat_max = proj.bounds.max().y,
        margin = proj.margin,
        scale = proj.scale,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#f8fafc"/>"##)?;
    Ok(())
}

/// Write SVG styles for markers, the zone and labels.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .zone {{ fill: {ZONE_COLOR}; fill-opacity: 0.2; stroke: {ZONE_COLOR}; stroke-width: 2; }}
    .marker {{ stroke: #111827; stroke-width: 0.8; }}
    .center {{ fill: #2563eb; stroke: #ffffff; stroke-width: 1.5; }}
    .legend, .status, .attribution {{ font-family: sans-serif; fill: #111827; }}
    .legend {{ font-size: 13px; }}
    .status {{ font-size: 12px; }}
    .attribution {{ font-size: 10px; fill: #6b7280; }}
</style>
</defs>"##)?;
    Ok(())
}

pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
