// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! PNG rasterization of the glyph preview.
//!
//! The working path is filled with the even-odd rule into a square
//! `tiny-skia` pixmap, fitted to the padded bounding box. When the
//! weight param is non-zero the outline is also stroked with width
//! `|weight|`, matching the live preview.

use anyhow::{Context, Result};
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::path::{GlyphPath, PathCommand};
use crate::settings;

/// Rasterize the path into PNG bytes at `size` x `size` pixels
pub fn rasterize(path: &GlyphPath, weight: f64, size: u32) -> Result<Vec<u8>> {
    let pixmap = render(path, weight, size)?;
    let bytes = pixmap.encode_png().context("failed to encode PNG")?;
    Ok(bytes)
}

/// Render the path into a pixmap (white background, black fill)
fn render(path: &GlyphPath, weight: f64, size: u32) -> Result<Pixmap> {
    let mut pixmap =
        Pixmap::new(size, size).context("invalid raster size")?;
    pixmap.fill(Color::WHITE);

    let Some(skia_path) = to_skia_path(path) else {
        // Nothing to draw; a blank canvas is still a valid export
        return Ok(pixmap);
    };

    let transform = fit_transform(path, size);

    let mut paint = Paint::default();
    paint.set_color(Color::BLACK);
    paint.anti_alias = true;

    pixmap.fill_path(&skia_path, &paint, FillRule::EvenOdd, transform, None);

    if weight != 0.0 {
        let stroke = Stroke {
            width: weight.abs() as f32,
            ..Stroke::default()
        };
        pixmap.stroke_path(&skia_path, &paint, &stroke, transform, None);
    }

    Ok(pixmap)
}

/// Map the padded bounding box onto the square canvas, preserving
/// aspect ratio
fn fit_transform(path: &GlyphPath, size: u32) -> Transform {
    let bbox = path.bounding_box();
    let pad = settings::export::PADDING;
    let width = bbox.width() + 2.0 * pad;
    let height = bbox.height() + 2.0 * pad;

    let extent = width.max(height);
    let scale = if extent > 0.0 {
        f64::from(size) / extent
    } else {
        1.0
    };

    Transform::from_row(
        scale as f32,
        0.0,
        0.0,
        scale as f32,
        (-(bbox.x0 - pad) * scale) as f32,
        (-(bbox.y0 - pad) * scale) as f32,
    )
}

/// Convert the command list to a tiny-skia path.
///
/// Returns None for paths with no drawable geometry.
fn to_skia_path(path: &GlyphPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for cmd in path.iter() {
        match *cmd {
            PathCommand::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathCommand::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathCommand::CurveTo { c1, c2, to } => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                to.x as f32,
                to.y as f32,
            ),
            PathCommand::QuadTo { c, to } => {
                builder.quad_to(c.x as f32, c.y as f32, to.x as f32, to.y as f32)
            }
            PathCommand::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fallback_glyph;

    #[test]
    fn rasterize_produces_png_bytes() {
        let bytes = rasterize(&fallback_glyph(), 0.0, 64).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn fill_covers_the_glyph_interior() {
        let size = 160;
        let pixmap = render(&fallback_glyph(), 0.0, size).unwrap();

        // Design point (40, 40) is inside the triangle. Padded box is
        // (-20, -20)..(100, 140), extent 160, scale 1.0.
        let pixel = pixmap.pixel(60, 60).unwrap();
        assert_eq!(pixel.red(), 0);

        // A corner of the canvas stays white
        let corner = pixmap.pixel(1, 1).unwrap();
        assert_eq!(corner.red(), 255);
    }

    #[test]
    fn empty_path_renders_blank_canvas() {
        let pixmap = render(&GlyphPath::new(), 0.0, 32).unwrap();
        let pixel = pixmap.pixel(16, 16).unwrap();
        assert_eq!(pixel.red(), 255);
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(rasterize(&fallback_glyph(), 0.0, 0).is_err());
    }
}
