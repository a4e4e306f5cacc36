// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Font provider - glyph outline extraction from TTF/OTF bytes.
//!
//! Parsing is delegated entirely to `ttf-parser`; this module walks a
//! glyph's outline through an `OutlineBuilder` into `PathCommand`s,
//! scaled to a nominal pixel size and flipped into y-down editor space
//! with the baseline at `ascender * scale`, so a glyph's top lands near
//! y = 0.
//!
//! `ttf_parser::Face` borrows from the byte buffer, so `FontSource`
//! owns the bytes and re-parses the face per call; parsing is a cheap
//! header read and `from_bytes` has already validated it once.

use thiserror::Error;
use ttf_parser::Face;

use crate::path::{GlyphPath, PathCommand};
use kurbo::Point;

/// Errors surfaced by the font provider.
///
/// All of them are recoverable: the caller keeps its last-good font (or
/// the built-in fallback glyph) and reports the failure to the user.
#[derive(Debug, Error)]
pub enum FontError {
    /// The byte buffer is not a parsable TTF/OTF face
    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
}

/// A loaded font, owning its raw bytes
pub struct FontSource {
    data: Vec<u8>,
}

impl FontSource {
    /// Validate and wrap raw font bytes
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        // Parse once up front so later calls can assume validity
        Face::parse(&data, 0)?;
        Ok(Self { data })
    }

    /// Extract the outline for a character at a nominal pixel size.
    ///
    /// Returns None when the face has no glyph for the character or
    /// the glyph has an empty outline.
    pub fn glyph_path(&self, character: char, size_px: f64) -> Option<GlyphPath> {
        let face = Face::parse(&self.data, 0).ok()?;
        let glyph_id = face.glyph_index(character)?;

        let scale = size_px / f64::from(face.units_per_em());
        let baseline = f64::from(face.ascender()) * scale;

        let mut builder = OutlineSink::new(scale, baseline);
        face.outline_glyph(glyph_id, &mut builder)?;

        let path = builder.finish();
        if path.is_empty() {
            tracing::debug!("glyph for '{}' has an empty outline", character);
            return None;
        }
        Some(path)
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The built-in placeholder outline used when no font is available.
///
/// A plain triangle: the editor always has something to render.
pub fn fallback_glyph() -> GlyphPath {
    GlyphPath::from(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(40.0, 120.0)),
        PathCommand::LineTo(Point::new(80.0, 0.0)),
        PathCommand::ClosePath,
    ])
}

/// Collects `ttf-parser` outline callbacks into path commands,
/// applying the scale and the y-flip into editor space.
struct OutlineSink {
    scale: f64,
    baseline: f64,
    path: GlyphPath,
}

impl OutlineSink {
    fn new(scale: f64, baseline: f64) -> Self {
        Self {
            scale,
            baseline,
            path: GlyphPath::new(),
        }
    }

    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(
            f64::from(x) * self.scale,
            self.baseline - f64::from(y) * self.scale,
        )
    }

    fn finish(self) -> GlyphPath {
        self.path
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.push(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.map(x1, y1);
        let to = self.map(x, y);
        self.path.push(PathCommand::QuadTo { c, to });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let to = self.map(x, y);
        self.path.push(PathCommand::CurveTo { c1, c2, to });
    }

    fn close(&mut self) {
        self.path.push(PathCommand::ClosePath);
    }
}
