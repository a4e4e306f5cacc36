// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG serialization of glyph outlines.
//!
//! The `d` attribute uses the same command set as the model (M/L/C/Q/Z),
//! so the serialized path round-trips to the same points. Coordinates
//! are rounded to three decimals with trailing zeros trimmed. The
//! document viewBox is the path's bounding box padded by a fixed margin
//! on each side, filled black with the even-odd rule so counters render
//! as holes.

use crate::path::{GlyphPath, PathCommand};
use crate::settings;

/// Serialize a path to an SVG `d` attribute string
pub fn path_data(path: &GlyphPath) -> String {
    let mut pieces: Vec<String> = Vec::with_capacity(path.len());
    for cmd in path.iter() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                pieces.push(format!("M{},{}", coord(p.x), coord(p.y)));
            }
            PathCommand::LineTo(p) => {
                pieces.push(format!("L{},{}", coord(p.x), coord(p.y)));
            }
            PathCommand::CurveTo { c1, c2, to } => {
                pieces.push(format!(
                    "C{},{} {},{} {},{}",
                    coord(c1.x),
                    coord(c1.y),
                    coord(c2.x),
                    coord(c2.y),
                    coord(to.x),
                    coord(to.y)
                ));
            }
            PathCommand::QuadTo { c, to } => {
                pieces.push(format!(
                    "Q{},{} {},{}",
                    coord(c.x),
                    coord(c.y),
                    coord(to.x),
                    coord(to.y)
                ));
            }
            PathCommand::ClosePath => pieces.push("Z".to_string()),
        }
    }
    pieces.join(" ")
}

/// Serialize a full SVG document for the path.
///
/// The viewBox is the bounding box padded on each side; the path is
/// filled black with the even-odd rule.
pub fn write_document(path: &GlyphPath) -> String {
    let bbox = path.bounding_box();
    let pad = settings::export::PADDING;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n  \
         <path d=\"{}\" fill=\"black\" fill-rule=\"evenodd\"/>\n</svg>\n",
        coord(bbox.x0 - pad),
        coord(bbox.y0 - pad),
        coord(bbox.width() + 2.0 * pad),
        coord(bbox.height() + 2.0 * pad),
        path_data(path)
    )
}

/// Format a coordinate: three decimals, trailing zeros trimmed
fn coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fallback_glyph;
    use kurbo::Point;

    #[test]
    fn fallback_triangle_path_data() {
        assert_eq!(path_data(&fallback_glyph()), "M0,0 L40,120 L80,0 Z");
    }

    #[test]
    fn curves_serialize_with_all_controls() {
        let path = GlyphPath::from(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::CurveTo {
                c1: Point::new(10.0, 30.0),
                c2: Point::new(30.5, 30.0),
                to: Point::new(40.0, 0.0),
            },
            PathCommand::QuadTo {
                c: Point::new(20.0, -20.0),
                to: Point::new(0.0, 0.0),
            },
        ]);
        assert_eq!(
            path_data(&path),
            "M0,0 C10,30 30.5,30 40,0 Q20,-20 0,0"
        );
    }

    #[test]
    fn coordinates_round_to_three_decimals() {
        assert_eq!(coord(1.23456), "1.235");
        assert_eq!(coord(40.0), "40");
        assert_eq!(coord(-0.0001), "0");
        assert_eq!(coord(-7.5), "-7.5");
    }

    #[test]
    fn document_has_padded_viewbox_and_evenodd_fill() {
        let doc = write_document(&fallback_glyph());
        // bbox {0, 0, 80, 120} padded by 20 per side
        assert!(doc.contains("viewBox=\"-20 -20 120 160\""));
        assert!(doc.contains("fill=\"black\""));
        assert!(doc.contains("fill-rule=\"evenodd\""));
        assert!(doc.contains("d=\"M0,0 L40,120 L80,0 Z\""));
    }

    #[test]
    fn empty_path_still_produces_a_document() {
        let doc = write_document(&GlyphPath::new());
        assert!(doc.contains("viewBox=\"-20 -20 40 40\""));
        assert!(doc.contains("d=\"\""));
    }
}
