// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Global transform engine - derives the working path from the original.
//!
//! `apply_params` is a pure function; it never mutates the original path
//! and it is always recomputed from the original, never compounded. The
//! step order is fixed: slant, then scale, then roundness. Changing the
//! order changes the visual result and is not allowed.
//!
//! Weight is not geometry: it travels with the params as a stroke width
//! for renderers and export, and this engine never bakes it in.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use crate::path::{GlyphPath, PathCommand};

/// Global transform parameters.
///
/// `slant` is normalized to [-1, 1] (mapped to ±45°); `roundness` to
/// [0, 1] (0 = untouched, 1 = controls collapsed onto their anchors).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Horizontal scale factor, > 0
    pub width: f64,
    /// Vertical scale factor, > 0
    pub height: f64,
    /// Stroke width for renderers; 0 disables the stroke
    pub weight: f64,
    /// Slant amount in [-1, 1]
    pub slant: f64,
    /// Roundness amount in [0, 1]
    pub roundness: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            weight: 0.0,
            slant: 0.0,
            roundness: 0.0,
        }
    }
}

impl TransformParams {
    /// Return a copy with out-of-range fields clamped into their
    /// documented domains.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(f64::MIN_POSITIVE),
            height: self.height.max(f64::MIN_POSITIVE),
            weight: self.weight,
            slant: self.slant.clamp(-1.0, 1.0),
            roundness: self.roundness.clamp(0.0, 1.0),
        }
    }

    /// Whether these params leave geometry untouched
    pub fn is_identity(&self) -> bool {
        self.width == 1.0 && self.height == 1.0 && self.slant == 0.0 && self.roundness == 0.0
    }
}

/// Derive a working path from `original` and `params`.
///
/// Steps, in fixed order:
/// 1. Slant: `x += y * tan(slant * PI/4)`, in original coordinate space
///    so the slant direction is independent of later scaling.
/// 2. Scale: recompute the bounding box of the slanted path and scale
///    about its min corner. The corner pivot (not the center) is a
///    deliberate, reproducible convention. Skipped entirely when the
///    box has zero width or height.
/// 3. Roundness: lerp each curve control toward its end anchor.
pub fn apply_params(original: &GlyphPath, params: &TransformParams) -> GlyphPath {
    let mut path = original.clone();

    if params.slant != 0.0 {
        let shear = (params.slant * FRAC_PI_4).tan();
        path.for_each_point(|p| p.x += p.y * shear);
    }

    // Unit factors are skipped outright: (x - x0) * 1 + x0 is not
    // bit-exact in floats, and identity params must leave coordinates
    // untouched.
    if params.width != 1.0 || params.height != 1.0 {
        let bbox = path.bounding_box();
        if bbox.width() > 0.0 && bbox.height() > 0.0 {
            let (width, height) = (params.width, params.height);
            path.for_each_point(|p| {
                p.x = (p.x - bbox.x0) * width + bbox.x0;
                p.y = (p.y - bbox.y0) * height + bbox.y0;
            });
        }
    }

    if params.roundness > 0.0 {
        let t = params.roundness;
        for cmd in path.commands_mut() {
            match cmd {
                PathCommand::CurveTo { c1, c2, to } => {
                    *c1 = c1.lerp(*to, t);
                    *c2 = c2.lerp(*to, t);
                }
                PathCommand::QuadTo { c, to } => {
                    *c = c.lerp(*to, t);
                }
                _ => {}
            }
        }
    }

    path
}
