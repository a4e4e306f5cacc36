// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Seeded perturbation of glyph outlines.
//!
//! Reproducibility is the contract: the same seed on the same starting
//! path must produce bit-identical coordinates. That means a fixed
//! pseudorandom algorithm (a seeded `StdRng`, never system entropy) and
//! a fixed traversal order: command index order, controls before the
//! anchor within a command, x before y for each point.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::path::GlyphPath;
use crate::settings;

/// Offset every anchor and control point by an independent uniform
/// draw per axis, centered on zero. Close commands carry no
/// coordinates and are untouched.
pub fn perturb(path: &mut GlyphPath, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let magnitude = settings::randomize::JITTER_MAGNITUDE;
    path.for_each_point(|p| {
        p.x += (rng.r#gen::<f64>() - 0.5) * magnitude;
        p.y += (rng.r#gen::<f64>() - 0.5) * magnitude;
    });
}
