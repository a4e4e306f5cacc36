// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyphlab: a single-glyph Bezier outline editor core.
//!
//! The crate is the model half of a glyph-transform tool: load a glyph
//! outline from a font (or the built-in placeholder), edit it through
//! direct manipulation, derive working geometry from global transform
//! params, undo/redo through bounded snapshots, randomize with a seeded
//! generator, and export the result as SVG or PNG. On-screen painting
//! and widget construction are left to a host; renderers consume
//! `GlyphPath::to_bezpath()` and the even-odd fill rule.

pub mod data;
pub mod editing;
pub mod export;
pub mod font;
pub mod path;
pub mod randomize;
pub mod settings;
pub mod transform;

pub use data::AppState;
pub use editing::EditSession;
pub use path::{GlyphPath, PathCommand, PointRef, PointRole};
pub use transform::TransformParams;
