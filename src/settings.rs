// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across the
//! lifetime of a session. Anything a renderer would theme (colors,
//! handle sizes) lives with the renderer, not here.

// ============================================================================
// EDITOR SETTINGS
// ============================================================================
/// Minimum zoom level (2% of original size)
const MIN_ZOOM: f64 = 0.02;

/// Maximum zoom level (50x original size)
const MAX_ZOOM: f64 = 50.0;

/// Hit radius for point selection, in screen pixels.
///
/// Converted to design units through the current zoom before testing.
const HIT_RADIUS: f64 = 8.0;

// ============================================================================
// SNAP TO GRID SETTINGS
// ============================================================================
/// Grid spacing for snapping dragged points (design units)
const SNAP_TO_GRID_SPACING: f64 = 10.0;

// ============================================================================
// HISTORY SETTINGS
// ============================================================================
/// Maximum number of undo snapshots retained; oldest are evicted first
const MAX_UNDO_DEPTH: usize = 60;

// ============================================================================
// RANDOMIZE SETTINGS
// ============================================================================
/// Total span of the per-axis jitter applied by randomize.
///
/// Each coordinate is offset by a uniform draw in
/// [-JITTER_MAGNITUDE / 2, JITTER_MAGNITUDE / 2].
const JITTER_MAGNITUDE: f64 = 20.0;

// ============================================================================
// GLYPH GENERATION SETTINGS
// ============================================================================
/// Nominal pixel size glyph outlines are generated at
const GLYPH_SIZE_PX: f64 = 120.0;

// ============================================================================
// EXPORT SETTINGS
// ============================================================================
/// Padding added on each side of the bounding box for the SVG viewBox
const EXPORT_PADDING: f64 = 20.0;

/// Default edge length of the rasterized PNG, in pixels
const PNG_SIZE_PX: u32 = 512;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Editor settings (zoom, hit testing)
pub mod editor {
    /// Minimum zoom level (2% of original size)
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level (50x original size)
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;

    /// Hit radius for point selection (screen pixels)
    pub const HIT_RADIUS: f64 = super::HIT_RADIUS;
}

/// Snap-to-grid settings for point drags
pub mod snap {
    /// Grid spacing to snap to (design units)
    pub const SPACING: f64 = super::SNAP_TO_GRID_SPACING;
}

/// Undo history settings
pub mod history {
    /// Maximum depth of the undo stack
    pub const MAX_UNDO_DEPTH: usize = super::MAX_UNDO_DEPTH;
}

/// Randomize settings
pub mod randomize {
    /// Total span of the per-axis jitter (centered on zero)
    pub const JITTER_MAGNITUDE: f64 = super::JITTER_MAGNITUDE;
}

/// Glyph generation settings
pub mod glyph {
    /// Nominal pixel size outlines are generated at
    pub const SIZE_PX: f64 = super::GLYPH_SIZE_PX;
}

/// Export settings (SVG viewBox, PNG raster size)
pub mod export {
    /// viewBox padding on each side (design units)
    pub const PADDING: f64 = super::EXPORT_PADDING;

    /// Default PNG edge length (pixels)
    pub const PNG_SIZE_PX: u32 = super::PNG_SIZE_PX;
}
