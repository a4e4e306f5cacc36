// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transformation between screen and design space.
//!
//! The camera is a pan offset plus a uniform zoom:
//! `screen = design * zoom + offset`. Hit radii given in screen pixels
//! are divided by the zoom before testing in design space.

use kurbo::{Point, Vec2};

use crate::settings;

/// Camera state for the editor view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Screen-space translation of the design origin
    pub offset: Vec2,
    /// Uniform zoom factor, clamped to the editor limits
    pub zoom: f64,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a design-space point to screen space
    pub fn to_screen(&self, design: Point) -> Point {
        Point::new(
            design.x * self.zoom + self.offset.x,
            design.y * self.zoom + self.offset.y,
        )
    }

    /// Map a screen-space point to design space
    pub fn screen_to_design(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Translate the camera by a screen-space delta (canvas pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom, clamped to the editor limits
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(settings::editor::MIN_ZOOM, settings::editor::MAX_ZOOM);
    }
}
