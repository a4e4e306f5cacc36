// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Point movement for EditSession - group drags, rigid anchor-handle
//! translation, grid snap, and the collinear handle lock.

use std::collections::BTreeSet;

use kurbo::{Point, Vec2};

use super::EditSession;
use crate::path::{GlyphPath, PointRef, PointRole};
use crate::settings;

/// Snap a point to the nearest grid position
pub fn snap_point_to_grid(point: Point) -> Point {
    let spacing = settings::snap::SPACING;
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}

impl EditSession {
    /// Drag the grabbed point toward a screen position.
    ///
    /// Computes the grabbed point's new world position (snapped to the
    /// grid when enabled), then applies the same delta to every point
    /// in the drag set. Returns false when nothing moved.
    pub(crate) fn drag_point_to(&mut self, grabbed: PointRef, screen_pos: Point) -> bool {
        let Some(current) = self.path.point(grabbed) else {
            return false;
        };

        let mut target = self.viewport.screen_to_design(screen_pos);
        if self.grid_snap {
            target = snap_point_to_grid(target);
        }

        let delta = target - current;
        if delta == Vec2::ZERO {
            return false;
        }

        let targets = self.drag_targets(grabbed);
        for point_ref in &targets {
            self.path.translate_point(*point_ref, delta);
        }

        if self.collinear_lock && grabbed.role != PointRole::Anchor {
            self.apply_collinear_lock(grabbed);
        }

        true
    }

    /// Move every selected point (plus dependent handles) by a delta in
    /// design space. Used for group operations that bypass the pointer,
    /// e.g. keyboard nudges.
    pub fn move_selection(&mut self, delta: Vec2) -> bool {
        if self.selection.is_empty() || delta == Vec2::ZERO {
            return false;
        }
        let mut targets: BTreeSet<PointRef> = self.selection.iter().copied().collect();
        self.extend_with_anchor_handles(&mut targets);
        for point_ref in &targets {
            self.path.translate_point(*point_ref, delta);
        }
        true
    }

    // ===== PRIVATE HELPERS =====

    /// The set of points a drag moves: the selection, the grabbed
    /// point, and the dependent handles of every anchor among them.
    fn drag_targets(&self, grabbed: PointRef) -> BTreeSet<PointRef> {
        let mut targets: BTreeSet<PointRef> = self.selection.iter().copied().collect();
        targets.insert(grabbed);
        self.extend_with_anchor_handles(&mut targets);
        targets
    }

    /// For every anchor in the set, add its dependent control points:
    /// the incoming control stored on its own command and the outgoing
    /// control of the following curve command. Translating them rigidly
    /// with the anchor preserves curve shape.
    fn extend_with_anchor_handles(&self, targets: &mut BTreeSet<PointRef>) {
        let anchors: Vec<usize> = targets
            .iter()
            .filter(|r| r.role == PointRole::Anchor)
            .map(|r| r.index)
            .collect();
        for index in anchors {
            if let Some(incoming) = incoming_handle(&self.path, index) {
                targets.insert(incoming);
            }
            if let Some(outgoing) = outgoing_handle(&self.path, index) {
                targets.insert(outgoing);
            }
        }
    }

    /// Mirror the control opposite the dragged one across their shared
    /// anchor: reflected direction, original magnitude preserved. The
    /// result is a smooth curve through that anchor.
    fn apply_collinear_lock(&mut self, control: PointRef) {
        let Some((anchor, opposite_ref)) = self.collinear_pair(control) else {
            return;
        };
        let Some(moved) = self.path.point(control) else {
            return;
        };
        let Some(opposite) = self.path.point(opposite_ref) else {
            return;
        };
        let mirrored = constrained_opposite(anchor, moved, opposite);
        self.path.set_point(opposite_ref, mirrored);
    }

    /// Resolve the shared anchor and the opposite control for a dragged
    /// control point.
    ///
    /// The second control of a cubic shares its command's end anchor
    /// with the next command's first control; a first control shares
    /// the previous command's anchor with that anchor's incoming
    /// control.
    fn collinear_pair(&self, control: PointRef) -> Option<(Point, PointRef)> {
        match control.role {
            PointRole::Anchor => None,
            PointRole::ControlB => {
                let anchor = self.path.point(PointRef::anchor(control.index))?;
                let opposite = outgoing_handle(&self.path, control.index)?;
                Some((anchor, opposite))
            }
            PointRole::ControlA => {
                let anchor_index = previous_anchor_index(&self.path, control.index)?;
                let anchor = self.path.point(PointRef::anchor(anchor_index))?;
                let opposite = incoming_handle(&self.path, anchor_index)?;
                Some((anchor, opposite))
            }
        }
    }
}

/// The control arriving at the anchor of the command at `index`
fn incoming_handle(path: &GlyphPath, index: usize) -> Option<PointRef> {
    use crate::path::PathCommand::*;
    match path.get(index)? {
        CurveTo { .. } => Some(PointRef::control_b(index)),
        QuadTo { .. } => Some(PointRef::control_a(index)),
        _ => None,
    }
}

/// The control leaving the anchor of the command at `index`, stored on
/// the following curve command
fn outgoing_handle(path: &GlyphPath, index: usize) -> Option<PointRef> {
    use crate::path::PathCommand::*;
    match path.get(index + 1)? {
        CurveTo { .. } | QuadTo { .. } => Some(PointRef::control_a(index + 1)),
        _ => None,
    }
}

/// Index of the nearest preceding command that carries an anchor
fn previous_anchor_index(path: &GlyphPath, index: usize) -> Option<usize> {
    (0..index).rev().find(|&i| {
        path.get(i)
            .map(|cmd| cmd.anchor().is_some())
            .unwrap_or(false)
    })
}

/// Compute the constrained position of the opposite handle.
///
/// Given the shared anchor, the moved handle, and the opposite handle,
/// return the position that keeps the three collinear while preserving
/// the opposite handle's original distance from the anchor.
fn constrained_opposite(anchor: Point, moved: Point, opposite: Point) -> Point {
    let dx = moved.x - anchor.x;
    let dy = moved.y - anchor.y;
    let angle = dy.atan2(dx);

    let distance = opposite.distance(anchor);

    let opposite_angle = angle + std::f64::consts::PI;
    Point::new(
        anchor.x + distance * opposite_angle.cos(),
        anchor.y + distance * opposite_angle.sin(),
    )
}
