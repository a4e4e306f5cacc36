// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Path commands and point references.
//!
//! A glyph outline is an ordered list of `PathCommand`s, the same command
//! set an SVG `d` attribute or a 2D canvas uses. Selection and hit testing
//! address individual coordinates through `PointRef`: the index of the
//! command plus the role of the point inside it. Index-based references
//! stay valid as long as the command list is not restructured, which is
//! all the editor ever needs within a single gesture.

use kurbo::Point;

/// A single drawing instruction in a glyph outline.
///
/// Curve commands carry their control points alongside the end anchor.
/// `ClosePath` carries no coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Cubic bezier segment: two controls, then the end anchor
    CurveTo { c1: Point, c2: Point, to: Point },
    /// Quadratic bezier segment: one control, then the end anchor
    QuadTo { c: Point, to: Point },
    /// Close the current subpath
    ClosePath,
}

/// Which point inside a command a reference addresses.
///
/// `ControlA` is the first control of a curve (the only control of a
/// quadratic); `ControlB` is the second control of a cubic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointRole {
    Anchor,
    ControlA,
    ControlB,
}

/// A reference to one point in a command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointRef {
    /// Index of the command in the path
    pub index: usize,
    /// Which point inside that command
    pub role: PointRole,
}

impl PointRef {
    /// Reference to the anchor of the command at `index`
    pub fn anchor(index: usize) -> Self {
        Self {
            index,
            role: PointRole::Anchor,
        }
    }

    /// Reference to the first control of the command at `index`
    pub fn control_a(index: usize) -> Self {
        Self {
            index,
            role: PointRole::ControlA,
        }
    }

    /// Reference to the second control of the command at `index`
    pub fn control_b(index: usize) -> Self {
        Self {
            index,
            role: PointRole::ControlB,
        }
    }
}

impl PathCommand {
    /// The on-curve anchor this command ends at, if it has one
    pub fn anchor(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CurveTo { to, .. } | PathCommand::QuadTo { to, .. } => Some(*to),
            PathCommand::ClosePath => None,
        }
    }

    /// Get the point for a role, if the command carries one
    pub fn point(&self, role: PointRole) -> Option<Point> {
        match (self, role) {
            (PathCommand::MoveTo(p), PointRole::Anchor) => Some(*p),
            (PathCommand::LineTo(p), PointRole::Anchor) => Some(*p),
            (PathCommand::CurveTo { to, .. }, PointRole::Anchor) => Some(*to),
            (PathCommand::CurveTo { c1, .. }, PointRole::ControlA) => Some(*c1),
            (PathCommand::CurveTo { c2, .. }, PointRole::ControlB) => Some(*c2),
            (PathCommand::QuadTo { to, .. }, PointRole::Anchor) => Some(*to),
            (PathCommand::QuadTo { c, .. }, PointRole::ControlA) => Some(*c),
            _ => None,
        }
    }

    /// Set the point for a role. Returns false if the command has no
    /// point in that role (the command is left untouched).
    pub fn set_point(&mut self, role: PointRole, value: Point) -> bool {
        match (self, role) {
            (PathCommand::MoveTo(p), PointRole::Anchor) => *p = value,
            (PathCommand::LineTo(p), PointRole::Anchor) => *p = value,
            (PathCommand::CurveTo { to, .. }, PointRole::Anchor) => *to = value,
            (PathCommand::CurveTo { c1, .. }, PointRole::ControlA) => *c1 = value,
            (PathCommand::CurveTo { c2, .. }, PointRole::ControlB) => *c2 = value,
            (PathCommand::QuadTo { to, .. }, PointRole::Anchor) => *to = value,
            (PathCommand::QuadTo { c, .. }, PointRole::ControlA) => *c = value,
            _ => return false,
        }
        true
    }

    /// The roles this command carries points for, in hit-test priority
    /// order: anchor first, then controls.
    pub fn roles(&self) -> &'static [PointRole] {
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => &[PointRole::Anchor],
            PathCommand::CurveTo { .. } => {
                &[PointRole::Anchor, PointRole::ControlA, PointRole::ControlB]
            }
            PathCommand::QuadTo { .. } => &[PointRole::Anchor, PointRole::ControlA],
            PathCommand::ClosePath => &[],
        }
    }
}
