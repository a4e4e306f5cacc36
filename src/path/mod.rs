// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction for glyph outlines - the editable representation.
//!
//! `GlyphPath` owns an ordered sequence of `PathCommand`s; the order is
//! draw order and is semantically load-bearing, since the even-odd fill
//! rule derives counters (the hole in an "O") from overlap parity.
//! Renderers consume the path through `to_bezpath()`; everything else in
//! the editor addresses points through `PointRef`.

pub mod command;

pub use command::{PathCommand, PointRef, PointRole};

use kurbo::{BezPath, Point, Rect, Vec2};

/// An editable glyph outline: an ordered sequence of path commands.
///
/// Cloning is a structural copy of the command list; history snapshots
/// rely on this, so the type must never grow interior sharing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    commands: Vec<PathCommand>,
}

impl GlyphPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the path has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in draw order
    pub fn iter(&self) -> impl Iterator<Item = &PathCommand> {
        self.commands.iter()
    }

    /// The command at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&PathCommand> {
        self.commands.get(index)
    }

    /// Append a command
    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    /// Raw command slice, for serializers and renderers
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Mutable access to the command list
    pub fn commands_mut(&mut self) -> &mut [PathCommand] {
        &mut self.commands
    }

    /// Look up the point a reference addresses
    pub fn point(&self, point_ref: PointRef) -> Option<Point> {
        self.commands
            .get(point_ref.index)
            .and_then(|cmd| cmd.point(point_ref.role))
    }

    /// Set the point a reference addresses. Returns false if the
    /// reference does not resolve.
    pub fn set_point(&mut self, point_ref: PointRef, value: Point) -> bool {
        match self.commands.get_mut(point_ref.index) {
            Some(cmd) => cmd.set_point(point_ref.role, value),
            None => false,
        }
    }

    /// Translate the point a reference addresses by a delta
    pub fn translate_point(&mut self, point_ref: PointRef, delta: Vec2) -> bool {
        match self.point(point_ref) {
            Some(p) => self.set_point(point_ref, p + delta),
            None => false,
        }
    }

    /// Apply a function to every coordinate in the path, anchors and
    /// controls alike. Traversal is command index order, controls before
    /// the anchor within a command.
    pub fn for_each_point(&mut self, mut f: impl FnMut(&mut Point)) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => f(p),
                PathCommand::CurveTo { c1, c2, to } => {
                    f(c1);
                    f(c2);
                    f(to);
                }
                PathCommand::QuadTo { c, to } => {
                    f(c);
                    f(to);
                }
                PathCommand::ClosePath => {}
            }
        }
    }

    /// Axis-aligned bounding box enclosing every anchor and control
    /// point. Control points count toward the box, matching typical
    /// path-bounds conventions. An empty path yields a zero-area box at
    /// the origin.
    pub fn bounding_box(&self) -> Rect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for cmd in &self.commands {
            for role in cmd.roles() {
                if let Some(p) = cmd.point(*role) {
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
            }
        }

        if min_x.is_finite() {
            Rect::new(min_x, min_y, max_x, max_y)
        } else {
            Rect::ZERO
        }
    }

    /// Convert this path to a kurbo BezPath for rendering.
    ///
    /// Renderers paint the result with the even-odd fill rule.
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => bez.move_to(p),
                PathCommand::LineTo(p) => bez.line_to(p),
                PathCommand::CurveTo { c1, c2, to } => bez.curve_to(c1, c2, to),
                PathCommand::QuadTo { c, to } => bez.quad_to(c, to),
                PathCommand::ClosePath => bez.close_path(),
            }
        }
        bez
    }
}

impl From<Vec<PathCommand>> for GlyphPath {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<PathCommand> for GlyphPath {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
