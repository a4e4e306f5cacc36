// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - the glyph model and all editing state for one glyph.
//!
//! The session owns the original outline (immutable snapshot of the
//! loaded/generated glyph), the working path derived from it, the
//! current transform params, and the undo history. Everything else it
//! holds is transient view state: selection, hover, camera, and the
//! in-progress drag. Interaction code mutates the model only through
//! the session; nothing keeps an independent copy.
//!
//! Mutating methods return a changed flag so the caller can decide to
//! repaint; there is no ambient "model changed" event bus.

mod point_editing;
mod pointer;

use kurbo::Point;

use super::history::{History, Snapshot};
use super::hit_test;
use super::selection::Selection;
use super::viewport::ViewPort;
use crate::path::{GlyphPath, PointRef};
use crate::randomize;
use crate::settings;
use crate::transform::{self, TransformParams};

/// In-progress pointer gesture
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// Panning the camera; `last` is the previous screen position
    Canvas { last: Point },
    /// Dragging a grabbed point (and the rest of the selection with it)
    Point { grabbed: PointRef, moved: bool },
}

/// Editing session for a single glyph
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The character this glyph was generated for
    pub character: char,

    /// Immutable snapshot of the loaded/generated outline
    original_path: GlyphPath,

    /// Working geometry: transform of the original plus any manual
    /// point edits applied after the last transform
    pub path: GlyphPath,

    /// Current transform params
    params: TransformParams,

    /// Undo/redo stacks over (path, params)
    history: History,

    /// Currently selected points (transient, never snapshotted)
    pub selection: Selection,

    /// Point under the pointer, for visual feedback only
    pub hover: Option<PointRef>,

    /// Camera transformation
    pub viewport: ViewPort,

    /// Snap dragged points to the design grid
    pub grid_snap: bool,

    /// Mirror the opposite handle when dragging a control point
    pub collinear_lock: bool,

    /// In-progress pointer gesture, if any
    drag: Option<DragState>,
}

impl EditSession {
    /// Create a session for a freshly generated outline.
    ///
    /// The outline becomes both the original and the working path, and
    /// the history baseline is committed immediately.
    pub fn new(character: char, outline: GlyphPath) -> Self {
        let params = TransformParams::default();
        let path = outline.clone();
        let mut history = History::new();
        history.commit(Snapshot::new(path.clone(), params));

        Self {
            character,
            original_path: outline,
            path,
            params,
            history,
            selection: Selection::new(),
            hover: None,
            viewport: ViewPort::new(),
            grid_snap: false,
            collinear_lock: false,
            drag: None,
        }
    }

    /// The immutable original outline
    pub fn original_path(&self) -> &GlyphPath {
        &self.original_path
    }

    /// Current transform params
    pub fn params(&self) -> TransformParams {
        self.params
    }

    /// Number of undo snapshots currently held
    pub fn history_len(&self) -> usize {
        self.history.past_len()
    }

    /// Whether undo would restore something
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would restore something
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the glyph after a regenerate (new character or font).
    ///
    /// The working path is re-derived from the new original with the
    /// current params; prior undo history belongs to the old glyph and
    /// is discarded, the derived state becoming the new baseline.
    pub fn reset_glyph(&mut self, character: char, outline: GlyphPath) {
        tracing::info!("resetting session to glyph '{}'", character);
        self.character = character;
        self.path = transform::apply_params(&outline, &self.params);
        self.original_path = outline;
        self.history
            .reset(Snapshot::new(self.path.clone(), self.params));
        self.selection.clear();
        self.hover = None;
        self.drag = None;
    }

    /// Apply new transform params.
    ///
    /// The working path is recomputed from the original (transforms
    /// never compound) and the result is committed. Manual point edits
    /// made since the previous transform are superseded. Returns false
    /// when the clamped params equal the current ones.
    pub fn set_params(&mut self, params: TransformParams) -> bool {
        let params = params.clamped();
        if params == self.params {
            return false;
        }
        self.params = params;
        self.path = transform::apply_params(&self.original_path, &self.params);
        self.commit();
        true
    }

    /// Perturb every point of the working path with a seeded generator
    /// and commit the result. Reproducible: the same seed on the same
    /// starting path yields identical coordinates.
    pub fn randomize(&mut self, seed: u64) {
        tracing::debug!("randomize with seed {}", seed);
        randomize::perturb(&mut self.path, seed);
        self.commit();
    }

    /// Step back one snapshot. No-op at the baseline.
    ///
    /// Selection and hover are cleared on any history navigation: the
    /// restored path may not contain the referenced points.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.path = snapshot.path.clone();
                self.params = snapshot.params;
                self.selection.clear();
                self.hover = None;
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. No-op when nothing was undone.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.path = snapshot.path.clone();
                self.params = snapshot.params;
                self.selection.clear();
                self.hover = None;
                true
            }
            None => false,
        }
    }

    /// Hit test for a point at screen coordinates.
    ///
    /// The fixed pixel radius is converted to design units through the
    /// current camera zoom.
    pub fn hit_test_point(&self, screen_pos: Point) -> Option<PointRef> {
        let design_pos = self.viewport.screen_to_design(screen_pos);
        let max_dist = settings::editor::HIT_RADIUS / self.viewport.zoom;
        hit_test::find_point(&self.path, design_pos, max_dist).map(|hit| hit.point_ref)
    }

    /// Commit the current (path, params) to history
    pub(crate) fn commit(&mut self) {
        self.history
            .commit(Snapshot::new(self.path.clone(), self.params));
    }
}
