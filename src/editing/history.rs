// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Snapshot-based undo/redo over (path, params) pairs.
//!
//! Two stacks: `past` is bounded (oldest snapshots evicted) and always
//! keeps its first entry as the baseline; undo never pops the baseline
//! away, because there would be nothing left to restore to. `future` is
//! unbounded but cleared on every new commit, so redo history dies the
//! moment the user diverges from it.
//!
//! Snapshots are structural clones of the command list and params, not a
//! serialize/deserialize round trip; restores are handed back to the
//! caller by value rather than broadcast on an event bus.

use std::collections::VecDeque;

use crate::path::GlyphPath;
use crate::settings;
use crate::transform::TransformParams;

/// A committed editor state: working path plus transform params.
///
/// Selection and camera are transient view state and are never
/// snapshotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub path: GlyphPath,
    pub params: TransformParams,
}

impl Snapshot {
    pub fn new(path: GlyphPath, params: TransformParams) -> Self {
        Self { path, params }
    }
}

/// Undo/redo state machine.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
}

impl History {
    /// Create an empty history (no baseline yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed snapshots
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of redoable snapshots
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Whether undo would restore something
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Whether redo would restore something
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Commit a snapshot after a mutation.
    ///
    /// Evicts the oldest snapshot past capacity and clears the redo
    /// stack: committing after an undo forks the timeline.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        if self.past.len() > settings::history::MAX_UNDO_DEPTH {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Drop everything and start over from a new baseline.
    ///
    /// Used when a new glyph is generated: prior history belongs to the
    /// old glyph and is discarded by design.
    pub fn reset(&mut self, baseline: Snapshot) {
        self.past.clear();
        self.future.clear();
        self.past.push_back(baseline);
    }

    /// Step back one snapshot.
    ///
    /// No-op (returns None) at the baseline. Otherwise the current top
    /// moves to the redo stack and the new top is returned for the
    /// caller to restore from.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let top = self.past.pop_back()?;
        self.future.push(top);
        self.past.back()
    }

    /// Step forward one snapshot.
    ///
    /// No-op (returns None) when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.future.pop()?;
        self.past.push_back(snapshot);
        self.past.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use kurbo::Point;

    fn snap(x: f64) -> Snapshot {
        Snapshot::new(
            GlyphPath::from(vec![PathCommand::MoveTo(Point::new(x, 0.0))]),
            TransformParams::default(),
        )
    }

    fn top_x(history: &History) -> f64 {
        history
            .past
            .back()
            .and_then(|s| s.path.get(0).and_then(|c| c.anchor()))
            .map(|p| p.x)
            .unwrap()
    }

    #[test]
    fn commits_accumulate() {
        let mut history = History::new();
        for i in 0..5 {
            history.commit(snap(i as f64));
        }
        assert_eq!(history.past_len(), 5);
        assert_eq!(history.future_len(), 0);
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let mut history = History::new();
        history.commit(snap(0.0));
        history.commit(snap(1.0));
        history.commit(snap(2.0));

        let restored = history.undo().unwrap();
        assert_eq!(restored.path.get(0).unwrap().anchor().unwrap().x, 1.0);
        assert_eq!(history.future_len(), 1);

        let restored = history.redo().unwrap();
        assert_eq!(restored.path.get(0).unwrap().anchor().unwrap().x, 2.0);
        assert_eq!(history.future_len(), 0);
        assert_eq!(history.past_len(), 3);
    }

    #[test]
    fn undo_at_baseline_is_noop() {
        let mut history = History::new();
        history.commit(snap(0.0));
        assert!(history.undo().is_none());
        assert_eq!(history.past_len(), 1);

        // Even from an empty history
        let mut empty = History::new();
        assert!(empty.undo().is_none());
    }

    #[test]
    fn redo_past_tip_is_noop() {
        let mut history = History::new();
        history.commit(snap(0.0));
        assert!(history.redo().is_none());
    }

    #[test]
    fn commit_clears_future() {
        let mut history = History::new();
        history.commit(snap(0.0));
        history.commit(snap(1.0));
        history.undo();
        assert_eq!(history.future_len(), 1);

        history.commit(snap(9.0));
        assert_eq!(history.future_len(), 0);
        assert!(history.redo().is_none());
        assert_eq!(top_x(&history), 9.0);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = History::new();
        for i in 0..(settings::history::MAX_UNDO_DEPTH + 10) {
            history.commit(snap(i as f64));
        }
        assert_eq!(history.past_len(), settings::history::MAX_UNDO_DEPTH);
        // Oldest entries are gone; the front is snapshot 10
        assert_eq!(
            history.past.front().unwrap().path.get(0).unwrap().anchor().unwrap().x,
            10.0
        );
    }

    #[test]
    fn reset_discards_both_stacks() {
        let mut history = History::new();
        history.commit(snap(0.0));
        history.commit(snap(1.0));
        history.undo();

        history.reset(snap(7.0));
        assert_eq!(history.past_len(), 1);
        assert_eq!(history.future_len(), 0);
        assert!(!history.can_undo());
        assert_eq!(top_x(&history), 7.0);
    }
}
