// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handling for EditSession - press, drag, release, hover.
//!
//! All handlers take explicit `MouseEvent`s in editor-local screen
//! coordinates and return whether anything changed that a caller would
//! want to repaint.

use kurbo::Vec2;

use super::{DragState, EditSession};
use crate::editing::mouse::MouseEvent;

impl EditSession {
    /// Handle a pointer press.
    ///
    /// A hit enters point-drag mode and updates the selection by the
    /// modifier rules; a miss clears the selection and enters
    /// canvas-pan mode.
    pub fn mouse_down(&mut self, event: &MouseEvent) -> bool {
        match self.hit_test_point(event.pos) {
            Some(hit) => {
                tracing::debug!("press hit {:?}", hit);
                if event.mods.multi_select() {
                    self.selection.toggle(hit);
                } else if !self.selection.contains(&hit) {
                    // Plain click on an unselected point replaces the
                    // selection; a click on an already-selected point
                    // keeps the existing multi-selection for the drag.
                    self.selection.select_only(hit);
                }
                self.drag = Some(DragState::Point {
                    grabbed: hit,
                    moved: false,
                });
            }
            None => {
                self.selection.clear();
                self.drag = Some(DragState::Canvas { last: event.pos });
            }
        }
        true
    }

    /// Handle a pointer move.
    ///
    /// Dispatches to the active gesture; outside a gesture it only
    /// refreshes the hover feedback.
    pub fn mouse_moved(&mut self, event: &MouseEvent) -> bool {
        match self.drag {
            Some(DragState::Canvas { last }) => {
                let delta = event.pos - last;
                self.viewport.pan(delta);
                self.drag = Some(DragState::Canvas { last: event.pos });
                delta != Vec2::ZERO
            }
            Some(DragState::Point { grabbed, .. }) => {
                let did_move = self.drag_point_to(grabbed, event.pos);
                if did_move {
                    self.drag = Some(DragState::Point {
                        grabbed,
                        moved: true,
                    });
                }
                did_move
            }
            None => self.update_hover(event),
        }
    }

    /// Handle a pointer release.
    ///
    /// A completed point drag commits one history snapshot; a canvas
    /// pan commits nothing.
    pub fn mouse_up(&mut self, _event: &MouseEvent) -> bool {
        match self.drag.take() {
            Some(DragState::Point { moved: true, .. }) => {
                tracing::debug!("point drag committed");
                self.commit();
                true
            }
            Some(_) => false,
            None => false,
        }
    }

    /// Cancel any in-progress gesture without committing
    pub fn cancel_gesture(&mut self) {
        self.drag = None;
    }

    /// Refresh hover feedback. Returns whether the hovered point
    /// changed. Never mutates the model.
    pub fn update_hover(&mut self, event: &MouseEvent) -> bool {
        let hit = self.hit_test_point(event.pos);
        if hit != self.hover {
            self.hover = hit;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::mouse::{Modifiers, MouseButton};
    use crate::path::{GlyphPath, PathCommand, PointRef};
    use kurbo::Point;

    fn triangle() -> GlyphPath {
        GlyphPath::from(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(40.0, 120.0)),
            PathCommand::LineTo(Point::new(80.0, 0.0)),
            PathCommand::ClosePath,
        ])
    }

    fn press(pos: Point) -> MouseEvent {
        MouseEvent::new(pos, Some(MouseButton::Left))
    }

    fn press_multi(pos: Point) -> MouseEvent {
        MouseEvent::with_modifiers(
            pos,
            Some(MouseButton::Left),
            Modifiers {
                shift: true,
                ..Default::default()
            },
        )
    }

    fn moved(pos: Point) -> MouseEvent {
        MouseEvent::new(pos, None)
    }

    #[test]
    fn click_selects_single_point() {
        let mut session = EditSession::new('A', triangle());
        session.mouse_down(&press(Point::new(40.0, 120.0)));
        assert_eq!(session.selection.len(), 1);
        assert!(session.selection.contains(&PointRef::anchor(1)));
        session.mouse_up(&press(Point::new(40.0, 120.0)));
    }

    #[test]
    fn multi_select_modifier_toggles_membership() {
        let mut session = EditSession::new('A', triangle());
        session.mouse_down(&press_multi(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        session.mouse_down(&press_multi(Point::new(40.0, 120.0)));
        session.mouse_up(&moved(Point::new(40.0, 120.0)));
        assert_eq!(session.selection.len(), 2);

        // Toggling an already-selected point removes it
        session.mouse_down(&press_multi(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        assert_eq!(session.selection.len(), 1);
        assert!(session.selection.contains(&PointRef::anchor(1)));
    }

    #[test]
    fn plain_click_on_selected_point_keeps_multi_selection() {
        let mut session = EditSession::new('A', triangle());
        session.mouse_down(&press_multi(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        session.mouse_down(&press_multi(Point::new(40.0, 120.0)));
        session.mouse_up(&moved(Point::new(40.0, 120.0)));

        // Plain press on a member of the selection preserves it
        session.mouse_down(&press(Point::new(0.0, 0.0)));
        assert_eq!(session.selection.len(), 2);
    }

    #[test]
    fn miss_clears_selection_and_pans() {
        let mut session = EditSession::new('A', triangle());
        session.mouse_down(&press(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        assert_eq!(session.selection.len(), 1);

        session.mouse_down(&press(Point::new(300.0, 300.0)));
        assert!(session.selection.is_empty());

        session.mouse_moved(&moved(Point::new(310.0, 295.0)));
        assert_eq!(session.viewport.offset, Vec2::new(10.0, -5.0));

        // Pans never commit history
        let before = session.history_len();
        session.mouse_up(&moved(Point::new(310.0, 295.0)));
        assert_eq!(session.history_len(), before);
    }

    #[test]
    fn completed_point_drag_commits_once() {
        let mut session = EditSession::new('A', triangle());
        let before = session.history_len();

        session.mouse_down(&press(Point::new(40.0, 120.0)));
        session.mouse_moved(&moved(Point::new(45.0, 118.0)));
        session.mouse_moved(&moved(Point::new(52.0, 114.0)));
        session.mouse_up(&moved(Point::new(52.0, 114.0)));

        assert_eq!(session.history_len(), before + 1);
        assert_eq!(
            session.path.point(PointRef::anchor(1)),
            Some(Point::new(52.0, 114.0))
        );
    }

    #[test]
    fn stationary_click_commits_nothing() {
        let mut session = EditSession::new('A', triangle());
        let before = session.history_len();
        session.mouse_down(&press(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        assert_eq!(session.history_len(), before);
    }

    #[test]
    fn group_drag_moves_all_selected() {
        let mut session = EditSession::new('A', triangle());
        session.mouse_down(&press_multi(Point::new(0.0, 0.0)));
        session.mouse_up(&moved(Point::new(0.0, 0.0)));
        session.mouse_down(&press_multi(Point::new(80.0, 0.0)));
        session.mouse_up(&moved(Point::new(80.0, 0.0)));

        session.mouse_down(&press(Point::new(80.0, 0.0)));
        session.mouse_moved(&moved(Point::new(90.0, 10.0)));
        session.mouse_up(&moved(Point::new(90.0, 10.0)));

        assert_eq!(
            session.path.point(PointRef::anchor(0)),
            Some(Point::new(10.0, 10.0))
        );
        assert_eq!(
            session.path.point(PointRef::anchor(2)),
            Some(Point::new(90.0, 10.0))
        );
        // Unselected point untouched
        assert_eq!(
            session.path.point(PointRef::anchor(1)),
            Some(Point::new(40.0, 120.0))
        );
    }

    #[test]
    fn grid_snap_rounds_drag_target() {
        let mut session = EditSession::new('A', triangle());
        session.grid_snap = true;

        session.mouse_down(&press(Point::new(40.0, 120.0)));
        session.mouse_moved(&moved(Point::new(43.0, 117.0)));
        session.mouse_up(&moved(Point::new(43.0, 117.0)));

        assert_eq!(
            session.path.point(PointRef::anchor(1)),
            Some(Point::new(40.0, 120.0))
        );

        session.mouse_down(&press(Point::new(40.0, 120.0)));
        session.mouse_moved(&moved(Point::new(47.0, 113.0)));
        session.mouse_up(&moved(Point::new(47.0, 113.0)));

        assert_eq!(
            session.path.point(PointRef::anchor(1)),
            Some(Point::new(50.0, 110.0))
        );
    }

    #[test]
    fn cancelled_gesture_commits_nothing() {
        let mut session = EditSession::new('A', triangle());
        let before = session.history_len();

        session.mouse_down(&press(Point::new(40.0, 120.0)));
        session.mouse_moved(&moved(Point::new(50.0, 110.0)));
        session.cancel_gesture();
        session.mouse_up(&moved(Point::new(50.0, 110.0)));

        assert_eq!(session.history_len(), before);
    }

    #[test]
    fn hover_tracks_without_mutating() {
        let mut session = EditSession::new('A', triangle());
        let before = session.path.clone();

        assert!(session.mouse_moved(&moved(Point::new(1.0, 1.0))));
        assert_eq!(session.hover, Some(PointRef::anchor(0)));

        // Unchanged hover reports no change
        assert!(!session.mouse_moved(&moved(Point::new(2.0, 0.0))));

        assert!(session.mouse_moved(&moved(Point::new(200.0, 200.0))));
        assert_eq!(session.hover, None);
        assert_eq!(session.path, before);
    }

    #[test]
    fn zoom_scales_hit_radius() {
        let mut session = EditSession::new('A', triangle());
        session.viewport.set_zoom(4.0);
        // Screen position of anchor (40,120) at zoom 4 is (160,480);
        // 6 screen px away is 1.5 design units, inside the 8px radius.
        assert_eq!(
            session.hit_test_point(Point::new(166.0, 480.0)),
            Some(PointRef::anchor(1))
        );
        // 40 screen px away is 10 design units, outside the radius
        assert_eq!(session.hit_test_point(Point::new(200.0, 480.0)), None);
    }
}
