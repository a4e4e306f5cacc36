// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Input event types fed to the interaction controller.
//!
//! The controller never polls ambient input state: every pointer event
//! arrives as an explicit `MouseEvent` carrying its position in
//! editor-local screen coordinates, the button involved, and the
//! modifier keys held at the time.

use kurbo::Point;

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether the multi-select modifier is held
    pub fn multi_select(&self) -> bool {
        self.shift
    }
}

/// Mouse button involved in an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in editor-local screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Position in editor-local screen space
    pub pos: Point,
    /// Button for down/up events; None for moves
    pub button: Option<MouseButton>,
    /// Modifier keys held
    pub mods: Modifiers,
}

impl MouseEvent {
    /// Create an event with no modifiers
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self {
            pos,
            button,
            mods: Modifiers::default(),
        }
    }

    /// Create an event with explicit modifiers
    pub fn with_modifiers(pos: Point, button: Option<MouseButton>, mods: Modifiers) -> Self {
        Self { pos, button, mods }
    }
}
