// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod history;
pub mod mouse;
pub mod selection;
pub mod session;
pub mod viewport;

pub use history::{History, Snapshot};
pub use mouse::{Modifiers, MouseButton, MouseEvent};
pub use selection::Selection;
pub use session::EditSession;
pub use viewport::ViewPort;
