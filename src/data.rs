// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`).
//!
//! `AppState` owns the loaded font source and the active edit session
//! and is passed explicitly to whatever needs it; there are no global
//! singletons. Font loading is the one asynchronous boundary in the
//! original tool; here the shell calls `load_font` when the bytes
//! arrive, and a completed load supersedes any in-progress edit by
//! regenerating the glyph.

use crate::editing::EditSession;
use crate::font::{self, FontSource};
use crate::settings;

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The loaded font, if any
    pub font: Option<FontSource>,

    /// The active edit session
    pub session: EditSession,

    /// Error message to display, if any
    pub error_message: Option<String>,
}

impl AppState {
    /// Create a state with no font loaded.
    ///
    /// The session starts on the built-in placeholder outline so the
    /// editor always has something to render.
    pub fn new(character: char) -> Self {
        Self {
            font: None,
            session: EditSession::new(character, font::fallback_glyph()),
            error_message: None,
        }
    }

    /// Install a font from raw bytes and regenerate the current glyph.
    ///
    /// On a parse failure the previous font (or the fallback glyph)
    /// stays active and the error is surfaced to the user; the session
    /// is never torn down. Returns whether the model changed.
    pub fn load_font(&mut self, data: Vec<u8>) -> bool {
        match FontSource::from_bytes(data) {
            Ok(source) => {
                tracing::info!("font loaded ({:?})", source);
                self.font = Some(source);
                self.error_message = None;
                self.regenerate()
            }
            Err(err) => {
                tracing::warn!("font load failed: {}", err);
                self.error_message = Some(err.to_string());
                false
            }
        }
    }

    /// Generate the glyph for a character.
    ///
    /// Empty input is ignored (the last glyph is kept). A character the
    /// font has no outline for falls back to the placeholder. Returns
    /// whether the model changed.
    pub fn generate(&mut self, input: Option<char>) -> bool {
        let Some(character) = input else {
            tracing::debug!("empty character input ignored");
            return false;
        };

        let outline = self
            .font
            .as_ref()
            .and_then(|f| f.glyph_path(character, settings::glyph::SIZE_PX))
            .unwrap_or_else(|| {
                tracing::debug!("no outline for '{}', using fallback", character);
                font::fallback_glyph()
            });

        self.session.reset_glyph(character, outline);
        true
    }

    /// Regenerate the current character (after a font change)
    pub fn regenerate(&mut self) -> bool {
        self.generate(Some(self.session.character))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformParams;

    #[test]
    fn new_state_uses_fallback_glyph() {
        let state = AppState::new('A');
        assert_eq!(state.session.path, font::fallback_glyph());
        assert!(state.font.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn bad_font_bytes_keep_session_intact() {
        let mut state = AppState::new('A');
        state.session.set_params(TransformParams {
            width: 2.0,
            ..Default::default()
        });
        let path_before = state.session.path.clone();

        let changed = state.load_font(vec![1, 2, 3]);
        assert!(!changed);
        assert!(state.error_message.is_some());
        assert!(state.font.is_none());
        assert_eq!(state.session.path, path_before);
        // History survives too
        assert!(state.session.can_undo());
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut state = AppState::new('A');
        state.session.set_params(TransformParams {
            width: 2.0,
            ..Default::default()
        });

        assert!(!state.generate(None));
        assert_eq!(state.session.character, 'A');
        assert!(state.session.can_undo());
    }

    #[test]
    fn generate_without_font_falls_back_and_resets_history() {
        let mut state = AppState::new('A');
        state.session.set_params(TransformParams {
            width: 2.0,
            ..Default::default()
        });
        assert!(state.session.can_undo());

        assert!(state.generate(Some('B')));
        assert_eq!(state.session.character, 'B');
        assert!(!state.session.can_undo());
        assert!(!state.session.can_redo());
        // Params persist across regeneration
        assert_eq!(state.session.params().width, 2.0);
    }
}
