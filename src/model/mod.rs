//! Editor model - the state `update` operates on
//!
//! Following the Elm Architecture, the model is plain data: the editor (text
//! surface plus cursor set) and the user configuration.

use crate::config::EditorConfig;
use crate::editable::{CursorSet, MultiCursorEditor, RopeSurface, TextSurface};

/// The complete editing state for one text view
#[derive(Debug, Clone)]
pub struct EditorModel<S: TextSurface = RopeSurface> {
    /// Surface and cursors
    pub editor: MultiCursorEditor<S>,
    /// User preferences
    pub config: EditorConfig,
}

impl<S: TextSurface> EditorModel<S> {
    pub fn new(surface: S, config: EditorConfig) -> Self {
        Self {
            editor: MultiCursorEditor::new(surface),
            config,
        }
    }

    pub fn surface(&self) -> &S {
        self.editor.surface()
    }

    pub fn cursors(&self) -> &CursorSet {
        self.editor.cursors()
    }
}

impl EditorModel<RopeSurface> {
    /// Model over an in-process rope surface with default config
    pub fn with_text(text: &str) -> Self {
        Self::new(RopeSurface::from_text(text), EditorConfig::default())
    }

    /// Full buffer content
    pub fn text(&self) -> String {
        self.editor.surface().content()
    }
}
