//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to do after an update.

/// Follow-up work for the host after an update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Text changed: redraw the text view (cursors included)
    Redraw,
    /// Only cursor/selection state changed: redraw the cursor overlay
    RedrawSelections,
}

impl Cmd {
    /// Check if this command requires any redraw
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Cmd::None)
    }

    /// Check if the text itself changed
    pub fn text_changed(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
