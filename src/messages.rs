//! Message types for the Elm-style architecture
//!
//! Host events (keystrokes, clicks, toolbar buttons) are classified upstream
//! and arrive here as messages. All state changes flow through these types.

use crate::editable::Offset;

/// Cursor and selection gestures, already resolved to text offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorMsg {
    /// Plain click: leave multi-cursor mode and put the caret at the offset
    Click(Offset),
    /// Plain drag / shift-click: select between two offsets, single cursor
    SelectRange { from: Offset, to: Offset },
    /// Secondary click: add a caret
    AddCursor(Offset),
    /// Secondary click + extend: add a selection from the most recent cursor
    AddSelection(Offset),
    /// Escape: drop additional cursors
    Cancel,
}

/// Raw text edits, fanned out when multiple cursors are active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Insert a single character (typing)
    InsertChar(char),
    /// Insert a string (paste, IME commit)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
}

/// Unicode style commands on the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMsg {
    /// Cmd+B
    ToggleBold,
    /// Cmd+I
    ToggleItalic,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Cursor(CursorMsg),
    Edit(EditMsg),
    Style(StyleMsg),
}
