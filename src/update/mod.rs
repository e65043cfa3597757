//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod cursor;
mod edit;
mod style;

use crate::commands::Cmd;
use crate::editable::TextSurface;
use crate::messages::Msg;
use crate::model::EditorModel;

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use cursor::update_cursor;
pub use edit::update_edit;
pub use style::update_style;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<S: TextSurface>(model: &mut EditorModel<S>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<S: TextSurface>(model: &mut EditorModel<S>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Cursor(m) => cursor::update_cursor(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Style(m) => style::update_style(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced<S: TextSurface>(model: &mut EditorModel<S>, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = CursorSnapshot::from_cursors(model.cursors());
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = CursorSnapshot::from_cursors(model.cursors());
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }
    model.cursors().assert_invariants();

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Cursor(m) => format!("Cursor::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Style(m) => format!("Style::{:?}", m),
    }
}
