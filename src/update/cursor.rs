//! Cursor and selection gestures

use crate::commands::Cmd;
use crate::editable::{CursorSet, TextRange, TextSurface};
use crate::messages::CursorMsg;
use crate::model::EditorModel;

/// Handle cursor messages (clicks, added cursors, escape)
pub fn update_cursor<S: TextSurface>(model: &mut EditorModel<S>, msg: CursorMsg) -> Option<Cmd> {
    let before = model.cursors().clone();

    match msg {
        CursorMsg::Click(offset) => {
            model
                .editor
                .set_cursors(CursorSet::with_primary_range(TextRange::caret(offset)));
        }
        CursorMsg::SelectRange { from, to } => {
            model
                .editor
                .set_cursors(CursorSet::with_primary_range(TextRange::between(from, to)));
        }
        CursorMsg::AddCursor(offset) => {
            if !model.config.multi_cursor {
                tracing::debug!(offset, "multi-cursor disabled, ignoring add cursor");
                return None;
            }
            model.editor.add_cursor(offset);
        }
        CursorMsg::AddSelection(to) => {
            if !model.config.multi_cursor {
                tracing::debug!(to, "multi-cursor disabled, ignoring add selection");
                return None;
            }
            model.editor.add_selection(to);
        }
        CursorMsg::Cancel => {
            // Nothing to clear: let the host handle escape
            if !model.editor.has_multiple_cursors() {
                return None;
            }
            model.editor.clear_additional();
        }
    }

    (*model.cursors() != before).then_some(Cmd::RedrawSelections)
}
