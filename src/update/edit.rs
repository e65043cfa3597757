//! Text edit handlers: typing, paste, backspace

use crate::commands::Cmd;
use crate::editable::{EditOutcome, TextSurface};
use crate::messages::EditMsg;
use crate::model::EditorModel;

/// Handle edit messages, fanning out over every cursor in multi-cursor mode
pub fn update_edit<S: TextSurface>(model: &mut EditorModel<S>, msg: EditMsg) -> Option<Cmd> {
    let outcome = match &msg {
        EditMsg::InsertChar(ch) => insert(model, ch.encode_utf8(&mut [0; 4])),
        EditMsg::InsertText(text) => insert(model, text),
        EditMsg::DeleteBackward => delete_backward(model),
    };

    match outcome {
        EditOutcome::Applied => Some(Cmd::Redraw),
        EditOutcome::Delegated | EditOutcome::Unchanged => None,
    }
}

fn insert<S: TextSurface>(model: &mut EditorModel<S>, text: &str) -> EditOutcome {
    if text.is_empty() && !model.editor.has_multiple_cursors() {
        return EditOutcome::Unchanged;
    }
    match model.editor.insert(text) {
        EditOutcome::Delegated => {
            model.editor.surface_mut().insert_at_selection(text);
            model.editor.sync_primary();
            EditOutcome::Applied
        }
        outcome => outcome,
    }
}

fn delete_backward<S: TextSurface>(model: &mut EditorModel<S>) -> EditOutcome {
    match model.editor.delete_backward() {
        EditOutcome::Delegated => {
            let len_before = model.editor.surface().len_utf16();
            model.editor.surface_mut().delete_backward_at_selection();
            model.editor.sync_primary();
            if model.editor.surface().len_utf16() == len_before {
                EditOutcome::Unchanged
            } else {
                EditOutcome::Applied
            }
        }
        outcome => outcome,
    }
}
