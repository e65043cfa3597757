//! Bold / italic toggles on the primary selection

use crate::commands::Cmd;
use crate::editable::{EditOutcome, TextRange, TextSurface};
use crate::messages::StyleMsg;
use crate::model::EditorModel;
use crate::style::StyleBit;

/// Handle style messages
pub fn update_style<S: TextSurface>(model: &mut EditorModel<S>, msg: StyleMsg) -> Option<Cmd> {
    let bit = match msg {
        StyleMsg::ToggleBold => StyleBit::BOLD,
        StyleMsg::ToggleItalic => StyleBit::ITALIC,
    };

    match model.editor.toggle_style(bit) {
        EditOutcome::Applied => {
            if !model.config.reselect_after_style {
                let cursors = model.cursors();
                let collapsed = cursors.with_primary(TextRange::caret(cursors.primary().end()));
                model.editor.set_cursors(collapsed);
            }
            Some(Cmd::Redraw)
        }
        EditOutcome::Delegated | EditOutcome::Unchanged => None,
    }
}
