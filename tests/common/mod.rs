//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::editable::{CursorSet, Offset, TextRange};
use quill::model::EditorModel;

/// Create a test model with given text and carets; the first offset is primary
pub fn test_model(text: &str, offsets: &[Offset]) -> EditorModel {
    test_model_with_ranges(text, offsets.iter().map(|o| TextRange::caret(*o)))
}

/// Create a test model with arbitrary ranges; the first range is primary
pub fn test_model_with_ranges(
    text: &str,
    ranges: impl IntoIterator<Item = TextRange>,
) -> EditorModel {
    let mut model = EditorModel::with_text(text);
    model.editor.set_cursors(CursorSet::from_ranges(ranges));
    model
}

/// Caret/selection locations in ascending order
pub fn locations(model: &EditorModel) -> Vec<Offset> {
    model
        .cursors()
        .all_selections()
        .iter()
        .map(|r| r.location)
        .collect()
}

/// Plain ASCII to bold sans-serif, for readable expectations
pub fn bold(text: &str) -> String {
    quill::style::restyle(quill::StyleBit::BOLD, text)
}

/// Plain ASCII to italic sans-serif
pub fn italic(text: &str) -> String {
    quill::style::restyle(quill::StyleBit::ITALIC, text)
}
