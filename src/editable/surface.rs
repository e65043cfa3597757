//! The text surface capability the editing core writes through.
//!
//! A host (platform text view, terminal widget, test harness) implements
//! [`TextSurface`] to expose its buffer, its primary selection and a scoped
//! edit transaction. [`RopeSurface`] is the in-process implementation used by
//! the CLI, the tests and the benches.

use ropey::Rope;

use super::range::{Offset, TextRange};

/// Buffer, selection and transaction capabilities of a host text view.
///
/// All offsets and lengths are UTF-16 code units.
pub trait TextSurface {
    /// Total length in UTF-16 code units
    fn len_utf16(&self) -> usize;

    /// Text covered by `range` (clamped to the buffer)
    fn text_in(&self, range: TextRange) -> String;

    /// Replace `range` with `text`. A caret range is a pure insertion.
    fn replace_characters(&mut self, range: TextRange, text: &str);

    /// Width in code units of the character ending at `offset` (0 at the start)
    fn unit_len_before(&self, offset: Offset) -> usize;

    /// Nearest character boundary at or before `offset`, clamped to the
    /// buffer. An offset between the two halves of a surrogate pair moves to
    /// the start of the pair.
    fn floor_boundary(&self, offset: Offset) -> Offset;

    /// Open an edit transaction; change notification is deferred until the
    /// matching [`TextSurface::end_editing`]. Transactions may nest.
    fn begin_editing(&mut self);

    /// Close an edit transaction
    fn end_editing(&mut self);

    /// The host's current primary selection
    fn primary_selection(&self) -> TextRange;

    /// Move the host's primary selection
    fn set_primary_selection(&mut self, range: TextRange);

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_utf16() == 0
    }

    /// `range` clamped to the buffer with both ends on character boundaries
    fn snap(&self, range: TextRange) -> TextRange {
        let start = self.floor_boundary(range.location);
        let end = self.floor_boundary(range.end());
        TextRange::new(start, end - start)
    }

    /// Run `edit` inside a begin/end pair so the host sees one change
    fn transaction<R>(&mut self, edit: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.begin_editing();
        let result = edit(self);
        self.end_editing();
        result
    }

    /// Default single-caret typing: replace the primary selection with `text`
    /// and leave a caret after it.
    fn insert_at_selection(&mut self, text: &str) {
        let range = self.snap(self.primary_selection());
        self.begin_editing();
        self.replace_characters(range, text);
        self.end_editing();
        self.set_primary_selection(TextRange::caret(range.location + utf16_len(text)));
    }

    /// Default single-caret backspace: delete the selection, or the character
    /// before the caret. A caret at offset 0 does nothing.
    fn delete_backward_at_selection(&mut self) {
        let range = self.snap(self.primary_selection());
        let target = if range.is_caret() {
            let width = self.unit_len_before(range.location);
            if width == 0 {
                return;
            }
            TextRange::new(range.location - width, width)
        } else {
            range
        };

        self.begin_editing();
        self.replace_characters(target, "");
        self.end_editing();
        self.set_primary_selection(TextRange::caret(target.location));
    }
}

/// Length of `text` in UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

// =============================================================================
// RopeSurface - in-process surface backed by ropey::Rope
// =============================================================================

/// [`TextSurface`] over a `ropey::Rope`, translating UTF-16 offsets to char
/// indices. Counts change notifications so callers can observe transaction
/// coalescing.
#[derive(Debug, Clone, Default)]
pub struct RopeSurface {
    rope: Rope,
    selection: TextRange,
    edit_depth: usize,
    pending_change: bool,
    change_notifications: usize,
}

impl RopeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RopeSurface from a string slice, caret at the start
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            ..Self::default()
        }
    }

    /// Full content as String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Number of change notifications delivered so far
    pub fn change_notifications(&self) -> usize {
        self.change_notifications
    }

    /// True while inside an edit transaction
    pub fn is_editing(&self) -> bool {
        self.edit_depth > 0
    }

    /// UTF-16 offset to char index. Offsets inside a surrogate pair round down.
    fn to_char_idx(&self, offset: Offset) -> usize {
        let clamped = offset.min(self.rope.len_utf16_cu());
        self.rope.utf16_cu_to_char(clamped)
    }

    fn note_change(&mut self) {
        if self.edit_depth > 0 {
            self.pending_change = true;
        } else {
            self.change_notifications += 1;
        }
    }
}

impl TextSurface for RopeSurface {
    fn len_utf16(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    fn text_in(&self, range: TextRange) -> String {
        let start = self.to_char_idx(range.location);
        let end = self.to_char_idx(range.end());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn replace_characters(&mut self, range: TextRange, text: &str) {
        let start = self.to_char_idx(range.location);
        let end = self.to_char_idx(range.end());
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        if start < end || !text.is_empty() {
            self.note_change();
        }
    }

    fn unit_len_before(&self, offset: Offset) -> usize {
        let offset = offset.min(self.len_utf16());
        if offset == 0 {
            return 0;
        }
        let char_idx = self.rope.utf16_cu_to_char(offset);
        let char_start = self.rope.char_to_utf16_cu(char_idx);
        if char_start < offset {
            // offset splits a surrogate pair
            return offset - char_start;
        }
        self.rope.char(char_idx - 1).len_utf16()
    }

    fn floor_boundary(&self, offset: Offset) -> Offset {
        self.rope.char_to_utf16_cu(self.to_char_idx(offset))
    }

    fn begin_editing(&mut self) {
        self.edit_depth += 1;
    }

    fn end_editing(&mut self) {
        if self.edit_depth == 0 {
            tracing::warn!("end_editing called without matching begin_editing");
            return;
        }
        self.edit_depth -= 1;
        if self.edit_depth == 0 && self.pending_change {
            self.pending_change = false;
            self.change_notifications += 1;
            tracing::trace!(
                notifications = self.change_notifications,
                "surface change committed"
            );
        }
    }

    fn primary_selection(&self) -> TextRange {
        self.selection
    }

    fn set_primary_selection(&mut self, range: TextRange) {
        self.selection = range.clamped_to(self.len_utf16());
    }
}
