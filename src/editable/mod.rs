//! Multi-cursor text editing over a host-provided text surface.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextRange`] / [`Offset`]: carets and selections in UTF-16 code units
//! - [`TextSurface`]: buffer + selection + transaction capability a host implements
//! - [`RopeSurface`]: in-process surface backed by `ropey::Rope`
//! - [`CursorSet`]: primary range plus additional ranges, as an immutable value
//! - [`MultiCursorEditor`]: fans insert / backward-delete out over a `CursorSet`
//!
//! # Example
//!
//! ```
//! use quill::editable::{CursorSet, MultiCursorEditor, RopeSurface, TextRange};
//!
//! let mut editor = MultiCursorEditor::new(RopeSurface::from_text("a b c"));
//! editor.set_cursors(CursorSet::with_primary_range(TextRange::caret(1)).add_cursor(3));
//! editor.insert("!");
//!
//! assert_eq!(editor.surface().content(), "a! b! c");
//! ```

mod cursor_set;
mod multi_cursor;
mod range;
mod surface;

// Re-export main types
pub use cursor_set::CursorSet;
pub use multi_cursor::{EditOutcome, MultiCursorEditor};
pub use range::{Offset, TextRange};
pub use surface::{utf16_len, RopeSurface, TextSurface};
