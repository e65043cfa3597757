//! Multi-cursor editing over a [`TextSurface`].
//!
//! Edits are applied to every range in descending location order, so a
//! mutation never shifts a range that still has to be processed. The new
//! carets are then computed in ascending order with a running offset, and the
//! whole fan-out runs inside one surface transaction.

use crate::style::{self, StyleBit};

use super::cursor_set::CursorSet;
use super::range::{Offset, TextRange};
use super::surface::{utf16_len, TextSurface};

/// What an editing call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The surface (and cursors) were changed
    Applied,
    /// Single-cursor mode: the host's default editing should handle it
    Delegated,
    /// Nothing to do (e.g. style toggle without a selection)
    Unchanged,
}

/// Owns a text surface and the cursor set fanned out over it.
#[derive(Debug, Clone)]
pub struct MultiCursorEditor<S: TextSurface> {
    surface: S,
    cursors: CursorSet,
}

impl<S: TextSurface> MultiCursorEditor<S> {
    /// Wrap a surface; the cursor set starts from the surface's selection
    pub fn new(surface: S) -> Self {
        let cursors = CursorSet::with_primary_range(surface.primary_selection());
        Self { surface, cursors }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn cursors(&self) -> &CursorSet {
        &self.cursors
    }

    /// Replace the cursor set; its primary becomes the host selection.
    ///
    /// Every range is clamped and snapped to character boundaries first, so
    /// ranges that collapse onto each other merge.
    pub fn set_cursors(&mut self, cursors: CursorSet) {
        let snapped = CursorSet::from_ranges(
            std::iter::once(cursors.primary())
                .chain(cursors.additional().iter().copied())
                .map(|range| self.surface.snap(range)),
        );
        self.surface.set_primary_selection(snapped.primary());
        self.cursors = snapped.with_primary(self.surface.primary_selection());
        self.cursors.assert_invariants();
    }

    /// Check if edits currently fan out to more than one range
    pub fn has_multiple_cursors(&self) -> bool {
        self.cursors.has_multiple_cursors()
    }

    /// Pick up primary selection changes the host made on its own
    pub fn sync_primary(&mut self) {
        let primary = self.surface.primary_selection();
        if primary != self.cursors.primary() {
            self.cursors = self.cursors.with_primary(primary);
        }
    }

    /// Add a caret at `offset` (clamped and snapped to a character boundary)
    pub fn add_cursor(&mut self, offset: Offset) {
        self.sync_primary();
        let offset = self.surface.floor_boundary(offset);
        self.cursors = self.cursors.add_cursor(offset);
    }

    /// Add a selection from the most recent cursor to `to`
    pub fn add_selection(&mut self, to: Offset) {
        self.sync_primary();
        let to = self.surface.floor_boundary(to);
        self.cursors = self.cursors.add_selection(to);
    }

    /// Leave multi-cursor mode, keeping the primary selection
    pub fn clear_additional(&mut self) {
        self.sync_primary();
        self.cursors = self.cursors.clear_additional();
    }

    /// Every range, clamped and snapped to character boundaries, ascending
    fn snapped_selections(&self) -> Vec<TextRange> {
        self.cursors
            .all_selections()
            .into_iter()
            .map(|range| self.surface.snap(range))
            .collect()
    }

    /// Replace every range with `text`, leaving a caret after each insertion.
    ///
    /// Returns [`EditOutcome::Delegated`] in single-cursor mode.
    pub fn insert(&mut self, text: &str) -> EditOutcome {
        self.sync_primary();
        if !self.cursors.has_multiple_cursors() {
            return EditOutcome::Delegated;
        }

        let ranges = self.snapped_selections();
        let inserted = utf16_len(text);

        self.surface.transaction(|surface| {
            for range in ranges.iter().rev() {
                tracing::trace!(?range, "replace");
                surface.replace_characters(*range, text);
            }
        });

        let mut offset: isize = 0;
        let carets: Vec<TextRange> = ranges
            .iter()
            .map(|range| {
                let location = range.location as isize - offset + inserted as isize;
                offset += range.length as isize - inserted as isize;
                TextRange::caret(location.max(0) as usize)
            })
            .collect();

        tracing::debug!(
            cursors = ranges.len(),
            inserted_units = inserted,
            "multi-cursor insert"
        );
        self.commit_carets(carets);
        EditOutcome::Applied
    }

    /// Delete every selection, or the character before every caret.
    ///
    /// A caret at offset 0 has nothing before it and is left alone while the
    /// other ranges are still edited. Returns [`EditOutcome::Delegated`] in
    /// single-cursor mode.
    pub fn delete_backward(&mut self) -> EditOutcome {
        self.sync_primary();
        if !self.cursors.has_multiple_cursors() {
            return EditOutcome::Delegated;
        }

        let ranges = self.snapped_selections();
        let targets: Vec<Option<TextRange>> = ranges
            .iter()
            .map(|range| {
                if !range.is_caret() {
                    return Some(*range);
                }
                let width = self.surface.unit_len_before(range.location);
                (width > 0).then(|| TextRange::new(range.location - width, width))
            })
            .collect();

        self.surface.transaction(|surface| {
            for target in targets.iter().rev().flatten() {
                tracing::trace!(range = ?target, "delete");
                surface.replace_characters(*target, "");
            }
        });

        let mut accumulated = 0usize;
        let carets: Vec<TextRange> = ranges
            .iter()
            .zip(&targets)
            .map(|(range, target)| {
                let removed = target.map_or(0, |t| t.length);
                let before_caret = if range.is_caret() { removed } else { 0 };
                let location = range
                    .location
                    .saturating_sub(accumulated)
                    .saturating_sub(before_caret);
                accumulated += removed;
                TextRange::caret(location)
            })
            .collect();

        tracing::debug!(
            cursors = ranges.len(),
            removed_units = accumulated,
            "multi-cursor delete backward"
        );
        self.commit_carets(carets);
        EditOutcome::Applied
    }

    /// Toggle `bit` on the primary selection's text and re-select the result.
    ///
    /// Additional ranges are carried through the replacement: offsets after
    /// the selection shift by the change in length, offsets inside it keep
    /// their character position.
    pub fn toggle_style(&mut self, bit: StyleBit) -> EditOutcome {
        self.sync_primary();
        let selection = self.surface.snap(self.cursors.primary());
        if selection.is_caret() {
            return EditOutcome::Unchanged;
        }

        let original = self.surface.text_in(selection);
        let styled = style::toggle(bit, &original);
        if styled == original {
            return EditOutcome::Unchanged;
        }

        self.surface
            .transaction(|surface| surface.replace_characters(selection, &styled));

        let restyled = TextRange::new(selection.location, utf16_len(&styled));
        let remap = |offset: Offset| remap_offset(offset, selection, &original, &styled);
        let carried = self
            .cursors
            .additional()
            .iter()
            .map(|range| TextRange::between(remap(range.location), remap(range.end())));

        tracing::debug!(
            style = bit.name(),
            from_units = selection.length,
            to_units = restyled.length,
            "style toggle"
        );
        let next = CursorSet::from_ranges(std::iter::once(restyled).chain(carried));
        self.set_cursors(next);
        EditOutcome::Applied
    }

    /// Install post-edit carets: the first becomes primary, coincident carets merge
    fn commit_carets(&mut self, carets: Vec<TextRange>) {
        self.set_cursors(CursorSet::from_ranges(carets));
    }
}

/// Where `offset` lands after `selection`'s text `original` was replaced by
/// `styled`. Both strings have the same number of chars.
fn remap_offset(offset: Offset, selection: TextRange, original: &str, styled: &str) -> Offset {
    if !selection.contains(offset) {
        return if offset < selection.location {
            offset
        } else {
            offset - selection.length + utf16_len(styled)
        };
    }

    let mut units = 0;
    let chars_before = original
        .chars()
        .take_while(|ch| {
            units += ch.len_utf16();
            units <= offset - selection.location
        })
        .count();
    selection.location + styled.chars().take(chars_before).map(char::len_utf16).sum::<usize>()
}
