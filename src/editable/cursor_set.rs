//! The set of carets and selections a multi-cursor edit fans out to.
//!
//! A `CursorSet` owns offsets only, never text. Every transition returns a
//! new set; callers replace their copy, so invariants can be checked on plain
//! values without a live text view.

use super::range::{Offset, TextRange};

/// One primary range plus additional ranges in the order they were added.
///
/// Invariants:
/// - no two ranges (primary included) are equal
/// - `has_multiple_cursors()` iff there is at least one additional range
///
/// Ranges may overlap; `all_selections` only guarantees ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorSet {
    primary: TextRange,
    additional: Vec<TextRange>,
}

impl CursorSet {
    /// Empty set: caret at offset 0, no additional ranges
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with the given primary and no additional ranges
    pub fn with_primary_range(primary: TextRange) -> Self {
        Self {
            primary,
            additional: Vec::new(),
        }
    }

    /// Build from ranges; the first becomes primary, duplicates are dropped.
    /// An empty iterator yields [`CursorSet::new`].
    pub fn from_ranges(ranges: impl IntoIterator<Item = TextRange>) -> Self {
        let mut ranges = ranges.into_iter();
        let Some(primary) = ranges.next() else {
            return Self::new();
        };
        ranges.fold(Self::with_primary_range(primary), |set, range| {
            set.add_range(range)
        })
    }

    pub fn primary(&self) -> TextRange {
        self.primary
    }

    /// Additional ranges, oldest first
    pub fn additional(&self) -> &[TextRange] {
        &self.additional
    }

    /// Check if multi-cursor mode is active
    pub fn has_multiple_cursors(&self) -> bool {
        !self.additional.is_empty()
    }

    /// Total number of ranges including the primary
    pub fn len(&self) -> usize {
        1 + self.additional.len()
    }

    /// Always false: a set has at least its primary range
    pub fn is_empty(&self) -> bool {
        false
    }

    fn contains(&self, range: TextRange) -> bool {
        self.primary == range || self.additional.contains(&range)
    }

    /// Add `range` as an additional range unless it duplicates one already held
    #[must_use]
    pub fn add_range(&self, range: TextRange) -> Self {
        if self.contains(range) {
            tracing::trace!(?range, "duplicate range ignored");
            return self.clone();
        }
        let mut next = self.clone();
        next.additional.push(range);
        next
    }

    /// Add a caret at `offset` (no-op on duplicates)
    #[must_use]
    pub fn add_cursor(&self, offset: Offset) -> Self {
        self.add_range(TextRange::caret(offset))
    }

    /// Add a selection from the most recent cursor to `to`.
    ///
    /// "Most recent" is the last additional range added, or the primary when
    /// there is none; its location is the anchor.
    #[must_use]
    pub fn add_selection(&self, to: Offset) -> Self {
        let anchor = self.most_recent().location;
        self.add_range(TextRange::between(anchor, to))
    }

    fn most_recent(&self) -> TextRange {
        self.additional.last().copied().unwrap_or(self.primary)
    }

    /// Drop every additional range; the primary is untouched
    #[must_use]
    pub fn clear_additional(&self) -> Self {
        Self::with_primary_range(self.primary)
    }

    /// Replace the primary range, dropping any additional range equal to it
    #[must_use]
    pub fn with_primary(&self, primary: TextRange) -> Self {
        Self {
            primary,
            additional: self
                .additional
                .iter()
                .copied()
                .filter(|range| *range != primary)
                .collect(),
        }
    }

    /// Primary plus additional ranges, ascending by location.
    /// Ranges sharing a location keep primary-then-insertion order.
    pub fn all_selections(&self) -> Vec<TextRange> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.primary);
        all.extend_from_slice(&self.additional);
        all.sort_by_key(|range| range.location);
        all
    }

    /// Assert invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for (i, range) in self.additional.iter().enumerate() {
            debug_assert_ne!(*range, self.primary, "additional {} equals primary", i);
            debug_assert!(
                !self.additional[i + 1..].contains(range),
                "additional {} is duplicated",
                i
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
