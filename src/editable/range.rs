//! Offset ranges for the multi-cursor editing system.
//!
//! Offsets count UTF-16 code units, matching what platform text views report
//! for carets and selections.

/// An index into a text surface, in UTF-16 code units.
pub type Offset = usize;

/// A caret (zero length) or a selection (positive length).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub location: Offset,
    pub length: usize,
}

impl TextRange {
    pub const fn new(location: Offset, length: usize) -> Self {
        Self { location, length }
    }

    /// Create a zero-length range (insertion point)
    pub const fn caret(location: Offset) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Normalized range spanning two endpoints in either order
    pub fn between(a: Offset, b: Offset) -> Self {
        let start = a.min(b);
        let end = a.max(b);
        Self {
            location: start,
            length: end - start,
        }
    }

    /// Check if this is a bare insertion point
    pub const fn is_caret(&self) -> bool {
        self.length == 0
    }

    /// Exclusive end offset
    pub const fn end(&self) -> Offset {
        self.location + self.length
    }

    /// Check if an offset is within this range (end exclusive)
    pub fn contains(&self, offset: Offset) -> bool {
        offset >= self.location && offset < self.end()
    }

    /// Shrink the range so it lies within a surface of `len` code units
    pub fn clamped_to(&self, len: usize) -> Self {
        let location = self.location.min(len);
        let end = self.end().min(len);
        Self {
            location,
            length: end - location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret() {
        let caret = TextRange::caret(4);
        assert!(caret.is_caret());
        assert_eq!(caret.end(), 4);
    }

    #[test]
    fn test_between_normalizes() {
        assert_eq!(TextRange::between(9, 3), TextRange::new(3, 6));
        assert_eq!(TextRange::between(3, 9), TextRange::new(3, 6));
        assert_eq!(TextRange::between(5, 5), TextRange::caret(5));
    }

    #[test]
    fn test_contains() {
        let range = TextRange::new(2, 6);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(7));
        assert!(!range.contains(8)); // End is exclusive
    }

    #[test]
    fn test_clamped_to() {
        assert_eq!(TextRange::new(8, 10).clamped_to(12), TextRange::new(8, 4));
        assert_eq!(TextRange::new(20, 3).clamped_to(12), TextRange::caret(12));
        assert_eq!(TextRange::new(1, 2).clamped_to(12), TextRange::new(1, 2));
    }
}
