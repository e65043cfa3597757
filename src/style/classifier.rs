//! Code-point classification for Unicode-encoded text styles.
//!
//! Bold and italic are not attributes here: they are the character itself,
//! drawn from the Mathematical Sans-Serif family of the Mathematical
//! Alphanumeric Symbols block. Classification is pure block-range lookup.

use std::ops::RangeInclusive;

use bitflags::bitflags;

bitflags! {
    /// The rendered style of a character. The empty set is "normal".
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct StyleBit: u8 {
        const BOLD   = 0b01;
        const ITALIC = 0b10;
    }
}

impl StyleBit {
    pub const NORMAL: StyleBit = StyleBit::empty();
    pub const BOLD_ITALIC: StyleBit = StyleBit::BOLD.union(StyleBit::ITALIC);

    /// Short human-readable name, used by the CLI and in logs
    pub fn name(self) -> &'static str {
        match (self.contains(Self::BOLD), self.contains(Self::ITALIC)) {
            (false, false) => "normal",
            (true, false) => "bold",
            (false, true) => "italic",
            (true, true) => "bold-italic",
        }
    }
}

/// Which plain ASCII run a styled table maps back onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    Upper,
    Lower,
    Digit,
}

impl Base {
    pub(crate) const fn first(self) -> u32 {
        match self {
            Base::Upper => 'A' as u32,
            Base::Lower => 'a' as u32,
            Base::Digit => '0' as u32,
        }
    }

    pub(crate) fn of(ch: char) -> Option<Base> {
        match ch {
            'A'..='Z' => Some(Base::Upper),
            'a'..='z' => Some(Base::Lower),
            '0'..='9' => Some(Base::Digit),
            _ => None,
        }
    }
}

/// One styled code-point table: a contiguous run aligned with an ASCII run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StyleTable {
    pub(crate) style: StyleBit,
    pub(crate) base: Base,
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl StyleTable {
    const fn new(style: StyleBit, base: Base, range: RangeInclusive<u32>) -> Self {
        Self {
            style,
            base,
            start: *range.start(),
            end: *range.end(),
        }
    }

    fn contains(&self, scalar: u32) -> bool {
        (self.start..=self.end).contains(&scalar)
    }

    /// Code point at `ordinal` within this table
    pub(crate) fn encode(&self, ordinal: u32) -> Option<char> {
        let scalar = self.start + ordinal;
        if scalar > self.end {
            return None;
        }
        char::from_u32(scalar)
    }
}

/// Styled tables in detection priority order.
pub(crate) static TABLES: [StyleTable; 7] = [
    StyleTable::new(StyleBit::BOLD_ITALIC, Base::Upper, 0x1D63C..=0x1D655),
    StyleTable::new(StyleBit::BOLD_ITALIC, Base::Lower, 0x1D656..=0x1D66F),
    StyleTable::new(StyleBit::BOLD, Base::Upper, 0x1D5D4..=0x1D5ED),
    StyleTable::new(StyleBit::BOLD, Base::Lower, 0x1D5EE..=0x1D607),
    StyleTable::new(StyleBit::BOLD, Base::Digit, 0x1D7EC..=0x1D7F5),
    StyleTable::new(StyleBit::ITALIC, Base::Upper, 0x1D608..=0x1D621),
    StyleTable::new(StyleBit::ITALIC, Base::Lower, 0x1D622..=0x1D63B),
];

fn table_for(ch: char) -> Option<&'static StyleTable> {
    let scalar = ch as u32;
    TABLES.iter().find(|table| table.contains(scalar))
}

/// Table holding the `style` rendering of `base`, if Unicode has one
pub(crate) fn table_with(style: StyleBit, base: Base) -> Option<&'static StyleTable> {
    TABLES
        .iter()
        .find(|table| table.style == style && table.base == base)
}

/// Result of classifying a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Outside every table and not an ASCII letter or digit
    Unstyleable,
    /// An ASCII letter/digit or one of its styled counterparts
    Styleable { base: char, style: StyleBit },
}

impl Classification {
    pub fn is_styleable(&self) -> bool {
        matches!(self, Classification::Styleable { .. })
    }
}

/// Classify a character in a single table lookup
pub fn classify(ch: char) -> Classification {
    if let Some(table) = table_for(ch) {
        let ordinal = ch as u32 - table.start;
        return match char::from_u32(table.base.first() + ordinal) {
            Some(base) => Classification::Styleable {
                base,
                style: table.style,
            },
            None => Classification::Unstyleable,
        };
    }

    if Base::of(ch).is_some() {
        Classification::Styleable {
            base: ch,
            style: StyleBit::NORMAL,
        }
    } else {
        Classification::Unstyleable
    }
}

/// Style encoded by the character's code point. Unmapped characters are normal.
pub fn detect_style(ch: char) -> StyleBit {
    table_for(ch).map_or(StyleBit::NORMAL, |table| table.style)
}

/// Plain ASCII form of a styled character; anything else is returned as-is.
pub fn to_normal(ch: char) -> char {
    match classify(ch) {
        Classification::Styleable { base, .. } => base,
        Classification::Unstyleable => ch,
    }
}

/// True iff the normalized character is an ASCII letter or digit
pub fn is_styleable(ch: char) -> bool {
    Base::of(to_normal(ch)).is_some()
}

/// Whether Unicode has a code point for `ch` carrying `style`.
/// Digits only have a bold rendering.
pub fn supports(ch: char, style: StyleBit) -> bool {
    match Base::of(to_normal(ch)) {
        Some(base) => style.is_empty() || table_with(style, base).is_some(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_aligned_with_ascii_runs() {
        for table in TABLES.iter() {
            let width = table.end - table.start + 1;
            let expected = match table.base {
                Base::Upper | Base::Lower => 26,
                Base::Digit => 10,
            };
            assert_eq!(width, expected, "{:?} {:?}", table.style, table.base);
        }
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for (i, a) in TABLES.iter().enumerate() {
            for b in TABLES.iter().skip(i + 1) {
                assert!(a.end < b.start || b.end < a.start);
            }
        }
    }

    #[test]
    fn test_detect_style() {
        assert_eq!(detect_style('a'), StyleBit::NORMAL);
        assert_eq!(detect_style('\u{1D5EE}'), StyleBit::BOLD); // 𝗮
        assert_eq!(detect_style('\u{1D622}'), StyleBit::ITALIC); // 𝘢
        assert_eq!(detect_style('\u{1D656}'), StyleBit::BOLD_ITALIC); // 𝙖
        assert_eq!(detect_style('\u{1D7F1}'), StyleBit::BOLD); // 𝟱
        assert_eq!(detect_style('é'), StyleBit::NORMAL);
    }

    #[test]
    fn test_to_normal() {
        assert_eq!(to_normal('\u{1D5D4}'), 'A');
        assert_eq!(to_normal('\u{1D607}'), 'z');
        assert_eq!(to_normal('\u{1D621}'), 'Z');
        assert_eq!(to_normal('\u{1D66F}'), 'z');
        assert_eq!(to_normal('\u{1D7F5}'), '9');
        assert_eq!(to_normal('q'), 'q');
        assert_eq!(to_normal('🙂'), '🙂');
    }

    #[test]
    fn test_serif_math_letters_are_unstyleable() {
        // Mathematical Bold (serif) is a different family and is not mapped
        assert_eq!(classify('\u{1D400}'), Classification::Unstyleable);
        assert!(!is_styleable('\u{1D400}'));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify('\u{1D63C}'),
            Classification::Styleable {
                base: 'A',
                style: StyleBit::BOLD_ITALIC
            }
        );
        assert_eq!(
            classify('7'),
            Classification::Styleable {
                base: '7',
                style: StyleBit::NORMAL
            }
        );
        assert!(!classify(' ').is_styleable());
    }

    #[test]
    fn test_supports() {
        assert!(supports('5', StyleBit::BOLD));
        assert!(!supports('5', StyleBit::ITALIC));
        assert!(!supports('5', StyleBit::BOLD_ITALIC));
        assert!(supports('k', StyleBit::BOLD_ITALIC));
        assert!(!supports('-', StyleBit::BOLD));
    }

    #[test]
    fn test_style_names() {
        assert_eq!(StyleBit::NORMAL.name(), "normal");
        assert_eq!(StyleBit::BOLD_ITALIC.name(), "bold-italic");
    }
}
