//! String-level style transforms built on the code-point classifier.

use super::classifier::{classify, table_with, Base, Classification, StyleBit};

/// Re-encode `ch` with exactly `style`.
///
/// The input is normalized first, so a bold character can be restyled to
/// italic directly. When Unicode has no code point for the requested style
/// (italic or bold-italic digits) the plain character is returned.
pub fn apply(style: StyleBit, ch: char) -> char {
    let Classification::Styleable { base, .. } = classify(ch) else {
        return ch;
    };
    let Some(run) = Base::of(base) else {
        return base;
    };
    if style.is_empty() {
        return base;
    }

    let ordinal = base as u32 - run.first();
    table_with(style, run)
        .and_then(|table| table.encode(ordinal))
        .unwrap_or(base)
}

/// Toggle bold across the whole string. See [`toggle`].
pub fn toggle_bold(text: &str) -> String {
    toggle(StyleBit::BOLD, text)
}

/// Toggle italic across the whole string. See [`toggle`].
pub fn toggle_italic(text: &str) -> String {
    toggle(StyleBit::ITALIC, text)
}

/// All-or-nothing toggle of one style bit.
///
/// If every eligible character already carries `bit`, the bit is removed
/// from each of them; otherwise it is added to each. The other bit is left
/// as it was. A character is eligible when it is styleable and Unicode has a
/// code point for it carrying `bit` (digits cannot be italic); ineligible
/// characters are copied through untouched and do not affect the decision.
pub fn toggle(bit: StyleBit, text: &str) -> String {
    let all_styled = text
        .chars()
        .filter_map(|ch| eligible(bit, ch))
        .all(|style| style.contains(bit));

    text.chars()
        .map(|ch| match eligible(bit, ch) {
            Some(current) if all_styled => apply(current.difference(bit), ch),
            Some(current) => apply(current.union(bit), ch),
            None => ch,
        })
        .collect()
}

/// Current style of `ch` if `bit` can be toggled on it
fn eligible(bit: StyleBit, ch: char) -> Option<StyleBit> {
    match classify(ch) {
        Classification::Styleable { base, style } => {
            let run = Base::of(base)?;
            table_with(style.union(bit), run).map(|_| style)
        }
        Classification::Unstyleable => None,
    }
}

/// Strip every style, leaving plain ASCII letters and digits.
pub fn normalize(text: &str) -> String {
    text.chars().map(super::classifier::to_normal).collect()
}

/// Render every styleable character with exactly `style`.
pub fn restyle(style: StyleBit, text: &str) -> String {
    text.chars().map(|ch| apply(style, ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::classifier::{detect_style, to_normal};

    #[test]
    fn test_apply_letters() {
        assert_eq!(apply(StyleBit::BOLD, 'A'), '\u{1D5D4}');
        assert_eq!(apply(StyleBit::ITALIC, 'z'), '\u{1D63B}');
        assert_eq!(apply(StyleBit::BOLD_ITALIC, 'm'), '\u{1D662}');
        assert_eq!(apply(StyleBit::NORMAL, '\u{1D662}'), 'm');
    }

    #[test]
    fn test_apply_restyles_styled_input() {
        let bold_a = apply(StyleBit::BOLD, 'a');
        assert_eq!(apply(StyleBit::ITALIC, bold_a), '\u{1D622}');
    }

    #[test]
    fn test_apply_digits_degrade() {
        assert_eq!(apply(StyleBit::BOLD, '5'), '\u{1D7F1}');
        assert_eq!(apply(StyleBit::ITALIC, '5'), '5');
        assert_eq!(apply(StyleBit::BOLD_ITALIC, '5'), '5');
        assert_eq!(apply(StyleBit::ITALIC, '\u{1D7F1}'), '5');
    }

    #[test]
    fn test_apply_unstyleable_passthrough() {
        assert_eq!(apply(StyleBit::BOLD, ' '), ' ');
        assert_eq!(apply(StyleBit::BOLD, 'é'), 'é');
        assert_eq!(apply(StyleBit::ITALIC, '!'), '!');
    }

    #[test]
    fn test_toggle_bold_plain() {
        let bold = toggle_bold("Hi 5!");
        assert_eq!(bold, "\u{1D5DB}\u{1D5F6} \u{1D7F1}!");
        assert_eq!(toggle_bold(&bold), "Hi 5!");
    }

    #[test]
    fn test_toggle_mixed_adds_everywhere() {
        let mixed = format!("{}b", apply(StyleBit::BOLD, 'a'));
        let toggled = toggle_bold(&mixed);
        assert!(toggled.chars().all(|c| detect_style(c) == StyleBit::BOLD));
    }

    #[test]
    fn test_toggle_bold_keeps_italic() {
        let italic = toggle_italic("abc");
        let both = toggle_bold(&italic);
        assert!(both
            .chars()
            .all(|c| detect_style(c) == StyleBit::BOLD_ITALIC));
        let back = toggle_bold(&both);
        assert_eq!(back, italic);
    }

    #[test]
    fn test_toggle_italic_leaves_digits_alone() {
        assert_eq!(toggle_italic("a5"), "\u{1D622}5");
        assert_eq!(toggle_italic(&toggle_italic("a5")), "a5");

        let bold_five = apply(StyleBit::BOLD, '5').to_string();
        assert_eq!(toggle_italic(&bold_five), bold_five);
    }

    #[test]
    fn test_toggle_without_styleable_chars() {
        assert_eq!(toggle_bold(""), "");
        assert_eq!(toggle_bold("--- ???"), "--- ???");
    }

    #[test]
    fn test_normalize_and_restyle() {
        let styled = restyle(StyleBit::BOLD_ITALIC, "Rust 2024");
        assert_eq!(normalize(&styled), "Rust 2024");
        assert!(styled.starts_with('\u{1D64D}'));
        assert!(styled.chars().filter(|c| c.is_ascii_digit()).count() == 4);
        assert_eq!(to_normal(styled.chars().next().unwrap()), 'R');
    }
}
