//! Per-code-point properties consulted by the grapheme boundary rules.

use super::tables::{EXTENDED_PICTOGRAPHIC, GRAPHEME_BREAK, INDIC_CONJUNCT_BREAK, PUNCTUATION};

/// First code point of the precomposed Hangul syllable block.
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// Last code point of the precomposed Hangul syllable block.
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
/// Number of trailing consonants (including "none") per leading/vowel pair.
const HANGUL_T_COUNT: u32 = 28;

/// `Grapheme_Cluster_Break` property value of a code point.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphemeBreak {
    /// Carriage return (U+000D).
    CR,
    /// Line feed (U+000A).
    LF,
    /// Other control and format characters.
    Control,
    /// Combining marks and other extending characters.
    Extend,
    /// Zero width joiner (U+200D).
    ZWJ,
    /// Regional indicator symbols used in flag pairs.
    RegionalIndicator,
    /// Prefix marks that attach to the following character.
    Prepend,
    /// Spacing vowel signs that attach to the preceding character.
    SpacingMark,
    /// Hangul leading consonant jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing consonant jamo.
    T,
    /// Hangul syllable made of a leading consonant and a vowel.
    LV,
    /// Hangul syllable made of leading, vowel, and trailing jamo.
    LVT,
    /// Anything else.
    #[default]
    Other,
}

impl GraphemeBreak {
    /// Whether the category always stands alone (rules for controls).
    #[must_use]
    pub const fn is_control(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Control)
    }
}

/// `Indic_Conjunct_Break` property value of a code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndicConjunctBreak {
    /// Virama-like characters that join consonants into conjuncts.
    Linker,
    /// Consonants that may take part in a conjunct.
    Consonant,
    /// Marks allowed between a consonant and a linker.
    Extend,
    /// Not part of any conjunct sequence.
    #[default]
    None,
}

/// Binary search a sorted range table, returning the matching value.
fn search<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    table
        .binary_search_by(|&(start, end, _)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| table[idx].2)
}

/// Look up the grapheme break category of `ch`.
#[must_use]
pub fn grapheme_break(ch: char) -> GraphemeBreak {
    let cp = u32::from(ch);
    // ASCII fast path: only controls are special.
    if cp < 0x7F {
        return match cp {
            0x0D => GraphemeBreak::CR,
            0x0A => GraphemeBreak::LF,
            0x00..=0x1F => GraphemeBreak::Control,
            _ => GraphemeBreak::Other,
        };
    }
    if (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&cp) {
        return if (cp - HANGUL_SYLLABLE_BASE) % HANGUL_T_COUNT == 0 {
            GraphemeBreak::LV
        } else {
            GraphemeBreak::LVT
        };
    }
    search(GRAPHEME_BREAK, cp).unwrap_or_default()
}

/// Binary search a sorted range set.
fn contains(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(start, end)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Check whether `ch` has the `Extended_Pictographic` property.
#[must_use]
pub fn is_extended_pictographic(ch: char) -> bool {
    let cp = u32::from(ch);
    if cp < 0xA9 {
        return false;
    }
    contains(EXTENDED_PICTOGRAPHIC, cp)
}

/// Check whether `ch` has a punctuation general category (`P*`).
///
/// ASCII symbols such as `$`, `+` and `^` are `S*`, not punctuation.
#[must_use]
pub fn is_punctuation(ch: char) -> bool {
    contains(PUNCTUATION, u32::from(ch))
}

/// Look up the Indic conjunct break value of `ch`.
#[must_use]
pub fn indic_conjunct_break(ch: char) -> IndicConjunctBreak {
    let cp = u32::from(ch);
    if cp < 0x0300 {
        return IndicConjunctBreak::None;
    }
    search(INDIC_CONJUNCT_BREAK, cp).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(ranges: impl Iterator<Item = (u32, u32)>) {
        let mut last_end: Option<u32> = None;
        for (start, end) in ranges {
            assert!(start <= end, "range {start:#X}..={end:#X} is reversed");
            if let Some(prev) = last_end {
                assert!(start > prev, "range {start:#X} overlaps previous {prev:#X}");
            }
            last_end = Some(end);
        }
    }

    #[test]
    fn tables_are_sorted_and_disjoint() {
        assert_sorted(GRAPHEME_BREAK.iter().map(|&(s, e, _)| (s, e)));
        assert_sorted(EXTENDED_PICTOGRAPHIC.iter().copied());
        assert_sorted(INDIC_CONJUNCT_BREAK.iter().map(|&(s, e, _)| (s, e)));
        assert_sorted(PUNCTUATION.iter().copied());
    }

    #[test]
    fn test_controls() {
        assert_eq!(grapheme_break('\r'), GraphemeBreak::CR);
        assert_eq!(grapheme_break('\n'), GraphemeBreak::LF);
        assert_eq!(grapheme_break('\u{0001}'), GraphemeBreak::Control);
        assert_eq!(grapheme_break('\u{007F}'), GraphemeBreak::Control);
        assert_eq!(grapheme_break('a'), GraphemeBreak::Other);
        assert_eq!(grapheme_break(' '), GraphemeBreak::Other);
    }

    #[test]
    fn test_marks_and_joiners() {
        assert_eq!(grapheme_break('\u{0308}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{034F}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{200D}'), GraphemeBreak::ZWJ);
        assert_eq!(grapheme_break('\u{0903}'), GraphemeBreak::SpacingMark);
        assert_eq!(grapheme_break('\u{0600}'), GraphemeBreak::Prepend);
        // Skin tone modifiers extend the preceding emoji.
        assert_eq!(grapheme_break('\u{1F3FF}'), GraphemeBreak::Extend);
    }

    #[test]
    fn test_hangul() {
        assert_eq!(grapheme_break('\u{1100}'), GraphemeBreak::L);
        assert_eq!(grapheme_break('\u{1160}'), GraphemeBreak::V);
        assert_eq!(grapheme_break('\u{11A8}'), GraphemeBreak::T);
        assert_eq!(grapheme_break('가'), GraphemeBreak::LV);
        assert_eq!(grapheme_break('각'), GraphemeBreak::LVT);
        assert_eq!(grapheme_break('\u{D7A3}'), GraphemeBreak::LVT);
    }

    #[test]
    fn test_regional_indicators() {
        assert_eq!(grapheme_break('🇦'), GraphemeBreak::RegionalIndicator);
        assert_eq!(grapheme_break('🇿'), GraphemeBreak::RegionalIndicator);
    }

    #[test]
    fn test_extended_pictographic() {
        assert!(is_extended_pictographic('⌚'));
        assert!(is_extended_pictographic('✁'));
        assert!(is_extended_pictographic('👶'));
        assert!(is_extended_pictographic('🛑'));
        assert!(is_extended_pictographic('\u{00A9}'));
        assert!(!is_extended_pictographic('a'));
        assert!(!is_extended_pictographic('\u{1F3FF}'));
        assert!(!is_extended_pictographic('🇦'));
    }

    #[test]
    fn test_indic_conjunct_break() {
        assert_eq!(indic_conjunct_break('\u{094D}'), IndicConjunctBreak::Linker);
        assert_eq!(indic_conjunct_break('क'), IndicConjunctBreak::Consonant);
        assert_eq!(indic_conjunct_break('\u{200D}'), IndicConjunctBreak::Extend);
        assert_eq!(indic_conjunct_break('a'), IndicConjunctBreak::None);
    }

    #[test]
    fn test_punctuation() {
        for ch in ['_', '-', '(', '!', '\u{00A7}', '\u{3001}'] {
            assert!(is_punctuation(ch), "{ch:?} is punctuation");
        }
        // Arabic comma and question mark, Hebrew maqaf, two-em dash,
        // Devanagari danda, small comma.
        for ch in ['\u{060C}', '\u{061F}', '\u{05BE}', '\u{2E3A}', '\u{0964}', '\u{FE50}'] {
            assert!(is_punctuation(ch), "{ch:?} is punctuation");
        }
        for ch in ['a', '7', ' ', '$', '+', '^', '\u{0301}', '가'] {
            assert!(!is_punctuation(ch), "{ch:?} is not punctuation");
        }
    }
}
