//! Extended grapheme cluster segmentation (UAX #29).
//!
//! The boundary rules run as a single forward pass over code points. Every
//! decision looks only at the category pair around the candidate boundary
//! plus three small pieces of carried state:
//!
//! - parity of the current run of regional indicators (flag pairs),
//! - progress through an `ExtPict Extend* ZWJ` emoji prefix,
//! - progress through an Indic `Consonant [Extend|Linker]* Linker` prefix.
//!
//! Rules, first match wins:
//!
//! | Rule  | Pattern                                       | Result |
//! |-------|-----------------------------------------------|--------|
//! | GB3   | CR × LF                                       | join   |
//! | GB4/5 | (Control/CR/LF) ÷, ÷ (Control/CR/LF)          | break  |
//! | GB6   | L × (L/V/LV/LVT)                              | join   |
//! | GB7   | (LV/V) × (V/T)                                | join   |
//! | GB8   | (LVT/T) × T                                   | join   |
//! | GB9   | × (Extend/ZWJ)                                | join   |
//! | GB9a  | × SpacingMark                                 | join   |
//! | GB9b  | Prepend ×                                     | join   |
//! | GB9c  | Consonant … Linker … × Consonant              | join   |
//! | GB11  | ExtPict Extend* ZWJ × ExtPict                 | join   |
//! | GB12/13 | odd run of RI × RI                          | join   |
//! | GB999 | Any ÷ Any                                     | break  |

use std::ops::Range;

use super::category::{
    GraphemeBreak, IndicConjunctBreak, grapheme_break, indic_conjunct_break,
    is_extended_pictographic,
};

/// Progress through an emoji ZWJ sequence prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EmojiState {
    #[default]
    None,
    /// Seen `ExtPict Extend*`.
    Pictographic,
    /// Seen `ExtPict Extend* ZWJ`.
    Joiner,
}

/// Progress through an Indic conjunct prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ConjunctState {
    #[default]
    None,
    /// Seen `Consonant [Extend|Linker]*` without a linker yet.
    Consonant,
    /// Seen at least one linker after the consonant.
    Linked,
}

/// Streaming grapheme boundary detector.
///
/// Feed code points in order with [`is_boundary`](Self::is_boundary); each
/// call reports whether a cluster boundary falls immediately before that code
/// point. The start of text is always a boundary.
///
/// ```
/// use charfold::unicode::BoundaryState;
///
/// let mut state = BoundaryState::new();
/// let breaks: Vec<bool> = "e\u{301}x".chars().map(|c| state.is_boundary(c)).collect();
/// assert_eq!(breaks, vec![true, false, true]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryState {
    prev: Option<GraphemeBreak>,
    /// True when the run of regional indicators ending at `prev` is odd.
    regional_odd: bool,
    emoji: EmojiState,
    conjunct: ConjunctState,
}

impl BoundaryState {
    /// Create a state positioned at the start of text.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev: None,
            regional_odd: false,
            emoji: EmojiState::None,
            conjunct: ConjunctState::None,
        }
    }

    /// Return to the start-of-text state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance past `ch`, returning whether a boundary precedes it.
    pub fn is_boundary(&mut self, ch: char) -> bool {
        let category = grapheme_break(ch);
        let pictographic = is_extended_pictographic(ch);
        let conjunct = indic_conjunct_break(ch);

        let boundary = match self.prev {
            None => true,
            Some(prev) => self.breaks_between(prev, category, pictographic, conjunct),
        };

        self.regional_odd = category == GraphemeBreak::RegionalIndicator
            && !(self.prev == Some(GraphemeBreak::RegionalIndicator) && self.regional_odd);

        self.emoji = if pictographic {
            EmojiState::Pictographic
        } else {
            match (self.emoji, category) {
                (EmojiState::Pictographic, GraphemeBreak::Extend) => EmojiState::Pictographic,
                (EmojiState::Pictographic, GraphemeBreak::ZWJ) => EmojiState::Joiner,
                _ => EmojiState::None,
            }
        };

        self.conjunct = match (self.conjunct, conjunct) {
            (_, IndicConjunctBreak::Consonant) => ConjunctState::Consonant,
            (ConjunctState::None, _) | (_, IndicConjunctBreak::None) => ConjunctState::None,
            (_, IndicConjunctBreak::Linker) => ConjunctState::Linked,
            (state, IndicConjunctBreak::Extend) => state,
        };

        self.prev = Some(category);
        boundary
    }

    fn breaks_between(
        &self,
        prev: GraphemeBreak,
        next: GraphemeBreak,
        next_pictographic: bool,
        next_conjunct: IndicConjunctBreak,
    ) -> bool {
        use GraphemeBreak::{CR, Extend, L, LF, LV, LVT, Prepend, RegionalIndicator, SpacingMark, T, V, ZWJ};

        match (prev, next) {
            (CR, LF) => false,
            (p, n) if p.is_control() || n.is_control() => true,
            (L, L | V | LV | LVT) | (LV | V, V | T) | (LVT | T, T) => false,
            (_, Extend | ZWJ | SpacingMark) | (Prepend, _) => false,
            _ if self.conjunct == ConjunctState::Linked
                && next_conjunct == IndicConjunctBreak::Consonant =>
            {
                false
            }
            (ZWJ, _) if self.emoji == EmojiState::Joiner && next_pictographic => false,
            (RegionalIndicator, RegionalIndicator) => !self.regional_odd,
            _ => true,
        }
    }
}

/// Iterator over grapheme clusters in a string.
#[derive(Clone, Debug)]
pub struct Graphemes<'a> {
    text: &'a str,
    offset: usize,
}

impl Graphemes<'_> {
    /// Byte offset of the next cluster to be yielded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes of the cluster starting at `self.offset`.
    fn next_len(&self) -> usize {
        let rest = &self.text[self.offset..];
        let bytes = rest.as_bytes();

        // Two ASCII bytes in a row always break, except CR LF.
        if let [first, second, ..] = bytes {
            if first.is_ascii() && second.is_ascii() {
                return if *first == b'\r' && *second == b'\n' { 2 } else { 1 };
            }
        }

        let mut state = BoundaryState::new();
        rest.char_indices()
            .find(|&(idx, ch)| state.is_boundary(ch) && idx > 0)
            .map_or(rest.len(), |(idx, _)| idx)
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let start = self.offset;
        self.offset += self.next_len();
        Some(&self.text[start..self.offset])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Graphemes<'_> {}

/// Iterate over grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> Graphemes<'_> {
    Graphemes { text: s, offset: 0 }
}

/// Iterate over grapheme clusters with their byte offsets.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut iter = graphemes(s);
    std::iter::from_fn(move || {
        let offset = iter.offset();
        iter.next().map(|g| (offset, g))
    })
}

/// Split `s` into its grapheme clusters.
///
/// Concatenating the result reproduces `s`; the empty string yields no
/// clusters.
#[must_use]
pub fn segment(s: &str) -> Vec<&str> {
    graphemes(s).collect()
}

/// Segment a raw byte buffer that may not be valid UTF-8.
///
/// Valid runs are segmented normally. Each maximal ill-formed subsequence
/// becomes its own span and breaks clusters on both sides. The returned
/// ranges are contiguous and cover the whole buffer.
#[must_use]
pub fn segment_bytes(bytes: &[u8]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut base = 0;

    for chunk in bytes.utf8_chunks() {
        let valid = chunk.valid();
        for (offset, cluster) in grapheme_indices(valid) {
            let start = base + offset;
            spans.push(start..start + cluster.len());
        }
        base += valid.len();

        let invalid = chunk.invalid();
        if !invalid.is_empty() {
            tracing::trace!(offset = base, len = invalid.len(), "ill-formed UTF-8 span");
            spans.push(base..base + invalid.len());
            base += invalid.len();
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(segment("").is_empty());
        assert!(segment_bytes(b"").is_empty());
    }

    #[test]
    fn test_ascii() {
        assert_eq!(segment("hello"), vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(segment("\r\n"), vec!["\r\n"]);
        assert_eq!(segment("\r\n\u{0001}"), vec!["\r\n", "\u{0001}"]);
        assert_eq!(segment("\r\n\r\n"), vec!["\r\n", "\r\n"]);
    }

    #[test]
    fn test_mark_after_cr_stands_alone() {
        assert_eq!(segment("\r\u{0308}\n"), vec!["\r", "\u{0308}", "\n"]);
    }

    #[test]
    fn test_combining_marks_attach() {
        assert_eq!(segment("e\u{0301}x"), vec!["e\u{0301}", "x"]);
        assert_eq!(segment("a\u{0308}b"), vec!["a\u{0308}", "b"]);
    }

    #[test]
    fn test_leading_mark_is_own_cluster() {
        assert_eq!(segment("\u{0308}a"), vec!["\u{0308}", "a"]);
        assert_eq!(segment("\u{200D}"), vec!["\u{200D}"]);
    }

    #[test]
    fn test_spacing_mark_and_prepend() {
        assert_eq!(segment("a\u{0903}b"), vec!["a\u{0903}", "b"]);
        assert_eq!(segment("a\u{0600}b"), vec!["a", "\u{0600}b"]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        assert_eq!(segment("🇦🇧🇨b"), vec!["🇦🇧", "🇨", "b"]);
        assert_eq!(segment("a🇦🇧🇨🇩b"), vec!["a", "🇦🇧", "🇨🇩", "b"]);
        assert_eq!(segment("a🇦\u{200D}🇧🇨b"), vec!["a", "🇦\u{200D}", "🇧🇨", "b"]);
    }

    #[test]
    fn test_emoji_modifier() {
        assert_eq!(segment("👶🏿👶"), vec!["👶🏿", "👶"]);
        assert_eq!(segment("a🏿👶"), vec!["a🏿", "👶"]);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        assert_eq!(segment("🛑\u{200D}🛑"), vec!["🛑\u{200D}🛑"]);
        assert_eq!(
            segment("👶🏿\u{0308}\u{200D}👶🏿"),
            vec!["👶🏿\u{0308}\u{200D}👶🏿"]
        );
        assert_eq!(segment("👨‍👩‍👧"), vec!["👨‍👩‍👧"]);
    }

    #[test]
    fn test_zwj_after_letter_does_not_chain() {
        assert_eq!(segment("a\u{200D}🛑"), vec!["a\u{200D}", "🛑"]);
        assert_eq!(segment("a\u{200D}✁"), vec!["a\u{200D}", "✁"]);
    }

    #[test]
    fn test_hangul() {
        assert_eq!(segment("\u{1100}\u{1100}"), vec!["\u{1100}\u{1100}"]);
        assert_eq!(segment("각\u{1100}"), vec!["각", "\u{1100}"]);
        assert_eq!(segment("각\u{11A8}\u{1100}"), vec!["각\u{11A8}", "\u{1100}"]);
    }

    #[test]
    fn test_indic_conjunct() {
        // KA + VIRAMA + SSA forms one conjunct cluster.
        assert_eq!(segment("\u{0915}\u{094D}\u{0937}"), vec!["\u{0915}\u{094D}\u{0937}"]);
        // A linker without a leading consonant does not join.
        assert_eq!(segment("a\u{094D}\u{0937}"), vec!["a\u{094D}", "\u{0937}"]);
    }

    #[test]
    fn test_grapheme_indices() {
        let idx: Vec<_> = grapheme_indices("a\u{0301}b").collect();
        assert_eq!(idx, vec![(0, "a\u{0301}"), (3, "b")]);
    }

    #[test]
    fn test_boundary_state_reset() {
        let mut state = BoundaryState::new();
        assert!(state.is_boundary('🇦'));
        assert!(!state.is_boundary('🇧'));
        assert!(state.is_boundary('🇨'));
        state.reset();
        assert!(state.is_boundary('\u{0308}'));
    }

    #[test]
    fn test_segment_bytes_lenient() {
        let bytes = b"a\xFFb\xE2\x82";
        let spans = segment_bytes(bytes);
        assert_eq!(spans, vec![0..1, 1..2, 2..3, 3..5]);
    }

    #[test]
    fn test_segment_bytes_invalid_breaks_clusters() {
        // A combining mark after an invalid byte does not attach across it.
        let mut bytes = b"a\x80".to_vec();
        bytes.extend_from_slice("\u{0308}".as_bytes());
        let spans = segment_bytes(&bytes);
        assert_eq!(spans, vec![0..1, 1..2, 2..4]);
    }

    #[test]
    fn test_segment_bytes_valid_matches_segment() {
        let text = "x🇦🇧\r\ny\u{0301}";
        let spans = segment_bytes(text.as_bytes());
        let clusters: Vec<&str> = spans.iter().map(|r| &text[r.clone()]).collect();
        assert_eq!(clusters, segment(text));
    }
}
