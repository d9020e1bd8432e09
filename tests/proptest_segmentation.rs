//! Property-based tests for segmentation, interning and admissibility.

#![allow(clippy::uninlined_format_args)]

use std::sync::Arc;

use charfold::{CharacterRepository, Word, segment, segment_bytes};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

/// Code points whose break properties are stable across recent Unicode
/// releases, covering every rule that does not depend on Indic conjuncts.
const ALPHABET: &[char] = &[
    'a', 'Z', '0', ' ', '\r', '\n', '\u{1}', '\u{0308}', '\u{200D}', '\u{0903}', '\u{0600}',
    '🇦', '🇧', '🇨', '👶', '🏿', '🛑', 'ᄀ', 'ᅠ', 'ᆨ', '가', '각', 'é',
];

fn alphabet_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

fn ascii_letters() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,16}"
}

/// Lowercase letters from Latin-1, Greek and Cyrillic paired with their
/// single code point uppercase forms (`ß` has none and is skipped).
fn case_pairs() -> Vec<(char, char)> {
    ['\u{00B5}'..='\u{00FF}', '\u{0391}'..='\u{03C9}', '\u{0410}'..='\u{044F}']
        .into_iter()
        .flatten()
        .filter(|c| c.is_lowercase())
        .filter_map(|lower| {
            let mut upper = lower.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(upper), None) => Some((upper, lower)),
                _ => None,
            }
        })
        .collect()
}

fn cased_text() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(prop::sample::select(case_pairs()), 0..16).prop_map(|pairs| {
        pairs.into_iter().unzip()
    })
}

proptest! {
    #[test]
    fn clusters_concatenate_to_input(s in "\\PC{0,100}") {
        let clusters = segment(&s);
        prop_assert_eq!(clusters.concat(), s);
    }

    #[test]
    fn clusters_are_never_empty(s in "\\PC{0,100}") {
        for cluster in segment(&s) {
            prop_assert!(!cluster.is_empty());
        }
    }

    #[test]
    fn agrees_with_unicode_segmentation(s in alphabet_text()) {
        let expected: Vec<&str> = s.graphemes(true).collect();
        prop_assert_eq!(segment(&s), expected);
    }

    #[test]
    fn byte_spans_cover_input(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let spans = segment_bytes(&bytes);
        let mut end = 0;
        for span in &spans {
            prop_assert_eq!(span.start, end);
            prop_assert!(span.end > span.start);
            end = span.end;
        }
        prop_assert_eq!(end, bytes.len());
    }

    #[test]
    fn byte_spans_match_str_segmentation(s in "\\PC{0,50}") {
        let from_bytes: Vec<&str> = segment_bytes(s.as_bytes())
            .into_iter()
            .map(|span| &s[span])
            .collect();
        prop_assert_eq!(from_bytes, segment(&s));
    }

    #[test]
    fn interning_is_idempotent(s in "\\PC{0,40}") {
        let repo = CharacterRepository::new();
        let first = Word::new(&repo, &s);
        let entries = repo.len();
        let second = Word::new(&repo, &s);

        prop_assert_eq!(repo.len(), entries);
        for (a, b) in first.characters().iter().zip(second.characters()) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn word_admits_itself(s in "\\PC{0,40}") {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, &s);
        prop_assert!(word.matches_admissible(&word));
    }

    #[test]
    fn admissibility_is_unit_containment(s in "\\PC{0,30}", q in "\\PC{0,12}") {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, &s);
        let query = Word::new(&repo, &q);
        let contained = query
            .folded_units()
            .iter()
            .all(|unit| word.folded_units().contains(unit));
        prop_assert_eq!(word.matches_admissible(&query), contained);
    }

    #[test]
    fn rearranged_letters_are_admissible(s in "[a-zA-Z0-9]{1,20}", shift in 0usize..20) {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, &s);

        let mut letters: Vec<char> = s.chars().rev().collect();
        let len = letters.len();
        letters.rotate_left(shift % len);
        letters.push(letters[0]);
        let query: String = letters.into_iter().collect();

        prop_assert!(word.matches_admissible(&Word::new(&repo, &query)));
    }

    #[test]
    fn prefixes_are_admissible(s in "\\PC{0,30}") {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, &s);
        let clusters = segment(&s);
        for n in 0..=clusters.len() {
            let prefix = Word::new(&repo, &clusters[..n].concat());
            prop_assert!(
                word.matches_admissible(&prefix),
                "{:?} should admit prefix {:?}",
                s,
                prefix.text()
            );
        }
    }

    #[test]
    fn case_and_width_are_symmetric(s in ascii_letters()) {
        let repo = CharacterRepository::new();
        let upper = Word::new(&repo, &s.to_ascii_uppercase());
        let lower = Word::new(&repo, &s.to_ascii_lowercase());
        let wide: String = s
            .chars()
            .filter_map(|c| char::from_u32(u32::from(c) + 0xFEE0))
            .collect();
        let wide = Word::new(&repo, &wide);

        prop_assert!(upper.matches_admissible(&lower));
        prop_assert!(lower.matches_admissible(&upper));
        prop_assert!(wide.matches_admissible(&lower));
        prop_assert!(lower.matches_admissible(&wide));
        prop_assert_eq!(upper.folded_units(), wide.folded_units());
    }

    #[test]
    fn non_ascii_case_pairs_fold_together((upper, lower) in cased_text()) {
        let repo = CharacterRepository::new();
        let upper = Word::new(&repo, &upper);
        let lower = Word::new(&repo, &lower);

        prop_assert_eq!(upper.folded_units(), lower.folded_units());
        prop_assert!(upper.matches_admissible(&lower));
        prop_assert!(lower.matches_admissible(&upper));
    }
}
