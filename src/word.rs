//! Segmented words and the folded containment pre-filter.

use std::fmt;
use std::sync::Arc;

use crate::character::Character;
use crate::repository::CharacterRepository;
use crate::unicode::graphemes;

/// Text split into interned grapheme clusters.
///
/// Concatenating the text of [`characters`](Self::characters) always gives
/// back [`text`](Self::text).
///
/// ```
/// use charfold::{CharacterRepository, Word};
///
/// let repo = CharacterRepository::new();
/// let candidate = Word::new(&repo, "FooBar");
/// assert!(candidate.matches_admissible(&Word::new(&repo, "rab")));
/// assert!(!candidate.matches_admissible(&Word::new(&repo, "baz")));
/// ```
#[derive(Clone)]
pub struct Word {
    text: String,
    characters: Vec<Arc<Character>>,
    /// Distinct folded keys, sorted.
    folded_units: Vec<Arc<str>>,
}

impl Word {
    /// Segment `text` and intern its clusters through `repository`.
    #[must_use]
    pub fn new(repository: &CharacterRepository, text: &str) -> Self {
        let characters = repository.intern_all(graphemes(text));

        let mut folded_units: Vec<Arc<str>> = characters
            .iter()
            .map(|c| c.folded_key_shared())
            .collect();
        folded_units.sort_unstable();
        folded_units.dedup();

        Self {
            text: text.to_owned(),
            characters,
            folded_units,
        }
    }

    /// Build a word against [`CharacterRepository::global`].
    #[must_use]
    pub fn global(text: &str) -> Self {
        Self::new(CharacterRepository::global(), text)
    }

    /// The original text, verbatim.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Clusters in order.
    #[must_use]
    pub fn characters(&self) -> &[Arc<Character>] {
        &self.characters
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Distinct folded keys of this word's clusters, sorted.
    #[must_use]
    pub fn folded_units(&self) -> &[Arc<str>] {
        &self.folded_units
    }

    /// Check that every folded unit of `other` also occurs in `self`.
    ///
    /// Order and multiplicity are ignored, so this may accept candidates a
    /// subsequence matcher later rejects, but never rejects one it would
    /// accept. An empty `other` is always admissible.
    #[must_use]
    pub fn matches_admissible(&self, other: &Self) -> bool {
        if other.folded_units.len() > self.folded_units.len() {
            return false;
        }

        // Both lists are sorted and deduplicated: a single merge pass suffices.
        let mut haystack = self.folded_units.iter();
        other.folded_units.iter().all(|needle| {
            haystack
                .by_ref()
                .find(|unit| **unit >= *needle)
                .is_some_and(|unit| unit == needle)
        })
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clusters: Vec<&str> = self.characters.iter().map(|c| c.text()).collect();
        f.debug_struct("Word")
            .field("text", &self.text)
            .field("characters", &clusters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(word: &Word) -> Vec<&str> {
        word.characters().iter().map(|c| c.text()).collect()
    }

    #[test]
    fn test_empty_word() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "");
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
        assert!(word.folded_units().is_empty());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_characters_reproduce_text() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "a🇦🇧🇨b\r\n");
        assert_eq!(texts(&word), vec!["a", "🇦🇧", "🇨", "b", "\r\n"]);
        assert_eq!(texts(&word).concat(), word.text());
    }

    #[test]
    fn test_characters_are_shared() {
        let repo = CharacterRepository::new();
        let first = Word::new(&repo, "abc");
        let second = Word::new(&repo, "cab");
        assert!(Arc::ptr_eq(&first.characters()[0], &second.characters()[1]));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_folded_units_are_distinct() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "aAａＡb");
        let units: Vec<&str> = word.folded_units().iter().map(AsRef::as_ref).collect();
        assert_eq!(units, vec!["a", "b"]);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_matches_admissible_basic() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "f𐍈oβaＡaR");
        assert!(word.matches_admissible(&Word::new(&repo, "βββ")));
        assert!(word.matches_admissible(&Word::new(&repo, "RＡβof")));
        assert!(!word.matches_admissible(&Word::new(&repo, "χ")));
    }

    #[test]
    fn test_matches_admissible_empty() {
        let repo = CharacterRepository::new();
        let empty = Word::new(&repo, "");
        assert!(empty.matches_admissible(&empty));
        assert!(Word::new(&repo, "x").matches_admissible(&empty));
        assert!(!empty.matches_admissible(&Word::new(&repo, "x")));
    }

    #[test]
    fn test_matches_admissible_merge_walk() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "bdf");
        // Needles before, between, and after every unit of the haystack.
        assert!(!word.matches_admissible(&Word::new(&repo, "a")));
        assert!(!word.matches_admissible(&Word::new(&repo, "bc")));
        assert!(!word.matches_admissible(&Word::new(&repo, "fg")));
        assert!(word.matches_admissible(&Word::new(&repo, "fdb")));
        assert!(word.matches_admissible(&Word::new(&repo, "DF")));
    }

    #[test]
    fn test_multi_code_point_cluster_folds_as_unit() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "É");
        assert!(word.matches_admissible(&Word::new(&repo, "e\u{0301}")));
        // A bare "e" is a different cluster from "é".
        assert!(!word.matches_admissible(&Word::new(&repo, "e")));
    }

    #[test]
    fn test_debug_lists_clusters() {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, "ab");
        let debug = format!("{word:?}");
        assert!(debug.contains(r#"["a", "b"]"#));
        assert_eq!(word.to_string(), "ab");
    }
}
