//! Interned grapheme clusters and their matching metadata.
//!
//! A [`Character`] is one extended grapheme cluster together with everything
//! a matcher needs to compare it: the folded key, the accent-free base
//! letter, swapped case, and a few classification flags. Characters are only
//! created by a [`CharacterRepository`](crate::CharacterRepository), which
//! guarantees that equal text maps to one shared instance.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bitflags::bitflags;
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthStr;

use crate::unicode::{FoldTable, is_punctuation};

bitflags! {
    /// Classification of a cluster, taken from its leading code point.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharacterFlags: u8 {
        /// Leading code point is uppercase.
        const UPPERCASE   = 0x01;
        /// Leading code point is alphabetic.
        const LETTER      = 0x02;
        /// Leading code point is punctuation.
        const PUNCTUATION = 0x04;
        /// Cluster is a single code point with no canonical decomposition.
        const BASE        = 0x08;
        /// Leading code point is whitespace.
        const WHITESPACE  = 0x10;
    }
}

/// Handle to a character inside the repository that created it.
///
/// Equal ids always refer to equal text. Ids handed out before a
/// [`reset`](crate::CharacterRepository::reset) never equal ids handed out
/// after it, because the generation differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId {
    generation: u32,
    index: usize,
}

impl CharacterId {
    pub(crate) const fn new(generation: u32, index: usize) -> Self {
        Self { generation, index }
    }

    /// Repository generation this id belongs to.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Slot index within that generation.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// One extended grapheme cluster. Immutable once built.
///
/// Equality and hashing use the cluster text only, so a `Character` can be
/// looked up by `&str`.
pub struct Character {
    id: CharacterId,
    text: Box<str>,
    folded: Arc<str>,
    base: Box<str>,
    swapped_case: Box<str>,
    flags: CharacterFlags,
    width: u8,
}

impl Character {
    pub(crate) fn new(id: CharacterId, text: &str, fold_table: &FoldTable) -> Self {
        let folded: Arc<str> = Arc::from(fold_table.fold(text));

        let mut decomposed = text.nfd();
        let base: Box<str> = decomposed
            .next()
            .map(|first| first.to_lowercase().collect::<String>())
            .unwrap_or_default()
            .into_boxed_str();
        let single = decomposed.next().is_none() && text.chars().nth(1).is_none();

        let mut flags = text.chars().next().map_or_else(CharacterFlags::empty, classify);
        if single && !text.is_empty() {
            flags |= CharacterFlags::BASE;
        }

        // Saturate: clusters are rarely wider than two columns.
        let width = text.width().min(usize::from(u8::MAX)) as u8;

        Self {
            id,
            text: text.into(),
            folded,
            base,
            swapped_case: swap_case(text).into_boxed_str(),
            flags,
            width,
        }
    }

    /// Repository handle of this character.
    #[must_use]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// The exact cluster text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case- and width-folded matching key.
    #[must_use]
    pub fn folded_key(&self) -> &str {
        &self.folded
    }

    /// Shared handle to the folded key.
    #[must_use]
    pub fn folded_key_shared(&self) -> Arc<str> {
        Arc::clone(&self.folded)
    }

    /// Lowercased leading code point of the canonical decomposition.
    ///
    /// `"É"` and `"e\u{301}"` both have base `"e"`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The cluster with upper and lower case swapped.
    #[must_use]
    pub fn swapped_case(&self) -> &str {
        &self.swapped_case
    }

    #[must_use]
    pub fn flags(&self) -> CharacterFlags {
        self.flags
    }

    #[must_use]
    pub fn is_uppercase(&self) -> bool {
        self.flags.contains(CharacterFlags::UPPERCASE)
    }

    #[must_use]
    pub fn is_letter(&self) -> bool {
        self.flags.contains(CharacterFlags::LETTER)
    }

    #[must_use]
    pub fn is_punctuation(&self) -> bool {
        self.flags.contains(CharacterFlags::PUNCTUATION)
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.flags.contains(CharacterFlags::BASE)
    }

    /// Terminal display width in columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// True only for the empty "no character" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `self` and `other` match ignoring case and width.
    #[must_use]
    pub fn matches_folded(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

fn classify(ch: char) -> CharacterFlags {
    let mut flags = CharacterFlags::empty();
    if ch.is_uppercase() {
        flags |= CharacterFlags::UPPERCASE;
    }
    if ch.is_alphabetic() {
        flags |= CharacterFlags::LETTER;
    }
    if is_punctuation(ch) {
        flags |= CharacterFlags::PUNCTUATION;
    }
    if ch.is_whitespace() {
        flags |= CharacterFlags::WHITESPACE;
    }
    flags
}

fn swap_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Character {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Character {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("folded", &self.folded)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
