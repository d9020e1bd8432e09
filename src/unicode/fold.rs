//! Case and width folding of grapheme clusters.
//!
//! A folded key is what two clusters are compared by when case and
//! full-width/half-width differences must be ignored. Folding is driven by
//! two tables, both replaceable through [`FoldTableBuilder`]:
//!
//! 1. width ranges: code points inside them are replaced by their
//!    compatibility decomposition (`Ａ` → `A`, `ｶ` → `カ`),
//! 2. case overrides: simple case folds that differ from the lowercase
//!    mapping (`ς` → `σ`). Everything else is lowercased.
//!
//! The result is then canonically composed so `e\u{301}` and `é` share a key.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Width ranges folded by default: ideographic space and the
/// Halfwidth and Fullwidth Forms block.
pub const DEFAULT_WIDTH_RANGES: &[RangeInclusive<char>] =
    &['\u{3000}'..='\u{3000}', '\u{FF01}'..='\u{FFEF}'];

/// Simple case folds whose target differs from `char::to_lowercase`.
#[rustfmt::skip]
pub const DEFAULT_CASE_OVERRIDES: &[(char, char)] = &[
    ('\u{00B5}', '\u{03BC}'), // MICRO SIGN
    ('\u{017F}', 's'),        // LATIN SMALL LETTER LONG S
    ('\u{0345}', '\u{03B9}'), // COMBINING GREEK YPOGEGRAMMENI
    ('\u{03C2}', '\u{03C3}'), // GREEK SMALL LETTER FINAL SIGMA
    ('\u{03D0}', '\u{03B2}'), // GREEK BETA SYMBOL
    ('\u{03D1}', '\u{03B8}'), // GREEK THETA SYMBOL
    ('\u{03D5}', '\u{03C6}'), // GREEK PHI SYMBOL
    ('\u{03D6}', '\u{03C0}'), // GREEK PI SYMBOL
    ('\u{03F0}', '\u{03BA}'), // GREEK KAPPA SYMBOL
    ('\u{03F1}', '\u{03C1}'), // GREEK RHO SYMBOL
    ('\u{03F5}', '\u{03B5}'), // GREEK LUNATE EPSILON SYMBOL
    ('\u{1E9B}', '\u{1E61}'), // LATIN SMALL LETTER LONG S WITH DOT ABOVE
    ('\u{1FBE}', '\u{03B9}'), // GREEK PROSGEGRAMMENI
];

/// Immutable folding configuration.
///
/// ```
/// use charfold::unicode::FoldTable;
///
/// let table = FoldTable::default();
/// assert_eq!(table.fold("Ａ"), table.fold("a"));
/// assert_eq!(table.fold("Σ"), table.fold("ς"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldTable {
    /// Sorted, non-overlapping.
    width_ranges: Vec<RangeInclusive<char>>,
    /// Sorted by source code point.
    case_overrides: Vec<(char, char)>,
    canonical: bool,
}

impl Default for FoldTable {
    fn default() -> Self {
        Self {
            width_ranges: DEFAULT_WIDTH_RANGES.to_vec(),
            case_overrides: DEFAULT_CASE_OVERRIDES.to_vec(),
            canonical: true,
        }
    }
}

impl FoldTable {
    /// Start building a table from the default ranges and overrides.
    #[must_use]
    pub fn builder() -> FoldTableBuilder {
        FoldTableBuilder::new()
    }

    /// Check whether `ch` falls in one of the width fold ranges.
    #[must_use]
    pub fn is_width_folded(&self, ch: char) -> bool {
        self.width_ranges
            .binary_search_by(|range| {
                if ch < *range.start() {
                    std::cmp::Ordering::Greater
                } else if ch > *range.end() {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Case fold of a single code point, if it has an override.
    #[must_use]
    pub fn case_override(&self, ch: char) -> Option<char> {
        self.case_overrides
            .binary_search_by_key(&ch, |&(from, _)| from)
            .ok()
            .map(|idx| self.case_overrides[idx].1)
    }

    /// Whether folded keys are canonically composed.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Fold one grapheme cluster into its matching key.
    #[must_use]
    pub fn fold(&self, cluster: &str) -> String {
        if cluster.is_ascii() && !self.has_ascii_overrides() {
            return cluster.to_ascii_lowercase();
        }

        let mut folded = String::with_capacity(cluster.len());
        for ch in cluster.chars() {
            if self.is_width_folded(ch) {
                unicode_normalization::char::decompose_compatible(ch, |d| {
                    self.push_case_folded(&mut folded, d);
                });
            } else {
                self.push_case_folded(&mut folded, ch);
            }
        }

        if self.canonical && !folded.is_ascii() {
            folded.nfc().collect()
        } else {
            folded
        }
    }

    fn has_ascii_overrides(&self) -> bool {
        self.case_overrides
            .first()
            .is_some_and(|&(from, _)| from.is_ascii())
    }

    fn push_case_folded(&self, out: &mut String, ch: char) {
        match self.case_override(ch) {
            Some(folded) => out.push(folded),
            None => out.extend(ch.to_lowercase()),
        }
    }
}

/// Builder for a custom [`FoldTable`].
#[derive(Clone, Debug)]
pub struct FoldTableBuilder {
    width_ranges: Vec<RangeInclusive<u32>>,
    case_overrides: Vec<(char, char)>,
    canonical: bool,
}

impl Default for FoldTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldTableBuilder {
    /// Builder seeded with the default ranges and overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width_ranges: DEFAULT_WIDTH_RANGES
                .iter()
                .map(|r| u32::from(*r.start())..=u32::from(*r.end()))
                .collect(),
            case_overrides: DEFAULT_CASE_OVERRIDES.to_vec(),
            canonical: true,
        }
    }

    /// Builder with no width ranges and no case overrides.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width_ranges: Vec::new(),
            case_overrides: Vec::new(),
            canonical: true,
        }
    }

    /// Add a range of code points to width fold.
    #[must_use]
    pub fn width_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.width_ranges.push(range);
        self
    }

    /// Fold `from` to `to` instead of lowercasing it.
    #[must_use]
    pub fn case_override(mut self, from: char, to: char) -> Self {
        self.case_overrides.push((from, to));
        self
    }

    /// Enable or disable canonical composition of folded keys.
    #[must_use]
    pub fn canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    /// Validate and freeze the table.
    ///
    /// Overlapping or adjacent width ranges are merged.
    pub fn build(self) -> Result<FoldTable> {
        let mut ranges = Vec::with_capacity(self.width_ranges.len());
        for range in self.width_ranges {
            let (start, end) = (*range.start(), *range.end());
            match (char::from_u32(start), char::from_u32(end)) {
                (Some(lo), Some(hi)) if lo <= hi => ranges.push(lo..=hi),
                _ => return Err(Error::InvalidFoldRange { start, end }),
            }
        }
        ranges.sort_by_key(|r| *r.start());

        let mut width_ranges: Vec<RangeInclusive<char>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            if let Some(last) = width_ranges.last_mut() {
                if u32::from(*range.start()) <= u32::from(*last.end()) + 1 {
                    let end = (*last.end()).max(*range.end());
                    *last = *last.start()..=end;
                    continue;
                }
            }
            width_ranges.push(range);
        }

        let mut case_overrides = self.case_overrides;
        case_overrides.sort_by_key(|&(from, _)| from);
        for pair in case_overrides.windows(2) {
            let ((from, existing), (next, requested)) = (pair[0], pair[1]);
            if from == next && existing != requested {
                return Err(Error::ConflictingCaseOverride {
                    from,
                    existing,
                    requested,
                });
            }
        }
        case_overrides.dedup();

        tracing::debug!(
            width_ranges = width_ranges.len(),
            case_overrides = case_overrides.len(),
            canonical = self.canonical,
            "built fold table"
        );

        Ok(FoldTable {
            width_ranges,
            case_overrides,
            canonical: self.canonical,
        })
    }
}
