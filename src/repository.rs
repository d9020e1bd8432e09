//! Process-wide interning of grapheme clusters.
//!
//! The repository maps cluster text to one shared [`Character`], so equal
//! clusters are built (and folded) only once no matter how many words contain
//! them.
//!
//! # Design
//!
//! - Slots store `Arc<Character>`; a [`CharacterId`] is `(generation, index)`.
//! - A `HashSet` keyed by cluster text gives O(1) `intern()` lookups.
//! - Lookups run under a read lock. Misses take the write lock and re-check
//!   before building, so each text is constructed at most once per generation.
//! - [`reset()`](CharacterRepository::reset) clears every slot and bumps the
//!   generation. Characters already handed out stay valid values, but later
//!   interning of the same text yields a new instance.
//!
//! # Usage
//!
//! ```
//! use charfold::CharacterRepository;
//! use std::sync::Arc;
//!
//! let repo = CharacterRepository::new();
//! let a = repo.intern("é");
//! let b = repo.intern("é");
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(repo.len(), 1);
//!
//! repo.reset();
//! assert!(repo.is_empty());
//! assert!(!Arc::ptr_eq(&a, &repo.intern("é")));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::character::{Character, CharacterId};
use crate::unicode::FoldTable;

/// Default soft limit for repository size (1 million entries).
pub const DEFAULT_SOFT_LIMIT: usize = 1_000_000;

/// Utilization threshold considered "high" (80%).
pub const HIGH_UTILIZATION_THRESHOLD: usize = 80;

/// Repository configuration.
#[derive(Clone, Debug)]
pub struct RepositoryOptions {
    /// Folding applied to every interned cluster.
    pub fold_table: FoldTable,
    /// Advisory entry count; exceeding it is logged, never enforced.
    pub soft_limit: usize,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            fold_table: FoldTable::default(),
            soft_limit: DEFAULT_SOFT_LIMIT,
        }
    }
}

/// Statistics about repository utilization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepositoryStats {
    /// Number of interned characters in the current generation.
    pub entries: usize,
    /// Number of resets so far.
    pub generation: u32,
    /// Configured soft limit.
    pub soft_limit: usize,
    /// Current utilization percentage (0-100, may exceed 100).
    pub utilization_percent: usize,
}

impl RepositoryStats {
    /// Check if utilization is at or above a given threshold percentage.
    #[must_use]
    pub fn is_above_threshold(&self, threshold_percent: usize) -> bool {
        self.utilization_percent >= threshold_percent
    }
}

/// Index entry: hashes and compares as the cluster text.
struct Entry(Arc<Character>);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.0.text() == other.0.text()
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.text().hash(state);
    }
}

impl Borrow<str> for Entry {
    fn borrow(&self) -> &str {
        self.0.text()
    }
}

#[derive(Default)]
struct Inner {
    generation: u32,
    /// Slot `i` holds the character with index `i`.
    slots: Vec<Arc<Character>>,
    index: HashSet<Entry>,
    /// Soft limit warning already emitted for this generation.
    warned: bool,
}

impl Inner {
    fn lookup(&self, text: &str) -> Option<Arc<Character>> {
        self.index.get(text).map(|entry| Arc::clone(&entry.0))
    }

    /// Return the existing character for `text` or build and store one.
    fn get_or_insert(
        &mut self,
        text: &str,
        fold_table: &FoldTable,
        soft_limit: usize,
    ) -> Arc<Character> {
        if let Some(existing) = self.lookup(text) {
            return existing;
        }

        let id = CharacterId::new(self.generation, self.slots.len());
        let character = Arc::new(Character::new(id, text, fold_table));
        self.slots.push(Arc::clone(&character));
        self.index.insert(Entry(Arc::clone(&character)));
        tracing::trace!(text, index = id.index(), "interned character");

        if !self.warned && self.slots.len() > soft_limit {
            self.warned = true;
            tracing::warn!(
                entries = self.slots.len(),
                soft_limit,
                generation = self.generation,
                "character repository exceeded soft limit"
            );
        }

        character
    }
}

/// Thread-safe interning cache from cluster text to [`Character`].
///
/// Share one repository (usually [`CharacterRepository::global`]) across
/// every [`Word`](crate::Word) that should reuse the same characters.
pub struct CharacterRepository {
    fold_table: FoldTable,
    soft_limit: usize,
    inner: RwLock<Inner>,
}

impl Default for CharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CharacterRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterRepository")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl CharacterRepository {
    /// Create an empty repository with the default fold table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(RepositoryOptions::default())
    }

    /// Create an empty repository that folds with `fold_table`.
    #[must_use]
    pub fn with_fold_table(fold_table: FoldTable) -> Self {
        Self::with_options(RepositoryOptions {
            fold_table,
            ..RepositoryOptions::default()
        })
    }

    /// Create an empty repository with a custom soft limit.
    #[must_use]
    pub fn with_soft_limit(soft_limit: usize) -> Self {
        Self::with_options(RepositoryOptions {
            soft_limit,
            ..RepositoryOptions::default()
        })
    }

    #[must_use]
    pub fn with_options(options: RepositoryOptions) -> Self {
        Self {
            fold_table: options.fold_table,
            soft_limit: options.soft_limit,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// The process-wide repository, created on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<CharacterRepository> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    // Slots and index change together, after the character is built, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Folding used for every character this repository builds.
    #[must_use]
    pub fn fold_table(&self) -> &FoldTable {
        &self.fold_table
    }

    /// Configured soft limit.
    #[must_use]
    pub fn soft_limit(&self) -> usize {
        self.soft_limit
    }

    /// Return the shared character for `text`, creating it on first request.
    #[must_use]
    pub fn intern(&self, text: &str) -> Arc<Character> {
        if let Some(existing) = self.read().lookup(text) {
            return existing;
        }
        self.write()
            .get_or_insert(text, &self.fold_table, self.soft_limit)
    }

    /// Intern every text in order.
    ///
    /// Equivalent to calling [`intern`](Self::intern) for each item, but takes
    /// each lock at most once. All returned characters belong to the same
    /// generation even if a reset races with the call.
    #[must_use]
    pub fn intern_all<'a, I>(&self, texts: I) -> Vec<Arc<Character>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let texts: Vec<&str> = texts.into_iter().collect();

        let (generation, found) = {
            let inner = self.read();
            let found: Vec<Option<Arc<Character>>> =
                texts.iter().map(|text| inner.lookup(text)).collect();
            (inner.generation, found)
        };

        if found.iter().all(Option::is_some) {
            return found.into_iter().flatten().collect();
        }

        let mut inner = self.write();
        let same_generation = inner.generation == generation;
        texts
            .iter()
            .zip(found)
            .map(|(text, hit)| match hit {
                Some(character) if same_generation => character,
                _ => inner.get_or_insert(text, &self.fold_table, self.soft_limit),
            })
            .collect()
    }

    /// Look up `text` without inserting it.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<Arc<Character>> {
        self.read().lookup(text)
    }

    /// Resolve a handle from the current generation.
    ///
    /// Returns `None` for ids from before the last reset.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<Arc<Character>> {
        let inner = self.read();
        if id.generation() != inner.generation {
            return None;
        }
        inner.slots.get(id.index()).map(Arc::clone)
    }

    /// Number of interned characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().slots.len()
    }

    /// Check if nothing is interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().slots.is_empty()
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.read().generation
    }

    /// Drop every entry.
    ///
    /// Characters already handed out remain valid, but are no longer shared
    /// with future lookups. Exclusive with all in-flight interning.
    pub fn reset(&self) {
        let mut inner = self.write();
        let dropped = inner.slots.len();
        inner.slots.clear();
        inner.index.clear();
        inner.generation = inner.generation.wrapping_add(1);
        inner.warned = false;
        tracing::debug!(
            dropped,
            generation = inner.generation,
            "character repository reset"
        );
    }

    /// Get current utilization statistics.
    #[must_use]
    pub fn stats(&self) -> RepositoryStats {
        let inner = self.read();
        let entries = inner.slots.len();
        let utilization_percent = (entries * 100).checked_div(self.soft_limit).unwrap_or(0);
        RepositoryStats {
            entries,
            generation: inner.generation,
            soft_limit: self.soft_limit,
            utilization_percent,
        }
    }

    /// Check if utilization is at or above [`HIGH_UTILIZATION_THRESHOLD`].
    #[must_use]
    pub fn is_high_utilization(&self) -> bool {
        self.stats().is_above_threshold(HIGH_UTILIZATION_THRESHOLD)
    }
}
