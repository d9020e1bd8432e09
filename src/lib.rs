//! `charfold` - grapheme-aware character handling for fuzzy completion.
//!
//! Splits text into extended grapheme clusters (UAX #29), interns each
//! cluster as a shared [`Character`], and offers a cheap case- and
//! width-insensitive containment test that completion engines run before
//! their real scorer.
//!
//! ```
//! use charfold::{CharacterRepository, Word};
//!
//! let repo = CharacterRepository::new();
//! let candidate = Word::new(&repo, "f𐍈oβaＡaR");
//! let query = Word::new(&repo, "Βａr");
//! assert!(candidate.matches_admissible(&query));
//!
//! let word = Word::new(&repo, "🇦🇧🇨");
//! let flags: Vec<&str> = word.characters().iter().map(|c| c.text()).collect();
//! assert_eq!(flags, vec!["🇦🇧", "🇨"]);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Saturated width casts
#![allow(clippy::module_name_repetitions)] // Allow character::CharacterId etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Accessors are obvious
#![allow(clippy::match_same_arms)] // Rule tables read better one rule per arm

pub mod character;
pub mod error;
pub mod repository;
pub mod unicode;
pub mod word;

// Re-export core types at crate root
pub use character::{Character, CharacterFlags, CharacterId};
pub use error::{Error, Result};
pub use repository::{CharacterRepository, RepositoryOptions, RepositoryStats};
pub use unicode::{FoldTable, segment, segment_bytes};
pub use word::Word;
