//! Error types for charfold.
//!
//! Segmentation, interning, and matching never fail. Only building a custom
//! [`FoldTable`](crate::unicode::FoldTable) can be rejected.

use std::fmt;

/// Result type alias for charfold operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for charfold operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Width fold range is reversed or leaves the Unicode scalar range.
    InvalidFoldRange { start: u32, end: u32 },
    /// The same code point was given two different case folds.
    ConflictingCaseOverride {
        from: char,
        existing: char,
        requested: char,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFoldRange { start, end } => {
                write!(f, "invalid fold range: U+{start:04X}..=U+{end:04X}")
            }
            Self::ConflictingCaseOverride {
                from,
                existing,
                requested,
            } => {
                write!(
                    f,
                    "conflicting case override for {from:?}: already folds to {existing:?}, requested {requested:?}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFoldRange {
            start: 0xFF5E,
            end: 0xFF01,
        };
        assert!(err.to_string().contains("U+FF5E..=U+FF01"));

        let err = Error::ConflictingCaseOverride {
            from: 'ς',
            existing: 'σ',
            requested: 'x',
        };
        let msg = err.to_string();
        assert!(msg.contains("conflicting case override"));
        assert!(msg.contains("'σ'"));
    }
}
