//! Unicode utilities: grapheme segmentation, character properties, folding.

mod category;
mod fold;
mod grapheme;
mod tables;

pub use category::{
    GraphemeBreak, IndicConjunctBreak, grapheme_break, indic_conjunct_break,
    is_extended_pictographic, is_punctuation,
};
pub use fold::{DEFAULT_CASE_OVERRIDES, DEFAULT_WIDTH_RANGES, FoldTable, FoldTableBuilder};
pub use grapheme::{BoundaryState, Graphemes, grapheme_indices, graphemes, segment, segment_bytes};
