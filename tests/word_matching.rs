//! Admissibility tests for completion candidates.

use charfold::unicode::FoldTableBuilder;
use charfold::{CharacterRepository, RepositoryOptions, Word};

fn assert_matches(repo: &CharacterRepository, candidate: &str, queries: &[&str]) {
    let word = Word::new(repo, candidate);
    for query in queries {
        assert!(
            word.matches_admissible(&Word::new(repo, query)),
            "{candidate:?} should admit {query:?}"
        );
    }
}

fn assert_rejects(repo: &CharacterRepository, candidate: &str, queries: &[&str]) {
    let word = Word::new(repo, candidate);
    for query in queries {
        assert!(
            !word.matches_admissible(&Word::new(repo, query)),
            "{candidate:?} should reject {query:?}"
        );
    }
}

#[test]
fn mixed_script_candidate_admits_folded_queries() {
    let repo = CharacterRepository::new();
    assert_matches(
        &repo,
        "f𐍈oβaＡaR",
        &[
            "f𐍈oβaＡar",
            "F𐍈oβaａaR",
            "foΒar",
            "RＡβof",
            "βfr𐍈ａ",
            "fβr",
            "r",
            "βββ",
            "",
        ],
    );
}

#[test]
fn mixed_script_candidate_rejects_foreign_units() {
    let repo = CharacterRepository::new();
    assert_rejects(
        &repo,
        "Fo𐍈βＡr",
        &["Fo𐍈βＡrε", "gggg", "χ", "nfooΒａr", "Fβrmmm"],
    );
}

#[test]
fn empty_words() {
    let repo = CharacterRepository::new();
    let empty = Word::new(&repo, "");

    assert!(empty.matches_admissible(&empty));
    assert!(Word::new(&repo, "anything").matches_admissible(&empty));
    assert!(!empty.matches_admissible(&Word::new(&repo, "a")));
}

#[test]
fn order_and_multiplicity_are_ignored() {
    let repo = CharacterRepository::new();
    assert_matches(&repo, "abc", &["cba", "aaaa", "cabcab"]);
    assert_rejects(&repo, "abc", &["abcd", "x"]);
}

#[test]
fn greek_variant_forms_fold_together() {
    let repo = CharacterRepository::new();
    assert_matches(&repo, "βσμ", &["ϐ", "ς", "µ", "Σ", "Β"]);
    assert_matches(&repo, "ϐ", &["β", "Β"]);
}

#[test]
fn full_width_space_folds_to_space() {
    let repo = CharacterRepository::new();
    assert_matches(&repo, "foo bar", &["\u{3000}", "ＦＯＯ"]);
}

#[test]
fn composed_and_decomposed_clusters_agree() {
    let repo = CharacterRepository::new();
    assert_matches(&repo, "café", &["CAFE\u{0301}", "É"]);
    assert_rejects(&repo, "café", &["e"]);
}

#[test]
fn emoji_clusters_are_single_units() {
    let repo = CharacterRepository::new();
    let family = "👨\u{200D}👩\u{200D}👧";
    let word = Word::new(&repo, &format!("hi{family}"));

    assert_eq!(word.len(), 3);
    assert!(word.matches_admissible(&Word::new(&repo, family)));
    // The lone parts of a joined sequence are not units of the word.
    assert!(!word.matches_admissible(&Word::new(&repo, "👨")));
}

#[test]
fn flags_pair_regional_indicators() {
    let repo = CharacterRepository::new();
    let word = Word::new(&repo, "🇺🇸🇫🇷");

    assert_eq!(word.len(), 2);
    assert!(word.matches_admissible(&Word::new(&repo, "🇫🇷")));
    assert!(!word.matches_admissible(&Word::new(&repo, "🇸🇫")));
}

#[test]
fn table_without_overrides_keeps_variant_forms() {
    let table = FoldTableBuilder::empty()
        .width_range(0xFF01..=0xFF5E)
        .build()
        .expect("valid table");
    let repo = CharacterRepository::with_options(RepositoryOptions {
        fold_table: table,
        ..RepositoryOptions::default()
    });

    // Lowercasing still applies, but ϐ no longer folds to β.
    assert_matches(&repo, "Ａb", &["a", "B"]);
    assert_rejects(&repo, "β", &["ϐ"]);
}

#[test]
fn global_words_share_characters() {
    let first = Word::global("shared-global-text");
    let second = Word::global("text");
    assert!(first.matches_admissible(&second));
    assert!(std::sync::Arc::ptr_eq(
        &first.characters()[14],
        &second.characters()[0]
    ));
}
