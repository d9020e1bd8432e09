//! Conformance tests against the grapheme break reference corpus.
//!
//! Cases are stored as a JSON fixture derived from `GraphemeBreakTest.txt`
//! plus the extra sequences the completion engine relies on. Every case is
//! checked three ways: plain segmentation, streaming boundary detection, and
//! `Word` construction through an isolated repository.

#![allow(clippy::uninlined_format_args)]

use std::sync::{Arc, Once};

use charfold::unicode::{BoundaryState, graphemes};
use charfold::{CharacterRepository, Word, segment, segment_bytes};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct FixtureSet {
    source: String,
    cases: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
struct FixtureCase {
    text: String,
    clusters: Vec<String>,
}

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn load_fixtures() -> FixtureSet {
    let data = std::fs::read_to_string("tests/conformance/fixtures/grapheme_break.json")
        .expect("read conformance fixture");
    serde_json::from_str(&data).expect("parse fixture")
}

#[test]
fn fixture_is_populated() {
    let fixtures = load_fixtures();
    assert_eq!(fixtures.source, "GraphemeBreakTest.txt");
    assert!(fixtures.cases.len() > 600, "fixture unexpectedly small");
}

#[test]
fn segment_matches_reference() {
    setup_test_logging();
    let fixtures = load_fixtures();
    let mut failures = Vec::new();

    for case in &fixtures.cases {
        let got = segment(&case.text);
        if got != case.clusters {
            failures.push(format!(
                "{:?}: expected {:?}, got {:?}",
                case.text, case.clusters, got
            ));
        }
    }

    info!(
        total = fixtures.cases.len(),
        failed = failures.len(),
        "segmentation conformance"
    );
    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn boundary_state_matches_reference() {
    let fixtures = load_fixtures();

    for case in &fixtures.cases {
        let mut expected = Vec::new();
        for cluster in &case.clusters {
            let mut chars = cluster.chars();
            if chars.next().is_some() {
                expected.push(true);
            }
            expected.extend(chars.map(|_| false));
        }

        let mut state = BoundaryState::new();
        let got: Vec<bool> = case.text.chars().map(|c| state.is_boundary(c)).collect();
        assert_eq!(got, expected, "boundaries for {:?}", case.text);
    }
}

#[test]
fn segment_bytes_matches_reference() {
    let fixtures = load_fixtures();

    for case in &fixtures.cases {
        let spans = segment_bytes(case.text.as_bytes());
        let clusters: Vec<&str> = spans.iter().map(|r| &case.text[r.clone()]).collect();
        assert_eq!(clusters, case.clusters, "byte spans for {:?}", case.text);
    }
}

#[test]
fn words_contain_interned_clusters() {
    setup_test_logging();
    let fixtures = load_fixtures();

    for case in &fixtures.cases {
        let repo = CharacterRepository::new();
        let word = Word::new(&repo, &case.text);
        let expected = repo.intern_all(case.clusters.iter().map(String::as_str));

        assert_eq!(word.len(), expected.len(), "cluster count for {:?}", case.text);
        for (got, want) in word.characters().iter().zip(&expected) {
            assert!(
                Arc::ptr_eq(got, want),
                "{:?} should reuse interned {:?}",
                case.text,
                want.text()
            );
        }
        debug!(text = ?case.text, clusters = word.len(), "word conformance");
    }
}

#[test]
fn grapheme_iterator_offsets_are_contiguous() {
    let fixtures = load_fixtures();

    for case in &fixtures.cases {
        let mut iter = graphemes(&case.text);
        let mut expected_offset = 0;
        while let Some(cluster) = {
            assert_eq!(iter.offset(), expected_offset);
            iter.next()
        } {
            expected_offset += cluster.len();
        }
        assert_eq!(expected_offset, case.text.len());
    }
}
