//! Segmentation, interning and admissibility benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use charfold::{CharacterRepository, Word, segment, segment_bytes};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MIXED: &str = "naïve café ｆｕｌｌ ωιδε 한국어 👨\u{200D}👩\u{200D}👧 🇫🇷 क्षि";

fn segmentation(c: &mut Criterion) {
    let ascii = "fn main() { println!(\"hello\"); }".repeat(32);

    c.bench_function("segment_ascii_1k", |b| {
        b.iter(|| segment(black_box(&ascii)));
    });

    c.bench_function("segment_mixed", |b| {
        b.iter(|| segment(black_box(MIXED)));
    });

    let mut lossy = MIXED.as_bytes().to_vec();
    lossy.extend_from_slice(b"\xFF\xC3(\xE2\x82");
    c.bench_function("segment_bytes_lossy", |b| {
        b.iter(|| segment_bytes(black_box(&lossy)));
    });
}

fn interning(c: &mut Criterion) {
    let repo = CharacterRepository::new();
    let _ = Word::new(&repo, MIXED);

    c.bench_function("word_new_warm", |b| {
        b.iter(|| Word::new(&repo, black_box(MIXED)));
    });

    c.bench_function("word_new_cold", |b| {
        b.iter(|| {
            let repo = CharacterRepository::new();
            Word::new(&repo, black_box(MIXED))
        });
    });
}

fn admissibility(c: &mut Criterion) {
    let repo = CharacterRepository::new();
    let candidates: Vec<Word> = [
        "CharacterRepository",
        "characters",
        "matches_admissible",
        "GraphemeBreak",
        "ＦｕｌｌＷｉｄｔｈ",
        "segment_bytes",
    ]
    .iter()
    .map(|text| Word::new(&repo, text))
    .collect();
    let query = Word::new(&repo, "chrep");

    c.bench_function("matches_admissible_candidates", |b| {
        b.iter(|| {
            black_box(&candidates)
                .iter()
                .filter(|word| word.matches_admissible(black_box(&query)))
                .count()
        });
    });
}

criterion_group!(benches, segmentation, interning, admissibility);
criterion_main!(benches);
