//! Fuzz target for word construction and admissibility.

#![no_main]

use arbitrary::Arbitrary;
use charfold::{CharacterRepository, Word};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    candidate: &'a str,
    query: &'a str,
    reset_between: bool,
}

fuzz_target!(|input: Input<'_>| {
    let repo = CharacterRepository::new();
    let candidate = Word::new(&repo, input.candidate);
    if input.reset_between {
        repo.reset();
    }
    let query = Word::new(&repo, input.query);

    assert_eq!(
        candidate.characters().iter().map(|c| c.text()).collect::<String>(),
        input.candidate
    );
    assert!(candidate.matches_admissible(&candidate));

    let contained = query
        .folded_units()
        .iter()
        .all(|unit| candidate.folded_units().contains(unit));
    assert_eq!(candidate.matches_admissible(&query), contained);
});
