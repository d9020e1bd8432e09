//! Concurrent interning tests.

use std::sync::{Arc, Barrier};
use std::thread;

use charfold::{CharacterRepository, Word};

const THREADS: usize = 8;

const TEXTS: &[&str] = &[
    "a", "B", "é", "e\u{0301}", "👶🏿", "🇫🇷", "가", "Ａ", "\r\n", "ﾊﾞ", "𐍈", "β",
];

#[test]
fn concurrent_intern_yields_one_instance() {
    let repo = CharacterRepository::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Vec<Arc<charfold::Character>>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    TEXTS.iter().map(|text| repo.intern(text)).collect()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("interning thread panicked"))
            .collect()
    });

    assert_eq!(repo.len(), TEXTS.len());
    for batch in &results[1..] {
        for (a, b) in results[0].iter().zip(batch) {
            assert!(Arc::ptr_eq(a, b), "{:?} interned twice", a.text());
        }
    }
}

#[test]
fn concurrent_words_share_characters() {
    let repo = CharacterRepository::new();
    let text = TEXTS.concat();

    let words: Vec<Word> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let repo = &repo;
                let text = &text;
                s.spawn(move || {
                    // Different start points exercise different insert orders.
                    let rotated: String = TEXTS[i % TEXTS.len()..]
                        .iter()
                        .chain(&TEXTS[..i % TEXTS.len()])
                        .copied()
                        .collect();
                    let _ = Word::new(repo, &rotated);
                    Word::new(repo, text)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("word thread panicked"))
            .collect()
    });

    for word in &words[1..] {
        assert_eq!(word, &words[0]);
        for (a, b) in words[0].characters().iter().zip(word.characters()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
}

#[test]
fn batches_stay_within_one_generation_across_resets() {
    let repo = CharacterRepository::new();

    thread::scope(|s| {
        let resetter = s.spawn(|| {
            for _ in 0..200 {
                repo.reset();
                thread::yield_now();
            }
        });

        let workers: Vec<_> = (0..THREADS - 1)
            .map(|_| {
                s.spawn(|| {
                    for _ in 0..200 {
                        let batch = repo.intern_all(TEXTS.iter().copied());
                        let generation = batch[0].id().generation();
                        assert!(
                            batch.iter().all(|c| c.id().generation() == generation),
                            "batch spans generations"
                        );
                        for (character, text) in batch.iter().zip(TEXTS) {
                            assert_eq!(character.text(), *text);
                        }
                    }
                })
            })
            .collect();

        resetter.join().expect("reset thread panicked");
        for worker in workers {
            worker.join().expect("worker thread panicked");
        }
    });

    assert_eq!(repo.generation(), 200);
}

#[test]
fn stale_characters_stay_usable_after_reset() {
    let repo = CharacterRepository::new();
    let before = repo.intern("x");
    repo.reset();
    let after = repo.intern("x");

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.text(), "x");
    assert_ne!(before.id(), after.id());
    assert!(repo.get(before.id()).is_none());
    assert!(repo.get(after.id()).is_some_and(|c| Arc::ptr_eq(&c, &after)));
}
