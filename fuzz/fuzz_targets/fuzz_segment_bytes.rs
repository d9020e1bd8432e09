//! Fuzz target for lenient byte segmentation.
//!
//! Spans must tile the input exactly, and valid UTF-8 must segment the same
//! way through the byte and string entry points.

#![no_main]

use charfold::{segment, segment_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let spans = segment_bytes(data);

    let mut end = 0;
    for span in &spans {
        assert_eq!(span.start, end, "gap or overlap in spans");
        assert!(span.end > span.start, "empty span");
        end = span.end;
    }
    assert_eq!(end, data.len());

    if let Ok(text) = std::str::from_utf8(data) {
        let clusters = segment(text);
        assert_eq!(clusters.len(), spans.len());
        for (cluster, span) in clusters.iter().zip(&spans) {
            assert_eq!(*cluster, &text[span.clone()]);
        }
    }
});
