#![no_main]

use arbitrary::Arbitrary;
use jsonpull::{CommentHandling, JsonReader, ReaderOptions, ReaderState};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    data: &'a [u8],
    split: usize,
    mode: u8,
}

fuzz_target!(|input: Input<'_>| {
    let comment_handling = match input.mode % 3 {
        0 => CommentHandling::Disallow,
        1 => CommentHandling::Allow,
        _ => CommentHandling::Skip,
    };
    let options = ReaderOptions {
        comment_handling,
        ..ReaderOptions::default()
    };

    // Whole-buffer pass: must never panic, and every emitted token must
    // keep the cursor invariants.
    let mut reader = JsonReader::new(input.data, true, options);
    let mut whole = Vec::new();
    loop {
        match reader.advance() {
            Ok(true) => {
                assert!(reader.token_start() <= reader.consumed());
                assert!(reader.consumed() <= input.data.len());
                assert!(reader.line() >= 1);
                whole.push((reader.token_kind(), reader.value().to_vec()));
            }
            Ok(false) => break,
            // Malformed input: fine, but then there is nothing to compare.
            Err(_) => return,
        }
    }

    // The same bytes split at an arbitrary point and resumed through a
    // snapshot must produce the identical token stream.
    let split = input.split % (input.data.len() + 1);
    let mut resumed = Vec::new();
    let mut state = ReaderState::default();
    let mut offset = 0;
    let ends = [split, input.data.len()];
    for (i, &end) in ends.iter().enumerate() {
        if end < offset {
            continue;
        }
        let mut reader =
            JsonReader::with_state(&input.data[offset..end], i == 1, options, state);
        while reader
            .advance()
            .expect("a document accepted whole must be accepted split")
        {
            resumed.push((reader.token_kind(), reader.value().to_vec()));
        }
        offset += reader.consumed();
        state = reader.state();
    }
    assert_eq!(whole, resumed);
});
