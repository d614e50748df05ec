//! End-to-end refill loop: tokenize a document that arrives in fixed-size
//! network-style chunks, carrying state across readers.

use jsonpull::{JsonNumber, JsonReader, ReaderOptions, ReaderState, TokenKind};

const DOC: &[u8] =
    br#"{"user":{"id":184467,"name":"A \"quoted\" name","score":-12.5e+3,"tags":[true,null]}}"#;

fn tokenize_in_chunks(doc: &[u8], chunk: usize) -> Vec<(TokenKind, Vec<u8>)> {
    let mut tokens = Vec::new();
    let mut state = ReaderState::default();
    let mut offset = 0;
    let mut end = chunk.min(doc.len());
    loop {
        let is_final = end == doc.len();
        let mut reader =
            JsonReader::with_state(&doc[offset..end], is_final, ReaderOptions::default(), state);
        while reader.advance().unwrap() {
            tokens.push((reader.token_kind(), reader.value().to_vec()));
        }
        offset += reader.consumed();
        state = reader.state();
        if is_final {
            break;
        }
        end = (end + chunk).min(doc.len());
    }
    tokens
}

#[test]
fn chunked_feeds_match_the_whole_buffer() {
    let mut whole = Vec::new();
    let mut reader = JsonReader::new(DOC, true, ReaderOptions::default());
    while reader.advance().unwrap() {
        whole.push((reader.token_kind(), reader.value().to_vec()));
    }
    assert_eq!(whole.len(), 16);

    for chunk in 1..=DOC.len() {
        assert_eq!(tokenize_in_chunks(DOC, chunk), whole, "chunk size {chunk}");
    }
}

#[test]
fn typed_values_from_a_chunked_stream() {
    let mut id = None;
    let mut score = None;
    let mut state = ReaderState::default();
    let mut offset = 0;
    let mut end = 9.min(DOC.len());
    let mut last_name: Option<String> = None;
    loop {
        let is_final = end == DOC.len();
        let mut reader =
            JsonReader::with_state(&DOC[offset..end], is_final, ReaderOptions::default(), state);
        while reader.advance().unwrap() {
            match reader.token_kind() {
                TokenKind::PropertyName => last_name = Some(reader.as_str().unwrap().to_owned()),
                TokenKind::Number => match last_name.as_deref() {
                    Some("id") => id = Some(reader.as_i64().unwrap()),
                    Some("score") => score = Some(reader.as_number().unwrap()),
                    _ => {}
                },
                _ => {}
            }
        }
        offset += reader.consumed();
        state = reader.state();
        if is_final {
            break;
        }
        end = (end + 9).min(DOC.len());
    }
    assert_eq!(id, Some(184_467));
    assert_eq!(score, Some(JsonNumber::I32(-12_500)));
}
