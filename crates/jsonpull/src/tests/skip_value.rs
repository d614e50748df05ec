use crate::{JsonReader, ReaderOptions, TokenKind};

#[test]
fn skip_lands_on_the_matching_end() {
    let json = br#"{"a": {"x": [1, 2], "y": null}, "b": 3}"#;
    let mut reader = JsonReader::new(json, true, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // {
    assert!(reader.advance().unwrap()); // "a"
    assert!(reader.advance().unwrap()); // inner {
    assert_eq!(reader.token_kind(), TokenKind::StartObject);
    let entry_depth = reader.depth();

    assert!(reader.skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::EndObject);
    assert_eq!(reader.depth(), entry_depth - 1);

    assert!(reader.advance().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);
    assert_eq!(reader.value(), b"b");
}

#[test]
fn skip_on_a_property_name_consumes_its_value() {
    let json = br#"{"a": [1, [2, 3]], "b": true}"#;
    let mut reader = JsonReader::new(json, true, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // {
    assert!(reader.advance().unwrap()); // "a"
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);

    assert!(reader.skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::EndArray);

    assert!(reader.advance().unwrap());
    assert_eq!(reader.value(), b"b");
}

#[test]
fn skip_on_a_scalar_is_a_no_op() {
    let mut reader = JsonReader::new(b"[7, 8]", true, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // [
    assert!(reader.advance().unwrap()); // 7
    let consumed = reader.consumed();
    assert!(reader.skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::Number);
    assert_eq!(reader.consumed(), consumed);
}

#[test]
fn skip_over_a_property_scalar() {
    let mut reader = JsonReader::new(br#"{"a":1,"b":2}"#, true, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // {
    assert!(reader.advance().unwrap()); // "a"
    assert!(reader.skip().unwrap());
    assert_eq!(reader.token_kind(), TokenKind::Number);
    assert_eq!(reader.value(), b"1");
    assert!(reader.advance().unwrap());
    assert_eq!(reader.value(), b"b");
}

#[test]
fn skip_reports_truncated_subtrees() {
    let mut reader = JsonReader::new(br#"[{"a": [1,"#, false, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // [
    assert!(reader.advance().unwrap()); // {
    assert_eq!(reader.token_kind(), TokenKind::StartObject);
    assert!(!reader.skip().unwrap());
}
