#![allow(clippy::float_cmp)]

use crate::{ErrorKind, JsonNumber, JsonReader, ReaderOptions, TokenKind};

fn reader_at_first_value(json: &[u8]) -> JsonReader<'_> {
    let mut reader = JsonReader::new(json, true, ReaderOptions::default());
    assert!(reader.advance().unwrap()); // container
    assert!(reader.advance().unwrap()); // first element or name
    reader
}

#[test]
fn string_payload_as_text() {
    let mut reader = reader_at_first_value(b"[\"caf\xc3\xa9\"]");
    assert_eq!(reader.token_kind(), TokenKind::String);
    // Escapes are validated but left in place.
    assert_eq!(reader.as_str().unwrap(), r"café");
    assert!(reader.advance().unwrap());
}

#[test]
fn property_name_as_text() {
    let reader = reader_at_first_value(br#"{"width": 10}"#);
    assert_eq!(reader.token_kind(), TokenKind::PropertyName);
    assert_eq!(reader.as_str().unwrap(), "width");
}

#[test]
fn integer_accessors() {
    let reader = reader_at_first_value(b"[1234]");
    assert_eq!(reader.as_i32().unwrap(), 1234);
    assert_eq!(reader.as_i64().unwrap(), 1234);
    assert_eq!(reader.as_i128().unwrap(), 1234);
}

#[test]
fn integer_width_overflow() {
    let reader = reader_at_first_value(b"[3000000000]");
    assert_eq!(reader.as_i32().unwrap_err().kind, ErrorKind::InvalidCast);
    assert_eq!(reader.as_i64().unwrap(), 3_000_000_000);

    let reader = reader_at_first_value(b"[170141183460469231731687303715884105727]");
    assert_eq!(reader.as_i64().unwrap_err().kind, ErrorKind::InvalidCast);
    assert_eq!(reader.as_i128().unwrap(), i128::MAX);
}

#[test]
fn float_accessors() {
    let reader = reader_at_first_value(b"[-12.5e+3]");
    assert_eq!(reader.as_f64().unwrap(), -12_500.0);
    assert_eq!(reader.as_f32().unwrap(), -12_500.0_f32);
    // A fraction does not silently truncate to an integer.
    assert_eq!(reader.as_i64().unwrap_err().kind, ErrorKind::InvalidCast);
}

#[test]
fn generic_number_narrows() {
    let reader = reader_at_first_value(b"[7]");
    assert_eq!(reader.as_number().unwrap(), JsonNumber::I32(7));

    let reader = reader_at_first_value(b"[1e2]");
    assert_eq!(reader.as_number().unwrap(), JsonNumber::I32(100));

    let reader = reader_at_first_value(b"[4e9]");
    assert_eq!(reader.as_number().unwrap(), JsonNumber::I64(4_000_000_000));

    let reader = reader_at_first_value(b"[0.5]");
    assert_eq!(reader.as_number().unwrap(), JsonNumber::F64(0.5));
}

#[test]
fn casts_require_a_number_token() {
    let reader = reader_at_first_value(br#"["12"]"#);
    assert_eq!(reader.as_i32().unwrap_err().kind, ErrorKind::InvalidCast);
    assert_eq!(reader.as_number().unwrap_err().kind, ErrorKind::InvalidCast);

    let reader = reader_at_first_value(b"[true]");
    assert_eq!(reader.as_str().unwrap_err().kind, ErrorKind::InvalidCast);
    assert_eq!(reader.as_f64().unwrap_err().kind, ErrorKind::InvalidCast);
}

#[test]
fn root_scalar_accessor() {
    let mut reader = JsonReader::new(b" -8 ", true, ReaderOptions::default());
    assert!(reader.advance().unwrap());
    assert_eq!(reader.as_number().unwrap(), JsonNumber::I32(-8));
}
