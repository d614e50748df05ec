use thiserror::Error;

/// An error raised while tokenizing or converting a value.
///
/// Malformed input is fatal to the current parse; the reader is not designed
/// to continue after an error. Truncated input with a non-final block is not
/// an error: [`JsonReader::advance`] returns `Ok(false)` instead.
///
/// [`JsonReader::advance`]: crate::JsonReader::advance
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ReadError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The offending byte, when one exists (absent for end-of-data errors).
    pub byte: Option<u8>,
    /// 1-based line of the offending position.
    pub line: usize,
    /// Bytes since the last line feed.
    pub column: usize,
}

/// The closed set of failure reasons.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("object nesting exceeds the configured maximum depth")]
    ObjectDepthTooLarge,
    #[error("array nesting exceeds the configured maximum depth")]
    ArrayDepthTooLarge,
    #[error("'}}' closes an array")]
    ObjectEndWithinArray,
    #[error("']' closes an object")]
    ArrayEndWithinObject,
    #[error("expected a property name or '}}'")]
    ExpectedStartOfPropertyNotFound,
    #[error("expected a property name or value after ','")]
    ExpectedStartOfPropertyOrValueNotFound,
    #[error("expected a value after the property name")]
    ExpectedValueAfterPropertyNameNotFound,
    #[error("expected ':' after the property name")]
    ExpectedSeparatorAfterPropertyNameNotFound,
    #[error("expected the start of a value")]
    ExpectedStartOfValueNotFound,
    #[error("expected a digit")]
    ExpectedDigitNotFound,
    #[error("expected a digit before the end of data")]
    ExpectedDigitNotFoundEndOfData,
    #[error("expected a digit after the decimal point")]
    ExpectedNextDigitComponentNotFound,
    #[error("expected a digit in the exponent")]
    ExpectedNextDigitEValueNotFound,
    #[error("expected a delimiter after the number")]
    ExpectedEndOfDigitNotFound,
    #[error("expected the literal 'true'")]
    ExpectedTrue,
    #[error("expected the literal 'false'")]
    ExpectedFalse,
    #[error("expected the literal 'null'")]
    ExpectedNull,
    #[error("unterminated string")]
    EndOfStringNotFound,
    #[error("unterminated comment")]
    EndOfCommentNotFound,
    #[error("invalid character within a string")]
    InvalidCharacterWithinString,
    #[error("invalid character")]
    FoundInvalidCharacter,
    #[error("unexpected end of JSON document")]
    InvalidEndOfJson,
    #[error("unexpected content after the JSON value")]
    ExpectedEndAfterSingleJson,
    #[error("the value cannot be converted to the requested type")]
    InvalidCast,
}
