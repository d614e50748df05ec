/// One lexical unit of a JSON document.
///
/// Structural tokens (`StartObject`, `EndObject`, `StartArray`, `EndArray`)
/// and literals carry no payload; `PropertyName`, `String`, `Number`, and
/// `Comment` expose their raw bytes through [`JsonReader::value`].
///
/// [`JsonReader::value`]: crate::JsonReader::value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    /// Nothing has been read yet.
    #[default]
    None,
    /// `{`
    StartObject,
    /// `}`
    EndObject,
    /// `[`
    StartArray,
    /// `]`
    EndArray,
    /// An object member name. The payload is the raw string interior,
    /// escapes included; the trailing `:` has been consumed.
    PropertyName,
    /// A string value. The payload is the raw interior between the quotes,
    /// escapes validated but not expanded.
    String,
    /// A number. The payload is the exact byte range of the number.
    Number,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// A `//` or `/* */` comment, emitted only under
    /// [`CommentHandling::Allow`]. The payload is the comment interior.
    ///
    /// [`CommentHandling::Allow`]: crate::CommentHandling::Allow
    Comment,
}

impl TokenKind {
    /// Returns `true` for tokens that may carry a payload slice.
    #[must_use]
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::PropertyName | TokenKind::String | TokenKind::Number | TokenKind::Comment
        )
    }
}
