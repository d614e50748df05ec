//! The pull tokenizer.
//!
//! [`JsonReader`] scans a borrowed buffer one token per [`advance`] call.
//! Recognizers compute prospective results against the buffer and commit to
//! reader state only on success; when the buffer ends mid-token and the
//! block is not final, [`advance`] restores the cursor, position, and token
//! kind of the last committed token and returns `Ok(false)` so the caller
//! can retry with more input. Malformed input is returned as a positioned
//! [`ReadError`] and the reader is not meant to be driven afterwards.
//!
//! [`advance`]: JsonReader::advance

use memchr::{memchr, memchr_iter, memrchr};

use crate::{
    bit_stack::BitStack,
    error::{ErrorKind, ReadError},
    literal::{match_literal, LiteralMatch},
    number,
    number::JsonNumber,
    options::{CommentHandling, ReaderOptions},
    state::{CommentResume, ReaderState},
    token::TokenKind,
};

/// Interior byte range of a scanned comment.
#[derive(Debug, Clone, Copy)]
struct CommentSpan {
    start: usize,
    end: usize,
}

/// A forward-only, zero-copy JSON tokenizer over a single buffer segment.
///
/// The reader borrows its input; payload slices returned by [`value`] alias
/// that buffer and stay valid for its whole lifetime. Construct with
/// [`new`] for a fresh document or [`with_state`] to continue a document
/// whose earlier bytes were tokenized by a previous reader.
///
/// ```
/// use jsonpull::{JsonReader, ReaderOptions, TokenKind};
///
/// let mut reader = JsonReader::new(br#"{"a":1}"#, true, ReaderOptions::default());
/// assert!(reader.advance().unwrap());
/// assert_eq!(reader.token_kind(), TokenKind::StartObject);
/// assert!(reader.advance().unwrap());
/// assert_eq!(reader.value(), b"a");
/// ```
///
/// [`value`]: JsonReader::value
/// [`new`]: JsonReader::new
/// [`with_state`]: JsonReader::with_state
pub struct JsonReader<'a> {
    buf: &'a [u8],
    consumed: usize,
    token_start: usize,
    token_kind: TokenKind,
    value: &'a [u8],
    stack: BitStack,
    in_object: bool,
    comment_resume: CommentResume,
    line: usize,
    column: usize,
    is_final: bool,
    options: ReaderOptions,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader over the first (or only) segment of a document.
    ///
    /// `is_final` promises that no bytes follow this buffer; with it set,
    /// truncation becomes an error instead of a rollback.
    #[must_use]
    pub fn new(buf: &'a [u8], is_final: bool, options: ReaderOptions) -> Self {
        Self::with_state(buf, is_final, options, ReaderState::default())
    }

    /// Creates a reader that continues from a [`ReaderState`] snapshot.
    ///
    /// Byte 0 of `buf` must be the first unconsumed byte of the previous
    /// segment (the previous reader's [`consumed`] tells where that is).
    ///
    /// [`consumed`]: JsonReader::consumed
    #[must_use]
    pub fn with_state(
        buf: &'a [u8],
        is_final: bool,
        options: ReaderOptions,
        state: ReaderState,
    ) -> Self {
        Self {
            buf,
            consumed: 0,
            token_start: 0,
            token_kind: state.token_kind,
            value: &[],
            stack: BitStack::from_parts(state.word, state.depth, state.spill),
            in_object: state.in_object,
            comment_resume: state.comment_resume,
            line: state.line,
            column: state.column,
            is_final,
            options,
        }
    }

    /// Exports the resumable parse state. Excludes the buffer, the cursor,
    /// and the payload slice.
    #[must_use]
    pub fn state(&self) -> ReaderState {
        ReaderState {
            word: self.stack.word(),
            depth: self.stack.depth(),
            spill: self.stack.spill().to_vec(),
            in_object: self.in_object,
            token_kind: self.token_kind,
            comment_resume: self.comment_resume,
            line: self.line,
            column: self.column,
        }
    }

    /// Kind of the current token.
    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        self.token_kind
    }

    /// Payload of the current token; empty unless the kind carries one.
    #[must_use]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Index of the current token's first content byte (for strings and
    /// comments, the byte after the opening marker).
    #[must_use]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Bytes of the buffer accepted so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Current container nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// 1-based line number of the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Bytes since the last consumed line feed.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Replaces the comment handling mode.
    pub fn set_comment_handling(&mut self, mode: CommentHandling) {
        self.options.comment_handling = mode;
    }

    /// Replaces the maximum nesting depth.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.options.max_depth = max_depth;
    }

    /// Reads the next token.
    ///
    /// `Ok(true)`: a token is available through [`token_kind`] /
    /// [`value`] / [`token_start`]. `Ok(false)`: either the document is
    /// complete (final block, root value closed) or more bytes are needed.
    /// In the latter case the reader has rewound to the last committed
    /// token and the caller resumes via [`state`] with a fresh buffer.
    /// `Err`: the input is malformed.
    ///
    /// [`token_kind`]: JsonReader::token_kind
    /// [`value`]: JsonReader::value
    /// [`token_start`]: JsonReader::token_start
    /// [`state`]: JsonReader::state
    pub fn advance(&mut self) -> Result<bool, ReadError> {
        let consumed = self.consumed;
        let token_start = self.token_start;
        let line = self.line;
        let column = self.column;
        let token_kind = self.token_kind;
        let value = self.value;

        self.value = &[];
        match self.read_token() {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.consumed = consumed;
                self.token_start = token_start;
                self.line = line;
                self.column = column;
                self.token_kind = token_kind;
                self.value = value;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Skips the current value, including any nested containers.
    ///
    /// On a `PropertyName` the reader first advances onto the member's
    /// value. A `StartObject`/`StartArray` is then consumed through its
    /// matching `End*`, which becomes the current token. Returns
    /// `Ok(false)` when the subtree is not fully buffered yet.
    pub fn skip(&mut self) -> Result<bool, ReadError> {
        if self.token_kind == TokenKind::PropertyName && !self.advance()? {
            return Ok(false);
        }
        if matches!(
            self.token_kind,
            TokenKind::StartObject | TokenKind::StartArray
        ) {
            let entry_depth = self.stack.depth();
            loop {
                if !self.advance()? {
                    return Ok(false);
                }
                if self.stack.depth() < entry_depth {
                    break;
                }
            }
        }
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------

    /// The current payload as UTF-8 text, escapes left in place.
    pub fn as_str(&self) -> Result<&'a str, ReadError> {
        if !self.token_kind.has_payload() {
            return Err(self.cast_error());
        }
        core::str::from_utf8(self.value).map_err(|_| self.cast_error())
    }

    /// The current number as an `i32`; the whole payload must parse.
    pub fn as_i32(&self) -> Result<i32, ReadError> {
        number::int(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    /// The current number as an `i64`; the whole payload must parse.
    pub fn as_i64(&self) -> Result<i64, ReadError> {
        number::int(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    /// The current number as an exact wide integer.
    pub fn as_i128(&self) -> Result<i128, ReadError> {
        number::int(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    /// The current number as an `f32`.
    pub fn as_f32(&self) -> Result<f32, ReadError> {
        number::float(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    /// The current number as an `f64`.
    pub fn as_f64(&self) -> Result<f64, ReadError> {
        number::float(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    /// The current number narrowed to the smallest lossless type.
    pub fn as_number(&self) -> Result<JsonNumber, ReadError> {
        number::narrowest(self.numeric()?).ok_or_else(|| self.cast_error())
    }

    fn numeric(&self) -> Result<&'a [u8], ReadError> {
        if self.token_kind == TokenKind::Number {
            Ok(self.value)
        } else {
            Err(self.cast_error())
        }
    }

    fn cast_error(&self) -> ReadError {
        self.err_here(ErrorKind::InvalidCast, None)
    }

    // ------------------------------------------------------------------
    // Dispatcher
    // ------------------------------------------------------------------

    fn read_token(&mut self) -> Result<bool, ReadError> {
        loop {
            self.skip_whitespace();
            if self.consumed >= self.buf.len() {
                return self.at_end_of_data();
            }
            let first = self.buf[self.consumed];

            if first == b'/' {
                match self.options.comment_handling {
                    CommentHandling::Allow => return self.consume_comment_token(),
                    CommentHandling::Skip => {
                        if self.scan_comment()?.is_none() {
                            return Ok(false);
                        }
                        continue;
                    }
                    CommentHandling::Disallow => {}
                }
            }

            if self.token_kind == TokenKind::Comment {
                return match self.comment_resume {
                    CommentResume::Prev(kind) => self.dispatch(kind, first),
                    CommentResume::ObjectMember => {
                        if first == b'"' {
                            self.consume_property_name()
                        } else {
                            Err(self.err_here(
                                ErrorKind::ExpectedStartOfPropertyNotFound,
                                Some(first),
                            ))
                        }
                    }
                    CommentResume::ArrayElement => self.consume_value(first),
                };
            }
            return self.dispatch(self.token_kind, first);
        }
    }

    fn dispatch(&mut self, prev: TokenKind, first: u8) -> Result<bool, ReadError> {
        match prev {
            TokenKind::None => self.read_first_token(first),
            TokenKind::StartObject => {
                if first == b'}' {
                    self.end_object()
                } else if first == b'"' {
                    self.consume_property_name()
                } else {
                    Err(self.err_here(ErrorKind::ExpectedStartOfPropertyNotFound, Some(first)))
                }
            }
            TokenKind::StartArray => {
                if first == b']' {
                    self.end_array()
                } else {
                    self.consume_value(first)
                }
            }
            TokenKind::PropertyName => self.consume_value(first),
            _ => self.consume_next_token(first),
        }
    }

    fn read_first_token(&mut self, first: u8) -> Result<bool, ReadError> {
        match first {
            b'{' => self.start_object(),
            b'[' => self.start_array(),
            _ => self.consume_value(first),
        }
    }

    fn consume_value(&mut self, first: u8) -> Result<bool, ReadError> {
        match first {
            b'"' => self.consume_string(),
            b'{' => self.start_object(),
            b'[' => self.start_array(),
            b'-' | b'0'..=b'9' => self.consume_number(),
            b't' => self.consume_literal(b"true", TokenKind::True, ErrorKind::ExpectedTrue),
            b'f' => self.consume_literal(b"false", TokenKind::False, ErrorKind::ExpectedFalse),
            b'n' => self.consume_literal(b"null", TokenKind::Null, ErrorKind::ExpectedNull),
            _ => Err(self.err_here(ErrorKind::ExpectedStartOfValueNotFound, Some(first))),
        }
    }

    /// Continues a container after a scalar or `End*` token: a comma, the
    /// matching closer, or (after a comma, per options) a comment.
    fn consume_next_token(&mut self, first: u8) -> Result<bool, ReadError> {
        if self.stack.depth() == 0 {
            // The single root value is complete; nothing may follow it.
            return Err(self.err_here(ErrorKind::ExpectedEndAfterSingleJson, Some(first)));
        }
        match first {
            b',' => {
                self.consumed += 1;
                self.column += 1;
                loop {
                    self.skip_whitespace();
                    if self.consumed >= self.buf.len() {
                        return if self.is_final {
                            Err(self.err_here(
                                ErrorKind::ExpectedStartOfPropertyOrValueNotFound,
                                None,
                            ))
                        } else {
                            Ok(false)
                        };
                    }
                    let next = self.buf[self.consumed];
                    if next != b'/' {
                        return self.dispatch_element(next);
                    }
                    match self.options.comment_handling {
                        CommentHandling::Disallow => return self.dispatch_element(next),
                        CommentHandling::Skip => {
                            if self.scan_comment()?.is_none() {
                                return Ok(false);
                            }
                        }
                        CommentHandling::Allow => {
                            let Some(span) = self.scan_comment()? else {
                                return Ok(false);
                            };
                            self.comment_resume = if self.in_object {
                                CommentResume::ObjectMember
                            } else {
                                CommentResume::ArrayElement
                            };
                            return Ok(self.commit_comment(span));
                        }
                    }
                }
            }
            b'}' => self.end_object(),
            b']' => self.end_array(),
            _ => Err(self.err_here(ErrorKind::FoundInvalidCharacter, Some(first))),
        }
    }

    fn dispatch_element(&mut self, first: u8) -> Result<bool, ReadError> {
        if self.in_object {
            if first != b'"' {
                return Err(self.err_here(ErrorKind::ExpectedStartOfPropertyNotFound, Some(first)));
            }
            self.consume_property_name()
        } else {
            self.consume_value(first)
        }
    }

    /// End-of-buffer handling. Rollback unless the block is final; a final
    /// block may only end once the root value is complete.
    fn at_end_of_data(&mut self) -> Result<bool, ReadError> {
        if !self.is_final {
            return Ok(false);
        }
        let prev = match (self.token_kind, self.comment_resume) {
            (TokenKind::Comment, CommentResume::Prev(kind)) => kind,
            (TokenKind::Comment, _) => TokenKind::None,
            (kind, _) => kind,
        };
        let complete = self.stack.depth() == 0
            && matches!(
                prev,
                TokenKind::EndObject
                    | TokenKind::EndArray
                    | TokenKind::String
                    | TokenKind::Number
                    | TokenKind::True
                    | TokenKind::False
                    | TokenKind::Null
            );
        if complete {
            Ok(false)
        } else if prev == TokenKind::PropertyName {
            Err(self.err_here(ErrorKind::ExpectedValueAfterPropertyNameNotFound, None))
        } else {
            Err(self.err_here(ErrorKind::InvalidEndOfJson, None))
        }
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    fn start_object(&mut self) -> Result<bool, ReadError> {
        if self.stack.depth() >= self.options.max_depth {
            return Err(self.err_here(ErrorKind::ObjectDepthTooLarge, Some(b'{')));
        }
        self.token_start = self.consumed;
        self.consumed += 1;
        self.column += 1;
        self.stack.push(true);
        self.in_object = true;
        self.token_kind = TokenKind::StartObject;
        Ok(true)
    }

    fn start_array(&mut self) -> Result<bool, ReadError> {
        if self.stack.depth() >= self.options.max_depth {
            return Err(self.err_here(ErrorKind::ArrayDepthTooLarge, Some(b'[')));
        }
        self.token_start = self.consumed;
        self.consumed += 1;
        self.column += 1;
        self.stack.push(false);
        self.in_object = false;
        self.token_kind = TokenKind::StartArray;
        Ok(true)
    }

    fn end_object(&mut self) -> Result<bool, ReadError> {
        if !self.in_object {
            return Err(self.err_here(ErrorKind::ObjectEndWithinArray, Some(b'}')));
        }
        self.token_start = self.consumed;
        self.consumed += 1;
        self.column += 1;
        self.stack.pop();
        self.in_object = self.stack.in_object();
        self.token_kind = TokenKind::EndObject;
        Ok(true)
    }

    fn end_array(&mut self) -> Result<bool, ReadError> {
        if self.in_object || self.stack.depth() == 0 {
            return Err(self.err_here(ErrorKind::ArrayEndWithinObject, Some(b']')));
        }
        self.token_start = self.consumed;
        self.consumed += 1;
        self.column += 1;
        self.stack.pop();
        self.in_object = self.stack.in_object();
        self.token_kind = TokenKind::EndArray;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------

    fn consume_string(&mut self) -> Result<bool, ReadError> {
        if !self.consume_string_core()? {
            return Ok(false);
        }
        self.token_kind = TokenKind::String;
        Ok(true)
    }

    /// A property name is a string followed, after optional whitespace, by
    /// a colon.
    fn consume_property_name(&mut self) -> Result<bool, ReadError> {
        if !self.consume_string_core()? {
            return Ok(false);
        }
        self.skip_whitespace();
        if self.consumed >= self.buf.len() {
            return if self.is_final {
                Err(self.err_here(ErrorKind::ExpectedSeparatorAfterPropertyNameNotFound, None))
            } else {
                Ok(false)
            };
        }
        let next = self.buf[self.consumed];
        if next != b':' {
            return Err(self.err_here(
                ErrorKind::ExpectedSeparatorAfterPropertyNameNotFound,
                Some(next),
            ));
        }
        self.consumed += 1;
        self.column += 1;
        self.token_kind = TokenKind::PropertyName;
        Ok(true)
    }

    /// Scans a string starting at the opening quote under `consumed`.
    /// Commits `value`, `token_start`, `consumed`, and position, but not
    /// the token kind.
    fn consume_string_core(&mut self) -> Result<bool, ReadError> {
        let buf = self.buf;
        let start = self.consumed + 1;
        let data = &buf[start..];
        let Some(quote) = memchr(b'"', data) else {
            return if self.is_final {
                Err(self.err_here(ErrorKind::EndOfStringNotFound, None))
            } else {
                Ok(false)
            };
        };
        if quote == 0 || data[quote - 1] != b'\\' {
            let interior = &data[..quote];
            if !interior.iter().any(|&b| b == b'\\' || b < 0x20) {
                // Fast path: no escapes, no control bytes, quote is real.
                self.value = interior;
                self.token_start = start;
                self.consumed = start + quote + 1;
                self.column += quote + 2;
                return Ok(true);
            }
        }
        self.consume_string_escaped(start)
    }

    /// Escape-aware path: the true closing quote is the first one preceded
    /// by an even run of backslashes; the interior is then validated.
    fn consume_string_escaped(&mut self, start: usize) -> Result<bool, ReadError> {
        let buf = self.buf;
        let data = &buf[start..];
        let mut from = 0;
        let end = loop {
            let Some(off) = memchr(b'"', &data[from..]) else {
                return if self.is_final {
                    Err(self.err_here(ErrorKind::EndOfStringNotFound, None))
                } else {
                    Ok(false)
                };
            };
            let quote = from + off;
            let mut run = 0;
            while run < quote && data[quote - 1 - run] == b'\\' {
                run += 1;
            }
            if run % 2 == 0 {
                break quote;
            }
            from = quote + 1;
        };
        let interior = &data[..end];
        self.validate_string(interior)?;
        self.value = interior;
        self.token_start = start;
        self.consumed = start + end + 1;
        Ok(true)
    }

    /// Validates escapes and control bytes in a string interior and
    /// advances line/column over it (both quotes included). Escapes count
    /// two columns, `\uXXXX` six; the `\n` escape starts a new line.
    fn validate_string(&mut self, interior: &[u8]) -> Result<(), ReadError> {
        let mut line = self.line;
        let mut column = self.column + 1;
        let mut i = 0;
        while i < interior.len() {
            let b = interior[i];
            if b == b'\\' {
                match interior.get(i + 1).copied() {
                    Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'r' | b't') => {
                        i += 2;
                        column += 2;
                    }
                    Some(b'n') => {
                        i += 2;
                        line += 1;
                        column = 0;
                    }
                    Some(b'u') => {
                        for k in 0..4 {
                            match interior.get(i + 2 + k).copied() {
                                Some(h) if h.is_ascii_hexdigit() => {}
                                bad => {
                                    return Err(ReadError {
                                        kind: ErrorKind::InvalidCharacterWithinString,
                                        byte: bad,
                                        line,
                                        column: column + 2 + k,
                                    });
                                }
                            }
                        }
                        i += 6;
                        column += 6;
                    }
                    bad => {
                        return Err(ReadError {
                            kind: ErrorKind::InvalidCharacterWithinString,
                            byte: bad,
                            line,
                            column: column + 1,
                        });
                    }
                }
            } else if b < 0x20 {
                return Err(ReadError {
                    kind: ErrorKind::InvalidCharacterWithinString,
                    byte: Some(b),
                    line,
                    column,
                });
            } else {
                i += 1;
                column += 1;
            }
        }
        self.line = line;
        self.column = column + 1;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------

    fn consume_number(&mut self) -> Result<bool, ReadError> {
        let buf = self.buf;
        let start = self.consumed;
        let data = &buf[start..];
        let root_scalar = self.stack.depth() == 0;
        let mut i = 0;

        if data[i] == b'-' {
            i += 1;
            if i >= data.len() {
                return self.number_truncated(i);
            }
        }
        match data[i] {
            b'0' => i += 1,
            b'1'..=b'9' => {
                i += 1;
                while matches!(data.get(i).copied(), Some(b'0'..=b'9')) {
                    i += 1;
                }
            }
            bad => return Err(self.err_offset(ErrorKind::ExpectedDigitNotFound, Some(bad), i)),
        }

        let mut next = data.get(i).copied();
        if next == Some(b'.') {
            i += 1;
            match data.get(i).copied() {
                None => return self.number_truncated(i),
                Some(b'0'..=b'9') => {
                    i += 1;
                    while matches!(data.get(i).copied(), Some(b'0'..=b'9')) {
                        i += 1;
                    }
                }
                Some(bad) => {
                    return Err(self.err_offset(
                        ErrorKind::ExpectedNextDigitComponentNotFound,
                        Some(bad),
                        i,
                    ));
                }
            }
            next = data.get(i).copied();
        }
        if matches!(next, Some(b'e' | b'E')) {
            i += 1;
            if matches!(data.get(i).copied(), Some(b'+' | b'-')) {
                i += 1;
            }
            match data.get(i).copied() {
                None => return self.number_truncated(i),
                Some(b'0'..=b'9') => {
                    i += 1;
                    while matches!(data.get(i).copied(), Some(b'0'..=b'9')) {
                        i += 1;
                    }
                }
                Some(bad) => {
                    return Err(self.err_offset(
                        ErrorKind::ExpectedNextDigitEValueNotFound,
                        Some(bad),
                        i,
                    ));
                }
            }
            next = data.get(i).copied();
        }

        match next {
            None => {
                // Only a root scalar may end with the final block; inside a
                // container a delimiter must be seen.
                if !self.is_final {
                    Ok(false)
                } else if root_scalar {
                    Ok(self.commit_number(start, i))
                } else {
                    Err(self.err_offset(ErrorKind::ExpectedEndOfDigitNotFound, None, i))
                }
            }
            Some(b) if is_number_delimiter(b) => Ok(self.commit_number(start, i)),
            Some(bad) => Err(self.err_offset(ErrorKind::ExpectedEndOfDigitNotFound, Some(bad), i)),
        }
    }

    fn commit_number(&mut self, start: usize, len: usize) -> bool {
        self.value = &self.buf[start..start + len];
        self.token_start = start;
        self.consumed = start + len;
        self.column += len;
        self.token_kind = TokenKind::Number;
        true
    }

    /// The buffer ended where the grammar still requires a digit.
    fn number_truncated(&self, offset: usize) -> Result<bool, ReadError> {
        if self.is_final {
            Err(self.err_offset(ErrorKind::ExpectedDigitNotFoundEndOfData, None, offset))
        } else {
            Ok(false)
        }
    }

    // ------------------------------------------------------------------
    // Literals
    // ------------------------------------------------------------------

    fn consume_literal(
        &mut self,
        literal: &'static [u8],
        kind: TokenKind,
        err: ErrorKind,
    ) -> Result<bool, ReadError> {
        let start = self.consumed;
        match match_literal(&self.buf[start..], literal) {
            LiteralMatch::Complete => {
                self.token_start = start;
                self.consumed = start + literal.len();
                self.column += literal.len();
                self.token_kind = kind;
                Ok(true)
            }
            LiteralMatch::Partial => {
                if self.is_final {
                    Err(self.err_here(err, None))
                } else {
                    Ok(false)
                }
            }
            LiteralMatch::Mismatch(at) => {
                Err(self.err_offset(err, Some(self.buf[start + at]), at))
            }
        }
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// Emits a comment token, remembering the interrupted token kind so the
    /// next `advance` can continue where the comment cut in.
    fn consume_comment_token(&mut self) -> Result<bool, ReadError> {
        let Some(span) = self.scan_comment()? else {
            return Ok(false);
        };
        if self.token_kind != TokenKind::Comment {
            self.comment_resume = CommentResume::Prev(self.token_kind);
        }
        Ok(self.commit_comment(span))
    }

    fn commit_comment(&mut self, span: CommentSpan) -> bool {
        self.token_start = span.start;
        self.value = &self.buf[span.start..span.end];
        self.token_kind = TokenKind::Comment;
        true
    }

    /// Scans a `//` or `/* */` comment starting at the `/` under
    /// `consumed`. On success, consumes the comment (including a line
    /// comment's newline) and returns the interior span; returns `None`
    /// when the comment is truncated and the block is not final.
    fn scan_comment(&mut self) -> Result<Option<CommentSpan>, ReadError> {
        let start = self.consumed;
        let Some(&marker) = self.buf.get(start + 1) else {
            return if self.is_final {
                Err(self.err_offset(ErrorKind::ExpectedStartOfValueNotFound, None, 1))
            } else {
                Ok(None)
            };
        };
        match marker {
            b'/' => {
                let body = start + 2;
                match memchr(b'\n', &self.buf[body..]) {
                    Some(off) => {
                        let newline = body + off;
                        let mut end = newline;
                        if end > body && self.buf[end - 1] == b'\r' {
                            end -= 1;
                        }
                        self.consumed = newline + 1;
                        self.line += 1;
                        self.column = 0;
                        Ok(Some(CommentSpan { start: body, end }))
                    }
                    None => {
                        if !self.is_final {
                            return Ok(None);
                        }
                        // A final block may end inside a line comment.
                        let end = self.buf.len();
                        self.column += end - start;
                        self.consumed = end;
                        Ok(Some(CommentSpan { start: body, end }))
                    }
                }
            }
            b'*' => {
                let body = start + 2;
                let mut from = body;
                loop {
                    let Some(off) = memchr(b'*', &self.buf[from..]) else {
                        return self.comment_unterminated();
                    };
                    let star = from + off;
                    match self.buf.get(star + 1).copied() {
                        None => return self.comment_unterminated(),
                        Some(b'/') => {
                            let after = star + 2;
                            self.advance_position_over(start, after);
                            self.consumed = after;
                            return Ok(Some(CommentSpan {
                                start: body,
                                end: star,
                            }));
                        }
                        Some(_) => from = star + 1,
                    }
                }
            }
            other => Err(self.err_offset(ErrorKind::ExpectedStartOfValueNotFound, Some(other), 1)),
        }
    }

    fn comment_unterminated(&self) -> Result<Option<CommentSpan>, ReadError> {
        if self.is_final {
            Err(self.err_here(ErrorKind::EndOfCommentNotFound, None))
        } else {
            Ok(None)
        }
    }

    /// Advances line/column across `buf[from..to]`, counting line feeds.
    fn advance_position_over(&mut self, from: usize, to: usize) {
        let span = &self.buf[from..to];
        match memrchr(b'\n', span) {
            Some(last) => {
                self.line += memchr_iter(b'\n', span).count();
                self.column = span.len() - last - 1;
            }
            None => self.column += span.len(),
        }
    }

    // ------------------------------------------------------------------
    // Position & errors
    // ------------------------------------------------------------------

    #[inline]
    fn skip_whitespace(&mut self) {
        while self.consumed < self.buf.len() {
            match self.buf[self.consumed] {
                b' ' | b'\t' | b'\r' => {
                    self.consumed += 1;
                    self.column += 1;
                }
                b'\n' => {
                    self.consumed += 1;
                    self.line += 1;
                    self.column = 0;
                }
                _ => break,
            }
        }
    }

    fn err_here(&self, kind: ErrorKind, byte: Option<u8>) -> ReadError {
        ReadError {
            kind,
            byte,
            line: self.line,
            column: self.column,
        }
    }

    fn err_offset(&self, kind: ErrorKind, byte: Option<u8>, offset: usize) -> ReadError {
        ReadError {
            kind,
            byte,
            line: self.line,
            column: self.column + offset,
        }
    }
}

/// A byte that may legally follow a number inside a container.
#[inline]
const fn is_number_delimiter(b: u8) -> bool {
    matches!(b, b',' | b'}' | b']' | b' ' | b'\t' | b'\r' | b'\n' | b'/')
}
