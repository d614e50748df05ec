use alloc::vec::Vec;

use crate::token::TokenKind;

/// What the token after a [`TokenKind::Comment`] must do.
///
/// A comment interrupts the dispatcher mid-decision. Most comments sit at an
/// ordinary token boundary and only need the interrupted token kind back;
/// comments directly after a comma additionally pin the next token to a
/// property name or element value so a trailing comma cannot hide behind
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentResume {
    /// Dispatch as if the previous token were this kind.
    Prev(TokenKind),
    /// A comma inside an object was consumed; a property name is required.
    ObjectMember,
    /// A comma inside an array was consumed; a value is required.
    ArrayElement,
}

impl Default for CommentResume {
    fn default() -> Self {
        Self::Prev(TokenKind::None)
    }
}

/// Resumable parse state captured between buffer segments.
///
/// Returned by [`JsonReader::state`] and consumed by
/// [`JsonReader::with_state`]. Carries everything the tokenizer needs to
/// continue except the buffer itself: the caller supplies the next segment,
/// beginning at the first unconsumed byte of the previous one. Payload
/// slices are deliberately not part of the snapshot; they alias the old
/// buffer and must be copied out before it is released.
///
/// [`JsonReader::state`]: crate::JsonReader::state
/// [`JsonReader::with_state`]: crate::JsonReader::with_state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderState {
    pub(crate) word: u64,
    pub(crate) depth: usize,
    pub(crate) spill: Vec<bool>,
    pub(crate) in_object: bool,
    pub(crate) token_kind: TokenKind,
    pub(crate) comment_resume: CommentResume,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Default for ReaderState {
    /// The state of a fresh reader: nothing read, line 1, column 0.
    fn default() -> Self {
        Self {
            word: 0,
            depth: 0,
            spill: Vec::new(),
            in_object: false,
            token_kind: TokenKind::None,
            comment_resume: CommentResume::default(),
            line: 1,
            column: 0,
        }
    }
}
