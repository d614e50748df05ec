/// How the reader treats C-style comments layered on strict JSON.
///
/// RFC 8259 has no comments; both `//` line comments and `/* */` block
/// comments are an opt-in extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentHandling {
    /// Strict RFC 8259: a `/` where a token is expected is an error.
    Disallow,
    /// Comments surface as [`TokenKind::Comment`] tokens whose payload is
    /// the comment interior.
    ///
    /// [`TokenKind::Comment`]: crate::TokenKind::Comment
    Allow,
    /// Comments are consumed silently; the caller never observes them.
    Skip,
}

impl Default for CommentHandling {
    fn default() -> Self {
        Self::Disallow
    }
}

/// Configuration for a [`JsonReader`].
///
/// [`JsonReader`]: crate::JsonReader
///
/// # Default
///
/// Strict RFC 8259, maximum nesting depth 64.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Whether comments are rejected, surfaced, or skipped.
    ///
    /// # Default
    ///
    /// [`CommentHandling::Disallow`]
    pub comment_handling: CommentHandling,

    /// Maximum container nesting depth before
    /// [`ErrorKind::ObjectDepthTooLarge`] /
    /// [`ErrorKind::ArrayDepthTooLarge`] is raised.
    ///
    /// Depths up to 64 are tracked in a single machine word; deeper nesting
    /// spills onto a heap-allocated stack.
    ///
    /// [`ErrorKind::ObjectDepthTooLarge`]: crate::ErrorKind::ObjectDepthTooLarge
    /// [`ErrorKind::ArrayDepthTooLarge`]: crate::ErrorKind::ArrayDepthTooLarge
    ///
    /// # Default
    ///
    /// `64`
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            comment_handling: CommentHandling::default(),
            max_depth: crate::bit_stack::WORD_BITS,
        }
    }
}
