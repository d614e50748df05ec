//! A forward-only, pull-based, zero-copy UTF-8 JSON tokenizer.
//!
//! [`JsonReader`] scans a borrowed byte buffer and emits one token per
//! [`JsonReader::advance`] call. Token payloads alias the input buffer; the
//! reader never copies or decodes them. Input may arrive in pieces: when the
//! buffer ends mid-token and the block is not final, the reader rewinds to
//! the last committed token and the caller resumes with a larger buffer via
//! a [`ReaderState`] snapshot.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bit_stack;
mod error;
mod literal;
mod number;
mod options;
mod reader;
mod state;
mod token;

pub use error::{ErrorKind, ReadError};
pub use number::JsonNumber;
pub use options::{CommentHandling, ReaderOptions};
pub use reader::JsonReader;
pub use state::ReaderState;
pub use token::TokenKind;

#[cfg(test)]
mod tests;
