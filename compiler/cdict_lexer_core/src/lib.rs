//! Low-level tokenizer primitives for C source text.
//!
//! This crate splits raw bytes into `(RawTag, len)` pairs and nothing more:
//! it never decides whether a word is a keyword or which catalogue entry an
//! operator belongs to. That is the job of `cdict_lexer`, which cooks raw
//! tokens against a token index.
//!
//! Operators are matched through the [`PunctuatorTable`] seam so the
//! scanner's maximal-munch behaviour follows whatever operator set the
//! caller supplies.

mod cursor;
mod punct;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use punct::PunctuatorTable;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
