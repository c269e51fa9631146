//! Lexical classification of C source text.
//!
//! The raw scanner (`cdict_lexer_core`) splits source into `(RawTag, len)`
//! pairs; this crate cooks each pair into a [`ClassifiedSpan`] by asking a
//! [`TokenIndex`](cdict_index::TokenIndex) what the text means:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → SpanCooker → ClassifiedSpan
//! ```
//!
//! Spans cover the input exactly: no gaps, no overlaps. Defects such as an
//! unclosed comment become one span of their own plus a `W2xxx` warning,
//! and scanning carries on.

mod classified;
mod cooker;
mod lex_warning;
mod lexer;
mod options;

pub use classified::{span_at, ClassifiedSpan, SpanKind};
pub use lex_warning::{LexWarning, LexWarningKind};
pub use lexer::{lex, LexOutput, Lexer, SourceText};
pub use options::ScanOptions;
