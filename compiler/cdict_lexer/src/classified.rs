//! Classified spans.

use std::fmt;
use std::sync::Arc;

use cdict_catalog::Entry;
use cdict_diagnostic::Span;
use serde::Serialize;

/// What a span of source text is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Keyword,
    Operator,
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,
    Comment,
    Whitespace,
    /// The body of a preprocessor directive line.
    Directive,
    /// A block comment that runs to the end of input.
    UnterminatedComment,
    /// A string or character literal cut off by a newline or end of input.
    UnterminatedLiteral,
    /// Bytes that start no C token.
    Other,
}

impl SpanKind {
    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Keyword => "keyword",
            SpanKind::Operator => "operator",
            SpanKind::Identifier => "identifier",
            SpanKind::Number => "number",
            SpanKind::StringLiteral => "string_literal",
            SpanKind::CharLiteral => "char_literal",
            SpanKind::Comment => "comment",
            SpanKind::Whitespace => "whitespace",
            SpanKind::Directive => "directive",
            SpanKind::UnterminatedComment => "unterminated_comment",
            SpanKind::UnterminatedLiteral => "unterminated_literal",
            SpanKind::Other => "other",
        }
    }

    /// Kinds that may carry a catalogue entry.
    pub fn is_catalogued(self) -> bool {
        matches!(
            self,
            SpanKind::Keyword | SpanKind::Operator | SpanKind::Identifier
        )
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified byte range of the input.
///
/// `entry` is set for keywords and operators always, and for identifiers
/// the catalogue knows; every other kind has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedSpan {
    pub span: Span,
    pub kind: SpanKind,
    pub entry: Option<Arc<Entry>>,
}

impl ClassifiedSpan {
    pub fn start(&self) -> u32 {
        self.span.start
    }

    pub fn end(&self) -> u32 {
        self.span.end
    }

    /// Canonical id of the matched entry.
    pub fn entry_id(&self) -> Option<&str> {
        self.entry.as_deref().map(Entry::canonical_id)
    }

    /// The text this span covers in `source` (empty if `source` is not the
    /// text it was classified from).
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

impl fmt::Display for ClassifiedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.span, self.kind)?;
        if let Some(id) = self.entry_id() {
            write!(f, " {id}")?;
        }
        Ok(())
    }
}

/// The span in `spans` containing byte `offset`, if any. `spans` must be
/// in source order.
pub fn span_at(spans: &[ClassifiedSpan], offset: u32) -> Option<&ClassifiedSpan> {
    let i = spans.partition_point(|s| s.span.end <= offset);
    spans.get(i).filter(|s| s.span.contains(offset))
}
