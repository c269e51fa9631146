//! Token cooking: raw tags to classified kinds.
//!
//! Each `RawTag` has one cooking path:
//! - **Identifiers**: keyword lookup, then identifier lookup (keyword wins)
//! - **Punctuators**: operator lookup of the matched spelling
//! - **Literals, numbers, trivia**: direct mapping, no entry
//! - **Errors**: a span of their own plus a [`LexWarning`]

use std::sync::Arc;

use cdict_catalog::Entry;
use cdict_diagnostic::Span;
use cdict_index::TokenIndex;
use cdict_lexer_core::RawTag;

use crate::{LexWarning, LexWarningKind, SpanKind};

/// A cooked token.
pub(crate) struct Cooked {
    pub kind: SpanKind,
    pub entry: Option<Arc<Entry>>,
    pub warning: Option<LexWarning>,
}

impl Cooked {
    fn plain(kind: SpanKind) -> Self {
        Cooked {
            kind,
            entry: None,
            warning: None,
        }
    }

    fn catalogued(kind: SpanKind, entry: Option<&Arc<Entry>>) -> Self {
        Cooked {
            kind,
            entry: entry.cloned(),
            warning: None,
        }
    }

    fn warned(kind: SpanKind, warning: LexWarningKind, span: Span) -> Self {
        Cooked {
            kind,
            entry: None,
            warning: Some(LexWarning {
                kind: warning,
                span,
            }),
        }
    }
}

/// Cooks raw tokens against a token index.
///
/// Stateless with respect to individual tokens; each `cook()` is
/// independent.
pub(crate) struct SpanCooker<'a> {
    index: &'a TokenIndex,
    source: &'a str,
}

impl<'a> SpanCooker<'a> {
    pub(crate) fn new(index: &'a TokenIndex, source: &'a str) -> Self {
        SpanCooker { index, source }
    }

    /// Cook the token `tag` covering `span`.
    pub(crate) fn cook(&self, tag: RawTag, span: Span) -> Cooked {
        let text = self.source.get(span.to_range()).unwrap_or_default();
        match tag {
            RawTag::Ident => self.word(text),
            RawTag::Punct => match self.index.lookup_operator(text) {
                Some(entry) => Cooked::catalogued(SpanKind::Operator, Some(entry)),
                None => Cooked::plain(SpanKind::Other),
            },
            RawTag::Number => Cooked::plain(SpanKind::Number),
            RawTag::String => Cooked::plain(SpanKind::StringLiteral),
            RawTag::Char => Cooked::plain(SpanKind::CharLiteral),
            RawTag::DirectiveBody => Cooked::plain(SpanKind::Directive),
            RawTag::Whitespace | RawTag::Newline => Cooked::plain(SpanKind::Whitespace),
            RawTag::LineComment | RawTag::BlockComment => Cooked::plain(SpanKind::Comment),
            RawTag::UnterminatedBlockComment => Cooked::warned(
                SpanKind::UnterminatedComment,
                LexWarningKind::UnterminatedComment,
                span,
            ),
            RawTag::UnterminatedString => Cooked::warned(
                SpanKind::UnterminatedLiteral,
                LexWarningKind::UnterminatedString,
                span,
            ),
            RawTag::UnterminatedChar => Cooked::warned(
                SpanKind::UnterminatedLiteral,
                LexWarningKind::UnterminatedChar,
                span,
            ),
            RawTag::Unknown | RawTag::Eof => Cooked::plain(SpanKind::Other),
        }
    }

    fn word(&self, text: &str) -> Cooked {
        if let Some(entry) = self.index.lookup_keyword(text) {
            return Cooked::catalogued(SpanKind::Keyword, Some(entry));
        }
        Cooked::catalogued(SpanKind::Identifier, self.index.lookup_identifier(text))
    }
}

#[cfg(test)]
mod tests;
