//! Classification results.

use cdict_diagnostic::Diagnostic;
use cdict_lexer::{ClassifiedSpan, LexOutput, SpanKind};
use serde::Serialize;

/// The spans of one source text and the lexical warnings found on the way.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    /// Spans in source order.
    pub spans: Vec<ClassifiedSpan>,
    /// `W2xxx` warnings, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    /// The span containing byte `offset`, if any.
    pub fn span_at(&self, offset: u32) -> Option<&ClassifiedSpan> {
        cdict_lexer::span_at(&self.spans, offset)
    }

    /// Spans that matched a catalogue entry.
    pub fn catalogued(&self) -> impl Iterator<Item = &ClassifiedSpan> {
        self.spans.iter().filter(|s| s.entry.is_some())
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Flat records for serialization.
    pub fn records(&self) -> Vec<SpanRecord<'_>> {
        self.spans.iter().map(SpanRecord::from).collect()
    }
}

impl From<LexOutput> for Classification {
    fn from(output: LexOutput) -> Self {
        Classification {
            spans: output.spans,
            diagnostics: output.diagnostics,
        }
    }
}

/// `{start, end, kind, entry_id?}`: one span as handed to external callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpanRecord<'a> {
    pub start: u32,
    pub end: u32,
    pub kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<&'a str>,
}

impl<'a> From<&'a ClassifiedSpan> for SpanRecord<'a> {
    fn from(span: &'a ClassifiedSpan) -> Self {
        SpanRecord {
            start: span.start(),
            end: span.end(),
            kind: span.kind,
            entry_id: span.entry_id(),
        }
    }
}
