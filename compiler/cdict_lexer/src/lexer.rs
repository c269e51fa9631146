//! The lexer driver: raw scanner plus cooker, as an iterator.

use cdict_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, Span};
use cdict_index::TokenIndex;
use cdict_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use crate::cooker::SpanCooker;
use crate::{ClassifiedSpan, ScanOptions, SpanKind};

/// Source text prepared for scanning.
///
/// Owns the sentinel-terminated copy the raw scanner runs over; lexers
/// borrow it, so one `SourceText` can be scanned any number of times.
pub struct SourceText<'s> {
    text: &'s str,
    buffer: SourceBuffer,
}

impl<'s> SourceText<'s> {
    pub fn new(text: &'s str) -> Self {
        SourceText {
            text,
            buffer: SourceBuffer::new(text),
        }
    }

    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Start a fresh scan from byte 0.
    pub fn lexer<'a>(&'a self, index: &'a TokenIndex, options: &ScanOptions) -> Lexer<'a> {
        let scanner = RawScanner::new(self.buffer.cursor(), index)
            .with_directive_folding(options.fold_directives);
        Lexer {
            scanner,
            cooker: SpanCooker::new(index, self.text),
            keep_whitespace: options.keep_whitespace,
            warnings: DiagnosticQueue::with_config(DiagnosticConfig {
                limit: options.warning_limit,
                deduplicate: false,
            }),
        }
    }
}

/// Iterator over the classified spans of one source text.
///
/// Lexical warnings collect inside the lexer while it runs; take them with
/// [`Lexer::take_diagnostics`] once iteration is done.
pub struct Lexer<'a> {
    scanner: RawScanner<'a, TokenIndex>,
    cooker: SpanCooker<'a>,
    keep_whitespace: bool,
    warnings: DiagnosticQueue,
}

impl Lexer<'_> {
    /// Warnings found so far, ordered by position.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.warnings.flush()
    }

    /// Warnings discarded because the configured limit was reached.
    pub fn dropped_warnings(&self) -> usize {
        self.warnings.dropped()
    }
}

impl Iterator for Lexer<'_> {
    type Item = ClassifiedSpan;

    fn next(&mut self) -> Option<ClassifiedSpan> {
        loop {
            let start = self.scanner.pos();
            let token = self.scanner.next_token();
            if token.tag == RawTag::Eof {
                return None;
            }

            let span = Span::new(start, start + token.len);
            if token.tag.is_error() {
                trace!(?span, tag = token.tag.name(), "recovered scan error");
            }
            let cooked = self.cooker.cook(token.tag, span);
            if let Some(warning) = cooked.warning {
                trace!(?span, kind = ?warning.kind, "lexical warning");
                self.warnings.push(warning.to_diagnostic());
            }
            if cooked.kind == SpanKind::Whitespace && !self.keep_whitespace {
                continue;
            }
            return Some(ClassifiedSpan {
                span,
                kind: cooked.kind,
                entry: cooked.entry,
            });
        }
    }
}

/// Everything one scan produced.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// Spans in source order.
    pub spans: Vec<ClassifiedSpan>,
    /// `W2xxx` warnings, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    /// The span containing byte `offset`, if any.
    pub fn span_at(&self, offset: u32) -> Option<&ClassifiedSpan> {
        crate::span_at(&self.spans, offset)
    }

    /// Spans other than whitespace.
    pub fn significant(&self) -> impl Iterator<Item = &ClassifiedSpan> {
        self.spans.iter().filter(|s| s.kind != SpanKind::Whitespace)
    }
}

/// Classify all of `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(index: &TokenIndex, source: &str, options: &ScanOptions) -> LexOutput {
    let text = SourceText::new(source);
    let mut lexer = text.lexer(index, options);
    let spans: Vec<ClassifiedSpan> = lexer.by_ref().collect();
    let diagnostics = lexer.take_diagnostics();
    debug!(
        spans = spans.len(),
        warnings = diagnostics.len(),
        "classified source"
    );
    LexOutput { spans, diagnostics }
}
