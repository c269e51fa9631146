//! Lexical warnings.

use cdict_diagnostic::{Diagnostic, ErrorCode, Span};

/// What was left open.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexWarningKind {
    UnterminatedComment,
    UnterminatedString,
    UnterminatedChar,
}

/// A recoverable lexical defect at a span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexWarning {
    pub kind: LexWarningKind,
    pub span: Span,
}

impl LexWarning {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexWarningKind::UnterminatedComment => ErrorCode::W2001,
            LexWarningKind::UnterminatedString | LexWarningKind::UnterminatedChar => {
                ErrorCode::W2002
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.code());
        match self.kind {
            LexWarningKind::UnterminatedComment => diag
                .with_message("unterminated block comment")
                .with_label(self.span, "comment starts here")
                .with_note("the rest of the input was read as comment text"),
            LexWarningKind::UnterminatedString => diag
                .with_message("unterminated string literal")
                .with_label(self.span, "missing closing `\"`")
                .with_note("string literals cannot span lines without a trailing `\\`"),
            LexWarningKind::UnterminatedChar => diag
                .with_message("unterminated character constant")
                .with_label(self.span, "missing closing `'`"),
        }
    }
}
