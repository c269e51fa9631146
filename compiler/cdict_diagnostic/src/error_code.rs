//! Error codes for all engine diagnostics.
//!
//! Each code is a unique identifier (e.g. `W1001`) whose first digit names
//! the phase that produced it. Used by `cdict explain`-style lookups and by
//! callers that filter diagnostics without matching on message text.

use std::fmt;

/// Error codes for all engine diagnostics.
///
/// Format: W#### where the first digit indicates the phase:
/// - W1xxx: catalogue normalization
/// - W2xxx: lexical scanning
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Catalogue Warnings (W1xxx)
    /// Redirect stub points at an id that no entry carries
    W1001,
    /// Redirect stubs form a cycle
    W1002,
    /// Two entries share both canonical id and spelling
    W1003,
    /// Two entries of one category share a spelling
    W1004,
    /// Entry rejected as malformed
    W1005,

    // Lexical Warnings (W2xxx)
    /// Unterminated block comment
    W2001,
    /// Unterminated string or character literal
    W2002,
}

impl ErrorCode {
    /// All codes, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::W1001,
        ErrorCode::W1002,
        ErrorCode::W1003,
        ErrorCode::W1004,
        ErrorCode::W1005,
        ErrorCode::W2001,
        ErrorCode::W2002,
    ];

    /// The code as it is printed (`"W1001"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W1001 => "W1001",
            ErrorCode::W1002 => "W1002",
            ErrorCode::W1003 => "W1003",
            ErrorCode::W1004 => "W1004",
            ErrorCode::W1005 => "W1005",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
        }
    }

    /// Stable diagnostic name, matching the variant names used by the
    /// catalogue and lexer issue types.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::W1001 => "DanglingRedirect",
            ErrorCode::W1002 => "RedirectCycle",
            ErrorCode::W1003 => "ConflictingDuplicate",
            ErrorCode::W1004 => "ShadowedSpelling",
            ErrorCode::W1005 => "MalformedEntry",
            ErrorCode::W2001 => "UnterminatedComment",
            ErrorCode::W2002 => "UnterminatedLiteral",
        }
    }

    /// One-line explanation of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W1001 => "a redirect stub points at an entry id that does not exist",
            ErrorCode::W1002 => "redirect stubs point at each other without reaching an entry",
            ErrorCode::W1003 => "an entry repeats another entry's canonical id and spelling",
            ErrorCode::W1004 => "two entries of the same category share one spelling",
            ErrorCode::W1005 => "an entry was dropped because it could not be repaired",
            ErrorCode::W2001 => "a block comment is not closed before the end of input",
            ErrorCode::W2002 => "a string or character literal is not closed",
        }
    }

    /// Look a code up by its printed form or its name.
    pub fn parse(text: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(text) || code.name() == text)
    }

    /// Is this a catalogue normalization code (W1xxx)?
    pub fn is_catalogue_warning(&self) -> bool {
        self.as_str().starts_with("W1")
    }

    /// Is this a lexical scanning code (W2xxx)?
    pub fn is_lexical_warning(&self) -> bool {
        self.as_str().starts_with("W2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
