//! Raw token tags produced by the scanner.
//!
//! Tags carry no text and no catalogue knowledge. Error conditions are tag
//! variants rather than `Result::Err`, so scanning never stops early.

/// Kind of a raw token.
///
/// Discriminants are grouped into semantic ranges:
/// - 0-15: words and literals
/// - 16-31: punctuation
/// - 32-47: trivia
/// - 240-254: recoverable errors
/// - 255: end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Words & Literals
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident = 0,
    /// A preprocessing number (`42`, `.5`, `1e+10`, `0x1p-3`).
    Number = 1,
    /// A closed string literal, including any encoding prefix.
    String = 2,
    /// A closed character constant, including any encoding prefix.
    Char = 3,

    // Punctuation
    /// The longest operator spelling the punctuator table matched.
    Punct = 16,
    /// The rest of a preprocessor directive line after `#` / `%:`.
    DirectiveBody = 17,

    // Trivia
    /// Spaces, tabs, vertical tabs, form feeds, lone carriage returns.
    Whitespace = 32,
    /// `\n` or `\r\n`.
    Newline = 33,
    /// `// ...` up to (not including) the newline.
    LineComment = 34,
    /// `/* ... */`
    BlockComment = 35,

    // Errors
    /// `/*` with no closing `*/`; runs to end of input.
    UnterminatedBlockComment = 240,
    /// String literal closed by a newline or end of input.
    UnterminatedString = 241,
    /// Character constant closed by a newline or end of input.
    UnterminatedChar = 242,
    /// A byte (or UTF-8 character) that starts no C token.
    Unknown = 243,

    // Control
    /// End of input. Always `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Human-readable name for messages.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Number => "number",
            RawTag::String => "string literal",
            RawTag::Char => "character constant",
            RawTag::Punct => "punctuator",
            RawTag::DirectiveBody => "directive body",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
            RawTag::UnterminatedString => "unterminated string literal",
            RawTag::UnterminatedChar => "unterminated character constant",
            RawTag::Unknown => "unknown character",
            RawTag::Eof => "end of input",
        }
    }

    /// Whitespace, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment
        )
    }

    /// Recoverable scan errors.
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }
}

/// A raw token: a tag and its byte length.
///
/// The start offset is implicit: the running sum of previous lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
