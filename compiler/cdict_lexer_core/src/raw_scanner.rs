//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner runs over a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values without allocating. It does not know which words
//! are keywords or which catalogue entry an operator is; the cooking layer
//! (`cdict_lexer`) answers those questions from the token index.
//!
//! # States
//!
//! Comments and literals are consumed whole by a single call, so they are
//! opaque: nothing inside `/* -- */` or `"a+b"` is ever matched as an
//! operator. The only state carried between calls is line bookkeeping for
//! preprocessor directives: whether the next token is the first on its line
//! and whether a directive body is still open.

use crate::cursor::Cursor;
use crate::punct::PunctuatorTable;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free C scanner.
///
/// Produces one token at a time as a `(tag, length)` pair. Token lengths
/// always sum to the source length, and no token splits a UTF-8 character.
pub struct RawScanner<'a, T: PunctuatorTable + ?Sized> {
    cursor: Cursor<'a>,
    puncts: &'a T,
    /// Fold the text after `#`/`%:` into one `DirectiveBody` token.
    fold_directives: bool,
    /// No significant token has been produced on the current line yet.
    at_line_start: bool,
    /// Inside a directive line whose body has not ended.
    in_directive: bool,
}

impl<'a, T: PunctuatorTable + ?Sized> RawScanner<'a, T> {
    /// Create a new scanner from a cursor and an operator table.
    pub fn new(cursor: Cursor<'a>, puncts: &'a T) -> Self {
        Self {
            cursor,
            puncts,
            fold_directives: true,
            at_line_start: true,
            in_directive: false,
        }
    }

    /// Choose whether directive lines are folded into `DirectiveBody`
    /// tokens (the default) or scanned like any other line.
    #[must_use]
    pub fn with_directive_folding(mut self, fold: bool) -> Self {
        self.fold_directives = fold;
        self
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }

        let tag = self.dispatch(start);
        match tag {
            RawTag::Newline => {
                self.at_line_start = true;
                self.in_directive = false;
            }
            _ if tag.is_trivia() => {}
            _ => self.at_line_start = false,
        }

        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn dispatch(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(),
            b'\r' if self.cursor.peek() != b'\n' => self.whitespace(),
            b'\r' | b'\n' => self.newline(),
            b'/' if self.cursor.peek() == b'/' => self.line_comment(),
            b'/' if self.cursor.peek() == b'*' => self.block_comment(),
            _ if self.in_directive => self.directive_body(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(),
            b'"' => self.literal(b'"'),
            b'\'' => self.literal(b'\''),
            0x80..=0xFF => self.unknown_char(),
            _ => self.punct(start),
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn whitespace(&mut self) -> RawTag {
        self.cursor.eat_horizontal_whitespace();
        RawTag::Whitespace
    }

    fn newline(&mut self) -> RawTag {
        if self.cursor.current() == b'\r' {
            self.cursor.advance();
        }
        self.cursor.advance();
        RawTag::Newline
    }

    fn line_comment(&mut self) -> RawTag {
        self.cursor.advance_n(2);
        self.cursor.eat_until_newline_or_eof();
        // `\r\n` endings leave the `\r` to the newline token.
        RawTag::LineComment
    }

    fn block_comment(&mut self) -> RawTag {
        self.cursor.advance_n(2);
        if self.cursor.eat_block_comment_body() {
            RawTag::BlockComment
        } else {
            RawTag::UnterminatedBlockComment
        }
    }

    // ─── Words & Numbers ───────────────────────────────────────────

    fn identifier(&mut self) -> RawTag {
        let word_start = self.cursor.rest();
        let start = self.cursor.pos();
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let word = &word_start[..(self.cursor.pos() - start) as usize];

        let is_encoding_prefix = matches!(word, b"L" | b"u" | b"U" | b"u8");
        match self.cursor.current() {
            b'"' if is_encoding_prefix => self.literal(b'"'),
            b'\'' if is_encoding_prefix => self.literal(b'\''),
            _ => RawTag::Ident,
        }
    }

    /// A preprocessing number: a digit (or `.` digit) followed by digits,
    /// letters, `_`, `.`, and exponent signs after `e`/`E`/`p`/`P`.
    fn number(&mut self) -> RawTag {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                b'e' | b'E' | b'p' | b'P' if matches!(self.cursor.peek(), b'+' | b'-') => {
                    self.cursor.advance_n(2);
                }
                b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'.' => self.cursor.advance(),
                _ => break,
            }
        }
        RawTag::Number
    }

    // ─── Literals ──────────────────────────────────────────────────

    /// Scan a string or character literal; the cursor sits on its quote.
    fn literal(&mut self, quote: u8) -> RawTag {
        let closed = self.literal_body(quote);
        match (quote, closed) {
            (b'"', true) => RawTag::String,
            (b'"', false) => RawTag::UnterminatedString,
            (_, true) => RawTag::Char,
            (_, false) => RawTag::UnterminatedChar,
        }
    }

    /// Consume a quoted run. Returns `false` when a raw newline or the end
    /// of input arrives before the closing quote; the newline is not
    /// consumed.
    fn literal_body(&mut self, quote: u8) -> bool {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
                        self.cursor.advance_n(2);
                    } else {
                        self.cursor.advance_char();
                    }
                }
                b'\n' => return false,
                b'\r' if self.cursor.peek() == b'\n' => return false,
                b'\r' => self.cursor.advance(),
                0 => return false,
                _ => {
                    self.cursor.advance();
                    return true;
                }
            }
        }
    }

    // ─── Punctuation ───────────────────────────────────────────────

    fn punct(&mut self, start: u32) -> RawTag {
        let rest = self.cursor.rest();
        let Some(len) = self.puncts.longest_prefix(rest) else {
            self.cursor.advance();
            return RawTag::Unknown;
        };
        self.cursor.advance_n(len);

        if self.fold_directives && self.at_line_start {
            let spelling = &rest[..(self.cursor.pos() - start) as usize];
            if spelling == b"#" || spelling == b"%:" {
                self.in_directive = true;
            }
        }
        RawTag::Punct
    }

    fn unknown_char(&mut self) -> RawTag {
        self.cursor.advance_char();
        RawTag::Unknown
    }

    // ─── Directives ────────────────────────────────────────────────

    /// The directive text up to the end of the line.
    ///
    /// Backslash-newline continues the line. A comment ends the body (the
    /// body resumes after a block comment that closes on the same line),
    /// and trailing whitespace is left for a `Whitespace` token. An
    /// unterminated literal also ends the body and is scanned as its own
    /// token.
    fn directive_body(&mut self) -> RawTag {
        let body_start = self.cursor.pos();
        let mut body_end = self.cursor;
        loop {
            if self.cursor.is_eof() {
                break;
            }
            match self.cursor.current() {
                b'\n' => break,
                b'\r' if self.cursor.peek() == b'\n' => break,
                b'/' if matches!(self.cursor.peek(), b'/' | b'*') => break,
                b'\\' if self.cursor.peek() == b'\n' => {
                    self.cursor.advance_n(2);
                    body_end = self.cursor;
                }
                b'\\' if self.cursor.peek() == b'\r' && self.cursor.peek2() == b'\n' => {
                    self.cursor.advance_n(3);
                    body_end = self.cursor;
                }
                quote @ (b'"' | b'\'') => {
                    let literal_start = self.cursor;
                    if !self.literal_body(quote) {
                        self.cursor = literal_start;
                        if body_end.pos() == body_start {
                            return self.literal(quote);
                        }
                        break;
                    }
                    body_end = self.cursor;
                }
                b' ' | b'\t' | 0x0B | 0x0C | b'\r' => self.cursor.advance(),
                _ => {
                    self.cursor.advance_char();
                    body_end = self.cursor;
                }
            }
        }
        self.cursor = body_end;
        RawTag::DirectiveBody
    }
}

#[cfg(test)]
mod tests;
