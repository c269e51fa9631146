use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The C punctuators, digraphs included.
const C_PUNCTUATORS: &[&str] = &[
    "[", "]", "(", ")", "{", "}", ".", "->", "++", "--", "&", "*", "+", "-", "~", "!", "/", "%",
    "<<", ">>", "<", ">", "<=", ">=", "==", "!=", "^", "|", "&&", "||", "?", ":", ";", "...", "=",
    "*=", "/=", "%=", "+=", "-=", "<<=", ">>=", "&=", "^=", "|=", ",", "#", "##", "<:", ":>",
    "<%", "%>", "%:", "%:%:",
];

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    scan_with(source, true)
}

fn scan_with(source: &str, fold: bool) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor(), C_PUNCTUATORS).with_directive_folding(fold);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and pair each tag with its text.
fn scan_text(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    scan(source)
        .into_iter()
        .map(|tok| {
            let end = pos + tok.len as usize;
            let text = &source[pos..end];
            pos = end;
            (tok.tag, text)
        })
        .collect()
}

fn significant(source: &str) -> Vec<(RawTag, &str)> {
    scan_text(source)
        .into_iter()
        .filter(|(tag, _)| !tag.is_trivia())
        .collect()
}

// ─── Maximal Munch ─────────────────────────────────────────────

#[test]
fn longest_operator_wins() {
    assert_eq!(scan_text("<<="), vec![(RawTag::Punct, "<<=")]);
    assert_eq!(
        significant("a+++b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Punct, "++"),
            (RawTag::Punct, "+"),
            (RawTag::Ident, "b"),
        ]
    );
}

#[test]
fn digraphs_are_punctuators() {
    assert_eq!(
        significant("<: :> <% %> %:%:"),
        vec![
            (RawTag::Punct, "<:"),
            (RawTag::Punct, ":>"),
            (RawTag::Punct, "<%"),
            (RawTag::Punct, "%>"),
            (RawTag::Punct, "%:%:"),
        ]
    );
}

#[test]
fn unmatched_punctuation_is_one_unknown_byte() {
    assert_eq!(
        scan_text("@$"),
        vec![(RawTag::Unknown, "@"), (RawTag::Unknown, "$")]
    );
}

#[test]
fn non_ascii_is_one_unknown_character() {
    assert_eq!(
        scan_text("\u{00e9}\u{1f600}"),
        vec![(RawTag::Unknown, "\u{00e9}"), (RawTag::Unknown, "\u{1f600}")]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn block_comment_is_opaque() {
    assert_eq!(scan_text("/* -- */"), vec![(RawTag::BlockComment, "/* -- */")]);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    assert_eq!(
        scan_text("x /* open"),
        vec![
            (RawTag::Ident, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedBlockComment, "/* open"),
        ]
    );
}

#[test]
fn line_comment_excludes_newline() {
    assert_eq!(
        scan_text("// hi\r\nx"),
        vec![
            (RawTag::LineComment, "// hi\r"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

// ─── Literals ──────────────────────────────────────────────────

#[test]
fn string_with_escaped_quote() {
    assert_eq!(scan_text(r#""a\"b""#), vec![(RawTag::String, r#""a\"b""#)]);
}

#[test]
fn char_constants() {
    assert_eq!(
        significant(r"'a' '\'' '\\'"),
        vec![
            (RawTag::Char, "'a'"),
            (RawTag::Char, r"'\''"),
            (RawTag::Char, r"'\\'"),
        ]
    );
}

#[test]
fn newline_terminates_literal() {
    assert_eq!(
        scan_text("\"abc\nx"),
        vec![
            (RawTag::UnterminatedString, "\"abc"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn eof_terminates_literal() {
    assert_eq!(scan_text("'ab"), vec![(RawTag::UnterminatedChar, "'ab")]);
}

#[test]
fn escaped_newline_continues_literal() {
    assert_eq!(scan_text("\"a\\\nb\""), vec![(RawTag::String, "\"a\\\nb\"")]);
}

#[test]
fn encoding_prefixes_join_the_literal() {
    assert_eq!(
        significant(r#"L"w" u8"s" U'c' u'd' Lx"#),
        vec![
            (RawTag::String, r#"L"w""#),
            (RawTag::String, r#"u8"s""#),
            (RawTag::Char, "U'c'"),
            (RawTag::Char, "u'd'"),
            (RawTag::Ident, "Lx"),
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn pp_numbers() {
    assert_eq!(
        significant("42 .5 1e+10 0x1p-3 10UL 1.0f"),
        vec![
            (RawTag::Number, "42"),
            (RawTag::Number, ".5"),
            (RawTag::Number, "1e+10"),
            (RawTag::Number, "0x1p-3"),
            (RawTag::Number, "10UL"),
            (RawTag::Number, "1.0f"),
        ]
    );
}

#[test]
fn minus_after_plain_letter_is_operator() {
    assert_eq!(
        significant("0xA-1"),
        vec![
            (RawTag::Number, "0xA"),
            (RawTag::Punct, "-"),
            (RawTag::Number, "1"),
        ]
    );
}

// ─── Directives ────────────────────────────────────────────────

#[test]
fn directive_body_is_folded() {
    assert_eq!(
        scan_text("#include <stdio.h>\nint"),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::DirectiveBody, "include <stdio.h>"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "int"),
        ]
    );
}

#[test]
fn directive_stops_before_comment_and_resumes() {
    assert_eq!(
        scan_text("  %: define A 1 /* c */ + 2 // d"),
        vec![
            (RawTag::Whitespace, "  "),
            (RawTag::Punct, "%:"),
            (RawTag::Whitespace, " "),
            (RawTag::DirectiveBody, "define A 1"),
            (RawTag::Whitespace, " "),
            (RawTag::BlockComment, "/* c */"),
            (RawTag::Whitespace, " "),
            (RawTag::DirectiveBody, "+ 2"),
            (RawTag::Whitespace, " "),
            (RawTag::LineComment, "// d"),
        ]
    );
}

#[test]
fn directive_continues_across_backslash_newline() {
    assert_eq!(
        scan_text("#define M(x) \\\n  (x)\ny"),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::DirectiveBody, "define M(x) \\\n  (x)"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "y"),
        ]
    );
}

#[test]
fn quoted_comment_marker_stays_in_directive() {
    assert_eq!(
        significant("#include \"a//b.h\""),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::DirectiveBody, "include \"a//b.h\""),
        ]
    );
}

#[test]
fn unterminated_string_ends_directive_body() {
    assert_eq!(
        scan_text("#define S \"abc\nint y;"),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::DirectiveBody, "define S"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedString, "\"abc"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "int"),
            (RawTag::Whitespace, " "),
            (RawTag::Ident, "y"),
            (RawTag::Punct, ";"),
        ]
    );
}

#[test]
fn unterminated_char_opening_directive_body() {
    assert_eq!(
        scan_text("# 'x"),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedChar, "'x"),
        ]
    );
}

#[test]
fn closed_literal_stays_in_directive_body() {
    assert_eq!(
        significant("#define C 'a' + \"b\""),
        vec![
            (RawTag::Punct, "#"),
            (RawTag::DirectiveBody, "define C 'a' + \"b\""),
        ]
    );
}

#[test]
fn hash_mid_line_is_plain_operator() {
    assert_eq!(
        significant("x # y"),
        vec![
            (RawTag::Ident, "x"),
            (RawTag::Punct, "#"),
            (RawTag::Ident, "y"),
        ]
    );
}

#[test]
fn folding_can_be_disabled() {
    let tags: Vec<_> = scan_with("#if X", false).iter().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![
            RawTag::Punct,
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Ident
        ]
    );
}

// ─── EOF ───────────────────────────────────────────────────────

#[test]
fn eof_repeats_with_zero_length() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor(), C_PUNCTUATORS);
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

#[test]
fn crlf_is_one_newline() {
    assert_eq!(
        scan_text("a\r\nb\rc"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Ident, "b"),
            (RawTag::Whitespace, "\r"),
            (RawTag::Ident, "c"),
        ]
    );
}

// ─── Property Tests ────────────────────────────────────────────

proptest! {
    #[test]
    fn token_lengths_cover_the_source(source in "\\PC{0,200}") {
        let tokens = scan(&source);
        let total: usize = tokens.iter().map(|t| t.len as usize).sum();
        prop_assert_eq!(total, source.len());
        prop_assert!(tokens.iter().all(|t| t.len > 0));

        // No token boundary splits a character.
        let mut pos = 0usize;
        for tok in &tokens {
            prop_assert!(source.is_char_boundary(pos));
            pos += tok.len as usize;
        }
    }

    #[test]
    fn c_like_sources_cover_the_source(
        source in "[a-z0-9_ \\t\\n\\r#%:<>=+*/\\-\\\\'\".;{}()]{0,120}"
    ) {
        let total: usize = scan(&source).iter().map(|t| t.len as usize).sum();
        prop_assert_eq!(total, source.len());
    }
}
