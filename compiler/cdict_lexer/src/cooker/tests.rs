use super::*;
use cdict_catalog::{normalize, Category, RawEntry};

fn index() -> TokenIndex {
    let raw = vec![
        RawEntry::new("kw-int", "int", Category::Keyword, "int"),
        RawEntry::new("id-int", "int", Category::Identifier, "shadowed by the keyword"),
        RawEntry::new("id-abs", "abs", Category::Identifier, "abs"),
        RawEntry::new("op-plus", "+", Category::Operator, "plus"),
    ];
    TokenIndex::build(normalize(&raw).catalogue)
}

fn cook(index: &TokenIndex, source: &str, tag: RawTag) -> Cooked {
    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    SpanCooker::new(index, source).cook(tag, Span::new(0, len))
}

#[test]
fn keyword_beats_identifier() {
    let index = index();
    let cooked = cook(&index, "int", RawTag::Ident);
    assert_eq!(cooked.kind, SpanKind::Keyword);
    assert_eq!(
        cooked.entry.as_deref().map(Entry::canonical_id),
        Some("kw-int")
    );
}

#[test]
fn unknown_word_is_bare_identifier() {
    let index = index();
    let known = cook(&index, "abs", RawTag::Ident);
    assert_eq!(known.kind, SpanKind::Identifier);
    assert!(known.entry.is_some());

    let unknown = cook(&index, "my_var", RawTag::Ident);
    assert_eq!(unknown.kind, SpanKind::Identifier);
    assert!(unknown.entry.is_none());
}

#[test]
fn punctuator_gets_operator_entry() {
    let index = index();
    let cooked = cook(&index, "+", RawTag::Punct);
    assert_eq!(cooked.kind, SpanKind::Operator);
    assert!(cooked.entry.is_some());
}

#[test]
fn errors_carry_warnings() {
    let index = index();
    let cooked = cook(&index, "/* x", RawTag::UnterminatedBlockComment);
    assert_eq!(cooked.kind, SpanKind::UnterminatedComment);
    assert_eq!(
        cooked.warning.map(|w| w.kind),
        Some(LexWarningKind::UnterminatedComment)
    );

    let cooked = cook(&index, "'a", RawTag::UnterminatedChar);
    assert_eq!(cooked.kind, SpanKind::UnterminatedLiteral);
    assert!(cooked.warning.is_some());
}

#[test]
fn trivia_has_no_entry() {
    let index = index();
    for (source, tag, kind) in [
        (" ", RawTag::Whitespace, SpanKind::Whitespace),
        ("\n", RawTag::Newline, SpanKind::Whitespace),
        ("// c", RawTag::LineComment, SpanKind::Comment),
        ("/* c */", RawTag::BlockComment, SpanKind::Comment),
    ] {
        let cooked = cook(&index, source, tag);
        assert_eq!(cooked.kind, kind);
        assert!(cooked.entry.is_none());
        assert!(cooked.warning.is_none());
    }
}
