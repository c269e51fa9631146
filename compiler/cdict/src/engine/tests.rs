#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{SpanKind, SpanRecord};
use cdict_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn keyword(id: &str, token: &str) -> RawEntry {
    RawEntry::new(id, token, Category::Keyword, format!("The {token} keyword."))
}

fn op(id: &str, token: &str) -> RawEntry {
    RawEntry::new(id, token, Category::Operator, format!("Operator {token}."))
}

fn ident(id: &str, token: &str) -> RawEntry {
    RawEntry::new(id, token, Category::Identifier, format!("About {token}."))
}

fn small() -> Vec<RawEntry> {
    vec![
        keyword("kw-int", "int"),
        keyword("kw-sizeof", "sizeof"),
        ident("id-sizeof", "sizeof"),
        ident("id-exit", "exit"),
        RawEntry::new("id-_exit", "_Exit", Category::Identifier, "<a id=\"id-exit\"></a>"),
        op("op-assign", "="),
        op("op-plus", "+"),
        op("op-inc", "++"),
        op("op-semi", ";"),
    ]
}

fn kinds(classification: &Classification) -> Vec<SpanKind> {
    classification.spans.iter().map(|s| s.kind).collect()
}

#[test]
fn lookup_resolves_every_category() {
    let engine = Engine::new(&small());
    assert_eq!(engine.lookup("int").unwrap().canonical_id(), "kw-int");
    assert_eq!(engine.lookup("++").unwrap().canonical_id(), "op-inc");
    assert_eq!(engine.lookup("exit").unwrap().canonical_id(), "id-exit");
    assert!(engine.lookup("printf").is_none());
}

#[test]
fn keyword_wins_over_identifier() {
    let engine = Engine::new(&small());
    assert_eq!(engine.lookup("sizeof").unwrap().category(), Category::Keyword);
    assert_eq!(
        engine
            .lookup_in(Category::Identifier, "sizeof")
            .unwrap()
            .canonical_id(),
        "id-sizeof"
    );
    let classification = engine.classify("sizeof");
    assert_eq!(classification.spans[0].kind, SpanKind::Keyword);
    assert_eq!(classification.spans[0].entry_id(), Some("kw-sizeof"));
}

#[test]
fn redirect_spelling_resolves_to_target() {
    let engine = Engine::new(&small());
    let entry = engine.lookup("_Exit").unwrap();
    assert_eq!(entry.canonical_id(), "id-exit");
    assert_eq!(engine.entry("id-exit").unwrap(), entry);
    assert!(engine.report().is_empty());
}

#[test]
fn classify_keeps_whitespace_by_default() {
    let engine = Engine::new(&small());
    let all = engine.classify("int x;");
    assert_eq!(
        kinds(&all),
        vec![
            SpanKind::Keyword,
            SpanKind::Whitespace,
            SpanKind::Identifier,
            SpanKind::Operator,
        ]
    );
    let significant = engine.classify_significant("int x;");
    assert_eq!(
        kinds(&significant),
        vec![SpanKind::Keyword, SpanKind::Identifier, SpanKind::Operator]
    );
}

#[test]
fn options_apply_to_every_scan() {
    let engine = Engine::new(&small()).with_options(ScanOptions::significant());
    assert!(!engine.options().keep_whitespace);
    assert_eq!(engine.classify("int  x").spans.len(), 2);
}

#[test]
fn span_at_matches_full_classification() {
    let engine = Engine::new(&small());
    let source = "int x = a+++b;";
    let full = engine.classify(source);
    for offset in 0..=u32::try_from(source.len()).unwrap() {
        assert_eq!(
            engine.span_at(source, offset).as_ref(),
            full.span_at(offset),
            "offset {offset}"
        );
    }
}

#[test]
fn classification_records() {
    let engine = Engine::new(&small());
    let classification = engine.classify("x++");
    let records = classification.records();
    assert_eq!(
        records,
        vec![
            SpanRecord {
                start: 0,
                end: 1,
                kind: SpanKind::Identifier,
                entry_id: None,
            },
            SpanRecord {
                start: 1,
                end: 3,
                kind: SpanKind::Operator,
                entry_id: Some("op-inc"),
            },
        ]
    );
    assert_eq!(classification.catalogued().count(), 1);
    assert!(!classification.has_warnings());
}

#[test]
fn report_carries_normalization_issues() {
    let mut raw = small();
    raw.push(RawEntry::new(
        "id-gone",
        "gone",
        Category::Identifier,
        "<a id=\"id-missing\"></a>",
    ));
    let engine = Engine::new(&raw);
    let report = engine.report();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].code, ErrorCode::W1001);
    assert_eq!(engine.snapshot().issues().len(), 1);
}

#[test]
fn reload_swaps_snapshot() {
    let engine = Engine::new(&small());
    let before = engine.snapshot();
    assert_eq!(before.generation(), 0);

    let mut raw = small();
    raw.push(ident("id-printf", "printf"));
    let after = engine.reload(&raw);

    assert_eq!(after.generation(), 1);
    assert_eq!(engine.snapshot().generation(), 1);
    assert!(engine.lookup("printf").is_some());

    // The old snapshot still answers with the old catalogue.
    assert!(before.index().lookup("printf").is_none());
    let old = before.classify("printf", engine.options());
    assert!(old.spans[0].entry.is_none());
}

#[test]
fn lexical_warnings_are_returned() {
    let engine = Engine::new(&small());
    let classification = engine.classify("int /* open");
    assert!(classification.has_warnings());
    assert_eq!(classification.diagnostics[0].code, ErrorCode::W2001);
    assert_eq!(
        classification.spans.last().unwrap().kind,
        SpanKind::UnterminatedComment
    );
}
