#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code, panics give clear failure messages"
)]

//! Concurrent classification and reload.

use std::sync::atomic::{AtomicBool, Ordering};

use cdict::{Category, Engine, RawEntry, SpanKind};
use pretty_assertions::assert_eq;
use rayon::prelude::*;

fn sources() -> Vec<String> {
    (0..64)
        .map(|i| format!("int v{i} = v{i} <<= {i}; /* {i} */ printf(\"%d\", v{i}++);\n"))
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let engine = Engine::builtin().unwrap();
    let sources = sources();
    let sequential: Vec<_> = sources
        .iter()
        .map(|s| engine.classify(s).spans)
        .collect();
    let parallel: Vec<_> = sources
        .par_iter()
        .map(|s| engine.classify(s).spans)
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn reload_does_not_disturb_running_scans() {
    let engine = Engine::builtin().unwrap();
    let mut with_widget = cdict_catalog::builtin().unwrap();
    with_widget.push(RawEntry::new(
        "id-widget",
        "widget",
        Category::Identifier,
        "A made-up identifier.",
    ));
    let plain = cdict_catalog::builtin().unwrap();
    let done = AtomicBool::new(false);

    rayon::scope(|scope| {
        scope.spawn(|_| {
            for round in 0..8 {
                let raw = if round % 2 == 0 { &with_widget } else { &plain };
                engine.reload(raw);
            }
            done.store(true, Ordering::Release);
        });

        (0..256).into_par_iter().for_each(|_| {
            let snapshot = engine.snapshot();
            let classification = snapshot.classify("widget + 1", engine.options());
            let widget = &classification.spans[0];
            assert_eq!(widget.kind, SpanKind::Identifier);
            // A scan sees its own snapshot's catalogue, never a mix.
            assert_eq!(
                widget.entry.is_some(),
                snapshot.index().lookup("widget").is_some()
            );
        });
    });

    assert!(done.load(Ordering::Acquire));
    assert_eq!(engine.snapshot().generation(), 8);
    assert!(engine.lookup("widget").is_none());
}
