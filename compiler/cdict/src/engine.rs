//! The lookup facade.
//!
//! An [`Engine`] owns the current [`Snapshot`] (normalized catalogue plus
//! token index) behind a `parking_lot::RwLock<Arc<_>>`. Readers clone the
//! `Arc` and drop the lock at once, so a scan never holds it; [`Engine::reload`]
//! builds the replacement outside the lock and swaps it in, and scans already
//! running finish against the snapshot they started with.

use std::sync::Arc;

use cdict_catalog::{normalize, Category, Entry, LoadError, NormalizeIssue, Normalized, RawEntry};
use cdict_diagnostic::Diagnostic;
use cdict_index::TokenIndex;
use cdict_lexer::{lex, ClassifiedSpan, ScanOptions, SourceText};
use parking_lot::RwLock;
use tracing::debug;

use crate::Classification;

/// One immutable generation of the engine's data.
#[derive(Debug)]
pub struct Snapshot {
    index: TokenIndex,
    issues: Vec<NormalizeIssue>,
    generation: u64,
}

impl Snapshot {
    fn build(normalized: Normalized) -> Self {
        Snapshot {
            index: TokenIndex::build(normalized.catalogue),
            issues: normalized.report,
            generation: 0,
        }
    }

    pub fn index(&self) -> &TokenIndex {
        &self.index
    }

    /// Normalization issues of the catalogue this snapshot was built from.
    pub fn issues(&self) -> &[NormalizeIssue] {
        &self.issues
    }

    /// The issues as `W1xxx` diagnostics, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.issues.iter().map(NormalizeIssue::to_diagnostic).collect()
    }

    /// Starts at 0 and increases by one with every reload.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn classify(&self, source: &str, options: &ScanOptions) -> Classification {
        lex(&self.index, source, options).into()
    }

    /// The span containing byte `offset`, scanning no further than needed.
    pub fn span_at(
        &self,
        source: &str,
        offset: u32,
        options: &ScanOptions,
    ) -> Option<ClassifiedSpan> {
        let text = SourceText::new(source);
        let mut spans = text
            .lexer(&self.index, options)
            .take_while(|s| s.span.start <= offset);
        spans.find(|s| s.span.contains(offset))
    }
}

/// Token dictionary engine: lookups and source classification against the
/// current catalogue snapshot.
///
/// Every method takes `&self`; share an engine across threads with `Arc`
/// or by reference.
#[derive(Debug)]
pub struct Engine {
    current: RwLock<Arc<Snapshot>>,
    options: ScanOptions,
}

impl Engine {
    /// Normalize `raw` and index the result.
    #[tracing::instrument(level = "debug", skip_all, fields(raw = raw.len()))]
    pub fn new(raw: &[RawEntry]) -> Self {
        Self::from_catalogue(normalize(raw))
    }

    /// An engine over the built-in C dictionary.
    pub fn builtin() -> Result<Self, LoadError> {
        Ok(Self::new(&cdict_catalog::builtin()?))
    }

    /// Index an already normalized catalogue.
    pub fn from_catalogue(normalized: Normalized) -> Self {
        let snapshot = Snapshot::build(normalized);
        debug!(
            entries = snapshot.index.catalogue().len(),
            issues = snapshot.issues.len(),
            "engine ready"
        );
        Engine {
            current: RwLock::new(Arc::new(snapshot)),
            options: ScanOptions::default(),
        }
    }

    /// Scan with `options` instead of the defaults.
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// The current snapshot. Holding it pins that generation, whatever
    /// reloads happen meanwhile.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Classify all of `source`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn classify(&self, source: &str) -> Classification {
        self.snapshot().classify(source, &self.options)
    }

    /// Classify `source`, leaving out whitespace spans.
    pub fn classify_significant(&self, source: &str) -> Classification {
        let options = ScanOptions {
            keep_whitespace: false,
            ..self.options.clone()
        };
        self.snapshot().classify(source, &options)
    }

    /// The span of `source` containing byte `offset`.
    pub fn span_at(&self, source: &str, offset: u32) -> Option<ClassifiedSpan> {
        self.snapshot().span_at(source, offset, &self.options)
    }

    /// Look a spelling up in every category, keywords first.
    pub fn lookup(&self, spelling: &str) -> Option<Arc<Entry>> {
        self.snapshot().index.lookup(spelling).cloned()
    }

    pub fn lookup_in(&self, category: Category, spelling: &str) -> Option<Arc<Entry>> {
        self.snapshot().index.lookup_in(category, spelling).cloned()
    }

    /// Look an entry up by canonical id.
    pub fn entry(&self, canonical_id: &str) -> Option<Arc<Entry>> {
        self.snapshot().index.entry(canonical_id).cloned()
    }

    /// Normalization diagnostics of the current snapshot.
    pub fn report(&self) -> Vec<Diagnostic> {
        self.snapshot().diagnostics()
    }

    /// Replace the catalogue. Returns the new snapshot.
    #[tracing::instrument(level = "debug", skip_all, fields(raw = raw.len()))]
    pub fn reload(&self, raw: &[RawEntry]) -> Arc<Snapshot> {
        self.reload_catalogue(normalize(raw))
    }

    /// Replace the catalogue with an already normalized one.
    pub fn reload_catalogue(&self, normalized: Normalized) -> Arc<Snapshot> {
        let mut snapshot = Snapshot::build(normalized);
        let mut current = self.current.write();
        snapshot.generation = current.generation + 1;
        let snapshot = Arc::new(snapshot);
        *current = Arc::clone(&snapshot);
        debug!(generation = snapshot.generation, "swapped in new snapshot");
        snapshot
    }
}

#[cfg(test)]
mod tests;
