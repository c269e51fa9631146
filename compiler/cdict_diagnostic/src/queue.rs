//! Diagnostic queue for collecting, deduplicating, and ordering diagnostics.
//!
//! Normalization and scanning both push into a queue while they work and
//! hand the flushed list back to the caller as part of their result.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::Diagnostic;

/// Hash a whole diagnostic for dedup comparison.
///
/// Hash collisions only suppress a rare duplicate.
#[inline]
fn diagnostic_hash(diag: &Diagnostic) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    diag.hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics kept (0 = unlimited).
    pub limit: usize,
    /// Drop a diagnostic identical to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            limit: 0,
            deduplicate: true,
        }
    }
}

/// Queue for collecting diagnostics.
///
/// # Example
///
/// ```
/// use cdict_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, Span};
///
/// let mut queue = DiagnosticQueue::new();
/// queue.push(Diagnostic::warning(ErrorCode::W2001).with_label(Span::new(8, 20), "here"));
/// queue.push(Diagnostic::warning(ErrorCode::W2002).with_label(Span::new(0, 3), "here"));
/// let sorted = queue.flush();
/// assert_eq!(sorted[0].code, ErrorCode::W2002);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: HashSet<u64>,
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: HashSet::new(),
            dropped: 0,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was kept, `false` if it was filtered out.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }
        if self.config.deduplicate && !self.seen.insert(diagnostic_hash(&diag)) {
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Check if the configured limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.limit > 0 && self.diagnostics.len() >= self.config.limit
    }

    /// Number of diagnostics dropped because of the limit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of queued diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, ordered by primary span start.
    ///
    /// The sort is stable: diagnostics without a span (catalogue warnings)
    /// keep the order they were pushed in.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        self.seen.clear();
        diagnostics.sort_by_key(|d| d.primary_span().map_or(0, |s| s.start));
        diagnostics
    }
}
