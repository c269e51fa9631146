//! C token dictionary resolution engine.
//!
//! Ties the pipeline together behind one explicitly constructed [`Engine`]:
//!
//! ```text
//! raw catalogue → normalize → TokenIndex ─┐
//!                                          ├→ classify → Classification
//!                          C source text ──┘
//! ```
//!
//! ```
//! use cdict::{Engine, SpanKind};
//!
//! let engine = Engine::builtin().unwrap();
//! let classification = engine.classify_significant("x <<= 2;");
//! let kinds: Vec<_> = classification.spans.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [SpanKind::Identifier, SpanKind::Operator, SpanKind::Number, SpanKind::Operator]
//! );
//! ```

mod classification;
mod engine;
mod logging;

pub use classification::{Classification, SpanRecord};
pub use engine::{Engine, Snapshot};
pub use logging::init_tracing;

pub use cdict_catalog::{Category, Entry, LoadError, NormalizeIssue, RawEntry};
pub use cdict_diagnostic::{Diagnostic, ErrorCode, Span};
pub use cdict_lexer::{ClassifiedSpan, ScanOptions, SpanKind};
