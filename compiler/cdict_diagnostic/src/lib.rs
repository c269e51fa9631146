//! Diagnostic system for the C token dictionary engine.
//!
//! Both phases of the engine report problems as data rather than by
//! aborting:
//! - catalogue normalization (dangling redirects, id collisions, malformed
//!   entries) emits `W1xxx` warnings
//! - lexical scanning (unterminated comments and literals) emits `W2xxx`
//!   warnings
//!
//! Every diagnostic carries an [`ErrorCode`] for searchability, a message,
//! optional labelled [`Span`]s, and free-form notes. [`DiagnosticQueue`]
//! collects them in a stable order and [`emitter`] renders them for a
//! terminal.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
mod span;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use span::Span;
