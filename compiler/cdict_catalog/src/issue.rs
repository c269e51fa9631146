//! Normalization issues and their diagnostic form.
//!
//! Issues are typed data first; rendering them as [`Diagnostic`]s is a
//! separate step so callers can match on what went wrong without parsing
//! messages.

use std::fmt;

use cdict_diagnostic::{Diagnostic, ErrorCode};

use crate::Category;

/// Why an entry was dropped as malformed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MalformedReason {
    /// The raw id is empty or whitespace.
    MissingId,
    /// The spelling is empty after trimming and backtick removal.
    EmptySpelling,
    /// The spelling cannot be a token of its category.
    InvalidSpelling,
    /// A non-stub entry with no description.
    EmptyDescription,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedReason::MissingId => "the entry has no id",
            MalformedReason::EmptySpelling => "the spelling is empty",
            MalformedReason::InvalidSpelling => "the spelling is not valid for its category",
            MalformedReason::EmptyDescription => "the description is empty",
        })
    }
}

/// A defect found and repaired (or dropped) during normalization.
///
/// `index` fields are positions in the raw input slice.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NormalizeIssue {
    /// A redirect stub whose target id is carried by no entry.
    DanglingRedirect {
        index: usize,
        stub_id: String,
        spelling: String,
        target: String,
    },
    /// A redirect stub whose chain of targets loops back on itself.
    RedirectCycle {
        index: usize,
        spelling: String,
        chain: Vec<String>,
    },
    /// An entry whose canonical id was already taken; it was dropped.
    ConflictingDuplicate {
        index: usize,
        kept_index: usize,
        canonical_id: String,
        spelling: String,
        kept_spelling: String,
    },
    /// A second entry of one category with the same spelling. Both stay in
    /// the catalogue; lookups by spelling find `winner`.
    ShadowedSpelling {
        category: Category,
        spelling: String,
        winner: String,
        shadowed: String,
    },
    /// An entry that could not be repaired.
    MalformedEntry {
        index: usize,
        raw_id: String,
        spelling: String,
        reason: MalformedReason,
    },
}

impl NormalizeIssue {
    pub fn code(&self) -> ErrorCode {
        match self {
            NormalizeIssue::DanglingRedirect { .. } => ErrorCode::W1001,
            NormalizeIssue::RedirectCycle { .. } => ErrorCode::W1002,
            NormalizeIssue::ConflictingDuplicate { .. } => ErrorCode::W1003,
            NormalizeIssue::ShadowedSpelling { .. } => ErrorCode::W1004,
            NormalizeIssue::MalformedEntry { .. } => ErrorCode::W1005,
        }
    }

    /// Render as a warning diagnostic.
    ///
    /// Catalogue diagnostics carry no source span; the raw position goes in
    /// a note instead.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.code());
        match self {
            NormalizeIssue::DanglingRedirect {
                index,
                stub_id,
                spelling,
                target,
            } => diag
                .with_message(format!(
                    "redirect `{spelling}` ({stub_id}) points at missing entry `{target}`"
                ))
                .with_note(format!("raw item #{index} was dropped")),
            NormalizeIssue::RedirectCycle {
                index,
                spelling,
                chain,
            } => diag
                .with_message(format!("redirect `{spelling}` never reaches an entry"))
                .with_note(format!("cycle: {}", chain.join(" -> ")))
                .with_note(format!("raw item #{index} was dropped")),
            NormalizeIssue::ConflictingDuplicate {
                index,
                kept_index,
                canonical_id,
                spelling,
                kept_spelling,
            } => {
                let diag = diag.with_message(format!(
                    "duplicate entry `{canonical_id}` for `{spelling}`"
                ));
                if spelling == kept_spelling {
                    diag.with_note(format!(
                        "raw item #{index} repeats raw item #{kept_index} and was dropped"
                    ))
                } else {
                    diag.with_note(format!(
                        "raw item #{index} collides with `{kept_spelling}` (raw item #{kept_index}) and was dropped"
                    ))
                }
            }
            NormalizeIssue::ShadowedSpelling {
                category,
                spelling,
                winner,
                shadowed,
            } => diag
                .with_message(format!(
                    "{category} `{spelling}` is defined by both `{winner}` and `{shadowed}`"
                ))
                .with_note(format!("lookups of `{spelling}` resolve to `{winner}`")),
            NormalizeIssue::MalformedEntry {
                index,
                raw_id,
                spelling,
                reason,
            } => diag
                .with_message(format!("malformed entry `{raw_id}` (`{spelling}`): {reason}"))
                .with_note(format!("raw item #{index} was dropped")),
        }
    }
}

impl fmt::Display for NormalizeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}
