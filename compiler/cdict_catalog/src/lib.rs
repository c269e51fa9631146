//! The C token catalogue: raw records in, normalized entries out.
//!
//! A raw catalogue is whatever an author wrote down: ids reused across
//! unrelated tokens, "continuation" items whose description is only an
//! anchor pointing at a sibling, spellings wrapped in backticks. This crate
//! turns it into a [`NormalizedCatalogue`] in which every canonical id is
//! unique, every entry has a description, and redirect stubs have been
//! folded into their targets as alias spellings.
//!
//! Normalization never fails. Each defect it repairs or drops is reported
//! as a [`NormalizeIssue`], convertible to a `W1xxx` diagnostic.
//!
//! ```
//! let raw = cdict_catalog::builtin().unwrap();
//! let normalized = cdict_catalog::normalize(&raw);
//! assert!(normalized.catalogue.get("kw-int").is_some());
//! ```

mod anchor;
mod catalogue;
mod entry;
mod issue;
mod load;
mod normalize;
mod raw;

pub use anchor::parse_anchor;
pub use catalogue::NormalizedCatalogue;
pub use entry::{Alias, Category, Entry};
pub use issue::{MalformedReason, NormalizeIssue};
pub use load::{builtin, load, load_path, LoadError, BUILTIN_JSON};
pub use normalize::{normalize, normalize_with, NormalizeOptions, Normalized};
pub use raw::{RawDocument, RawEntry, RawSection};
