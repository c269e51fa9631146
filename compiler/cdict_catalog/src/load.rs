//! Reading raw catalogues from JSON.

use std::io;
use std::path::{Path, PathBuf};

use crate::raw::{RawDocument, RawEntry};

/// The C dictionary shipped with the crate, as JSON text.
pub const BUILTIN_JSON: &str = include_str!("../data/c_dictionary.json");

/// Failure to read or parse a raw catalogue.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a catalogue document: either a flat array of items or the
/// sectioned `{title, sections: [{title, items}]}` layout.
pub fn load(json: &str) -> Result<Vec<RawEntry>, LoadError> {
    let document: RawDocument = serde_json::from_str(json)?;
    let entries = document.into_entries();
    tracing::debug!(entries = entries.len(), "loaded raw catalogue");
    Ok(entries)
}

/// Read and parse a catalogue file.
pub fn load_path(path: &Path) -> Result<Vec<RawEntry>, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&json)
}

/// The built-in C dictionary's raw items.
///
/// Parsed on every call; callers that need it more than once should keep
/// the result (or, better, the engine built from it).
pub fn builtin() -> Result<Vec<RawEntry>, LoadError> {
    load(BUILTIN_JSON)
}
