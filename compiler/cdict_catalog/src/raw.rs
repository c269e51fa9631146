//! Raw catalogue records, exactly as deserialized.

use serde::{Deserialize, Serialize};

use crate::Category;

/// One raw catalogue item.
///
/// Nothing here is validated: ids may repeat, spellings may carry
/// backticks or whitespace, and a description may be nothing but an
/// anchor marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: String,
    pub token: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl RawEntry {
    pub fn new(
        id: impl Into<String>,
        token: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        RawEntry {
            id: id.into(),
            token: token.into(),
            category,
            description: description.into(),
            example: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// A titled group of items in a sectioned catalogue document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub title: String,
    pub items: Vec<RawEntry>,
}

/// The two accepted catalogue layouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    /// A bare JSON array of items.
    Flat(Vec<RawEntry>),
    /// `{ "title": ..., "sections": [{ "title": ..., "items": [...] }] }`
    Sectioned {
        #[serde(default)]
        title: String,
        sections: Vec<RawSection>,
    },
}

impl RawDocument {
    /// Flatten into items, preserving document order.
    pub fn into_entries(self) -> Vec<RawEntry> {
        match self {
            RawDocument::Flat(entries) => entries,
            RawDocument::Sectioned { sections, .. } => {
                sections.into_iter().flat_map(|s| s.items).collect()
            }
        }
    }
}
