//! Normalized catalogue entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the C grammar a token belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keyword,
    Operator,
    Identifier,
}

impl Category {
    /// All categories, in lookup precedence order.
    pub const ALL: [Category; 3] = [Category::Keyword, Category::Operator, Category::Identifier];

    /// The lowercase name used by the raw catalogue's `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Identifier => "identifier",
        }
    }

    /// Whether `spelling` is lexically valid for this category.
    ///
    /// Keywords and identifiers are `[A-Za-z_][A-Za-z0-9_]*`. Operators are
    /// one or more ASCII punctuation characters.
    pub fn accepts(self, spelling: &str) -> bool {
        match self {
            Category::Keyword | Category::Identifier => is_word(spelling),
            Category::Operator => {
                !spelling.is_empty() && spelling.bytes().all(|b| b.is_ascii_punctuation())
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_word(spelling: &str) -> bool {
    let mut bytes = spelling.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Another spelling that resolves to an entry.
///
/// An alias keeps the category it was written under, which may differ from
/// its entry's: an identifier stub pointing at an operator stays an
/// identifier spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Alias {
    pub spelling: String,
    pub category: Category,
}

impl Alias {
    pub fn new(spelling: impl Into<String>, category: Category) -> Self {
        Alias {
            spelling: spelling.into(),
            category,
        }
    }
}

/// One token of the normalized catalogue.
///
/// Entries are built once by normalization and never mutated afterwards;
/// the index and scanner share them through `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub(crate) canonical_id: String,
    pub(crate) raw_id: String,
    pub(crate) spelling: String,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) example: Option<String>,
    pub(crate) aliases: Vec<Alias>,
}

impl Entry {
    /// Unique id within the catalogue.
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    /// The id as it appeared in the raw catalogue.
    ///
    /// Differs from [`canonical_id`](Self::canonical_id) only for entries
    /// whose raw id was shared with a differently spelled token.
    pub fn raw_id(&self) -> &str {
        &self.raw_id
    }

    /// The literal token text.
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Spellings of redirect stubs (and split paired delimiters) folded
    /// into this entry.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// Alias spellings written under `category`.
    pub fn aliases_in(&self, category: Category) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .filter(move |a| a.category == category)
            .map(|a| a.spelling.as_str())
    }

    /// Whether `spelling` names this entry, directly or as an alias.
    pub fn answers_to(&self, spelling: &str) -> bool {
        self.spelling == spelling || self.aliases.iter().any(|a| a.spelling == spelling)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` ({})", self.category, self.spelling, self.canonical_id)
    }
}
