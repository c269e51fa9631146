//! The token index proper.

use std::sync::Arc;

use cdict_catalog::{Category, Entry, NormalizedCatalogue};
use cdict_lexer_core::PunctuatorTable;
use rustc_hash::FxHashMap;

use crate::digraph::digraph_equivalent;
use crate::OperatorTrie;

/// Spelling → entry map for one category.
///
/// Own spellings are inserted before aliases, so an entry's real spelling
/// always beats another entry's alias.
#[derive(Clone, Debug, Default)]
struct SpellingTable {
    map: FxHashMap<Box<str>, Arc<Entry>>,
}

impl SpellingTable {
    fn build(catalogue: &NormalizedCatalogue, category: Category) -> Self {
        let mut map: FxHashMap<Box<str>, Arc<Entry>> = FxHashMap::default();
        for entry in catalogue.of_category(category) {
            map.entry(entry.spelling().into())
                .or_insert_with(|| Arc::clone(entry));
        }
        // Aliases land in the table of the category they were written
        // under, whatever the target's category is.
        for entry in catalogue.iter() {
            for alias in entry.aliases_in(category) {
                map.entry(alias.into()).or_insert_with(|| Arc::clone(entry));
            }
        }
        SpellingTable { map }
    }

    fn get(&self, spelling: &str) -> Option<&Arc<Entry>> {
        self.map.get(spelling)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Queryable index over a normalized catalogue.
///
/// Immutable once built; share it behind an `Arc` across threads.
///
/// ```
/// use cdict_index::TokenIndex;
///
/// let raw = cdict_catalog::builtin().unwrap();
/// let index = TokenIndex::build(cdict_catalog::normalize(&raw).catalogue);
///
/// assert_eq!(index.lookup_keyword("while").unwrap().spelling(), "while");
/// let (entry, len) = index.match_operator_at(b"x <<= 2", 2).unwrap();
/// assert_eq!((entry.spelling(), len), ("<<=", 3));
/// ```
#[derive(Clone, Debug)]
pub struct TokenIndex {
    catalogue: NormalizedCatalogue,
    keywords: SpellingTable,
    identifiers: SpellingTable,
    operators: SpellingTable,
    trie: OperatorTrie,
    /// Trie slot → operator entry.
    operator_slots: Vec<Arc<Entry>>,
}

impl TokenIndex {
    /// Build the index. Consumes the catalogue; [`TokenIndex::catalogue`]
    /// hands it back by reference.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = catalogue.len()))]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "operator count is far below u32::MAX"
    )]
    pub fn build(catalogue: NormalizedCatalogue) -> Self {
        let keywords = SpellingTable::build(&catalogue, Category::Keyword);
        let identifiers = SpellingTable::build(&catalogue, Category::Identifier);
        let operators = SpellingTable::build(&catalogue, Category::Operator);

        // The trie mirrors the operator table, so it resolves the same
        // entry for every spelling.
        let mut trie = OperatorTrie::new();
        let mut operator_slots = Vec::with_capacity(operators.len());
        for entry in catalogue.iter() {
            let own = (entry.category() == Category::Operator).then(|| entry.spelling());
            let aliases = entry.aliases_in(Category::Operator);
            for spelling in own.into_iter().chain(aliases) {
                let owner = operators.get(spelling).unwrap_or(entry);
                if trie.get(spelling).is_none() {
                    trie.insert(spelling, operator_slots.len() as u32);
                    operator_slots.push(Arc::clone(owner));
                }
            }
        }

        tracing::debug!(
            keywords = keywords.len(),
            identifiers = identifiers.len(),
            operators = operators.len(),
            trie_nodes = trie.node_count(),
            "built token index"
        );

        TokenIndex {
            catalogue,
            keywords,
            identifiers,
            operators,
            trie,
            operator_slots,
        }
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn lookup_keyword(&self, spelling: &str) -> Option<&Arc<Entry>> {
        self.keywords.get(spelling)
    }

    /// Exact, case-sensitive identifier lookup. Alias spellings resolve to
    /// the entry they were merged into.
    pub fn lookup_identifier(&self, spelling: &str) -> Option<&Arc<Entry>> {
        self.identifiers.get(spelling)
    }

    /// Exact operator lookup.
    pub fn lookup_operator(&self, spelling: &str) -> Option<&Arc<Entry>> {
        self.operators.get(spelling)
    }

    /// Lookup in one category.
    pub fn lookup_in(&self, category: Category, spelling: &str) -> Option<&Arc<Entry>> {
        match category {
            Category::Keyword => self.lookup_keyword(spelling),
            Category::Operator => self.lookup_operator(spelling),
            Category::Identifier => self.lookup_identifier(spelling),
        }
    }

    /// Lookup in any category: keyword first, then operator, then
    /// identifier.
    pub fn lookup(&self, spelling: &str) -> Option<&Arc<Entry>> {
        Category::ALL
            .iter()
            .find_map(|&category| self.lookup_in(category, spelling))
    }

    /// The longest operator spelling that prefixes `buffer[offset..]`, with
    /// its byte length.
    pub fn match_operator_at(&self, buffer: &[u8], offset: usize) -> Option<(&Arc<Entry>, u32)> {
        let rest = buffer.get(offset..)?;
        let (slot, len) = self.trie.longest_match(rest)?;
        self.operator_slots
            .get(slot as usize)
            .map(|entry| (entry, len))
    }

    /// The operator entry for the primary spelling of a digraph
    /// (`<:` → the `[` entry).
    pub fn digraph_primary(&self, spelling: &str) -> Option<&Arc<Entry>> {
        self.lookup_operator(digraph_equivalent(spelling)?)
    }

    /// Entry by canonical id.
    pub fn entry(&self, canonical_id: &str) -> Option<&Arc<Entry>> {
        self.catalogue.get(canonical_id)
    }

    /// The catalogue this index was built from.
    pub fn catalogue(&self) -> &NormalizedCatalogue {
        &self.catalogue
    }
}

impl PunctuatorTable for TokenIndex {
    fn longest_prefix(&self, rest: &[u8]) -> Option<u32> {
        self.trie.longest_prefix(rest)
    }
}
