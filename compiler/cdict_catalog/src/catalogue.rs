//! The normalized catalogue container.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{Category, Entry};

/// Normalized entries in raw-catalogue order, addressable by canonical id.
///
/// Only [`normalize`](crate::normalize) builds one, so every entry it holds
/// has a unique canonical id and a non-empty description.
#[derive(Clone, Debug, Default)]
pub struct NormalizedCatalogue {
    entries: Vec<Arc<Entry>>,
    by_id: FxHashMap<String, usize>,
}

impl NormalizedCatalogue {
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        let entries: Vec<Arc<Entry>> = entries.into_iter().map(Arc::new).collect();
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.canonical_id.clone(), i))
            .collect();
        NormalizedCatalogue { entries, by_id }
    }

    /// Entry by canonical id.
    pub fn get(&self, canonical_id: &str) -> Option<&Arc<Entry>> {
        self.by_id.get(canonical_id).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.iter()
    }

    /// Entries of one category, in catalogue order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a NormalizedCatalogue {
    type Item = &'a Arc<Entry>;
    type IntoIter = std::slice::Iter<'a, Arc<Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
