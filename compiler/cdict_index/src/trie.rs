//! Byte trie over operator spellings.

use cdict_lexer_core::PunctuatorTable;

/// One trie node. `children` is small (C punctuators branch at most a
/// handful of ways per byte), so a sorted vector beats a map.
#[derive(Clone, Debug, Default)]
struct Node {
    children: Vec<(u8, u32)>,
    /// Slot of the operator whose spelling ends here.
    terminal: Option<u32>,
}

/// A byte trie mapping operator spellings to slots.
///
/// Matching walks greedily as far as the input allows and reports the
/// deepest node that ends a spelling, so `<<=` beats `<<` beats `<`.
///
/// ```
/// use cdict_index::OperatorTrie;
///
/// let mut trie = OperatorTrie::new();
/// trie.insert("<", 0);
/// trie.insert("<<", 1);
/// trie.insert("<<=", 2);
/// assert_eq!(trie.longest_match(b"<<= 1"), Some((2, 3)));
/// assert_eq!(trie.longest_match(b"<<1"), Some((1, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct OperatorTrie {
    nodes: Vec<Node>,
}

impl Default for OperatorTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorTrie {
    /// An empty trie (just the root).
    pub fn new() -> Self {
        OperatorTrie {
            nodes: vec![Node::default()],
        }
    }

    /// Insert `spelling` with `slot`. A spelling already present keeps its
    /// first slot; returns whether this call claimed it.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the trie holds a few hundred nodes at most"
    )]
    pub fn insert(&mut self, spelling: &str, slot: u32) -> bool {
        if spelling.is_empty() {
            return false;
        }
        let mut node = 0usize;
        for &byte in spelling.as_bytes() {
            node = match self.child(node, byte) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    let children = &mut self.nodes[node].children;
                    let at = children.partition_point(|&(b, _)| b < byte);
                    children.insert(at, (byte, next));
                    next as usize
                }
            };
        }
        let terminal = &mut self.nodes[node].terminal;
        if terminal.is_some() {
            return false;
        }
        *terminal = Some(slot);
        true
    }

    fn child(&self, node: usize, byte: u8) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| children[i].1 as usize)
    }

    /// Longest spelling that prefixes `input`, as `(slot, len)`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "operator spellings are a few bytes long"
    )]
    pub fn longest_match(&self, input: &[u8]) -> Option<(u32, u32)> {
        let mut node = 0usize;
        let mut best = None;
        for (depth, &byte) in input.iter().enumerate() {
            let Some(next) = self.child(node, byte) else {
                break;
            };
            node = next;
            if let Some(slot) = self.nodes[node].terminal {
                best = Some((slot, depth as u32 + 1));
            }
        }
        best
    }

    /// Slot of exactly `spelling`, if present.
    pub fn get(&self, spelling: &str) -> Option<u32> {
        let mut node = 0usize;
        for &byte in spelling.as_bytes() {
            node = self.child(node, byte)?;
        }
        self.nodes[node].terminal
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl PunctuatorTable for OperatorTrie {
    fn longest_prefix(&self, rest: &[u8]) -> Option<u32> {
        self.longest_match(rest).map(|(_, len)| len)
    }
}

#[cfg(test)]
mod tests;
