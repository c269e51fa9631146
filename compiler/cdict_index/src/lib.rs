//! Token index over a normalized C catalogue.
//!
//! [`TokenIndex`] answers two kinds of question:
//! - exact spelling lookups per category (keyword, operator, identifier),
//!   with alias spellings resolving to their entry
//! - maximal-munch operator matching at a byte offset, via a byte trie
//!   ([`OperatorTrie`]) over every operator spelling
//!
//! An index exists only once [`TokenIndex::build`] has run, so there is no
//! "not built yet" state to check for.

mod digraph;
mod index;
mod trie;

pub use digraph::{digraph_equivalent, DIGRAPHS};
pub use index::TokenIndex;
pub use trie::OperatorTrie;
