//! The operator-matching seam between the scanner and a token index.

/// A set of punctuator spellings the scanner can match by maximal munch.
///
/// `cdict_index` implements this with a byte trie built from the
/// catalogue's operator entries. A plain slice of spellings works too, which
/// keeps this crate testable on its own.
pub trait PunctuatorTable {
    /// Length of the longest spelling that prefixes `rest`, if any.
    fn longest_prefix(&self, rest: &[u8]) -> Option<u32>;
}

impl PunctuatorTable for [&str] {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "punctuator spellings are a few bytes long"
    )]
    fn longest_prefix(&self, rest: &[u8]) -> Option<u32> {
        self.iter()
            .filter(|spelling| !spelling.is_empty() && rest.starts_with(spelling.as_bytes()))
            .map(|spelling| spelling.len() as u32)
            .max()
    }
}

#[cfg(test)]
mod tests;
