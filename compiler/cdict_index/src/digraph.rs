//! C digraphs and the punctuators they stand for (C11 6.4.6p3).
//!
//! Digraphs are matched as ordinary operator spellings; this table only
//! answers "what does `<:` mean" for hover text and lookups.

/// `(digraph, primary spelling)` pairs.
pub const DIGRAPHS: [(&str, &str); 6] = [
    ("<:", "["),
    (":>", "]"),
    ("<%", "{"),
    ("%>", "}"),
    ("%:", "#"),
    ("%:%:", "##"),
];

/// The primary spelling a digraph stands for.
///
/// ```
/// assert_eq!(cdict_index::digraph_equivalent("<%"), Some("{"));
/// assert_eq!(cdict_index::digraph_equivalent("{"), None);
/// ```
pub fn digraph_equivalent(spelling: &str) -> Option<&'static str> {
    DIGRAPHS
        .iter()
        .find(|(digraph, _)| *digraph == spelling)
        .map(|&(_, primary)| primary)
}
