use super::*;
use proptest::prelude::*;

fn trie_of(spellings: &[&str]) -> OperatorTrie {
    let mut trie = OperatorTrie::new();
    for (slot, spelling) in (0u32..).zip(spellings) {
        trie.insert(spelling, slot);
    }
    trie
}

#[test]
fn backtracks_to_deepest_terminal() {
    // `%:%` is a path but not a spelling; matching must fall back to `%:`.
    let trie = trie_of(&["%", "%:", "%:%:"]);
    assert_eq!(trie.longest_match(b"%:%x"), Some((1, 2)));
    assert_eq!(trie.longest_match(b"%:%:"), Some((2, 4)));
    assert_eq!(trie.longest_match(b"%="), Some((0, 1)));
}

#[test]
fn no_match_without_terminal() {
    let trie = trie_of(&["..."]);
    assert_eq!(trie.longest_match(b".."), None);
    assert_eq!(trie.longest_match(b""), None);
    assert_eq!(trie.get(".."), None);
    assert_eq!(trie.get("..."), Some(0));
}

#[test]
fn first_insert_keeps_slot() {
    let mut trie = OperatorTrie::new();
    assert!(trie.insert("+", 0));
    assert!(!trie.insert("+", 1));
    assert!(!trie.insert("", 2));
    assert_eq!(trie.get("+"), Some(0));
}

#[test]
fn shared_prefixes_share_nodes() {
    let trie = trie_of(&["<", "<<", "<<="]);
    assert_eq!(trie.node_count(), 4);
}

proptest! {
    /// The trie agrees with a brute-force scan over the spelling list.
    #[test]
    fn longest_match_agrees_with_linear_scan(
        spellings in prop::collection::vec("[-+<>=&|%:#.]{1,4}", 1..20),
        input in "[-+<>=&|%:#. a]{0,8}",
    ) {
        let trie = trie_of(&spellings.iter().map(String::as_str).collect::<Vec<_>>());
        let expected = spellings
            .iter()
            .filter(|s| input.as_bytes().starts_with(s.as_bytes()))
            .map(String::len)
            .max();
        let actual = trie.longest_match(input.as_bytes()).map(|(_, len)| len as usize);
        prop_assert_eq!(actual, expected);
    }
}
