use super::*;

const TABLE: &[&str] = &["<", "<<", "<<=", "<=", "%:", "%:%:"];

#[test]
fn longest_spelling_wins() {
    assert_eq!(TABLE.longest_prefix(b"<<= 1"), Some(3));
    assert_eq!(TABLE.longest_prefix(b"<<1"), Some(2));
    assert_eq!(TABLE.longest_prefix(b"<a"), Some(1));
    assert_eq!(TABLE.longest_prefix(b"%:%:"), Some(4));
    assert_eq!(TABLE.longest_prefix(b"%:%"), Some(2));
}

#[test]
fn no_match() {
    assert_eq!(TABLE.longest_prefix(b"@"), None);
    assert_eq!(TABLE.longest_prefix(b""), None);
}
