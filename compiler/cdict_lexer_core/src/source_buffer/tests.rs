use super::*;

/// The content bytes, without sentinel or padding.
fn content(buf: &SourceBuffer) -> &[u8] {
    &buf.buf[..buf.source_len as usize]
}

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.source_len, 0);
    assert_eq!(buf.buf[0], 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn content_is_copied_verbatim() {
    let buf = SourceBuffer::new("int x;");
    assert_eq!(content(&buf), b"int x;");
    assert_eq!(buf.source_len, 6);
}

#[test]
fn buffer_is_cache_line_aligned() {
    for len in [0usize, 1, 62, 63, 64, 65, 200] {
        let source = "a".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.buf.len() % CACHE_LINE, 0, "len {len}");
    }
}

#[test]
fn padding_allows_two_byte_lookahead_at_end() {
    // 63 bytes of content puts the sentinel on the last byte of the first
    // cache line; the lookahead must still land in padding.
    let source = "x".repeat(63);
    let buf = SourceBuffer::new(&source);
    assert!(buf.buf.len() >= 63 + 3);
    assert!(buf.buf[63..].iter().all(|&b| b == 0));
}

#[test]
fn interior_nul_is_kept() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(content(&buf), b"a\0b");
    assert_eq!(buf.source_len, 3);
    assert!(!buf.cursor().is_eof());
}
