//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the gap buffer and line index stay in sync
//! through editing patterns driven purely by absolute offsets.

use gapedit_buffer::{Cursor, TextBuffer};

/// Types `text` starting at `offset`, returning the offset after it.
fn type_at(buf: &mut TextBuffer, mut offset: usize, text: &str) -> usize {
    for ch in text.chars() {
        buf.insert(offset, ch);
        offset += 1;
    }
    offset
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();
    let end = type_at(&mut buf, 0, "hello");
    assert_eq!(buf.content(), "hello");

    for offset in (0..end).rev() {
        buf.remove(offset);
    }
    assert!(buf.is_empty());
    assert_eq!(buf.line_count(), 1);
}

#[test]
fn test_type_multiple_lines() {
    let mut buf = TextBuffer::new();
    let end = type_at(&mut buf, 0, "first line\nsecond line\nthird line");

    assert_eq!(end, buf.len());
    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line_content(0), "first line");
    assert_eq!(buf.line_content(1), "second line");
    assert_eq!(buf.line_content(2), "third line");

    // Insert into the middle line through cursor addressing
    let offset = buf.resolve_offset(&Cursor::new(1, 7));
    type_at(&mut buf, offset, "awesome ");
    assert_eq!(buf.line_content(1), "second awesome line");
    assert_eq!(buf.line_content(2), "third line");
}

#[test]
fn test_split_and_rejoin_lines() {
    let mut buf = TextBuffer::from_str("helloworld");

    buf.insert(5, '\n');
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.line_content(0), "hello");
    assert_eq!(buf.line_content(1), "world");

    assert_eq!(buf.remove(5), Some('\n'));
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.content(), "helloworld");
}

#[test]
fn test_rapid_insert_delete_cycles() {
    let mut buf = TextBuffer::new();

    let mut at = type_at(&mut buf, 0, "teh");
    for _ in 0..3 {
        at -= 1;
        buf.remove(at);
    }
    at = type_at(&mut buf, at, "the quikc");
    at -= 1;
    buf.remove(at);
    at -= 1;
    buf.remove(at);
    at = type_at(&mut buf, at, "ck brown fox");

    assert_eq!(at, buf.len());
    assert_eq!(buf.content(), "the quick brown fox");
}

#[test]
fn test_edits_far_apart_keep_order() {
    let mut buf = TextBuffer::from_str("0123456789");
    buf.insert(10, 'z');
    buf.insert(0, 'a');
    buf.insert(6, '-');
    buf.remove(11);
    assert_eq!(buf.content(), "a01234-5678z");
}

#[test]
fn test_empty_lines_survive_edits() {
    let mut buf = TextBuffer::from_str("first\n\n\nlast");
    assert_eq!(buf.line_count(), 4);
    assert_eq!(buf.line_len(1), 0);
    assert_eq!(buf.line_len(2), 0);

    let offset = buf.resolve_offset(&Cursor::new(2, 0));
    type_at(&mut buf, offset, "middle");
    assert_eq!(buf.line_content(1), "");
    assert_eq!(buf.line_content(2), "middle");
    assert_eq!(buf.line_content(3), "last");
}

/// Text typed on a blank line must land on that line, not the one below.
#[test]
fn test_type_on_blank_line_after_many_edits() {
    let mut buf = TextBuffer::from_str("}\n\nimpl Editor {");
    let mut at = type_at(&mut buf, 0, "bam boom bam\n\nwish this was real\n\n");
    at = type_at(&mut buf, at, "maybe too long\n");
    assert_eq!(buf.offset_to_cursor(at), Cursor::new(5, 0));

    let blank_line = (0..buf.line_count())
        .find(|&i| buf.line_content(i) == "}")
        .map(|i| i + 1)
        .expect("should find blank line after '}'");
    assert_eq!(buf.line_content(blank_line), "");

    let offset = buf.resolve_offset(&Cursor::new(blank_line, 0));
    type_at(&mut buf, offset, "hello from blank");

    assert_eq!(buf.line_content(blank_line), "hello from blank");
    assert_eq!(buf.line_content(blank_line + 1), "impl Editor {");
}

#[test]
fn test_line_index_matches_fresh_buffer_after_mixed_edits() {
    let mut buf = TextBuffer::from_str("}\n\nimpl Editor {\n    fn new() -> Self {\n    }\n}");
    let at = type_at(&mut buf, 0, "first line\n\nsecond line\n");
    buf.remove(at + 1);
    buf.insert(at + 4, '\n');

    let fresh = TextBuffer::from_str(&buf.content());
    assert_eq!(buf.line_count(), fresh.line_count());
    for i in 0..buf.line_count() {
        assert_eq!(buf.line_content(i), fresh.line_content(i), "line {}", i);
        assert_eq!(buf.line_span(i), fresh.line_span(i), "line {}", i);
    }
}
