use super::*;

// === Basic Navigation ===

#[test]
fn peek_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), Some(b'a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.peek(), Some(b'b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.peek(), Some(b'd'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.remaining(), 3);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "overruns input")]
fn advance_past_end_is_caught_in_debug() {
    let mut cursor = Cursor::new("a");
    cursor.advance_n(2);
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), None);
}

#[test]
fn interior_nul_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.peek(), Some(0));
    assert!(!cursor.is_eof());
}

// === Whitespace ===

#[test]
fn eat_whitespace_skips_all_four_kinds() {
    let mut cursor = Cursor::new(" \t\r\n x");
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.peek(), Some(b'x'));
}

#[test]
fn eat_whitespace_stops_at_other_control_bytes() {
    // Form feed and vertical tab are not JSON whitespace.
    let mut cursor = Cursor::new(" \x0c");
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.peek(), Some(0x0c));
}

#[test]
fn eat_whitespace_to_eof() {
    let mut cursor = Cursor::new("   ");
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_on_non_whitespace_is_noop() {
    let mut cursor = Cursor::new("null");
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_while_digits() {
    let mut cursor = Cursor::new("12345abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.slice_from(0), "12345");
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("true false");
    assert_eq!(cursor.slice(0, 4), "true");
    assert_eq!(cursor.slice(5, 10), "false");
}

#[test]
fn rest_tracks_position() {
    let mut cursor = Cursor::new("-1.5");
    cursor.advance();
    assert_eq!(cursor.rest(), b"1.5");
}

#[test]
fn cursor_is_copy_snapshot() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}

mod proptest_whitespace {
    use super::super::{is_whitespace, Cursor};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn eat_whitespace_stops_at_first_non_whitespace(
            text in "[ \t\r\na0\\-]{0,64}"
        ) {
            let mut cursor = Cursor::new(&text);
            cursor.eat_whitespace();
            let expected = text.bytes().take_while(|&b| is_whitespace(b)).count();
            prop_assert_eq!(cursor.pos(), expected);
            if let Some(b) = cursor.peek() {
                prop_assert!(!is_whitespace(b));
            }
        }
    }
}
