//! Fixed-keyword recognizer for `null`, `true` and `false`.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::Value;

/// Match `keyword` at the cursor and produce `value` on success.
///
/// # Contract
///
/// The cursor must sit on the keyword's first byte; the driver dispatches
/// on that byte, so it is not re-validated as input.
///
/// On a mismatch the cursor is left on the first offending byte (or at end
/// of input) and `InvalidValue` is reported at that offset.
pub(crate) fn parse_literal(
    cursor: &mut Cursor<'_>,
    keyword: &'static str,
    value: Value,
) -> Result<Value, ParseError> {
    let expected = keyword.as_bytes();
    debug_assert_eq!(
        cursor.peek(),
        expected.first().copied(),
        "literal dispatch on the wrong byte for {keyword:?}"
    );

    let rest = cursor.rest();
    let matched = expected
        .iter()
        .zip(rest)
        .take_while(|(want, got)| want == got)
        .count();
    cursor.advance_n(matched);

    if matched == expected.len() {
        Ok(value)
    } else {
        Err(ParseError::invalid_value(cursor.pos()))
    }
}
