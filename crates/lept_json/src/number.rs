//! Number literal recognizer.
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" | digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ("e" | "E") ["-" | "+"] 1*digit
//! ```
//!
//! Validation is a lookahead scan driven by [`NumberState`]. Nothing is
//! consumed until the whole lexeme is known to be well-formed; conversion
//! to `f64` is then delegated to the standard library's correctly-rounded
//! parser.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::Value;

/// Position within the number grammar after consuming some prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NumberState {
    /// Nothing consumed yet.
    Start,
    /// After the leading `-`.
    Minus,
    /// After an integer part that is exactly `0`.
    Zero,
    /// Inside an integer part starting with `1-9`.
    Integer,
    /// After `.`; a digit is required.
    Dot,
    /// Inside the fraction digits.
    Fraction,
    /// After `e`/`E`; a sign or digit is required.
    Exponent,
    /// After the exponent sign; a digit is required.
    ExponentSign,
    /// Inside the exponent digits.
    ExponentDigits,
}

/// Result of feeding one byte (or end of input) to the state machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The byte extends the lexeme.
    Continue(NumberState),
    /// The lexeme ended cleanly before this byte.
    Stop,
    /// The byte (or end of input) violates the grammar.
    Reject,
}

impl NumberState {
    /// States in which the consumed prefix is a complete number.
    pub(crate) const fn is_accepting(self) -> bool {
        matches!(
            self,
            NumberState::Zero
                | NumberState::Integer
                | NumberState::Fraction
                | NumberState::ExponentDigits
        )
    }

    /// Transition on `byte` (`None` at end of input).
    pub(crate) const fn step(self, byte: Option<u8>) -> Step {
        use NumberState::{
            Dot, Exponent, ExponentDigits, ExponentSign, Fraction, Integer, Minus, Start, Zero,
        };
        let Some(byte) = byte else {
            return if self.is_accepting() {
                Step::Stop
            } else {
                Step::Reject
            };
        };
        match (self, byte) {
            (Start, b'-') => Step::Continue(Minus),
            (Start | Minus, b'0') => Step::Continue(Zero),
            (Start | Minus, b'1'..=b'9') | (Integer, b'0'..=b'9') => Step::Continue(Integer),
            // `0` may not be followed by more integer digits.
            (Zero, b'0'..=b'9') => Step::Reject,
            (Zero | Integer, b'.') => Step::Continue(Dot),
            (Dot | Fraction, b'0'..=b'9') => Step::Continue(Fraction),
            (Zero | Integer | Fraction, b'e' | b'E') => Step::Continue(Exponent),
            (Exponent, b'+' | b'-') => Step::Continue(ExponentSign),
            (Exponent | ExponentSign | ExponentDigits, b'0'..=b'9') => {
                Step::Continue(ExponentDigits)
            }
            _ if self.is_accepting() => Step::Stop,
            _ => Step::Reject,
        }
    }
}

/// Validate the number lexeme at the start of `bytes`.
///
/// Returns the lexeme length, or the relative offset of the first byte that
/// violates the grammar.
pub(crate) fn scan_lexeme(bytes: &[u8]) -> Result<usize, usize> {
    let mut state = NumberState::Start;
    let mut len = 0;
    loop {
        match state.step(bytes.get(len).copied()) {
            Step::Continue(next) => {
                state = next;
                len += 1;
            }
            Step::Stop => return Ok(len),
            Step::Reject => return Err(len),
        }
    }
}

/// Recognize a number at the cursor.
///
/// On success the cursor moves just past the lexeme. On `InvalidValue` it is
/// left on the offending byte; on `NumberTooBig` it stays at the lexeme start.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let start = cursor.pos();
    let len = match scan_lexeme(cursor.rest()) {
        Ok(len) => len,
        Err(bad) => {
            cursor.advance_n(bad);
            return Err(ParseError::invalid_value(cursor.pos()));
        }
    };

    let lexeme = cursor.slice(start, start + len);
    let n: f64 = lexeme
        .parse()
        .map_err(|_| ParseError::invalid_value(start))?;
    if n.is_infinite() {
        return Err(ParseError::number_too_big(start));
    }

    cursor.advance_n(len);
    Ok(Value::Number(n))
}
