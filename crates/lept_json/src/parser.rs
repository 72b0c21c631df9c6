//! Top-level driver.
//!
//! Enforces "exactly one value, optionally surrounded by whitespace":
//!
//! ```text
//! Start --ws, value--> ValueParsed --ws, eof--> Done
//!   |                       |
//!   +--error--> Done        +--trailing byte--> Done (RootNotSingular)
//! ```

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{ParseError, ResultCode};
use crate::literal::parse_literal;
use crate::number::parse_number;
use crate::value::Value;

/// Recursive-descent parser over one input text.
///
/// A parser is single-shot: every failure is terminal and the cursor is not
/// rewound.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Current byte offset into the input.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Parse the whole input as a single root value.
    pub fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.cursor.eat_whitespace();
        let value = self.parse_value()?;
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            Ok(value)
        } else {
            Err(ParseError::root_not_singular(self.cursor.pos()))
        }
    }

    /// Dispatch on the current byte to the matching recognizer.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let lead = self.cursor.peek();
        trace!(pos = self.cursor.pos(), ?lead, "dispatch value");
        match lead {
            None => Err(ParseError::expect_value(self.cursor.pos())),
            Some(b'n') => parse_literal(&mut self.cursor, "null", Value::Null),
            Some(b't') => parse_literal(&mut self.cursor, "true", Value::True),
            Some(b'f') => parse_literal(&mut self.cursor, "false", Value::False),
            Some(_) => parse_number(&mut self.cursor),
        }
    }
}

/// Parse `input` as exactly one JSON value.
///
/// The idiomatic entry point: returns the value, or the first error with
/// its byte offset.
#[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    let result = Parser::new(input).parse_root();
    if let Err(err) = &result {
        debug!(kind = ?err.kind, offset = err.offset, "parse failed");
    }
    result
}

/// Parse `input` into `output`, returning the status code.
///
/// `output` is overwritten unconditionally: it holds the parsed value on
/// [`ResultCode::Ok`] and [`Value::Null`] on every other code.
pub fn parse(output: &mut Value, input: &str) -> ResultCode {
    *output = Value::Null;
    match parse_value(input) {
        Ok(value) => {
            *output = value;
            ResultCode::Ok
        }
        Err(err) => err.code(),
    }
}

impl std::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s)
    }
}
