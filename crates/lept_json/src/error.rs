//! Parse error types.
//!
//! A failed parse reports exactly one [`ParseError`]: WHAT went wrong
//! ([`ParseErrorKind`]) and WHERE (byte offset of the first offending byte).
//! [`ResultCode`] is the flat status form returned by [`crate::parse`].

use thiserror::Error;

/// What kind of parse error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The input does not start with a well-formed value.
    #[error("invalid value")]
    InvalidValue,
    /// A valid value was followed by more non-whitespace content.
    #[error("root value is followed by extra content")]
    RootNotSingular,
    /// A syntactically valid number overflows `f64`.
    #[error("number too big")]
    NumberTooBig,
}

/// A parse error with the byte offset where it was detected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// WHAT went wrong.
    pub kind: ParseErrorKind,
    /// WHERE: byte offset into the input.
    pub offset: usize,
}

impl ParseError {
    pub const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Empty or whitespace-only input; `offset` is the input length.
    pub const fn expect_value(offset: usize) -> Self {
        Self::new(ParseErrorKind::ExpectValue, offset)
    }

    /// Malformed token starting or failing at `offset`.
    pub const fn invalid_value(offset: usize) -> Self {
        Self::new(ParseErrorKind::InvalidValue, offset)
    }

    /// Trailing content beginning at `offset`.
    pub const fn root_not_singular(offset: usize) -> Self {
        Self::new(ParseErrorKind::RootNotSingular, offset)
    }

    /// Overflowing number whose lexeme starts at `offset`.
    pub const fn number_too_big(offset: usize) -> Self {
        Self::new(ParseErrorKind::NumberTooBig, offset)
    }

    /// The flat status code for this error.
    pub const fn code(&self) -> ResultCode {
        ResultCode::from_kind(self.kind)
    }
}

/// Outcome of one call to [`crate::parse`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResultCode {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl ResultCode {
    pub const fn from_kind(kind: ParseErrorKind) -> Self {
        match kind {
            ParseErrorKind::ExpectValue => ResultCode::ExpectValue,
            ParseErrorKind::InvalidValue => ResultCode::InvalidValue,
            ParseErrorKind::RootNotSingular => ResultCode::RootNotSingular,
            ParseErrorKind::NumberTooBig => ResultCode::NumberTooBig,
        }
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, ResultCode::Ok)
    }
}

impl<T> From<&Result<T, ParseError>> for ResultCode {
    fn from(result: &Result<T, ParseError>) -> Self {
        match result {
            Ok(_) => ResultCode::Ok,
            Err(err) => err.code(),
        }
    }
}
