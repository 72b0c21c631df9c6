//! Strict recursive-descent parser for JSON scalar texts.
//!
//! Accepts exactly one JSON value (`null`, `true`, `false`, or a number),
//! optionally surrounded by whitespace, and nothing else. Every failure is
//! classified by a single [`ParseErrorKind`] at the byte offset where it was
//! first detected; no partial results are produced.
//!
//! # Layers
//!
//! - [`Cursor`]: bounds-tracked view over the input
//! - [`Value`] / [`Tag`]: the parsed value model
//! - `literal` / `number`: grammar recognizers
//! - [`Parser`]: the top-level driver
//!
//! # Usage
//!
//! ```
//! use lept_json::{parse, parse_value, ResultCode, Tag, Value};
//!
//! let mut v = Value::default();
//! assert_eq!(parse(&mut v, " -1.5E-3 "), ResultCode::Ok);
//! assert_eq!(v.tag(), Tag::Number);
//! assert_eq!(v.number(), -1.5e-3);
//!
//! let err = parse_value("null x").unwrap_err();
//! assert_eq!(err.code(), ResultCode::RootNotSingular);
//! assert_eq!(err.offset, 5);
//! ```

mod cursor;
mod error;
mod literal;
mod number;
mod parser;
mod value;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, ResultCode};
pub use parser::{parse, parse_value, Parser};
pub use value::{get_number, get_type, Tag, Value};
