//! Tagged value produced by the parser.
//!
//! Only the scalar kinds are modelled: `null`, the two booleans, and
//! numbers. Containers and strings would add owned children here.

use std::fmt;

/// One parsed JSON scalar.
///
/// The numeric payload exists if and only if the value is
/// [`Value::Number`]; every other variant carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`. Also the state of every value before and after a failed parse.
    #[default]
    Null,
    /// `false`.
    False,
    /// `true`.
    True,
    /// A finite number.
    Number(f64),
}

/// Payload-free discriminant of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tag {
    Null,
    False,
    True,
    Number,
}

impl Value {
    /// Returns the tag of this value.
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::False => Tag::False,
            Value::True => Tag::True,
            Value::Number(_) => Tag::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Contract
    ///
    /// The value must be tagged [`Tag::Number`]. Calling this on any other
    /// tag is a programming error: debug builds panic, release builds
    /// return `NaN`. Use [`as_number()`](Self::as_number) when the tag is
    /// not known.
    #[inline]
    pub fn number(&self) -> f64 {
        match *self {
            Value::Number(n) => n,
            other => {
                if cfg!(debug_assertions) {
                    panic!("number() called on a value tagged {:?}", other.tag());
                }
                f64::NAN
            }
        }
    }

    /// Returns the numeric payload, or `None` for non-number values.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the boolean for `true`/`false`, `None` otherwise.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl Tag {
    /// Lower-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::False => "false",
            Tag::True => "true",
            Tag::Number => "number",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the tag of `value`.
#[inline]
pub fn get_type(value: &Value) -> Tag {
    value.tag()
}

/// Returns the numeric payload of `value`.
///
/// Same contract as [`Value::number`]: only valid on [`Tag::Number`].
#[inline]
pub fn get_number(value: &Value) -> f64 {
    value.number()
}
