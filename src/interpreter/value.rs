use crate::util::num::format_double;

/// A literal or runtime value.
///
/// The same union is attached to literal tokens by the scanner, stored in
/// literal expression nodes, and produced by evaluation.
///
/// Equality is strict: two values are equal only if they have the same tag
/// and the same payload. `Integer(1)` is never equal to `Double(1.0)` or
/// `Bool(true)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string, e.g. `"hello"`.
    String(String),
    /// A boolean, `true` or `false`.
    Bool(bool),
    /// A single character, e.g. `'a'`.
    Char(char),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// The absent value, `nil`.
    Nil,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(d) => f.write_str(&format_double(*d)),
            Self::Nil => f.write_str("nil"),
        }
    }
}
