/// Numeric helpers.
///
/// Parsing of number lexemes into integer or double values, and the textual
/// rendering of doubles used by `print`.
pub mod num;
