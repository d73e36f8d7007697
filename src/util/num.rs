/// Number of fractional digits a double is rendered with before trimming.
pub const DOUBLE_PRECISION: usize = 6;

/// Renders a double the way `print` shows it.
///
/// The value is formatted with [`DOUBLE_PRECISION`] fractional digits, then
/// trailing zeros and a dangling decimal point are removed. Non-finite values
/// use Rust's own spelling (`inf`, `-inf`, `NaN`).
///
/// ## Example
/// ```
/// use dtoy::util::num::format_double;
///
/// assert_eq!(format_double(4.0), "4");
/// assert_eq!(format_double(2.75), "2.75");
/// assert_eq!(format_double(0.1 + 0.2), "0.3");
/// assert_eq!(format_double(-2.5), "-2.5");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut text = format!("{value:.precision$}", precision = DOUBLE_PRECISION);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Parses the lexeme of a number token.
///
/// Lexemes containing a `.` become doubles, everything else a 64-bit
/// integer. Returns `None` if an integer lexeme does not fit in an `i64`.
///
/// ## Example
/// ```
/// use dtoy::{interpreter::value::Value, util::num::parse_number};
///
/// assert_eq!(parse_number("42"), Some(Value::Integer(42)));
/// assert_eq!(parse_number("2.5"), Some(Value::Double(2.5)));
/// assert_eq!(parse_number("99999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_number(lexeme: &str) -> Option<crate::interpreter::value::Value> {
    use crate::interpreter::value::Value;

    if lexeme.contains('.') {
        lexeme.parse().ok().map(Value::Double)
    } else {
        lexeme.parse().ok().map(Value::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_redundant_zeros() {
        assert_eq!(format_double(10.0), "10");
        assert_eq!(format_double(10.5), "10.5");
        assert_eq!(format_double(100.0), "100");
        assert_eq!(format_double(0.000_000_1), "0");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_double(-0.0), "0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_double(f64::INFINITY), "inf");
        assert_eq!(format_double(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_double(f64::NAN), "NaN");
    }
}
