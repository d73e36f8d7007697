use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Applies a prefix operator to an evaluated operand.
///
/// Supported operators:
/// - `-`: negation of an integer or a double, preserving its type. Integer
///   negation is checked.
/// - `!`: negation of a boolean. Other types are not coerced.
///
/// # Parameters
/// - `operator`: The operator token, used for dispatch and error reporting.
/// - `operand`: The evaluated operand.
///
/// # Errors
/// - `OperandMustBeNumber` if `-` is applied to a non-number.
/// - `OperandMustBeBoolean` if `!` is applied to a non-boolean.
/// - `IntegerOverflow` if the negated integer is out of range.
///
/// # Example
/// ```
/// use dtoy::interpreter::{
///     evaluator::unary::apply_unary,
///     token::{Token, TokenKind},
///     value::Value,
/// };
///
/// let minus = Token::new(TokenKind::Minus, "-", 1);
/// assert_eq!(apply_unary(&minus, Value::Double(2.5)).unwrap(), Value::Double(-2.5));
///
/// let bang = Token::new(TokenKind::Bang, "!", 1);
/// assert_eq!(apply_unary(&bang, Value::Bool(false)).unwrap(), Value::Bool(true));
/// assert!(apply_unary(&bang, Value::Nil).is_err());
/// ```
pub fn apply_unary(operator: &Token, operand: Value) -> EvalResult<Value> {
    match operator.kind {
        TokenKind::Minus => match operand {
            Value::Integer(n) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or_else(|| RuntimeError::IntegerOverflow { operator: operator.clone() })
            },
            Value::Double(d) => Ok(Value::Double(-d)),
            _ => Err(RuntimeError::OperandMustBeNumber { operator: operator.clone() }),
        },
        TokenKind::Bang => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            _ => Err(RuntimeError::OperandMustBeBoolean { operator: operator.clone() }),
        },
        _ => Err(RuntimeError::UnknownUnaryOperator { operator: operator.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minus() -> Token {
        Token::new(TokenKind::Minus, "-", 4)
    }

    #[test]
    fn negation_preserves_type() {
        assert_eq!(apply_unary(&minus(), Value::Integer(3)).unwrap(), Value::Integer(-3));
        assert_eq!(apply_unary(&minus(), Value::Double(-1.5)).unwrap(), Value::Double(1.5));
    }

    #[test]
    fn negation_rejects_non_numbers() {
        let err = apply_unary(&minus(), Value::from("s")).unwrap_err();

        assert!(matches!(err, RuntimeError::OperandMustBeNumber { .. }));
        assert_eq!(err.to_string(), "Operand must be a number.");
        assert_eq!(err.line(), 4);
        assert!(apply_unary(&minus(), Value::Char('1')).is_err());
    }

    #[test]
    fn not_is_strict() {
        let bang = Token::new(TokenKind::Bang, "!", 1);

        assert_eq!(apply_unary(&bang, Value::Bool(true)).unwrap(), Value::Bool(false));
        for operand in [Value::Nil, Value::Integer(0), Value::from("")] {
            assert!(matches!(apply_unary(&bang, operand),
                             Err(RuntimeError::OperandMustBeBoolean { .. })));
        }
    }

    #[test]
    fn unknown_operator() {
        let plus = Token::new(TokenKind::Plus, "+", 1);

        assert!(matches!(apply_unary(&plus, Value::Integer(1)),
                         Err(RuntimeError::UnknownUnaryOperator { .. })));
    }
}
