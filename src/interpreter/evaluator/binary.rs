use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic requires two integers or two doubles; there is no implicit
/// conversion between them. `+` also concatenates two strings. Integer
/// arithmetic is checked. Ordering comparisons follow the same operand rule
/// and yield booleans. `==` and `!=` accept any operands and compare tag and
/// payload.
///
/// # Parameters
/// - `operator`: The operator token, used for dispatch and error reporting.
/// - `left`: The evaluated left operand.
/// - `right`: The evaluated right operand.
///
/// # Errors
/// - `OperandsMustBeNumbersOrStrings` for `+` on mismatched operands.
/// - `OperandsMustBeNumbers` for `- * / < <= > >=` on mismatched operands.
/// - `DivisionByZero` for a `0` or `0.0` divisor.
/// - `IntegerOverflow` if integer arithmetic leaves the 64-bit range.
///
/// # Example
/// ```
/// use dtoy::interpreter::{
///     evaluator::binary::apply_binary,
///     token::{Token, TokenKind},
///     value::Value,
/// };
///
/// let plus = Token::new(TokenKind::Plus, "+", 1);
/// let sum = apply_binary(&plus, Value::from("foo"), Value::from("bar")).unwrap();
/// assert_eq!(sum, Value::from("foobar"));
///
/// assert!(apply_binary(&plus, Value::Integer(1), Value::Double(2.0)).is_err());
/// ```
pub fn apply_binary(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    match operator.kind {
        TokenKind::Plus => match (left, right) {
            (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
            (l, r) if same_numbers(&l, &r) => arithmetic(operator, l, r),
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { operator: operator.clone() }),
        },
        TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
            arithmetic(operator, left, right)
        },
        TokenKind::Greater | TokenKind::GreaterEqual | TokenKind::Less | TokenKind::LessEqual => {
            compare(operator, &left, &right)
        },
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownBinaryOperator { operator: operator.clone() }),
    }
}

fn same_numbers(left: &Value, right: &Value) -> bool {
    matches!((left, right),
             (Value::Integer(_), Value::Integer(_)) | (Value::Double(_), Value::Double(_)))
}

/// Evaluates `+ - * /` on two numbers of the same type.
fn arithmetic(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_arithmetic(operator, l, r),
        (Value::Double(l), Value::Double(r)) => double_arithmetic(operator, l, r),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    }
}

fn integer_arithmetic(operator: &Token, l: i64, r: i64) -> EvalResult<Value> {
    let result = match operator.kind {
        TokenKind::Plus => l.checked_add(r),
        TokenKind::Minus => l.checked_sub(r),
        TokenKind::Star => l.checked_mul(r),
        TokenKind::Slash if r == 0 => {
            return Err(RuntimeError::DivisionByZero { operator: operator.clone() });
        },
        TokenKind::Slash => l.checked_div(r),
        _ => return Err(RuntimeError::UnknownBinaryOperator { operator: operator.clone() }),
    };

    result.map(Value::Integer)
          .ok_or_else(|| RuntimeError::IntegerOverflow { operator: operator.clone() })
}

fn double_arithmetic(operator: &Token, l: f64, r: f64) -> EvalResult<Value> {
    let result = match operator.kind {
        TokenKind::Plus => l + r,
        TokenKind::Minus => l - r,
        TokenKind::Star => l * r,
        TokenKind::Slash if r == 0.0 => {
            return Err(RuntimeError::DivisionByZero { operator: operator.clone() });
        },
        TokenKind::Slash => l / r,
        _ => return Err(RuntimeError::UnknownBinaryOperator { operator: operator.clone() }),
    };

    Ok(Value::Double(result))
}

/// Evaluates an ordering comparison. Comparisons involving NaN are false.
fn compare(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => Some(l.cmp(r)),
        (Value::Double(l), Value::Double(r)) => l.partial_cmp(r),
        _ => return Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    };

    let result = match operator.kind {
        TokenKind::Greater => ordering == Some(Ordering::Greater),
        TokenKind::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        TokenKind::Less => ordering == Some(Ordering::Less),
        TokenKind::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        _ => return Err(RuntimeError::UnknownBinaryOperator { operator: operator.clone() }),
    };

    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(kind: TokenKind) -> Token {
        Token::new(kind, kind.name(), 7)
    }

    fn apply(kind: TokenKind, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        apply_binary(&op(kind), left.into(), right.into())
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        assert_eq!(apply(TokenKind::Plus, 2_i64, 3_i64).unwrap(), Value::Integer(5));
        assert_eq!(apply(TokenKind::Minus, 2_i64, 3_i64).unwrap(), Value::Integer(-1));
        assert_eq!(apply(TokenKind::Star, 4_i64, 3_i64).unwrap(), Value::Integer(12));
        assert_eq!(apply(TokenKind::Slash, 7_i64, 2_i64).unwrap(), Value::Integer(3));
    }

    #[test]
    fn double_arithmetic() {
        assert_eq!(apply(TokenKind::Plus, 1.5, 2.0).unwrap(), Value::Double(3.5));
        assert_eq!(apply(TokenKind::Slash, 1.0, 4.0).unwrap(), Value::Double(0.25));
    }

    #[test]
    fn mixed_numbers_are_rejected() {
        let err = apply(TokenKind::Plus, 1_i64, 2.0).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsMustBeNumbersOrStrings { .. }));
        assert_eq!(err.line(), 7);

        assert!(matches!(apply(TokenKind::Star, 1_i64, 2.0),
                         Err(RuntimeError::OperandsMustBeNumbers { .. })));
        assert!(matches!(apply(TokenKind::Minus, "a", "b"),
                         Err(RuntimeError::OperandsMustBeNumbers { .. })));
    }

    #[test]
    fn division_by_zero() {
        for result in [apply(TokenKind::Slash, 1_i64, 0_i64), apply(TokenKind::Slash, 1.0, 0.0)] {
            let err = result.unwrap_err();
            assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
            assert_eq!(err.to_string(), "Division by zero.");
        }
    }

    #[test]
    fn integer_overflow_is_an_error() {
        assert!(matches!(apply(TokenKind::Plus, i64::MAX, 1_i64),
                         Err(RuntimeError::IntegerOverflow { .. })));
        assert!(matches!(apply(TokenKind::Star, i64::MAX, 2_i64),
                         Err(RuntimeError::IntegerOverflow { .. })));
        assert!(matches!(apply(TokenKind::Slash, i64::MIN, -1_i64),
                         Err(RuntimeError::IntegerOverflow { .. })));
    }

    #[test]
    fn comparisons() {
        assert_eq!(apply(TokenKind::Less, 1_i64, 2_i64).unwrap(), Value::Bool(true));
        assert_eq!(apply(TokenKind::GreaterEqual, 2.0, 2.0).unwrap(), Value::Bool(true));
        assert_eq!(apply(TokenKind::Greater, f64::NAN, 1.0).unwrap(), Value::Bool(false));
        assert!(matches!(apply(TokenKind::Less, "a", "b"),
                         Err(RuntimeError::OperandsMustBeNumbers { .. })));
    }

    #[test]
    fn equality_is_strict() {
        assert_eq!(apply(TokenKind::EqualEqual, 1_i64, 1_i64).unwrap(), Value::Bool(true));
        assert_eq!(apply(TokenKind::EqualEqual, 1_i64, 1.0).unwrap(), Value::Bool(false));
        assert_eq!(apply(TokenKind::BangEqual, "a", 'a').unwrap(), Value::Bool(true));
        assert_eq!(apply_binary(&op(TokenKind::EqualEqual), Value::Nil, Value::Nil).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn unknown_operator() {
        assert!(matches!(apply(TokenKind::Comma, 1_i64, 2_i64),
                         Err(RuntimeError::UnknownBinaryOperator { .. })));
    }
}
