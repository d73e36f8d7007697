use thiserror::Error;

use crate::interpreter::token::Token;

/// Represents all errors that can occur during evaluation.
///
/// Each variant keeps the token that triggered it (the operator, the variable
/// name or the `print` keyword) so the error can be reported with its line.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Unary `-` applied to something other than an integer or a double.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The `-` token.
        operator: Token,
    },
    /// Unary `!` applied to something other than a boolean.
    #[error("Operand must be a boolean.")]
    OperandMustBeBoolean {
        /// The `!` token.
        operator: Token,
    },
    /// Arithmetic or comparison on operands that are not two integers or two
    /// doubles.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` on operands that are neither two numbers nor two strings.
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The `+` token.
        operator: Token,
    },
    /// Division by integer `0` or double `0.0`.
    #[error("Division by zero.")]
    DivisionByZero {
        /// The `/` token.
        operator: Token,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Integer overflow.")]
    IntegerOverflow {
        /// The operator token.
        operator: Token,
    },
    /// A variable was read or assigned before being declared.
    #[error("Undefined variable '{}'.", .name.lexeme)]
    UndefinedVariable {
        /// The variable's name token.
        name: Token,
    },
    /// A unary node carries an operator the evaluator does not know.
    #[error("Unknown unary operator '{}'.", .operator.lexeme)]
    UnknownUnaryOperator {
        /// The operator token.
        operator: Token,
    },
    /// A binary node carries an operator the evaluator does not know.
    #[error("Unknown binary operator '{}'.", .operator.lexeme)]
    UnknownBinaryOperator {
        /// The operator token.
        operator: Token,
    },
    /// Writing to the output stream failed.
    #[error("Failed to write output: {source}")]
    Output {
        /// The `print` keyword.
        keyword: Token,
        /// The underlying I/O error.
        source:  std::io::Error,
    },
}

impl RuntimeError {
    /// The token the error is attributed to.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandMustBeBoolean { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::OperandsMustBeNumbersOrStrings { operator }
            | Self::DivisionByZero { operator }
            | Self::IntegerOverflow { operator }
            | Self::UnknownUnaryOperator { operator }
            | Self::UnknownBinaryOperator { operator } => operator,
            Self::UndefinedVariable { name } => name,
            Self::Output { keyword, .. } => keyword,
        }
    }

    /// The line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }
}
