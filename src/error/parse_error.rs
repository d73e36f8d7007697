use thiserror::Error;

use crate::{error::at, interpreter::parser::core::MAX_NESTING};

/// Represents all errors that can occur during parsing.
///
/// Every variant carries the line and lexeme of the token at which the
/// problem was detected. An empty lexeme means the end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No expression could start at the current token.
    #[error("line {line} at {}: Expect expression.", at(.lexeme))]
    ExpectExpression {
        /// The token found instead.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The left-hand side of `=` is not a variable.
    #[error("line {line} at {}: Invalid assignment target.", at(.lexeme))]
    InvalidAssignmentTarget {
        /// The `=` token.
        lexeme: String,
        /// The source line of the `=` token.
        line:   usize,
    },
    /// A grouped expression is missing its closing `)`.
    #[error("line {line} at {}: Expect ')' after expression.", at(.lexeme))]
    UnclosedGroup {
        /// The token found instead of `)`.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A statement is missing its terminating `;`.
    #[error("line {line} at {}: Expect ';' after {after}.", at(.lexeme))]
    MissingSemicolon {
        /// What the `;` should follow: `value`, `expression` or `variable
        /// declaration`.
        after:  &'static str,
        /// The token found instead of `;`.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A block is missing its closing `}`.
    #[error("line {line} at {}: Expect '}}' after block.", at(.lexeme))]
    UnclosedBlock {
        /// The token found instead of `}`.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// `var` is not followed by an identifier.
    #[error("line {line} at {}: Expect variable name.", at(.lexeme))]
    ExpectVariableName {
        /// The token found instead of a name.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Expressions or blocks are nested deeper than [`MAX_NESTING`] levels.
    #[error("line {line} at {}: Nested too deeply (limit is {} levels).", at(.lexeme), MAX_NESTING)]
    NestingTooDeep {
        /// The token that would open one level too many.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A standalone expression is followed by more tokens.
    #[error("line {line} at {}: Expect end of expression.", at(.lexeme))]
    TrailingTokens {
        /// The first token after the expression.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
