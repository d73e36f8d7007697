use thiserror::Error;

use crate::error::at;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that does not start any token.
    #[error("line {line} at '{character}': Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal without its closing `"`.
    #[error("line {line} at {}: Unterminated string.", at(.lexeme))]
    UnterminatedString {
        /// Everything consumed from the opening quote to the end of input.
        lexeme: String,
        /// The source line where the literal starts.
        line:   usize,
    },
    /// A character literal without its closing `'`.
    #[error("line {line} at {}: Unterminated char literal.", at(.lexeme))]
    UnterminatedChar {
        /// The partial literal consumed so far.
        lexeme: String,
        /// The source line where the literal starts.
        line:   usize,
    },
    /// An integer literal that does not fit in a signed 64-bit integer.
    #[error("line {line} at {}: Integer literal is too large.", at(.lexeme))]
    IntegerTooLarge {
        /// The literal's digits.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
