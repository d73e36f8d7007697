/// Scanning errors.
///
/// Raised while turning source text into tokens: unterminated string or
/// character literals, characters that start no token, and integer literals
/// that do not fit in 64 bits.
pub mod scan_error;
/// Parsing errors.
///
/// Raised while building the syntax tree: missing terminators, missing
/// expressions and invalid assignment targets. The first error aborts the
/// parse; there is no recovery.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation: operand type mismatches, division by zero,
/// integer overflow and undefined variables.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;
use thiserror::Error;

/// Any error the pipeline can produce for one input unit.
#[derive(Debug, Error)]
pub enum Error {
    /// The scanner rejected the input.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Formats the error the way it is written to the error stream.
    ///
    /// Scan and parse errors read `Error: <message>`; runtime errors read
    /// `Runtime error: <message> [line <n>]`.
    ///
    /// # Example
    /// ```
    /// use dtoy::execute;
    ///
    /// let err = execute("print 1 / 0;").unwrap_err();
    /// assert_eq!(err.report(), "Runtime error: Division by zero. [line 1]");
    ///
    /// let err = execute("print 1").unwrap_err();
    /// assert_eq!(err.report(), "Error: line 1 at end: Expect ';' after value.");
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        match self {
            Self::Scan(e) => format!("Error: {e}"),
            Self::Parse(e) => format!("Error: {e}"),
            Self::Runtime(e) => format!("Runtime error: {e} [line {}]", e.line()),
        }
    }

    /// Returns `true` for errors raised before evaluation started.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Scan(_) | Self::Parse(_))
    }
}

/// Renders the position part of a diagnostic: `'lexeme'`, or `end` at EOF.
pub(crate) fn at(lexeme: &str) -> String {
    if lexeme.is_empty() {
        "end".to_string()
    } else {
        format!("'{lexeme}'")
    }
}
