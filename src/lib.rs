//! # dtoy
//!
//! dtoy is a tree-walking interpreter for a small dynamically-typed language
//! with variables, nested block scopes and `print`.
//!
//! Source text flows through three stages: the scanner
//! ([`interpreter::lexer`]) produces tokens, the parser
//! ([`interpreter::parser`]) builds statements, and the evaluator
//! ([`interpreter::evaluator`]) runs them against a scoped environment.
//!
//! ```
//! let output = dtoy::execute("var greeting = \"hi\"; print greeting + \"!\";").unwrap();
//! assert_eq!(output, "hi!\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use log::warn;

pub use crate::error::Error;
use crate::interpreter::{
    evaluator::core::Interpreter,
    lexer::scan,
    parser::{parse, parse_single_expression},
    token::Token,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent source
/// code as a tree. The AST is built by the parser and traversed by the
/// evaluator.
pub mod ast;
/// Provides error types for scanning, parsing and evaluation.
///
/// One enum per phase, each carrying the line (and lexeme or token) where the
/// failure was detected, plus the unified [`Error`].
pub mod error;
/// The interpreter pipeline: tokens, scanner, parser, values, environment
/// and evaluator.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// An interpreter session that keeps its variables between inputs.
///
/// Each call to [`Session::run`] scans, parses and executes one input unit
/// (a REPL line or a whole file). `print` output goes to `W`; failures are
/// reported to `E`.
///
/// # Example
/// ```
/// use dtoy::Session;
///
/// let mut session = Session::new(Vec::new(), Vec::new());
///
/// session.run("var x = 4;").unwrap();
/// session.run("print x * x;").unwrap();
/// assert!(session.run("print y;").is_err());
///
/// let (out, err) = session.into_parts();
/// assert_eq!(out, b"16\n");
/// assert_eq!(err, b"Runtime error: Undefined variable 'y'. [line 1]\n");
/// ```
pub struct Session<W, E> {
    interpreter: Interpreter<W>,
    errors:      E,
}

impl<W: Write, E: Write> Session<W, E> {
    /// Creates a session with an empty global scope.
    #[must_use]
    pub fn new(out: W, errors: E) -> Self {
        Self { interpreter: Interpreter::new(out),
               errors }
    }

    /// Runs one input unit.
    ///
    /// Scan and parse errors are reported as `Error: <message>` and nothing is
    /// executed. Runtime errors are reported as
    /// `Runtime error: <message> [line <n>]`; statements before the failing
    /// one keep their effects. In every case the session stays usable.
    ///
    /// # Errors
    /// Returns the reported error, so callers can pick an exit status.
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let result = self.pipeline(source);

        if let Err(e) = &result
           && let Err(io) = writeln!(self.errors, "{}", e.report())
        {
            warn!("could not report error: {io}");
        }

        result
    }

    fn pipeline(&mut self, source: &str) -> Result<(), Error> {
        let tokens = scan(source)?;
        let statements = parse(&tokens)?;
        self.interpreter.interpret(&statements)?;
        Ok(())
    }

    /// Consumes the session and returns its output and error streams.
    pub fn into_parts(self) -> (W, E) {
        (self.interpreter.into_output(), self.errors)
    }
}

/// Runs a program in a fresh interpreter and returns everything it printed.
///
/// # Errors
/// Returns the first scan, parse or runtime error. Output printed before a
/// runtime error is discarded.
///
/// # Example
/// ```
/// use dtoy::execute;
///
/// assert_eq!(execute("print 3 + 4 * 2;").unwrap(), "11\n");
/// assert_eq!(execute("{ var a = 1; print a; }").unwrap(), "1\n");
/// assert!(execute("print \"a\" + 1;").is_err());
/// ```
pub fn execute(source: &str) -> Result<String, Error> {
    let mut interpreter = Interpreter::new(Vec::new());

    let statements = parse(&scan(source)?)?;
    interpreter.interpret(&statements)?;

    Ok(String::from_utf8_lossy(&interpreter.into_output()).into_owned())
}

/// Evaluates a single expression in a fresh interpreter.
///
/// The source must hold exactly one expression and no trailing `;`.
///
/// # Errors
/// Returns the first scan, parse or runtime error.
///
/// # Example
/// ```
/// use dtoy::{evaluate, interpreter::value::Value};
///
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), Value::Integer(9));
/// assert_eq!(evaluate("7.0 / 2.0").unwrap(), Value::Double(3.5));
/// assert_eq!(evaluate("\"a\" == \"a\"").unwrap(), Value::Bool(true));
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let expr = parse_single_expression(&scan(source)?)?;

    Ok(Interpreter::new(io::sink()).evaluate(&expr)?)
}

/// Scans source text without parsing it.
///
/// # Errors
/// Returns the scan error, if any.
///
/// # Example
/// ```
/// let tokens = dtoy::tokenize("print 1;").unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].to_string(), "Token { type: NUMBER, lexeme: '1', literal: 1 }");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(scan(source)?)
}
