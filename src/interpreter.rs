/// The token module defines what the scanner produces.
///
/// Token kinds are declared once as a `logos` lexer definition; the
/// `#[token]` attributes on the keyword variants form the keyword table.
///
/// # Responsibilities
/// - Declares every token kind and its display name.
/// - Defines the `Token` record: kind, lexeme, literal payload and line.
pub mod token;
/// The lexer module turns source text into tokens.
///
/// The scanner drives the `logos` lexer, resolves escapes, decodes number
/// literals and tracks line numbers. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Reports lexical errors for unterminated literals and stray characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule. It stops at
/// the first syntax error.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Encodes operator precedence and associativity.
/// - Reports syntax errors with the line and lexeme where they were found.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Literal payloads and evaluation results share one `Value` union: strings,
/// booleans, characters, integers, doubles and `nil`.
pub mod value;
/// The environment module stores variables.
///
/// A stack of scopes with a permanent global scope at the bottom.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// # Responsibilities
/// - Evaluates expressions under strict dynamic typing rules.
/// - Executes statements, writing `print` output to the session's stream.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
