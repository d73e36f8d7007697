use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_equality,
            utils::{descend, next_if_any},
        },
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Every `(`, block, prefix operator, chained assignment and binary operator
/// opens one level. Parsing and evaluation recurse once per level, so this
/// bound keeps both well inside a 2 MiB thread stack, even in debug builds.
pub const MAX_NESTING: usize = 128;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, assignment, and descends through the hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `depth`: Nesting level of the enclosing construct, `0` at top level.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens, depth)
}

/// Parses an assignment, or falls through to equality.
///
/// Assignment is right-associative: `a = b = 1` assigns `1` to `b`, then to
/// `a`. The right-hand side is parsed before the target is checked, so
/// `1 = 2` fails only after `2` has been read.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Errors
/// - `InvalidAssignmentTarget`, located at the `=`, if the left-hand side is
///   not a plain variable.
/// - `NestingTooDeep` if assignments chain past [`MAX_NESTING`].
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_equality(tokens, depth)?;

    let Some(equals) = next_if_any(tokens, &[TokenKind::Equal]) else {
        return Ok(expr);
    };
    let nested = descend(tokens, depth)?;
    let value = parse_assignment(tokens, nested)?;

    match expr {
        Expr::Variable(name) => Ok(Expr::assign(name, value)),
        _ => Err(ParseError::InvalidAssignmentTarget { lexeme: equals.lexeme.clone(),
                                                       line:   equals.line, }),
    }
}
