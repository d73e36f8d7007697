use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, error_at, expect, next_if_any},
        },
        token::{Token, TokenKind},
    },
};

/// Parses prefix operators.
///
/// Unary operators nest to the right, so `!!x` is `!(!x)`.
///
/// Grammar: `unary := ("!" | "-") unary | primary`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(operator) = next_if_any(tokens, &[TokenKind::Bang, TokenKind::Minus]) {
        let nested = descend(tokens, depth)?;
        let right = parse_unary(tokens, nested)?;
        return Ok(Expr::unary(operator.clone(), right));
    }

    parse_primary(tokens, depth)
}

/// Parses literals, variables and parenthesized expressions.
///
/// Grammar:
/// ```text
/// primary := "true" | "false" | "nil" | NUMBER | STRING | CHAR
///          | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnclosedGroup` if a `(` is not matched by `)`.
/// - `ExpectExpression` if no expression can start at the current token.
/// - `NestingTooDeep` if parentheses nest past the limit.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    const LITERALS: [TokenKind; 6] = [TokenKind::False,
                                      TokenKind::True,
                                      TokenKind::Nil,
                                      TokenKind::Number,
                                      TokenKind::String,
                                      TokenKind::Char];

    if let Some(token) = next_if_any(tokens, &LITERALS) {
        return Ok(Expr::Literal(token.literal.clone()));
    }

    if let Some(name) = next_if_any(tokens, &[TokenKind::Identifier]) {
        return Ok(Expr::Variable(name.clone()));
    }

    if next_if_any(tokens, &[TokenKind::LeftParen]).is_some() {
        let nested = descend(tokens, depth)?;
        let inner = parse_expression(tokens, nested)?;
        expect(tokens, TokenKind::RightParen, |lexeme, line| {
            ParseError::UnclosedGroup { lexeme, line }
        })?;
        return Ok(Expr::grouping(inner));
    }

    Err(error_at(tokens, |lexeme, line| ParseError::ExpectExpression { lexeme, line }))
}
