use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{descend, next_if_any},
        },
        token::{Token, TokenKind},
    },
};

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           &[TokenKind::BangEqual, TokenKind::EqualEqual],
                           parse_comparison)
}

/// Parses ordering comparisons.
///
/// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           &[TokenKind::Greater,
                             TokenKind::GreaterEqual,
                             TokenKind::Less,
                             TokenKind::LessEqual],
                           parse_term)
}

/// Parses addition and subtraction.
///
/// Grammar: `term := factor (("-" | "+") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, &[TokenKind::Minus, TokenKind::Plus], parse_factor)
}

/// Parses multiplication and division.
///
/// Grammar: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, &[TokenKind::Slash, TokenKind::Star], parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Reads an operand with `operand`, then folds every following
/// `operator operand` pair into a binary node whose left child is the tree
/// built so far. Each fold deepens the tree by one, so it also counts as a
/// nesting level.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting level.
/// - `operators`: The operator kinds belonging to this level.
/// - `operand`: Parser for the next-higher precedence level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operators: &[TokenKind],
                                 operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens, depth)?;
    let mut level = depth;

    while let Some(operator) = next_if_any(tokens, operators) {
        level = descend(tokens, level)?;
        let right = operand(tokens, level)?;
        left = Expr::binary(left, operator.clone(), right);
    }

    Ok(left)
}
