use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            statement::parse_declaration,
            utils::{at_end, check, descend, expect},
        },
        token::{Token, TokenKind},
    },
};

/// Parses the body of a block after its opening `{`.
///
/// Declarations are allowed inside blocks, so blocks nest freely.
///
/// Grammar: `block := "{" declaration* "}"`
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// - `UnclosedBlock` if input ends before the closing `}`.
/// - `NestingTooDeep` if blocks nest past the limit.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Token>
{
    let depth = descend(tokens, depth)?;
    let mut statements = Vec::new();

    while !check(tokens, TokenKind::RightBrace) && !at_end(tokens) {
        statements.push(parse_declaration(tokens, depth)?);
    }

    expect(tokens, TokenKind::RightBrace, |lexeme, line| {
        ParseError::UnclosedBlock { lexeme, line }
    })?;
    Ok(statements)
}
