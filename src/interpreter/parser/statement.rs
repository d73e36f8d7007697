use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, next_if_any},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a declaration or any other statement.
///
/// Grammar: `declaration := varDecl | statement`
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if next_if_any(tokens, &[TokenKind::Var]).is_some() {
        return parse_var_declaration(tokens, depth);
    }

    parse_statement(tokens, depth)
}

/// Parses the rest of a variable declaration after `var`.
///
/// Grammar: `varDecl := "var" IDENTIFIER ("=" expression)? ";"`
///
/// # Errors
/// - `ExpectVariableName` if `var` is not followed by an identifier.
/// - `MissingSemicolon` if the declaration is not terminated.
pub fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, TokenKind::Identifier, |lexeme, line| {
                   ParseError::ExpectVariableName { lexeme, line }
               })?.clone();

    let initializer = match next_if_any(tokens, &[TokenKind::Equal]) {
        Some(_) => Some(parse_expression(tokens, depth)?),
        None => None,
    };

    terminate(tokens, "variable declaration")?;
    Ok(Stmt::Var { name, initializer })
}

/// Parses a non-declaration statement.
///
/// Grammar: `statement := printStmt | block | exprStmt`
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    if let Some(keyword) = next_if_any(tokens, &[TokenKind::Print]) {
        let expression = parse_expression(tokens, depth)?;
        terminate(tokens, "value")?;
        return Ok(Stmt::Print { keyword: keyword.clone(),
                                expression });
    }

    if next_if_any(tokens, &[TokenKind::LeftBrace]).is_some() {
        return Ok(Stmt::Block(parse_block(tokens, depth)?));
    }

    let expression = parse_expression(tokens, depth)?;
    terminate(tokens, "expression")?;
    Ok(Stmt::Expression(expression))
}

/// Consumes the `;` ending a statement.
fn terminate<'a, I>(tokens: &mut Peekable<I>, after: &'static str) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Semicolon, |lexeme, line| {
        ParseError::MissingSemicolon { after, lexeme, line }
    })?;
    Ok(())
}
