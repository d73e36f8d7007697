use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::{MAX_NESTING, ParseResult},
        token::{Token, TokenKind},
    },
};

/// Enters one more nesting level.
///
/// # Returns
/// The depth for the nested rule, `depth + 1`.
///
/// # Errors
/// Returns `NestingTooDeep`, located at the next token, once the new depth
/// would exceed [`MAX_NESTING`].
pub(in crate::interpreter::parser) fn descend<'a, I>(tokens: &mut Peekable<I>,
                                                      depth: usize)
                                                      -> ParseResult<usize>
    where I: Iterator<Item = &'a Token>
{
    if depth >= MAX_NESTING {
        return Err(error_at(tokens, |lexeme, line| ParseError::NestingTooDeep { lexeme, line }));
    }

    Ok(depth + 1)
}

/// Returns `true` if the next token is `Eof` or the stream is exhausted.
pub(in crate::interpreter::parser) fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_none_or(|t| t.is(TokenKind::Eof))
}

/// Returns `true` if the next token has the given kind.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_some_and(|t| t.is(kind))
}

/// Consumes and returns the next token if it is one of `kinds`.
pub(in crate::interpreter::parser) fn next_if_any<'a, I>(tokens: &mut Peekable<I>,
                                                          kinds: &[TokenKind])
                                                          -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|t| kinds.contains(&t.kind))
}

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `kind`: The required kind.
/// - `make_error`: Builds the error from the lexeme and line of the token
///   found instead.
///
/// # Errors
/// Returns the error built by `make_error` if the next token differs.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     make_error: impl FnOnce(String, usize)
                                                                             -> ParseError)
                                                     -> Result<&'a Token, ParseError>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|t| t.is(kind)) {
        Some(token) => Ok(token),
        None => Err(error_at(tokens, make_error)),
    }
}

/// Builds an error located at the next token without consuming it.
///
/// An exhausted stream is reported as the end of input.
pub(in crate::interpreter::parser) fn error_at<'a, I>(tokens: &mut Peekable<I>,
                                                       make_error: impl FnOnce(String, usize)
                                                                               -> ParseError)
                                                       -> ParseError
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) => make_error(token.lexeme.clone(), token.line),
        None => make_error(String::new(), 0),
    }
}
