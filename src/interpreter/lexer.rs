use log::debug;
use logos::Logos;

use crate::{
    error::ScanError,
    interpreter::{
        token::{LexFault, LexerExtras, Token, TokenKind},
        value::Value,
    },
    util::num::parse_number,
};

/// Result type used by the scanner.
pub type ScanResult<T> = Result<T, ScanError>;

/// Converts source text into a token sequence terminated by an `Eof` token.
///
/// Whitespace, newlines and `//` comments separate tokens and are not
/// emitted. Every token records the line it starts on; lines are counted
/// from 1 and advanced by each `\n`, including those inside string literals.
///
/// Literal tokens carry their decoded value: numbers become integers or
/// doubles, string and character literals have their escapes resolved, and
/// `true`/`false` carry booleans.
///
/// # Parameters
/// - `source`: The source text to scan.
///
/// # Returns
/// The scanned tokens. The last one is always `Eof` with an empty lexeme.
///
/// # Errors
/// Returns a `ScanError` for:
/// - a character that starts no token,
/// - a string or character literal that is never closed,
/// - an integer literal that does not fit in 64 bits.
///
/// # Example
/// ```
/// use dtoy::interpreter::{lexer::scan, token::TokenKind};
///
/// let tokens = scan("x != 10;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::BangEqual,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub fn scan(source: &str) -> ScanResult<Vec<Token>> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        let kind = match result {
            Ok(kind) => kind,
            Err(fault) => return Err(scan_error(fault, lexeme, line)),
        };

        tokens.push(make_token(kind, lexeme, line)?);
        lexer.extras.line += lexeme.matches('\n').count();
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    debug!("scanned {} tokens", tokens.len());

    Ok(tokens)
}

/// Builds a token from a recognized lexeme, decoding its literal payload.
fn make_token(kind: TokenKind, lexeme: &str, line: usize) -> ScanResult<Token> {
    let literal = match kind {
        TokenKind::Number => {
            parse_number(lexeme).ok_or_else(|| ScanError::IntegerTooLarge { lexeme: lexeme.to_string(),
                                                                            line })?
        },
        TokenKind::String => Value::String(unescape(&lexeme[1..lexeme.len() - 1])),
        TokenKind::Char => {
            let body = unescape(&lexeme[1..lexeme.len() - 1]);
            body.chars().next().map_or(Value::Nil, Value::Char)
        },
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        _ => Value::Nil,
    };

    Ok(Token::with_literal(kind, lexeme, literal, line))
}

fn scan_error(fault: LexFault, lexeme: &str, line: usize) -> ScanError {
    match fault {
        LexFault::UnexpectedCharacter => {
            ScanError::UnexpectedCharacter { character: lexeme.chars().next().unwrap_or('\0'),
                                             line }
        },
        LexFault::UnterminatedString => ScanError::UnterminatedString { lexeme: lexeme.to_string(),
                                                                        line },
        LexFault::UnterminatedChar => ScanError::UnterminatedChar { lexeme: lexeme.to_string(),
                                                                    line },
    }
}

/// Resolves backslash escapes in the body of a string or character literal.
///
/// `\n`, `\t`, `\r` and `\0` map to their control characters; any other
/// escaped character, including `\\`, `\"` and `\'`, maps to itself.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
