use logos::{Lexer, Logos, Skip};

use crate::interpreter::value::Value;

/// The kind of a lexical token.
///
/// `TokenKind` is derived with [`logos`], so the `#[token]` attributes on the
/// keyword variants double as the language's keyword table. A keyword always
/// wins over an identifier of the same length; `andy` is still an identifier.
///
/// Literal payloads are not stored here. The scanner attaches them to the
/// surrounding [`Token`] after the kind has been recognized.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    // One or two character tokens.
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    // Literals.
    /// Identifier tokens such as `x` or `_total2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// String literal tokens, `"..."`, with backslash escapes.
    #[token("\"", string)]
    String,
    /// Character literal tokens, `'c'` or `'\n'`.
    #[token("'", character)]
    Char,
    /// Numeric literal tokens, `42` or `3.14`.
    #[regex(r"[0-9]+", fraction)]
    Number,

    // Keywords.
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// Line breaks. Counted into [`LexerExtras::line`], never emitted.
    #[token("\n", newline)]
    Newline,
    /// `// line comments`. Never emitted.
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,

    /// End of input. Appended by the scanner, never produced by logos.
    Eof,
}

/// Additional state carried by the logos lexer.
///
/// Tracks the current line number for diagnostics.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The line the lexer is currently on, starting at 1.
    pub line: usize,
}

/// Low-level lexing failures reported by the logos callbacks.
///
/// The scanner turns these into [`crate::error::ScanError`] values carrying
/// line and lexeme context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// A `"` was never closed.
    UnterminatedString,
    /// A `'` was not followed by exactly one character and a closing `'`.
    UnterminatedChar,
}

fn newline(lex: &mut Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    Skip
}

/// Extends an integer match with a fractional part.
///
/// The `.` is only consumed when a digit follows it, so `1.` lexes as `1`
/// followed by a `.` token.
fn fraction(lex: &mut Lexer<TokenKind>) {
    let rest = lex.remainder().as_bytes();

    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
}

/// Consumes a string body up to and including the closing quote.
fn string(lex: &mut Lexer<TokenKind>) -> Result<(), LexFault> {
    let remainder = lex.remainder();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(());
            },
            '\\' => {
                chars.next();
            },
            _ => {},
        }
    }

    lex.bump(remainder.len());
    Err(LexFault::UnterminatedString)
}

/// Consumes one (possibly escaped) character and the closing quote.
fn character(lex: &mut Lexer<TokenKind>) -> Result<(), LexFault> {
    let remainder = lex.remainder();
    let mut chars = remainder.char_indices();

    match chars.next() {
        Some((_, '\\')) => {
            chars.next();
        },
        Some(_) => {},
        None => return Err(LexFault::UnterminatedChar),
    }

    match chars.next() {
        Some((offset, '\'')) => {
            lex.bump(offset + 1);
            Ok(())
        },
        Some((offset, _)) => {
            lex.bump(offset);
            Err(LexFault::UnterminatedChar)
        },
        None => {
            lex.bump(remainder.len());
            Err(LexFault::UnterminatedChar)
        },
    }
}

impl TokenKind {
    /// Returns the upper-case display name of this kind, e.g. `BANG_EQUAL`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Char => "CHAR",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Newline => "NEWLINE",
            Self::Comment => "COMMENT",
            Self::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single scanned token.
///
/// Tokens are created by the scanner and only read afterwards. The `literal`
/// payload is fully determined by `kind`: numbers carry an integer or a
/// double, strings a string, chars a character, `true`/`false` a boolean,
/// and every other kind carries [`Value::Nil`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The literal value, or [`Value::Nil`] for non-literal tokens.
    pub literal: Value,
    /// The line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal payload.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: Value::Nil,
               line }
    }

    /// Creates a token carrying a literal value.
    #[must_use]
    pub fn with_literal(kind: TokenKind,
                        lexeme: impl Into<String>,
                        literal: Value,
                        line: usize)
                        -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }

    /// Returns `true` if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Token {{ type: {}, lexeme: '{}', literal: {} }}",
               self.kind, self.lexeme, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }).filter_map(Result::ok)
                                                                     .collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("var print nil"),
                   vec![TokenKind::Var, TokenKind::Print, TokenKind::Nil]);
        assert_eq!(kinds("variable printer"),
                   vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn fraction_requires_a_digit() {
        let mut lexer = TokenKind::lexer_with_extras("12.5 7.", LexerExtras { line: 1 });

        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "12.5");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "7");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Dot)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn newlines_and_comments_are_skipped() {
        let mut lexer = TokenKind::lexer_with_extras("a // note\n\nb", LexerExtras { line: 1 });

        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.extras.line, 3);
    }

    #[test]
    fn unterminated_literals_are_faults() {
        assert_eq!(TokenKind::lexer("\"open").next(),
                   Some(Err(LexFault::UnterminatedString)));
        assert_eq!(TokenKind::lexer("'ab'").next(),
                   Some(Err(LexFault::UnterminatedChar)));
        assert_eq!(TokenKind::lexer("@").next(),
                   Some(Err(LexFault::UnexpectedCharacter)));
    }

    #[test]
    fn display_names() {
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");

        let token = Token::with_literal(TokenKind::Number, "42", Value::Integer(42), 1);
        assert_eq!(token.to_string(), "Token { type: NUMBER, lexeme: '42', literal: 42 }");
    }
}
