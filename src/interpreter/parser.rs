use std::borrow::Cow;

use log::debug;

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

/// Core expression parsing.
///
/// Entry point for expressions and the assignment rule, the lowest
/// precedence level.
pub mod core;

/// Binary operator parsing.
///
/// Equality, comparison, term and factor levels, all left-associative.
pub mod binary;

/// Unary and primary expressions.
pub mod unary;

/// Statement and declaration parsing.
pub mod statement;

/// Block parsing.
pub mod block;

/// Token stream helpers shared by the parser modules.
pub mod utils;

pub use self::core::ParseResult;

/// Parses a whole program into its statements.
///
/// Parsing stops at the first error; no partial tree is returned. A program
/// with no statements parses to an empty list.
///
/// Grammar: `program := declaration* EOF`
///
/// # Parameters
/// - `tokens`: The scanned tokens, normally terminated by `Eof`. A missing
///   `Eof` is supplied.
///
/// # Returns
/// The statements in source order.
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use dtoy::interpreter::{lexer::scan, parser::parse};
///
/// let tokens = scan("var a = 1; print a;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Stmt>> {
    let tokens = terminated(tokens);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while !utils::at_end(&mut iter) {
        statements.push(statement::parse_declaration(&mut iter, 0)?);
    }

    debug!("parsed {} statements", statements.len());
    Ok(statements)
}

/// Parses a token stream holding exactly one expression.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or is followed by
/// anything other than `Eof`.
pub fn parse_single_expression(tokens: &[Token]) -> ParseResult<Expr> {
    let tokens = terminated(tokens);
    let mut iter = tokens.iter().peekable();

    let expr = core::parse_expression(&mut iter, 0)?;
    if !utils::at_end(&mut iter) {
        return Err(utils::error_at(&mut iter, |lexeme, line| {
                       ParseError::TrailingTokens { lexeme, line }
                   }));
    }

    Ok(expr)
}

fn terminated(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.last() {
        Some(last) if last.is(TokenKind::Eof) => Cow::Borrowed(tokens),
        last => {
            let line = last.map_or(1, |t| t.line);
            let mut owned = tokens.to_vec();
            owned.push(Token::new(TokenKind::Eof, "", line));
            Cow::Owned(owned)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::scan, parser::core::MAX_NESTING, value::Value};

    fn program(source: &str) -> ParseResult<Vec<Stmt>> {
        parse(&scan(source).unwrap())
    }

    fn expression(source: &str) -> String {
        parse_single_expression(&scan(source).unwrap()).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(expression("3 + 4 * 2"), "(+ 3 (* 4 2))");
        assert_eq!(expression("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
        assert_eq!(expression("-a * !b"), "(* (- (var a)) (! (var b)))");
    }

    #[test]
    fn binary_operators_are_left_associative() {
        assert_eq!(expression("10 - 4 - 3"), "(- (- 10 4) 3)");
        assert_eq!(expression("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    }

    #[test]
    fn assignment_is_right_associative() {
        assert_eq!(expression("a = b = 1"), "(= a (= b 1))");
    }

    #[test]
    fn grouping_and_literals() {
        assert_eq!(expression("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
        assert_eq!(expression("\"hi\""), "\"hi\"");
        assert_eq!(expression("nil"), "nil");
        assert_eq!(expression("'c'"), "'c'");
        assert_eq!(expression("!!true"), "(! (! true))");
    }

    #[test]
    fn statements() {
        let stmts = program("var a; var b = 2; print b; b; { a = 1; }").unwrap();

        assert_eq!(stmts.len(), 5);
        assert!(matches!(&stmts[0], Stmt::Var { initializer: None, .. }));
        assert!(matches!(&stmts[1],
                         Stmt::Var { initializer: Some(Expr::Literal(Value::Integer(2))), .. }));
        assert!(matches!(&stmts[2], Stmt::Print { .. }));
        assert!(matches!(&stmts[3], Stmt::Expression(Expr::Variable(_))));
        assert!(matches!(&stmts[4], Stmt::Block(inner) if inner.len() == 1));
    }

    #[test]
    fn empty_program() {
        assert!(program("").unwrap().is_empty());
        assert!(program("  // only a comment\n").unwrap().is_empty());
        assert!(parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn invalid_assignment_target() {
        let err = program("1 = 2;").unwrap_err();

        assert_eq!(err,
                   ParseError::InvalidAssignmentTarget { lexeme: "=".into(),
                                                         line:   1, });
        assert!(matches!(program("(a) = 2;"),
                         Err(ParseError::InvalidAssignmentTarget { .. })));
    }

    #[test]
    fn missing_semicolons() {
        assert_eq!(program("print 1").unwrap_err().to_string(),
                   "line 1 at end: Expect ';' after value.");
        assert_eq!(program("1 + 2\nprint 3;").unwrap_err().to_string(),
                   "line 2 at 'print': Expect ';' after expression.");
        assert_eq!(program("var x = 1").unwrap_err().to_string(),
                   "line 1 at end: Expect ';' after variable declaration.");
    }

    #[test]
    fn missing_expression() {
        let err = program("print ;").unwrap_err();

        assert_eq!(err,
                   ParseError::ExpectExpression { lexeme: ";".into(),
                                                  line:   1, });
    }

    #[test]
    fn unclosed_group() {
        assert!(matches!(program("print (1 + 2;"), Err(ParseError::UnclosedGroup { .. })));
    }

    #[test]
    fn unclosed_block() {
        assert!(matches!(program("{ print 1;"), Err(ParseError::UnclosedBlock { .. })));
    }

    #[test]
    fn missing_variable_name() {
        assert!(matches!(program("var 1 = 2;"), Err(ParseError::ExpectVariableName { .. })));
    }

    #[test]
    fn single_expression_must_consume_everything() {
        let err = parse_single_expression(&scan("1 2").unwrap()).unwrap_err();

        assert_eq!(err,
                   ParseError::TrailingTokens { lexeme: "2".into(),
                                                line:   1, });
    }

    fn nested_parens(levels: usize) -> String {
        format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let source = format!("print {};", nested_parens(MAX_NESTING));

        assert_eq!(program(&source).unwrap().len(), 1);
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let err = program(&format!("print {};", nested_parens(MAX_NESTING + 1))).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));

        let err = parse_single_expression(&scan(&nested_parens(10_000)).unwrap()).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { ref lexeme, line: 1 } if lexeme == "("));
    }

    #[test]
    fn deep_prefix_operators_are_rejected() {
        let source = format!("print {}1;", "-".repeat(10_000));

        assert!(matches!(program(&source), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn deep_assignment_chains_are_rejected() {
        let source = format!("{}1;", "a = ".repeat(10_000));

        assert!(matches!(program(&source), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let source = format!("print 1{};", " + 1".repeat(10_000));

        assert!(matches!(program(&source), Err(ParseError::NestingTooDeep { .. })));
        assert!(program(&format!("print 1{};", " + 1".repeat(MAX_NESTING))).is_ok());
    }

    #[test]
    fn deep_blocks_are_rejected() {
        let source = format!("{}{}", "{".repeat(10_000), "}".repeat(10_000));

        assert!(matches!(program(&source), Err(ParseError::NestingTooDeep { .. })));
    }
}
