use std::io::Write;

use log::debug;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::apply_binary, unary::apply_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements and evaluates expressions.
///
/// ## Usage
///
/// An `Interpreter` is created once per session and reused: variables
/// declared by one call to [`Interpreter::interpret`] stay visible to the
/// next. Everything `print` produces is written to the output stream `W`.
///
/// ## Example
/// ```
/// use dtoy::interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse};
///
/// let mut interpreter = Interpreter::new(Vec::new());
///
/// let program = parse(&scan("var a = 2; print a * 21;").unwrap()).unwrap();
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.output(), b"42\n");
/// ```
pub struct Interpreter<W> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    out:                                                W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope writing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// The variables of this session.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output stream.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a program.
    ///
    /// Statements run in order. The first runtime error stops execution and
    /// is returned; the remaining statements are skipped, but side effects of
    /// the statements already run (output, variable changes) remain.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if evaluating any contained expression fails
    /// or if printing cannot write to the output stream.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        debug!("execute {statement:?}");

        match statement {
            Stmt::Expression(expression) => {
                self.evaluate(expression)?;
            },
            Stmt::Print { keyword, expression } => {
                let value = self.evaluate(expression)?;
                writeln!(self.out, "{value}").map_err(|source| {
                                                 RuntimeError::Output { keyword: keyword.clone(),
                                                                        source }
                                             })?;
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(&name.lexeme, value);
            },
            Stmt::Block(statements) => self.execute_block(statements)?,
        }

        Ok(())
    }

    /// Executes statements inside a fresh child scope.
    ///
    /// The scope is discarded when the block finishes, also when it finishes
    /// with an error.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised inside the block.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        let mut scope = self.scoped();

        for statement in statements {
            scope.execute(statement)?;
        }

        Ok(())
    }

    /// Evaluates an expression to a value.
    ///
    /// Binary operands are evaluated left to right, both before the operator
    /// is applied.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on type mismatches, division by zero,
    /// integer overflow or undefined variables.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Variable(name) => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
            Expr::Unary { operator, right } => {
                let operand = self.evaluate(right)?;
                apply_unary(operator, operand)
            },
            Expr::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                apply_binary(operator, left, right)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::scan, parser::parse};

    fn run(interpreter: &mut Interpreter<Vec<u8>>, source: &str) -> EvalResult<()> {
        interpreter.interpret(&parse(&scan(source).unwrap()).unwrap())
    }

    fn output(source: &str) -> String {
        let mut interpreter = Interpreter::new(Vec::new());
        run(&mut interpreter, source).unwrap();
        String::from_utf8(interpreter.into_output()).unwrap()
    }

    #[test]
    fn prints_each_value_on_its_own_line() {
        assert_eq!(output("print 1; print \"two\"; print nil; print 'c';"),
                   "1\ntwo\nnil\nc\n");
    }

    #[test]
    fn variables_persist_between_runs() {
        let mut interpreter = Interpreter::new(Vec::new());

        run(&mut interpreter, "var x = 10;").unwrap();
        run(&mut interpreter, "x = x + 1; print x;").unwrap();

        assert_eq!(interpreter.output(), b"11\n");
        assert_eq!(interpreter.environment().lookup("x"), Some(&Value::Integer(11)));
    }

    #[test]
    fn var_without_initializer_is_nil() {
        assert_eq!(output("var a; print a;"), "nil\n");
    }

    #[test]
    fn redeclaration_overwrites() {
        assert_eq!(output("var a = 1; var a = \"x\"; print a;"), "x\n");
    }

    #[test]
    fn assignment_yields_its_value() {
        assert_eq!(output("var a; var b; a = b = 3; print a; print b;"), "3\n3\n");
    }

    #[test]
    fn block_scoping() {
        assert_eq!(output("var a = 1; { var a = 2; print a; } print a;"), "2\n1\n");
        assert_eq!(output("var a = 1; { a = 2; } print a;"), "2\n");
    }

    #[test]
    fn block_scope_is_released_on_error() {
        let mut interpreter = Interpreter::new(Vec::new());

        let err = run(&mut interpreter, "{ var inner = 1; { print 1 / 0; } }").unwrap_err();

        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
        assert_eq!(interpreter.environment().depth(), 1);
        assert_eq!(interpreter.environment().lookup("inner"), None);
    }

    #[test]
    fn error_stops_remaining_statements() {
        let mut interpreter = Interpreter::new(Vec::new());

        let err = run(&mut interpreter, "print 1;\nprint -true;\nprint 3;").unwrap_err();

        assert_eq!(err.line(), 2);
        assert_eq!(interpreter.output(), b"1\n");
    }

    #[test]
    fn undefined_variable() {
        let mut interpreter = Interpreter::new(Vec::new());

        let err = run(&mut interpreter, "print y;").unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'y'.");

        let err = run(&mut interpreter, "y = 1;").unwrap_err();
        assert!(matches!(err, RuntimeError::UndefinedVariable { .. }));
        assert_eq!(interpreter.environment().lookup("y"), None);
    }

    #[test]
    fn literals_evaluate_to_the_same_value_every_time() {
        let mut interpreter = Interpreter::new(Vec::new());

        for value in [Value::Integer(42),
                      Value::Double(2.5),
                      Value::from("text"),
                      Value::Char('q'),
                      Value::Bool(false),
                      Value::Nil]
        {
            let literal = Expr::Literal(value.clone());
            let snapshot = literal.clone();

            for _ in 0..3 {
                assert_eq!(interpreter.evaluate(&literal).unwrap(), value);
            }
            assert_eq!(literal, snapshot);
        }

        assert_eq!(interpreter.environment().depth(), 1);
        assert!(interpreter.output().is_empty());
    }
}

