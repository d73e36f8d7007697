use crate::interpreter::{token::Token, value::Value};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node exclusively owns its children; the tree has no sharing and no
/// cycles. Operator and name tokens are kept whole so runtime errors can
/// report the line they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `a + b` or `x == y`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A prefix operation, `-x` or `!x`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand.
        right:    Box<Self>,
    },
    /// A literal value.
    Literal(Value),
    /// A parenthesized expression.
    Grouping(Box<Self>),
    /// A variable read.
    Variable(Token),
    /// An assignment, `name = value`. Evaluates to the assigned value.
    Assign {
        /// The variable's name token.
        name:  Token,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
}

/// A statement node. A program is an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects; the value is discarded.
    Expression(Expr),
    /// `print expr;`
    Print {
        /// The `print` keyword, used to locate output failures.
        keyword:    Token,
        /// The expression to print.
        expression: Expr,
    },
    /// `var name = initializer;` or `var name;`
    Var {
        /// The declared name.
        name:        Token,
        /// The initializer; without one the variable starts as `nil`.
        initializer: Option<Expr>,
    },
    /// `{ ... }`, executed in a child scope.
    Block(Vec<Self>),
}

impl Expr {
    /// Creates a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Creates a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Creates a grouping node.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping(Box::new(inner))
    }

    /// Creates an assignment node.
    #[must_use]
    pub fn assign(name: Token, value: Self) -> Self {
        Self::Assign { name,
                       value: Box::new(value) }
    }
}

/// Renders the expression as a parenthesized prefix form, e.g.
/// `(+ 3 (* 4 2))`. String literals are quoted, groupings read `(group ..)`,
/// variables `(var x)` and assignments `(= x ..)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary { left, operator, right } => {
                write!(f, "({} {left} {right})", operator.lexeme)
            },
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Literal(Value::String(s)) => write!(f, "\"{s}\""),
            Self::Literal(Value::Char(c)) => write!(f, "'{c}'"),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Grouping(inner) => write!(f, "(group {inner})"),
            Self::Variable(name) => write!(f, "(var {})", name.lexeme),
            Self::Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
        }
    }
}
