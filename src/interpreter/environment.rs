use std::collections::HashMap;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Variable storage for one interpreter session.
///
/// Scopes are kept as a stack of maps. The bottom map is the global scope and
/// is never removed; each block pushes a map on entry and pops it on exit.
/// Lookup and assignment walk from the innermost scope outward, so an inner
/// declaration shadows an outer one for the lifetime of its block.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Binds `name` in the innermost scope.
    ///
    /// An existing binding with the same name in that scope is replaced.
    /// Declaring a name is never an error.
    ///
    /// # Example
    /// ```
    /// use dtoy::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Integer(1));
    /// env.define("x", Value::from("again"));
    ///
    /// assert_eq!(env.lookup("x"), Some(&Value::from("again")));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        trace!("define {name} = {value} at depth {}", self.depth());
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Reads the variable named by `name`, searching outward.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no scope binds the name.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.lookup(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
    }

    /// Returns the innermost binding of `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Overwrites the innermost existing binding of `name`.
    ///
    /// Assignment never creates a variable.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no scope binds the name.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        match self.scopes
                  .iter_mut()
                  .rev()
                  .find_map(|scope| scope.get_mut(&name.lexeme))
        {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("push scope, depth {}", self.depth());
    }

    /// Discards the innermost scope and every binding in it.
    ///
    /// The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        trace!("pop scope, depth {}", self.depth());
    }

    /// Number of open scopes, counting the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::TokenKind;

    fn name(lexeme: &str) -> Token {
        Token::new(TokenKind::Identifier, lexeme, 3)
    }

    #[test]
    fn get_undefined_variable() {
        let env = Environment::new();
        let err = env.get(&name("ghost")).unwrap_err();

        assert!(matches!(err, RuntimeError::UndefinedVariable { .. }));
        assert_eq!(err.to_string(), "Undefined variable 'ghost'.");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn assign_requires_existing_binding() {
        let mut env = Environment::new();

        assert!(env.assign(&name("x"), Value::Integer(1)).is_err());
        assert_eq!(env.lookup("x"), None);

        env.define("x", Value::Nil);
        env.assign(&name("x"), Value::Integer(1)).unwrap();
        assert_eq!(env.get(&name("x")).unwrap(), Value::Integer(1));
    }

    #[test]
    fn inner_scope_shadows_and_is_discarded() {
        let mut env = Environment::new();
        env.define("a", Value::Integer(1));

        env.push_scope();
        env.define("a", Value::Integer(2));
        assert_eq!(env.lookup("a"), Some(&Value::Integer(2)));
        env.pop_scope();

        assert_eq!(env.lookup("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn assignment_reaches_enclosing_scope() {
        let mut env = Environment::new();
        env.define("a", Value::Integer(1));

        env.push_scope();
        env.assign(&name("a"), Value::Integer(5)).unwrap();
        env.pop_scope();

        assert_eq!(env.lookup("a"), Some(&Value::Integer(5)));
    }

    #[test]
    fn global_scope_survives_extra_pops() {
        let mut env = Environment::new();
        env.define("g", Value::Bool(true));

        env.pop_scope();

        assert_eq!(env.depth(), 1);
        assert_eq!(env.lookup("g"), Some(&Value::Bool(true)));
    }
}
