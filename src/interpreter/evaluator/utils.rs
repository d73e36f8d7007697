use std::{
    io::Write,
    ops::{Deref, DerefMut},
};

use crate::interpreter::evaluator::core::Interpreter;

/// Keeps a child scope open for as long as it lives.
///
/// Created by [`Interpreter::scoped`], which pushes the scope. Dropping the
/// guard pops it again, whether the block completed or an error is being
/// propagated with `?`. The guard dereferences to the interpreter, so the
/// block body runs through it.
pub struct ScopeGuard<'i, W: Write> {
    interpreter: &'i mut Interpreter<W>,
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Interpreter<W>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        self.interpreter.environment.pop_scope();
    }
}

impl<W: Write> Interpreter<W> {
    /// Pushes a child scope and returns a guard that pops it on drop.
    ///
    /// # Example
    /// ```
    /// use dtoy::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// {
    ///     let scope = interpreter.scoped();
    ///     assert_eq!(scope.environment().depth(), 2);
    /// }
    /// assert_eq!(interpreter.environment().depth(), 1);
    /// ```
    pub fn scoped(&mut self) -> ScopeGuard<'_, W> {
        self.environment.push_scope();
        ScopeGuard { interpreter: self }
    }
}
