/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, statement execution and expression dispatch.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic, string concatenation, ordering comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Arithmetic negation and logical NOT.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides the scope guard used for block execution.
pub mod utils;
