/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation [`Context`](core::Context), the control-flow
/// [`Signal`](core::Signal) model, scope guards and the dispatch over every
/// expression and statement kind.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix negation and logical not, and postfix `++`/`--`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, and logical operators.
pub mod binary;

/// Conditional statements: `if`/`elif`/`else` and `switch`.
pub mod control;

/// `for` and `while` loops.
pub mod loops;

/// Function declaration and calls, builtin and user-defined.
pub mod function;

/// Struct declarations, literals and field access.
pub mod structure;

/// `import` resolution.
pub mod import;

/// Utility functions for the evaluator.
///
/// Provides helpers, common checks, and reusable logic used during expression
/// evaluation.
pub mod utils;
