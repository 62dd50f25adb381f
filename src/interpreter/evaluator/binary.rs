/// Operator dispatch for binary expressions.
pub mod core;

/// `+`, `-`, `*`, `/` and `%` on integers and doubles.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;

/// Exponentiation (`^`).
pub mod power;
