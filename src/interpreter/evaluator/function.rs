/// Builtin function implementations.
///
/// `print`, `len`, `to_int` and `to_float`.
pub mod builtin;

/// Function declaration and call dispatch.
///
/// Holds the builtin table and runs user-defined functions.
pub mod core;

/// Numeric builtins: `abs`, `sqrt`, `pow`, `sin`, `cos` and `tan`.
pub mod math;

/// `min` and `max` over one or more numbers.
pub mod min_max;
