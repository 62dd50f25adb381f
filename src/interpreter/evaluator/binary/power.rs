use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates exponentiation.
    ///
    /// Both operands are promoted to doubles and the result is always a
    /// double, even for two integers.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::Position,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10), &position);
    ///
    /// assert_eq!(result.unwrap(), Value::Double(1024.0));
    /// ```
    pub fn eval_pow(left: &Value, right: &Value, position: &Position) -> EvalResult<Value> {
        match (left.as_double(), right.as_double()) {
            (Some(base), Some(exponent)) => Ok(Value::Double(base.powf(exponent))),
            _ => Err(unsupported(BinaryOperator::Pow, left, right, position)),
        }
    }
}
