use std::cmp::Ordering;

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
    /// Evaluates relational and equality operators.
    ///
    /// - Two integers compare exactly.
    /// - An integer and a double compare after promoting the integer.
    /// - Strings and booleans support `==` and `!=` against their own type
    ///   only.
    ///
    /// Every other pairing, and any ordering of non-numbers, is an error.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    ///
    /// let eq = Context::eval_comparison(BinaryOperator::Equal,
    ///                                   &Value::Integer(2),
    ///                                   &Value::Double(2.0),
    ///                                   &position);
    /// assert_eq!(eq.unwrap(), Value::Bool(true));
    ///
    /// let mixed = Context::eval_comparison(BinaryOperator::Equal,
    ///                                      &Value::Bool(true),
    ///                                      &Value::Integer(1),
    ///                                      &position);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: &Position)
                           -> EvalResult<Value> {
        let is_equality = matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual);

        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) if is_equality => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) if is_equality => Some(a.cmp(b)),
            _ => match (left.as_double(), right.as_double()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => return Err(unsupported(op, left, right, position)),
            },
        };

        Ok(Value::Bool(apply_ordering(op, ordering)))
    }

    /// `==` as a plain boolean, with the same operand rules as
    /// [`eval_comparison`](Self::eval_comparison).
    pub fn values_equal(left: &Value, right: &Value, position: &Position) -> EvalResult<bool> {
        let equal = Self::eval_comparison(BinaryOperator::Equal, left, right, position)?;
        Ok(equal == Value::Bool(true))
    }
}

/// Interprets an ordering for a comparison operator.
///
/// `None` (a NaN operand) makes every comparison false except `!=`.
const fn apply_ordering(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return matches!(op, BinaryOperator::NotEqual);
    };

    match op {
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        BinaryOperator::Equal => ordering.is_eq(),
        BinaryOperator::NotEqual => ordering.is_ne(),
        _ => false,
    }
}
