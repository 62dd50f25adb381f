use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators go to `eval_arithmetic`, power to
    /// `eval_pow`, relational and equality operators to `eval_comparison`
    /// and logical operators to `eval_logic`.
    ///
    /// Compound assignments (`+=` and friends) reuse this function with the
    /// variable's current value as `left`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Integer(3),
    ///                                   &Value::Double(0.5),
    ///                                   &position);
    ///
    /// assert_eq!(result.unwrap(), Value::Double(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: &Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, position),
            Pow => Self::eval_pow(left, right, position),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, position)
            },
            And | Or => Self::eval_logic(op, left, right, position),
        }
    }
}

/// Builds the error for an operand pairing the operator does not support.
pub(crate) fn unsupported(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          position: &Position)
                          -> RuntimeError {
    RuntimeError::UnsupportedOperands { op:       op.to_string(),
                                        left:     left.type_of(),
                                        right:    right.type_of(),
                                        position: position.clone(), }
}
