use crate::{
    ast::{BinaryOperator, PostfixOperator, Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a prefix unary operator.
    ///
    /// - `-` negates an integer (overflow is an error) or a double.
    /// - `!` inverts a boolean.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(4), &position),
    ///            Ok(Value::Integer(-4)));
    /// assert!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(4), &position).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Value, position: &Position) -> EvalResult<Value> {
        match (op, operand) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or_else(|| RuntimeError::Overflow { position: position.clone() })
            },
            (UnaryOperator::Negate, Value::Double(d)) => Ok(Value::Double(-d)),
            (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
            _ => Err(RuntimeError::UnsupportedOperand { op:       op.to_string(),
                                                        operand:  operand.type_of(),
                                                        position: position.clone(), }),
        }
    }

    /// Evaluates `name++` or `name--`.
    ///
    /// The variable must hold an integer or a double. It is stepped by one
    /// in place and the value it held before the step is returned.
    pub(crate) fn eval_postfix(&mut self,
                               name: &str,
                               op: PostfixOperator,
                               position: &Position)
                               -> EvalResult<Value> {
        let current = self.scope
                          .lookup_variable(name)
                          .map_err(|e| e.at(position))?
                          .clone();

        if !current.is_numeric() {
            return Err(RuntimeError::UnsupportedOperand { op:       op.to_string(),
                                                          operand:  current.type_of(),
                                                          position: position.clone(), });
        }

        let step = match op {
            PostfixOperator::Increment => BinaryOperator::Add,
            PostfixOperator::Decrement => BinaryOperator::Sub,
        };
        let updated = Self::eval_binary(step, &current, &Value::Integer(1), position)?;

        self.scope
            .assign_variable(name, updated)
            .map_err(|e| e.at(position))?;
        Ok(current)
    }
}
