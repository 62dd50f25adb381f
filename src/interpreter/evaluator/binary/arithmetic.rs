use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Context<'_> {
    /// Evaluates `+`, `-`, `*`, `/` or `%`.
    ///
    /// Two integers produce an integer; integer overflow is an error, and
    /// division truncates toward zero. If either operand is a double, the
    /// other is promoted and the result is a double. `%` with a double
    /// operand truncates both operands to integers first, then yields the
    /// remainder as a double. A zero divisor is an error for `/` and `%` in
    /// both domains.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let position = Position::default();
    /// let result = Context::eval_arithmetic(BinaryOperator::Mod,
    ///                                       &Value::Double(7.9),
    ///                                       &Value::Integer(3),
    ///                                       &position).unwrap();
    ///
    /// assert_eq!(result, Value::Double(1.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: &Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let overflow = || RuntimeError::Overflow { position: position.clone() };
        let division_by_zero = || RuntimeError::DivisionByZero { position: position.clone() };

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let (a, b) = (*a, *b);
            if matches!(op, Div | Mod) && b == 0 {
                return Err(division_by_zero());
            }

            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => a.checked_div(b),
                Mod => a.checked_rem(b),
                _ => return Err(unsupported(op, left, right, position)),
            };
            return result.map(Value::Integer).ok_or_else(overflow);
        }

        let (Some(a), Some(b)) = (left.as_double(), right.as_double()) else {
            return Err(unsupported(op, left, right, position));
        };

        let result = match op {
            Add => a + b,
            Sub => a - b,
            Mul => a * b,
            Div => {
                if b == 0.0 {
                    return Err(division_by_zero());
                }
                a / b
            },
            Mod => {
                let a = f64_to_i64_truncated(a, overflow())?;
                let b = f64_to_i64_truncated(b, overflow())?;
                if b == 0 {
                    return Err(division_by_zero());
                }
                i64_to_f64(a.checked_rem(b).ok_or_else(overflow)?)
            },
            _ => return Err(unsupported(op, left, right, position)),
        };

        Ok(Value::Double(result))
    }
}
