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
    /// Evaluates `&&` or `||`.
    ///
    /// Both operands must be booleans. Both have already been evaluated by
    /// the time this runs.
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: &Position)
                      -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::And, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
            (BinaryOperator::Or, Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a || *b)),
            _ => Err(unsupported(op, left, right, position)),
        }
    }
}
