use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::math::numeric_argument,
        },
        value::core::Value,
    },
};

/// Smallest of one or more numbers.
///
/// If every argument is an integer the result is an integer; otherwise all
/// arguments are promoted and the result is a double.
///
/// # Example
/// ```
/// use russet::{
///     ast::Position,
///     interpreter::{
///         evaluator::{core::Context, function::min_max::min},
///         value::core::Value,
///     },
/// };
///
/// let mut sink = std::io::sink();
/// let mut context = Context::new(&mut sink);
/// let position = Position::default();
///
/// let r = min(&mut context, &[Value::Integer(3), Value::Integer(-7)], &position);
/// assert_eq!(r, Ok(Value::Integer(-7)));
///
/// let r = min(&mut context, &[Value::Integer(3), Value::Double(2.5)], &position);
/// assert_eq!(r, Ok(Value::Double(2.5)));
/// ```
pub fn min(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    min_max("min", args, position, i64::min, f64::min)
}

/// Largest of one or more numbers. Same typing rule as [`min`].
pub fn max(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    min_max("max", args, position, i64::max, f64::max)
}

fn min_max(name: &str,
           args: &[Value],
           position: &Position,
           pick_int: fn(i64, i64) -> i64,
           pick_double: fn(f64, f64) -> f64)
           -> EvalResult<Value> {
    let integers = args.iter()
                       .map(|arg| match arg {
                           Value::Integer(n) => Some(*n),
                           _ => None,
                       })
                       .collect::<Option<Vec<_>>>();

    if let Some(integers) = integers
       && let Some(result) = integers.into_iter().reduce(pick_int)
    {
        return Ok(Value::Integer(result));
    }

    let Some((first, rest)) = args.split_first() else {
        return Err(RuntimeError::TooFewArguments { name:     name.to_string(),
                                                   minimum:  1,
                                                   found:    0,
                                                   position: position.clone(), });
    };

    let mut result = numeric_argument(name, first, position)?;
    for arg in rest {
        result = pick_double(result, numeric_argument(name, arg, position)?);
    }

    Ok(Value::Double(result))
}
