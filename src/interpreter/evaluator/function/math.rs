use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin::unsupported_argument,
        },
        value::core::Value,
    },
};

/// Reads a numeric argument as `f64`, promoting integers.
pub(super) fn numeric_argument(function: &str,
                               argument: &Value,
                               position: &Position)
                               -> EvalResult<f64> {
    argument.as_double()
            .ok_or_else(|| unsupported_argument(function, argument, position))
}

/// Returns the absolute value.
///
/// Integers stay integers; `abs` of the smallest `int` overflows.
///
/// # Example
/// ```
/// use russet::{
///     ast::Position,
///     interpreter::{
///         evaluator::{core::Context, function::math::abs},
///         value::core::Value,
///     },
/// };
///
/// let mut sink = std::io::sink();
/// let mut context = Context::new(&mut sink);
/// let position = Position::default();
///
/// assert_eq!(abs(&mut context, &[Value::Integer(-2)], &position), Ok(Value::Integer(2)));
/// assert_eq!(abs(&mut context, &[Value::Double(-0.5)], &position), Ok(Value::Double(0.5)));
/// ```
pub fn abs(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or_else(|| RuntimeError::Overflow { position: position.clone() }),
        Value::Double(d) => Ok(Value::Double(d.abs())),
        other => Err(unsupported_argument("abs", other, position)),
    }
}

/// Square root of a non-negative number, always a double.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] for a negative argument.
pub fn sqrt(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    let x = numeric_argument("sqrt", &args[0], position)?;

    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details:  format!("cannot take the square \
                                                                      root of {}",
                                                                     args[0]),
                                                   position: position.clone(), });
    }

    Ok(Value::Double(x.sqrt()))
}

/// `pow(base, exponent)`, the function form of `^`. Always a double.
pub fn pow(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    let base = numeric_argument("pow", &args[0], position)?;
    let exponent = numeric_argument("pow", &args[1], position)?;

    Ok(Value::Double(base.powf(exponent)))
}

/// Sine of an angle in radians.
pub fn sin(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    Ok(Value::Double(numeric_argument("sin", &args[0], position)?.sin()))
}

/// Cosine of an angle in radians.
pub fn cos(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    Ok(Value::Double(numeric_argument("cos", &args[0], position)?.cos()))
}

/// Tangent of an angle in radians.
pub fn tan(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    Ok(Value::Double(numeric_argument("tan", &args[0], position)?.tan()))
}
