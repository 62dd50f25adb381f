use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64, usize_to_i64_checked},
};

/// Writes a value and a newline to the context's output sink.
///
/// The value is formatted using its `Display` implementation, so doubles
/// always show a fractional part and strings print without quotes.
///
/// # Returns
/// [`Value::Unit`].
///
/// # Example
/// ```
/// use russet::{
///     ast::Position,
///     interpreter::{
///         evaluator::{core::Context, function::builtin::print},
///         value::core::Value,
///     },
/// };
///
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut output);
///
/// let result = print(&mut context, &[Value::Double(4.0)], &Position::default());
///
/// assert_eq!(result, Ok(Value::Unit));
/// drop(context);
/// assert_eq!(output, b"4.0\n");
/// ```
pub fn print(context: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    context.write_line(&args[0])
           .map_err(|e| RuntimeError::Output { reason:   e.to_string(),
                                               position: position.clone(), })?;
    Ok(Value::Unit)
}

/// Returns the number of characters in a string.
///
/// # Example
/// ```
/// use russet::{
///     ast::Position,
///     interpreter::{
///         evaluator::{core::Context, function::builtin::len},
///         value::core::Value,
///     },
/// };
///
/// let mut sink = std::io::sink();
/// let mut context = Context::new(&mut sink);
///
/// assert_eq!(len(&mut context, &[Value::from("héllo")], &Position::default()),
///            Ok(Value::Integer(5)));
/// ```
pub fn len(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    match &args[0] {
        Value::String(s) => {
            let count = s.chars().count();
            let count = usize_to_i64_checked(count,
                                             RuntimeError::Overflow { position: position.clone() })?;
            Ok(Value::Integer(count))
        },
        other => Err(unsupported_argument("len", other, position)),
    }
}

/// Converts a value to an integer.
///
/// Doubles are truncated toward zero. Strings are parsed as decimal
/// integers after trimming surrounding whitespace. Integers pass through.
pub fn to_int(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Double(d) => {
            let n = f64_to_i64_truncated(*d, RuntimeError::Overflow { position: position.clone() })?;
            Ok(Value::Integer(n))
        },
        Value::String(s) => s.trim()
                             .parse()
                             .map(Value::Integer)
                             .map_err(|_| invalid_conversion(s, "int", position)),
        other => Err(unsupported_argument("to_int", other, position)),
    }
}

/// Converts a value to a double.
///
/// Integers are promoted. Strings are parsed after trimming surrounding
/// whitespace. Doubles pass through.
pub fn to_float(_: &mut Context<'_>, args: &[Value], position: &Position) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Double(i64_to_f64(*n))),
        Value::Double(d) => Ok(Value::Double(*d)),
        Value::String(s) => s.trim()
                             .parse()
                             .map(Value::Double)
                             .map_err(|_| invalid_conversion(s, "float", position)),
        other => Err(unsupported_argument("to_float", other, position)),
    }
}

pub(super) fn unsupported_argument(function: &str, argument: &Value, position: &Position) -> RuntimeError {
    RuntimeError::UnsupportedOperand { op:       function.to_string(),
                                       operand:  argument.type_of(),
                                       position: position.clone(), }
}

fn invalid_conversion(text: &str, target: &str, position: &Position) -> RuntimeError {
    RuntimeError::InvalidArgument { details:  format!("cannot convert \"{text}\" to {target}"),
                                    position: position.clone(), }
}
