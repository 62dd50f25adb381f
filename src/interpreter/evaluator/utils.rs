use crate::{
    ast::{DeclaredType, Position, TypeName},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::BUILTIN_FUNCTIONS},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Returns `true` if `name` is taken by a builtin function.
///
/// # Example
/// ```
/// use russet::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("print"));
/// assert!(!is_reserved_identifier("printer"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Rejects declarations that would shadow a builtin function.
///
/// # Errors
/// [`RuntimeError::BuiltinRedefinition`] if `name` is reserved.
pub fn ensure_not_builtin(name: &str, position: &Position) -> EvalResult<()> {
    if is_reserved_identifier(name) {
        return Err(RuntimeError::BuiltinRedefinition { name:     name.to_string(),
                                                       position: position.clone(), });
    }
    Ok(())
}

/// Checks a value against a declared type.
///
/// The only conversion performed is `Int` to `Double` when the declared type
/// is `float`. A struct type accepts only instances of that struct; `void`
/// accepts only the unit value.
///
/// # Parameters
/// - `name`: The variable, parameter, field or function being checked,
///   named in the error.
/// - `declared`: The annotation.
/// - `value`: The evaluated value.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The value, promoted if needed.
///
/// # Example
/// ```
/// use russet::{
///     ast::{DeclaredType, Position, TypeName},
///     interpreter::{evaluator::utils::coerce_to_declared, value::core::Value},
/// };
///
/// let float = DeclaredType::Builtin(TypeName::Double);
/// let position = Position::default();
///
/// assert_eq!(coerce_to_declared("x", &float, Value::Integer(2), &position),
///            Ok(Value::Double(2.0)));
/// assert!(coerce_to_declared("x", &float, Value::Bool(true), &position).is_err());
/// ```
pub fn coerce_to_declared(name: &str,
                          declared: &DeclaredType,
                          value: Value,
                          position: &Position)
                          -> EvalResult<Value> {
    let accepted = match (declared, &value) {
        (DeclaredType::Builtin(TypeName::Double), Value::Integer(n)) => {
            return Ok(Value::Double(i64_to_f64(*n)));
        },
        (DeclaredType::Builtin(TypeName::Int), Value::Integer(_))
        | (DeclaredType::Builtin(TypeName::Double), Value::Double(_))
        | (DeclaredType::Builtin(TypeName::Bool), Value::Bool(_))
        | (DeclaredType::Builtin(TypeName::String), Value::String(_))
        | (DeclaredType::Builtin(TypeName::Void), Value::Unit) => true,
        (DeclaredType::Struct(expected), Value::Struct(instance)) => instance.name == *expected,
        _ => false,
    };

    if accepted {
        Ok(value)
    } else {
        Err(RuntimeError::DeclaredTypeMismatch { name:     name.to_string(),
                                                 expected: declared.clone(),
                                                 found:    value.type_of(),
                                                 position: position.clone(), })
    }
}
