use std::{fmt, rc::Rc};

use crate::{
    ast::{LiteralValue, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::structure::StructValue},
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Double(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. Conditions of `if`,
    /// `elif`, `for` and `while` must evaluate to `Bool`.
    Bool(bool),
    /// An immutable string.
    String(Rc<str>),
    /// An instance of a user-declared struct type.
    Struct(Rc<StructValue>),
    /// The absence of a value, produced by calls that return nothing.
    Unit,
}

/// The runtime type tag of a [`Value`], used in diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// [`Value::Integer`]
    Int,
    /// [`Value::Double`]
    Double,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::String`]
    String,
    /// [`Value::Struct`]
    Struct,
    /// [`Value::Unit`]
    Unit,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::Double => "Double",
            Self::Bool => "Bool",
            Self::String => "String",
            Self::Struct => "Struct",
            Self::Unit => "Unit",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<StructValue> for Value {
    fn from(v: StructValue) -> Self {
        Self::Struct(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Double(n) => (*n).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::String(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// Returns the runtime type tag.
    ///
    /// # Example
    /// ```
    /// use russet::interpreter::value::core::{Value, ValueType};
    ///
    /// assert_eq!(Value::Integer(1).type_of(), ValueType::Int);
    /// assert_eq!(Value::from("hi").type_of(), ValueType::String);
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Int,
            Self::Double(_) => ValueType::Double,
            Self::Bool(_) => ValueType::Bool,
            Self::String(_) => ValueType::String,
            Self::Struct(_) => ValueType::Struct,
            Self::Unit => ValueType::Unit,
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `if`, `elif`, `for` and `while`.
    ///
    /// # Parameters
    /// - `context`: Names the construct in the error message, e.g. `"if
    ///   condition"`.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub fn as_bool(&self, context: &'static str, position: &Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { context,
                                                     found: self.type_of(),
                                                     position: position.clone() }),
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers are widened; every other variant yields `None`.
    ///
    /// # Example
    /// ```
    /// use russet::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_double(), Some(10.0));
    /// assert_eq!(Value::Bool(true).as_double(), None);
    /// ```
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Integer(n) => Some(i64_to_f64(*n)),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer) or
    /// [`Double`](Self::Double).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Double(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{d:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Struct(s) => write!(f, "{s}"),
            Self::Unit => write!(f, "()"),
        }
    }
}
