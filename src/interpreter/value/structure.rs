use std::fmt;

use crate::interpreter::value::core::Value;

/// An instance of a user-declared struct type.
///
/// Fields are stored in the order the struct declaration lists them, which is
/// also the order they are displayed in.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// The struct type's name.
    pub name:   String,
    /// Field names and values, in declaration order.
    pub fields: Vec<(String, Value)>,
}

impl StructValue {
    /// Looks up a field by name.
    ///
    /// # Example
    /// ```
    /// use russet::interpreter::value::{core::Value, structure::StructValue};
    ///
    /// let point = StructValue { name:   "Point".to_string(),
    ///                           fields: vec![("x".to_string(), Value::Integer(1)),
    ///                                        ("y".to_string(), Value::Integer(2))], };
    ///
    /// assert_eq!(point.field("y"), Some(&Value::Integer(2)));
    /// assert_eq!(point.field("z"), None);
    /// ```
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "{} {{}}", self.name);
        }

        write!(f, "{} {{ ", self.name)?;

        for (index, (field, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {value}")?;
        }

        write!(f, " }}")
    }
}
