use std::rc::Rc;

use crate::{
    ast::{Expr, Position, StructDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, ExecResult},
            utils::{coerce_to_declared, ensure_not_builtin},
        },
        value::{core::Value, structure::StructValue},
    },
};

impl Context<'_> {
    /// Declares a struct type in the innermost frame.
    pub(crate) fn declare_struct(&mut self, def: &Rc<StructDef>) -> EvalResult<()> {
        ensure_not_builtin(&def.name, &def.position)?;
        self.scope.declare_struct_type(Rc::clone(def));
        Ok(())
    }

    /// Builds a struct instance from a literal.
    ///
    /// Every declared field must be initialised exactly once and no other
    /// field may appear. Initialisers are evaluated in source order; the
    /// resulting instance stores its fields in declaration order, each
    /// checked against its declared type.
    ///
    /// # Errors
    /// - The struct type is not declared.
    /// - An unknown, duplicated or missing field.
    /// - A field value that does not match its declared type.
    pub(crate) fn eval_struct_literal(&mut self,
                                      name: &str,
                                      fields: &[(String, Expr)],
                                      position: &Position)
                                      -> ExecResult<Value> {
        let def = self.scope
                      .lookup_struct_type(name)
                      .map_err(|e| e.at(position))?;

        for (index, (field, expr)) in fields.iter().enumerate() {
            if !def.fields.iter().any(|declared| declared.name == *field) {
                return Err(RuntimeError::UnknownField { struct_name: name.to_string(),
                                                        field:       field.clone(),
                                                        position:    expr.position().clone(), }.into());
            }
            if fields[..index].iter().any(|(earlier, _)| earlier == field) {
                return Err(RuntimeError::DuplicateField { struct_name: name.to_string(),
                                                          field:       field.clone(),
                                                          position:    expr.position().clone(), }.into());
            }
        }

        let mut supplied = Vec::with_capacity(fields.len());
        for (field, expr) in fields {
            supplied.push((field.as_str(), self.eval(expr)?, expr.position()));
        }

        let mut values = Vec::with_capacity(def.fields.len());
        for declared in &def.fields {
            let Some(index) = supplied.iter()
                                      .position(|(field, ..)| *field == declared.name)
            else {
                return Err(RuntimeError::MissingField { struct_name: name.to_string(),
                                                        field:       declared.name.clone(),
                                                        position:    position.clone(), }.into());
            };

            let (_, value, at) = supplied.swap_remove(index);
            let value = coerce_to_declared(&declared.name, &declared.declared_type, value, at)?;
            values.push((declared.name.clone(), value));
        }

        Ok(StructValue { name:   name.to_string(),
                         fields: values, }.into())
    }

    /// Reads a field of a struct value.
    ///
    /// # Example
    /// ```
    /// use russet::{
    ///     ast::Position,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{core::Value, structure::StructValue},
    ///     },
    /// };
    ///
    /// let point = Value::from(StructValue { name:   "Point".to_string(),
    ///                                       fields: vec![("x".to_string(), Value::Integer(3))], });
    /// let position = Position::default();
    ///
    /// assert_eq!(Context::eval_field_access(&point, "x", &position), Ok(Value::Integer(3)));
    /// assert!(Context::eval_field_access(&point, "y", &position).is_err());
    /// ```
    pub fn eval_field_access(object: &Value, field: &str, position: &Position) -> EvalResult<Value> {
        match object {
            Value::Struct(instance) => {
                instance.field(field)
                        .cloned()
                        .ok_or_else(|| RuntimeError::UnknownField { struct_name: instance.name
                                                                                         .clone(),
                                                                    field:       field.to_string(),
                                                                    position:    position.clone(), })
            },
            other => Err(RuntimeError::NotAStruct { field:    field.to_string(),
                                                    found:    other.type_of(),
                                                    position: position.clone(), }),
        }
    }
}
