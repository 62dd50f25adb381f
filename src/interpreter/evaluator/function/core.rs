use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Expr, FunctionDef, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, ExecResult, Signal},
            function::{builtin, math, min_max},
            utils::{coerce_to_declared, ensure_not_builtin},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context (for output), a slice of evaluated argument
/// values whose length already matches its arity, and the call position.
type BuiltinFn = fn(&mut Context<'_>, &[Value], &Position) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Checks the number of supplied arguments for the builtin `name`.
    fn check(self, name: &str, found: usize, position: &Position) -> EvalResult<()> {
        match self {
            Self::Exact(expected) if found != expected => {
                Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected,
                                                          found,
                                                          position: position.clone() })
            },
            Self::AtLeast(minimum) if found < minimum => {
                Err(RuntimeError::TooFewArguments { name: name.to_string(),
                                                    minimum,
                                                    found,
                                                    position: position.clone() })
            },
            _ => Ok(()),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names reserved by builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"    => { arity: Arity::Exact(1),   func: builtin::print },
    "len"      => { arity: Arity::Exact(1),   func: builtin::len },
    "to_int"   => { arity: Arity::Exact(1),   func: builtin::to_int },
    "to_float" => { arity: Arity::Exact(1),   func: builtin::to_float },
    "abs"      => { arity: Arity::Exact(1),   func: math::abs },
    "sqrt"     => { arity: Arity::Exact(1),   func: math::sqrt },
    "pow"      => { arity: Arity::Exact(2),   func: math::pow },
    "sin"      => { arity: Arity::Exact(1),   func: math::sin },
    "cos"      => { arity: Arity::Exact(1),   func: math::cos },
    "tan"      => { arity: Arity::Exact(1),   func: math::tan },
    "min"      => { arity: Arity::AtLeast(1), func: min_max::min },
    "max"      => { arity: Arity::AtLeast(1), func: min_max::max },
}

impl Context<'_> {
    /// Declares a user-defined function in the innermost frame.
    ///
    /// The body is not executed.
    ///
    /// # Errors
    /// [`RuntimeError::BuiltinRedefinition`] if the name belongs to a
    /// builtin.
    pub(crate) fn declare_function(&mut self, def: &Rc<FunctionDef>) -> EvalResult<()> {
        ensure_not_builtin(&def.name, &def.position)?;
        self.scope.declare_function(Rc::clone(def));
        Ok(())
    }

    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it evaluates the arguments, verifies arity and executes the
    /// builtin. Otherwise it looks the name up in scope, evaluates the
    /// arguments left to right and runs the user-defined function.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `position`: Position of the call for error reporting.
    ///
    /// # Returns
    /// The function result, [`Value::Unit`] for functions that return
    /// nothing.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            position: &Position)
                            -> ExecResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            let values = self.eval_arguments(arguments)?;
            builtin.arity.check(name, values.len(), position)?;
            return Ok((builtin.func)(self, &values, position)?);
        }

        let def = self.scope
                      .lookup_function(name)
                      .map_err(|e| e.at(position))?;
        let values = self.eval_arguments(arguments)?;

        self.call_user_defined_function(&def, values, position)
    }

    fn eval_arguments(&mut self, arguments: &[Expr]) -> ExecResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.eval(argument))
                 .collect()
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound in a fresh call frame and checked against their
    /// declared types. The body sees its own frames and the root frame, not
    /// the caller's locals. The body runs until the
    /// first `return` or its end; falling off the end yields
    /// [`Value::Unit`]. The result is checked against the declared return
    /// type. The frame is popped on every exit path.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - An argument or the result does not match its declared type.
    /// - `break` or `continue` escaping the function body.
    fn call_user_defined_function(&mut self,
                                  def: &FunctionDef,
                                  arguments: Vec<Value>,
                                  position: &Position)
                                  -> ExecResult<Value> {
        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     def.name.clone(),
                                                             expected: def.params.len(),
                                                             found:    arguments.len(),
                                                             position: position.clone(), }.into());
        }

        debug!(function = %def.name,
               arguments = arguments.len(),
               depth = self.scope.depth(),
               "calling function");

        let returned = {
            let mut frame = self.call_scoped();

            for (param, value) in def.params.iter().zip(arguments) {
                let value = coerce_to_declared(&param.name, &param.declared_type, value, position)?;
                frame.scope.declare_variable(&param.name, value);
            }

            match frame.exec_statements(&def.body)? {
                Signal::Normal => Value::Unit,
                Signal::Return(value, _) => value,
                Signal::Break(position) => {
                    return Err(RuntimeError::StrayLoopControl { keyword: "break",
                                                                position }.into());
                },
                Signal::Continue(position) => {
                    return Err(RuntimeError::StrayLoopControl { keyword: "continue",
                                                                position }.into());
                },
            }
        };

        Ok(coerce_to_declared(&def.name, &def.return_type, returned, position)?)
    }
}
