use std::{
    fmt,
    io::{self, Write},
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    ast::{AssignOperator, Expr, Position, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::utils::{coerce_to_declared, ensure_not_builtin},
        scope::Scope,
        value::core::Value,
    },
};

/// Result type used by value-level operations.
///
/// Operator and builtin helpers return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type used while walking the tree.
///
/// Anything that can run user code can also hit `exit`, so tree-walking
/// functions unwind with an [`Interrupt`] rather than a bare error.
pub type ExecResult<T> = Result<T, Interrupt>;

/// Non-local exit from tree walking.
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// `exit code;` was executed. Ends the run without an error.
    Exit(i64),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Control-flow signal produced by executing a statement.
///
/// `Normal` lets execution continue with the next statement. The other
/// variants unwind through enclosing blocks until a loop (for `Break` and
/// `Continue`) or a function call (for `Return`) consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break(Position),
    /// Skip to the next iteration of the innermost loop.
    Continue(Position),
    /// Leave the current function with a value.
    Return(Value, Position),
}

/// How a run ended when it did not fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every top-level statement ran.
    Completed,
    /// `exit` was executed with this code.
    Exited(i64),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack every name is
/// resolved against, the directory imports are resolved from, and the sink
/// `print` writes to.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::run`] executes a whole
/// program; [`Context::eval`] and [`Context::exec_statement`] evaluate single
/// nodes against the same state.
///
/// # Example
/// ```
/// use russet::interpreter::{
///     evaluator::core::{Context, Outcome},
///     lexer::Tokenizer,
///     parser::core::parse_program,
/// };
///
/// let tokens = Tokenizer::new("let x: int = 2; print(x * 21);").tokenize_all()
///                                                              .unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// let mut output = Vec::new();
/// let outcome = Context::new(&mut output).run(&program).unwrap();
///
/// assert_eq!(outcome, Outcome::Completed);
/// assert_eq!(String::from_utf8(output).unwrap(), "42\n");
/// ```
pub struct Context<'out> {
    /// The scope stack. The root frame holds top-level declarations.
    pub scope: Scope,
    base_dir:  PathBuf,
    output:    &'out mut dyn Write,
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("scope", &self.scope)
         .field("base_dir", &self.base_dir)
         .finish_non_exhaustive()
    }
}

impl<'out> Context<'out> {
    /// Creates a context with an empty root scope that writes program output
    /// to `output` and resolves imports from the working directory.
    #[must_use]
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { scope: Scope::new(),
               base_dir: PathBuf::from("."),
               output }
    }

    /// Sets the directory `import` paths are resolved against.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// The directory `import` paths are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes `value` and a newline to the output sink.
    pub(crate) fn write_line(&mut self, value: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{value}")
    }

    /// Runs a program.
    ///
    /// Top-level statements execute in order against the root scope. The
    /// first error aborts the run. `exit` ends it early with
    /// [`Outcome::Exited`].
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised, including `break`/`continue` outside
    /// a loop and `return` outside a function.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<Outcome> {
        for statement in program {
            match self.exec_statement(statement) {
                Ok(signal) => {
                    if let Some(error) = stray_signal(signal) {
                        return Err(error);
                    }
                },
                Err(Interrupt::Exit(code)) => return Ok(Outcome::Exited(code)),
                Err(Interrupt::Error(error)) => return Err(error),
            }
        }

        Ok(Outcome::Completed)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant. Operands are always evaluated
    /// left to right and in full; `&&` and `||` do not short-circuit.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression. Calls to functions that return nothing
    /// produce [`Value::Unit`].
    pub fn eval(&mut self, expr: &Expr) -> ExecResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, position } => {
                let value = self.scope
                                .lookup_variable(name)
                                .map_err(|e| e.at(position))?;
                Ok(value.clone())
            },
            Expr::UnaryOp { op, expr, position } => {
                let operand = self.eval(expr)?;
                Ok(Self::eval_unary(*op, &operand, position)?)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, &left, &right, position)?)
            },
            Expr::Postfix { name, op, position } => Ok(self.eval_postfix(name, *op, position)?),
            Expr::Assign { name,
                           op,
                           value,
                           position, } => self.eval_assign(name, *op, value, position),
            Expr::Call { name,
                         arguments,
                         position, } => self.eval_call(name, arguments, position),
            Expr::StructLiteral { name,
                                  fields,
                                  position, } => self.eval_struct_literal(name, fields, position),
            Expr::FieldAccess { object,
                                field,
                                position, } => {
                let object = self.eval(object)?;
                Ok(Self::eval_field_access(&object, field, position)?)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind into the innermost frame. Composite statements run
    /// their bodies in fresh child frames. Control-flow statements produce
    /// the matching [`Signal`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// The control-flow signal the statement produced.
    pub fn exec_statement(&mut self, statement: &Statement) -> ExecResult<Signal> {
        match statement {
            Statement::Let { name,
                             declared_type,
                             value,
                             position, } => {
                ensure_not_builtin(name, position)?;
                let value = self.eval(value)?;
                let value = coerce_to_declared(name, declared_type, value, position)?;
                self.scope.declare_variable(name, value);
                Ok(Signal::Normal)
            },
            Statement::Del { name, position } => {
                self.scope
                    .delete_variable(name)
                    .map_err(|e| e.at(position))?;
                Ok(Signal::Normal)
            },
            Statement::If { condition,
                            body,
                            elifs,
                            else_body,
                            .. } => self.exec_if(condition, body, elifs, else_body),
            Statement::For { variable,
                             condition,
                             increment,
                             body,
                             position, } => self.exec_for(variable, condition, increment, body, position),
            Statement::While { condition, body, .. } => self.exec_while(condition, body),
            Statement::Break { position } => Ok(Signal::Break(position.clone())),
            Statement::Continue { position } => Ok(Signal::Continue(position.clone())),
            Statement::Return { value, position } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Unit,
                };
                Ok(Signal::Return(value, position.clone()))
            },
            Statement::Exit { value, position } => match self.eval(value)? {
                Value::Integer(code) => {
                    debug!(code, "exit requested");
                    Err(Interrupt::Exit(code))
                },
                other => Err(RuntimeError::InvalidExitCode { found:    other.type_of(),
                                                             position: position.clone(), }.into()),
            },
            Statement::Function(def) => {
                self.declare_function(def)?;
                Ok(Signal::Normal)
            },
            Statement::Switch { value,
                                cases,
                                default,
                                .. } => self.exec_switch(value, cases, default),
            Statement::Import { path, position } => {
                self.import(path, position)?;
                Ok(Signal::Normal)
            },
            Statement::Struct(def) => {
                self.declare_struct(def)?;
                Ok(Signal::Normal)
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Signal::Normal)
            },
        }
    }

    /// Executes statements in order in the current frame, stopping at the
    /// first signal other than [`Signal::Normal`].
    pub fn exec_statements(&mut self, statements: &[Statement]) -> ExecResult<Signal> {
        for statement in statements {
            let signal = self.exec_statement(statement)?;
            if !matches!(signal, Signal::Normal) {
                return Ok(signal);
            }
        }

        Ok(Signal::Normal)
    }

    /// Executes a block body in a fresh child frame.
    ///
    /// The frame is popped on every exit path, errors included.
    pub fn exec_block(&mut self, statements: &[Statement]) -> ExecResult<Signal> {
        let mut scope = self.scoped();
        scope.exec_statements(statements)
    }

    /// Pushes a frame and returns a guard that pops it when dropped.
    ///
    /// The guard dereferences to the context, so evaluation continues
    /// through it.
    pub fn scoped(&mut self) -> ScopeGuard<'_, 'out> {
        self.scope.push_scope();
        debug!(depth = self.scope.depth(), "pushed scope");
        ScopeGuard { context: self }
    }

    /// Like [`scoped`](Self::scoped), but the pushed frame starts a
    /// function call and hides the caller's locals.
    pub fn call_scoped(&mut self) -> ScopeGuard<'_, 'out> {
        self.scope.push_call_scope();
        debug!(depth = self.scope.depth(), "pushed call scope");
        ScopeGuard { context: self }
    }

    /// `name = value` or `name op= value`.
    ///
    /// The right-hand side is evaluated first. Compound forms then combine
    /// the current value with it under the usual operator rules. The
    /// assigned value is also the value of the expression.
    fn eval_assign(&mut self,
                   name: &str,
                   op: AssignOperator,
                   value: &Expr,
                   position: &Position)
                   -> ExecResult<Value> {
        let rhs = self.eval(value)?;

        let result = match op {
            AssignOperator::Assign => rhs,
            AssignOperator::Compound(op) => {
                let current = self.scope
                                  .lookup_variable(name)
                                  .map_err(|e| e.at(position))?;
                Self::eval_binary(op, current, &rhs, position)?
            },
        };

        self.scope
            .assign_variable(name, result.clone())
            .map_err(|e| e.at(position))?;
        Ok(result)
    }
}

/// Converts a signal that reached the top level into the matching error.
///
/// Returns `None` for [`Signal::Normal`].
pub(crate) fn stray_signal(signal: Signal) -> Option<RuntimeError> {
    match signal {
        Signal::Normal => None,
        Signal::Break(position) => Some(RuntimeError::StrayLoopControl { keyword: "break",
                                                                         position }),
        Signal::Continue(position) => {
            Some(RuntimeError::StrayLoopControl { keyword: "continue",
                                                  position })
        },
        Signal::Return(_, position) => Some(RuntimeError::ReturnOutsideFunction { position }),
    }
}

/// A pushed scope frame, popped again on drop.
///
/// Obtained from [`Context::scoped`] or [`Context::call_scoped`].
pub struct ScopeGuard<'ctx, 'out> {
    context: &'ctx mut Context<'out>,
}

impl<'out> Deref for ScopeGuard<'_, 'out> {
    type Target = Context<'out>;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for ScopeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        self.context.scope.pop_scope();
        debug!(depth = self.context.scope.depth(), "popped scope");
    }
}
