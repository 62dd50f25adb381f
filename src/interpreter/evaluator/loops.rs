use crate::{
    ast::{Expr, Position, Statement},
    interpreter::evaluator::core::{Context, ExecResult, Signal},
};

/// What a loop does after one run of its body.
enum Step {
    /// Run the next iteration.
    Next,
    /// Leave the loop normally.
    Stop,
    /// Leave the loop and hand this signal to the caller.
    Propagate(Signal),
}

/// Maps the body's signal onto the loop protocol: `break` ends the loop,
/// `continue` and normal completion go on to the next iteration, `return`
/// escapes.
fn step(signal: Signal) -> Step {
    match signal {
        Signal::Normal | Signal::Continue(_) => Step::Next,
        Signal::Break(_) => Step::Stop,
        Signal::Return(..) => Step::Propagate(signal),
    }
}

impl Context<'_> {
    /// Executes a `for` loop.
    ///
    /// The loop variable is not declared by the loop; it must already exist.
    /// Each iteration checks the condition, runs the body in a fresh frame and
    /// then evaluates the increment. The increment also runs after a
    /// `continue`.
    ///
    /// # Parameters
    /// - `variable`: Name of the pre-declared loop variable.
    /// - `condition`: Must evaluate to a boolean.
    /// - `increment`: Evaluated for its effect after every iteration.
    /// - `body`: The loop body.
    /// - `position`: Position of `for`, used when the loop variable is
    ///   missing.
    pub(crate) fn exec_for(&mut self,
                           variable: &str,
                           condition: &Expr,
                           increment: &Expr,
                           body: &[Statement],
                           position: &Position)
                           -> ExecResult<Signal> {
        self.scope
            .lookup_variable(variable)
            .map_err(|e| e.at(position))?;

        while self.eval(condition)?
                  .as_bool("for condition", condition.position())?
        {
            match step(self.exec_block(body)?) {
                Step::Next => {},
                Step::Stop => break,
                Step::Propagate(signal) => return Ok(signal),
            }

            self.eval(increment)?;
        }

        Ok(Signal::Normal)
    }

    /// Executes a `while` loop.
    ///
    /// Same iteration contract as `for`, without the increment.
    pub(crate) fn exec_while(&mut self, condition: &Expr, body: &[Statement]) -> ExecResult<Signal> {
        while self.eval(condition)?
                  .as_bool("while condition", condition.position())?
        {
            match step(self.exec_block(body)?) {
                Step::Next => {},
                Step::Stop => break,
                Step::Propagate(signal) => return Ok(signal),
            }
        }

        Ok(Signal::Normal)
    }
}
