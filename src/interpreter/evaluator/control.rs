use crate::{
    ast::{Branch, Expr, Statement},
    interpreter::evaluator::core::{Context, ExecResult, Signal},
};

impl Context<'_> {
    /// Executes an `if`/`elif`/`else` chain.
    ///
    /// Conditions are evaluated in order and must be booleans. The first
    /// body whose condition holds runs in a fresh child frame; if none
    /// holds, the `else` body runs (an absent `else` is an empty body).
    ///
    /// # Returns
    /// The signal of whichever body ran, or [`Signal::Normal`].
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          body: &[Statement],
                          elifs: &[Branch],
                          else_body: &[Statement])
                          -> ExecResult<Signal> {
        if self.eval(condition)?
               .as_bool("if condition", condition.position())?
        {
            return self.exec_block(body);
        }

        for elif in elifs {
            if self.eval(&elif.condition)?
                   .as_bool("elif condition", elif.condition.position())?
            {
                return self.exec_block(&elif.body);
            }
        }

        self.exec_block(else_body)
    }

    /// Executes a `switch`.
    ///
    /// The switch value is evaluated once. Case values are then evaluated in
    /// order and compared with `==` rules; the first match runs its body and
    /// no other case is tried. With no match, `default` runs. Signals from
    /// the body propagate unchanged, so `break` inside a case leaves the
    /// enclosing loop.
    pub(crate) fn exec_switch(&mut self,
                              value: &Expr,
                              cases: &[Branch],
                              default: &[Statement])
                              -> ExecResult<Signal> {
        let value = self.eval(value)?;

        for case in cases {
            let candidate = self.eval(&case.condition)?;
            if Self::values_equal(&value, &candidate, case.condition.position())? {
                return self.exec_block(&case.body);
            }
        }

        self.exec_block(default)
    }
}
