use crate::{
    ast::{ChainLink, Expr},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            output::Sink,
        },
        value::core::Numeric,
    },
};

impl<V: Numeric, S: Sink<V>> Evaluator<V, S> {
    /// Evaluates an operator chain.
    ///
    /// The first operand is evaluated, then each link is applied to the
    /// accumulated value in source order. Power chains arrive right-nested
    /// from the parser, so folding left still groups them from the right.
    ///
    /// # Parameters
    /// - `first`: The leftmost operand.
    /// - `rest`: The `(operator, operand)` links.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by an operand or operator.
    pub(in crate::interpreter) fn eval_chain(&mut self,
                                             first: &Expr,
                                             rest: &[ChainLink])
                                             -> EvalResult<V> {
        let mut accumulated = self.eval_value(first)?;
        for link in rest {
            let rhs = self.eval_value(&link.operand)?;
            accumulated = V::apply(link.op, &accumulated, &rhs, link.pos)?;
        }
        Ok(accumulated)
    }
}
