use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            output::Sink,
        },
        value::core::Numeric,
    },
};

impl<V: Numeric, S: Sink<V>> Evaluator<V, S> {
    /// Evaluates a unary operation.
    pub(in crate::interpreter) fn eval_unary(&mut self,
                                             op: UnaryOperator,
                                             operand: &Expr,
                                             pos: usize)
                                             -> EvalResult<V> {
        let value = self.eval_value(operand)?;
        match op {
            UnaryOperator::Negate => value.negate(pos),
        }
    }
}
