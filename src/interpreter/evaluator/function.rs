use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Binding,
        evaluator::{
            core::{EvalResult, Evaluator},
            output::Sink,
        },
        value::core::Numeric,
    },
};

impl<V: Numeric, S: Sink<V>> Evaluator<V, S> {
    /// Evaluates a call of a user-defined function.
    ///
    /// The name is resolved when the call runs, so a function may call
    /// itself or a function defined after it. Arguments are evaluated in the
    /// caller's frame; the body then runs in a new frame holding only the
    /// parameters. Arguments keep their fixed flag.
    ///
    /// # Parameters
    /// - `name`: The called name.
    /// - `arguments`: Argument expressions in order.
    /// - `pos`: Position of the call.
    ///
    /// # Returns
    /// The value of the body's last statement, or `None` if it yields
    /// nothing.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is unbound.
    /// - `NotAFunction` if `name` is bound to a number.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - Any error raised by an argument or by the body.
    pub(in crate::interpreter) fn eval_call(&mut self,
                                            name: &str,
                                            arguments: &[Expr],
                                            pos: usize)
                                            -> EvalResult<Option<V>> {
        let def = match self.environment().get(name) {
            Some(Binding::Function(def)) => Rc::clone(def),
            Some(Binding::Value(_)) => {
                return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                        pos });
            },
            None => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           pos });
            },
        };

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.params.len(),
                                                             found: arguments.len(),
                                                             pos });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval_value(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        debug!(target: "reckon::eval", function = name, arguments = values.len(), "call");
        self.in_frame(|ev| {
                for (param, value) in def.params.iter().zip(values) {
                    ev.env_mut().define(param.clone(), Binding::Value(value));
                }
                ev.eval_statements(&def.body.statements)
            })
    }
}
