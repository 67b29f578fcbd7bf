use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        evaluator::output::{Sink, Stdout},
        value::{core::Numeric, number::Number},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluator of the plain integer calculator.
pub type IntegerEvaluator<S = Stdout> = Evaluator<i64, S>;

/// Evaluator of the typed calculator.
pub type TypedEvaluator<S = Stdout> = Evaluator<Number, S>;

/// Walks a syntax tree and computes its value.
///
/// ## Usage
///
/// An `Evaluator` owns its [`Environment`] and its output [`Sink`]. Bindings
/// made by one program stay visible to the next program evaluated by the
/// same instance; create a new evaluator for a clean state.
///
/// Function calls recurse on the host stack with no depth limit. A runaway
/// recursion exhausts that stack and aborts the process.
///
/// ## Example
/// ```
/// use reckon::{
///     config::LexerConfig,
///     interpreter::evaluator::core::IntegerEvaluator,
///     parse,
/// };
///
/// let program = parse("set x = 4; print x * 2", &LexerConfig::default()).unwrap();
///
/// let mut evaluator = IntegerEvaluator::<Vec<i64>>::with_sink(Vec::new());
/// let value = evaluator.eval_program(&program).unwrap();
///
/// assert_eq!(value, Some(8));
/// assert_eq!(evaluator.sink(), &vec![8]);
/// ```
#[derive(Debug)]
pub struct Evaluator<V, S = Stdout> {
    env:  Environment<V>,
    sink: S,
}

impl<V: Numeric> Evaluator<V, Stdout> {
    /// Creates an evaluator that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Stdout)
    }
}

impl<V: Numeric> Default for Evaluator<V, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Numeric, S: Sink<V>> Evaluator<V, S> {
    /// Creates an evaluator with an empty global frame that prints to
    /// `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self { env: Environment::new(),
               sink }
    }

    /// The output sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the evaluator and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The current bindings.
    pub const fn environment(&self) -> &Environment<V> {
        &self.env
    }

    /// Evaluates every statement of a program in the global frame.
    ///
    /// # Returns
    /// The value of the last statement, or `None` if the program is empty or
    /// its last statement yields nothing.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. Values printed before the
    /// error stay printed.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<V>> {
        self.eval_statements(&program.statements)
    }

    /// Evaluates statements in order in the current frame and returns the
    /// value of the last one.
    pub fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<Option<V>> {
        let mut last = None;
        for statement in statements {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// - Assignments yield the stored value.
    /// - `print` yields the printed value.
    /// - Expressions yield their value.
    /// - Blocks and `if` yield the value of the statement they ran last.
    /// - Function definitions, `reset` and an `if` with a false condition
    ///   and no `else` yield `None`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<V>> {
        match statement {
            Statement::Assignment { name,
                                    declared,
                                    value,
                                    pos, } => {
                let value = self.eval_value(value)?;
                let previous = match self.env.get_local(name) {
                    Some(Binding::Value(previous)) => Some(previous),
                    _ => None,
                };
                let bound = V::bind(value, *declared, previous, name, *pos)?;

                self.env.define(name.clone(), Binding::Value(bound.clone()));
                Ok(Some(bound))
            },
            Statement::Function(def) => {
                self.env.define(def.name.clone(), Binding::Function(Rc::clone(def)));
                Ok(None)
            },
            Statement::Block(block) => self.in_frame(|ev| ev.eval_statements(&block.statements)),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval_value(condition)?.is_truthy() {
                    self.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch)
                } else {
                    Ok(None)
                }
            },
            Statement::Print { expr, .. } => {
                let value = self.eval_value(expr)?;
                debug!(target: "reckon::eval", %value, "print");
                self.sink.emit(&value);
                Ok(Some(value))
            },
            Statement::Reset { .. } => {
                debug!(target: "reckon::eval", depth = self.env.depth(), "reset frame");
                self.env.clear_current();
                Ok(None)
            },
            Statement::Expression(expr) => self.eval(expr),
        }
    }

    /// Evaluates an expression.
    ///
    /// This is the main entry point for expression evaluation.
    ///
    /// # Returns
    /// `Some(value)`, or `None` for a call whose body yields nothing.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<V>> {
        match expr {
            Expr::Number { value, fixed, pos } => V::from_literal(*value, *fixed, *pos).map(Some),
            Expr::Identifier { name, pos } => match self.env.lookup(name, *pos)? {
                Binding::Value(value) => Ok(Some(value.clone())),
                Binding::Function(_) => Err(RuntimeError::NotAValue { name: name.clone(),
                                                                      pos:  *pos, }),
            },
            Expr::Unary { op, operand, pos } => self.eval_unary(*op, operand, *pos).map(Some),
            Expr::Chain { first, rest } => self.eval_chain(first, rest).map(Some),
            Expr::Call { name,
                         arguments,
                         pos, } => self.eval_call(name, arguments, *pos),
        }
    }

    /// Evaluates an expression that must produce a number.
    ///
    /// # Errors
    /// Returns `RuntimeError::VoidValue` if the expression yields nothing.
    pub(in crate::interpreter) fn eval_value(&mut self, expr: &Expr) -> EvalResult<V> {
        self.eval(expr)?
            .ok_or(RuntimeError::VoidValue { pos: expr.position() })
    }

    /// Runs `body` inside a fresh innermost frame.
    ///
    /// The frame is popped again on every exit path, errors included.
    pub(in crate::interpreter) fn in_frame<T>(&mut self,
                                              body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                              -> EvalResult<T> {
        self.env.push_frame();
        debug!(target: "reckon::eval", depth = self.env.depth(), "push frame");

        let result = body(self);

        self.env.pop_frame();
        debug!(target: "reckon::eval", depth = self.env.depth(), "pop frame");
        result
    }

    pub(in crate::interpreter) fn env_mut(&mut self) -> &mut Environment<V> {
        &mut self.env
    }
}
