use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// What a name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<V> {
    /// A number.
    Value(V),
    /// A function definition, shared with the syntax tree it came from.
    Function(Rc<FunctionDef>),
}

/// One lexical scope: names are unique within a frame.
pub type Frame<V> = HashMap<String, Binding<V>>;

/// A stack of scope frames.
///
/// Lookups search from the innermost frame outward, so inner bindings shadow
/// outer ones without touching them. The outermost, global frame always
/// exists.
///
/// # Example
/// ```
/// use reckon::interpreter::environment::{Binding, Environment};
///
/// let mut env = Environment::new();
/// env.define("x", Binding::Value(10_i64));
///
/// env.push_frame();
/// env.define("x", Binding::Value(20));
/// assert_eq!(env.get("x"), Some(&Binding::Value(20)));
///
/// env.pop_frame();
/// assert_eq!(env.get("x"), Some(&Binding::Value(10)));
/// ```
#[derive(Debug, Clone)]
pub struct Environment<V> {
    frames: Vec<Frame<V>>,
}

impl<V> Environment<V> {
    /// Creates an environment holding only the empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()] }
    }

    /// Enters a new innermost frame.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Leaves the innermost frame and returns it.
    ///
    /// The global frame is never popped: with only one frame left this
    /// returns `None` and leaves the environment unchanged.
    pub fn pop_frame(&mut self) -> Option<Frame<V>> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Number of frames, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `name` in the innermost frame, replacing any binding of that
    /// name in the same frame.
    pub fn define(&mut self, name: impl Into<String>, binding: Binding<V>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), binding);
        }
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding<V>> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Finds `name` in the innermost frame only.
    #[must_use]
    pub fn get_local(&self, name: &str) -> Option<&Binding<V>> {
        self.frames.last().and_then(|frame| frame.get(name))
    }

    /// Like [`Environment::get`], but an unbound name is an error.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnboundName` if no frame binds `name`.
    pub fn lookup(&self, name: &str, pos: usize) -> EvalResult<&Binding<V>> {
        self.get(name).ok_or_else(|| RuntimeError::UnboundName { name: name.to_string(),
                                                                 pos })
    }

    /// Drops every binding of the innermost frame.
    pub fn clear_current(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.clear();
        }
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Self::new()
    }
}
