/// Core evaluation logic.
///
/// Contains the evaluator itself, statement and expression dispatch, and
/// scoped frame handling.
pub mod core;

/// Binary operator evaluation.
///
/// Folds operator chains left to right.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function evaluation.
///
/// Resolves the callee, checks the argument count and runs the body in a
/// fresh frame.
pub mod function;

/// Output sinks for `print`.
///
/// Printed values go either to standard output or to an in-memory buffer.
pub mod output;
