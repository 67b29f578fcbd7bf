use std::fmt::Display;

/// Receives the values of `print` statements, one call per statement.
pub trait Sink<V> {
    /// Emits one printed value.
    fn emit(&mut self, value: &V);
}

/// Prints each value on its own line of standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl<V: Display> Sink<V> for Stdout {
    fn emit(&mut self, value: &V) {
        println!("{value}");
    }
}

/// Collects printed values in memory.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::output::Sink;
///
/// let mut captured: Vec<i64> = Vec::new();
/// captured.emit(&5);
/// assert_eq!(captured, [5]);
/// ```
impl<V: Clone> Sink<V> for Vec<V> {
    fn emit(&mut self, value: &V) {
        self.push(value.clone());
    }
}
