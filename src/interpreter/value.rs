/// The numeric value trait and its integer implementation.
///
/// Defines `Numeric`, the interface the evaluator is generic over, and
/// implements it for `i64` with checked integer arithmetic.
pub mod core;
/// Typed numbers.
///
/// Defines `Number`, a scalar that is either an integer or a float and
/// carries a flag telling whether its type is fixed.
pub mod number;
/// Integer/float type inference.
///
/// Decides the result type of a binary operation from the types and fixed
/// flags of its operands, and coerces values into declared types.
pub mod inference;
