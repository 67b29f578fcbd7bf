use crate::{
    ast::{BinaryOperator, NumberType},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

/// Whether a value of type `from` may be implicitly converted to `to`.
///
/// Only widening is implicit: a type converts to itself or to a larger one.
///
/// # Example
/// ```
/// use reckon::{ast::NumberType, interpreter::value::inference::convertible};
///
/// assert!(convertible(NumberType::Integer, NumberType::Float));
/// assert!(!convertible(NumberType::Float, NumberType::Integer));
/// ```
#[must_use]
pub fn convertible(from: NumberType, to: NumberType) -> bool {
    from <= to
}

/// Decides the type a binary operation is carried out in.
///
/// - Both operands fixed: their types must be equal.
/// - One operand fixed: the other must be convertible to its type.
/// - Neither fixed: the larger of the two types.
///
/// # Errors
/// - `TypeMismatch` if two fixed operands differ.
/// - `NotConvertible` if the free operand would have to narrow.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{BinaryOperator, NumberType},
///     interpreter::value::{inference::infer_type, number::Number},
/// };
///
/// let free_int = Number::int(2);
/// let fixed_float = Number::float(1.5).into_fixed();
///
/// let ty = infer_type(&free_int, BinaryOperator::Add, &fixed_float, 0).unwrap();
/// assert_eq!(ty, NumberType::Float);
///
/// let fixed_int = Number::int(2).into_fixed();
/// assert!(infer_type(&fixed_int, BinaryOperator::Add, &fixed_float, 0).is_err());
/// ```
pub fn infer_type(lhs: &Number, op: BinaryOperator, rhs: &Number, pos: usize) -> EvalResult<NumberType> {
    let left = lhs.number_type();
    let right = rhs.number_type();

    match (lhs.fixed, rhs.fixed) {
        (true, true) => {
            if left == right {
                Ok(left)
            } else {
                Err(RuntimeError::TypeMismatch { left, op, right, pos })
            }
        },
        (true, false) => require_convertible(right, left, pos),
        (false, true) => require_convertible(left, right, pos),
        (false, false) => Ok(left.max(right)),
    }
}

fn require_convertible(from: NumberType, to: NumberType, pos: usize) -> EvalResult<NumberType> {
    if convertible(from, to) {
        Ok(to)
    } else {
        Err(RuntimeError::NotConvertible { from, to, pos })
    }
}

/// Gives `value` the type `target` for storage in a binding.
///
/// A value that already has the target type is kept. A fixed value of
/// another type is rejected; a free one is converted when convertible.
///
/// # Errors
/// Returns `NotConvertible` if the conversion is not allowed.
pub fn coerce(value: Number, target: NumberType, pos: usize) -> EvalResult<Number> {
    let from = value.number_type();
    if from == target {
        return Ok(value);
    }
    if value.fixed || !convertible(from, target) {
        return Err(RuntimeError::NotConvertible { from,
                                                  to: target,
                                                  pos });
    }
    value.convert(target, pos)
}
