use crate::{
    ast::{BinaryOperator, NumberType},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Widens an `i64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `RuntimeError::NotRepresentable` if the magnitude exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use reckon::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, 0).unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, 0).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, pos: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(RuntimeError::NotRepresentable { value: value.to_string(),
                                                    to: NumberType::Float,
                                                    pos });
    }
    Ok(value as f64)
}

/// Narrows an `f64` to `i64` by truncating toward zero.
///
/// ## Errors
/// Returns `RuntimeError::NotRepresentable` for NaN, infinities and values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9, 0).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 0).unwrap(), -3);
/// assert!(f64_to_i64_truncated(f64::NAN, 0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, pos: usize) -> EvalResult<i64> {
    // 2^63 is exact in f64; the valid half-open range is [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < -BOUND || truncated >= BOUND {
        return Err(RuntimeError::NotRepresentable { value: format!("{value:?}"),
                                                    to: NumberType::Integer,
                                                    pos });
    }
    Ok(truncated as i64)
}

/// Converts an integer exponent to the `u32` expected by `i64::checked_pow`.
///
/// ## Errors
/// - `RuntimeError::NegativeExponent` for exponents below zero.
/// - `RuntimeError::Overflow` for exponents that do not fit in `u32`.
///
/// ## Example
/// ```
/// use reckon::util::num::exponent_to_u32;
///
/// assert_eq!(exponent_to_u32(3, 0).unwrap(), 3);
/// assert!(exponent_to_u32(-1, 0).is_err());
/// ```
pub fn exponent_to_u32(exponent: i64, pos: usize) -> EvalResult<u32> {
    if exponent < 0 {
        return Err(RuntimeError::NegativeExponent { exponent, pos });
    }
    u32::try_from(exponent).map_err(|_| RuntimeError::Overflow { op: BinaryOperator::Pow,
                                                                 pos })
}
