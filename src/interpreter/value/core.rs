use std::fmt::{Debug, Display};

use crate::{
    ast::{BinaryOperator, NumberLiteral, NumberType},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::exponent_to_u32,
};

/// The operations the evaluator needs from a value.
///
/// The tree walker is written once against this trait: `i64` gives the
/// plain integer calculator and [`Number`](super::number::Number) the typed
/// one.
pub trait Numeric: Clone + Debug + Display {
    /// Builds a value from a literal.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if the literal has no representation.
    fn from_literal(literal: NumberLiteral, fixed: bool, pos: usize) -> EvalResult<Self>;

    /// Zero is false; anything else is true.
    fn is_truthy(&self) -> bool;

    /// Arithmetic negation.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if the result overflows.
    fn negate(&self, pos: usize) -> EvalResult<Self>;

    /// Applies a binary operator.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for type errors and arithmetic failures.
    fn apply(op: BinaryOperator, lhs: &Self, rhs: &Self, pos: usize) -> EvalResult<Self>;

    /// Produces the value actually stored by an assignment.
    ///
    /// # Parameters
    /// - `value`: The evaluated right-hand side.
    /// - `declared`: The explicit type of `int`/`float` assignments.
    /// - `previous`: The value `name` already has in the current frame.
    /// - `name`: The assigned name.
    /// - `pos`: Position of the assignment.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if the value cannot take the required type.
    fn bind(value: Self,
            declared: Option<NumberType>,
            previous: Option<&Self>,
            name: &str,
            pos: usize)
            -> EvalResult<Self>;
}

impl Numeric for i64 {
    fn from_literal(literal: NumberLiteral, _fixed: bool, pos: usize) -> EvalResult<Self> {
        match literal {
            NumberLiteral::Integer(n) => Ok(n),
            NumberLiteral::Float(x) => {
                let details = format!("decimal literal {x:?} needs the typed evaluator");
                Err(RuntimeError::Unsupported { details, pos })
            },
        }
    }

    fn is_truthy(&self) -> bool {
        *self != 0
    }

    fn negate(&self, pos: usize) -> EvalResult<Self> {
        self.checked_neg()
            .ok_or(RuntimeError::Overflow { op: BinaryOperator::Sub,
                                            pos })
    }

    fn apply(op: BinaryOperator, lhs: &Self, rhs: &Self, pos: usize) -> EvalResult<Self> {
        apply_integer(op, *lhs, *rhs, pos)
    }

    fn bind(value: Self,
            declared: Option<NumberType>,
            _previous: Option<&Self>,
            _name: &str,
            pos: usize)
            -> EvalResult<Self> {
        match declared {
            Some(NumberType::Float) => {
                let details = "float declarations need the typed evaluator".to_string();
                Err(RuntimeError::Unsupported { details, pos })
            },
            Some(NumberType::Integer) | None => Ok(value),
        }
    }
}

/// Applies a binary operator to two integers.
///
/// Arithmetic is checked, comparisons yield `1` or `0`, division truncates
/// toward zero and `>>` is an arithmetic shift.
///
/// # Errors
/// - `DivisionByZero` for `/` by zero.
/// - `NegativeExponent` for `**` with a negative exponent.
/// - `InvalidShift` for shift amounts outside `0..64`.
/// - `Overflow` when the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use reckon::{ast::BinaryOperator, interpreter::value::core::apply_integer};
///
/// assert_eq!(apply_integer(BinaryOperator::Pow, 2, 10, 0).unwrap(), 1024);
/// assert_eq!(apply_integer(BinaryOperator::Div, -7, 2, 0).unwrap(), -3);
/// assert_eq!(apply_integer(BinaryOperator::Less, 1, 2, 0).unwrap(), 1);
/// assert!(apply_integer(BinaryOperator::Div, 1, 0, 0).is_err());
/// ```
pub fn apply_integer(op: BinaryOperator, lhs: i64, rhs: i64, pos: usize) -> EvalResult<i64> {
    let overflow = || RuntimeError::Overflow { op, pos };

    match op {
        BinaryOperator::Equal => Ok(i64::from(lhs == rhs)),
        BinaryOperator::NotEqual => Ok(i64::from(lhs != rhs)),
        BinaryOperator::Less => Ok(i64::from(lhs < rhs)),
        BinaryOperator::Greater => Ok(i64::from(lhs > rhs)),
        BinaryOperator::LessEqual => Ok(i64::from(lhs <= rhs)),
        BinaryOperator::GreaterEqual => Ok(i64::from(lhs >= rhs)),
        BinaryOperator::BitOr => Ok(lhs | rhs),
        BinaryOperator::BitXor => Ok(lhs ^ rhs),
        BinaryOperator::BitAnd => Ok(lhs & rhs),
        BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight => {
            let amount = u32::try_from(rhs).ok()
                                           .filter(|amount| *amount < i64::BITS)
                                           .ok_or(RuntimeError::InvalidShift { amount: rhs,
                                                                               pos })?;
            if op == BinaryOperator::ShiftLeft {
                Ok(lhs << amount)
            } else {
                Ok(lhs >> amount)
            }
        },
        BinaryOperator::Add => lhs.checked_add(rhs).ok_or_else(overflow),
        BinaryOperator::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
        BinaryOperator::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
        BinaryOperator::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero { pos });
            }
            lhs.checked_div(rhs).ok_or_else(overflow)
        },
        BinaryOperator::Pow => match lhs {
            // Defined for every non-negative exponent, even past u32::MAX.
            1 if rhs >= 0 => Ok(1),
            0 if rhs > 0 => Ok(0),
            -1 if rhs >= 0 => Ok(if rhs % 2 == 0 { 1 } else { -1 }),
            _ => {
                let exponent = exponent_to_u32(rhs, pos)?;
                lhs.checked_pow(exponent).ok_or_else(overflow)
            },
        },
    }
}
