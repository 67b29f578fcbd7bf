use crate::{
    ast::{BinaryOperator, NumberLiteral, NumberType},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Numeric, apply_integer},
            inference::{coerce, infer_type},
        },
    },
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// The payload of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
}

/// A value of the typed evaluator.
///
/// `fixed` marks a type that was explicitly declared or bound by an
/// assignment, and may no longer widen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    /// The payload; its variant is the number's type.
    pub scalar: Scalar,
    /// Whether the type is fixed.
    pub fixed:  bool,
}

impl Number {
    /// An inferred integer.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self { scalar: Scalar::Int(value),
               fixed:  false, }
    }

    /// An inferred float.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self { scalar: Scalar::Float(value),
               fixed:  false, }
    }

    /// The same number with its type fixed.
    #[must_use]
    pub const fn into_fixed(self) -> Self {
        Self { fixed: true, ..self }
    }

    /// The type of the payload.
    #[must_use]
    pub const fn number_type(&self) -> NumberType {
        match self.scalar {
            Scalar::Int(_) => NumberType::Integer,
            Scalar::Float(_) => NumberType::Float,
        }
    }

    /// The payload if it is an integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self.scalar {
            Scalar::Int(n) => Some(n),
            Scalar::Float(_) => None,
        }
    }

    /// The payload if it is a float.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self.scalar {
            Scalar::Float(x) => Some(x),
            Scalar::Int(_) => None,
        }
    }

    /// Converts the payload to `to`, keeping the fixed flag.
    ///
    /// Integers widen exactly; floats narrow by truncation toward zero.
    ///
    /// # Errors
    /// Returns `RuntimeError::NotRepresentable` if the value has no
    /// representation in `to`.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::NumberType, interpreter::value::number::Number};
    ///
    /// let widened = Number::int(3).convert(NumberType::Float, 0).unwrap();
    /// assert_eq!(widened.as_f64(), Some(3.0));
    ///
    /// let narrowed = Number::float(-2.7).convert(NumberType::Integer, 0).unwrap();
    /// assert_eq!(narrowed.as_i64(), Some(-2));
    /// ```
    pub fn convert(self, to: NumberType, pos: usize) -> EvalResult<Self> {
        let scalar = match (self.scalar, to) {
            (Scalar::Int(n), NumberType::Float) => Scalar::Float(i64_to_f64_checked(n, pos)?),
            (Scalar::Float(x), NumberType::Integer) => Scalar::Int(f64_to_i64_truncated(x, pos)?),
            (scalar, _) => scalar,
        };
        Ok(Self { scalar, ..self })
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scalar {
            Scalar::Int(n) => write!(f, "{n}"),
            // Debug formatting keeps the decimal point: `2.0`, not `2`.
            Scalar::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl Numeric for Number {
    fn from_literal(literal: NumberLiteral, fixed: bool, _pos: usize) -> EvalResult<Self> {
        let scalar = match literal {
            NumberLiteral::Integer(n) => Scalar::Int(n),
            NumberLiteral::Float(x) => Scalar::Float(x),
        };
        Ok(Self { scalar, fixed })
    }

    fn is_truthy(&self) -> bool {
        match self.scalar {
            Scalar::Int(n) => n != 0,
            Scalar::Float(x) => x != 0.0,
        }
    }

    fn negate(&self, pos: usize) -> EvalResult<Self> {
        let scalar = match self.scalar {
            Scalar::Int(n) => {
                Scalar::Int(n.checked_neg().ok_or(RuntimeError::Overflow { op: BinaryOperator::Sub,
                                                                           pos })?)
            },
            Scalar::Float(x) => Scalar::Float(-x),
        };
        Ok(Self { scalar, ..*self })
    }

    /// Resolves the operation type, converts both operands to it and
    /// applies the operator.
    ///
    /// The result is never fixed: a computed value was not declared, so it
    /// may still widen in a later operation.
    fn apply(op: BinaryOperator, lhs: &Self, rhs: &Self, pos: usize) -> EvalResult<Self> {
        let ty = infer_type(lhs, op, rhs, pos)?;
        let left = lhs.convert(ty, pos)?;
        let right = rhs.convert(ty, pos)?;

        let scalar = match (left.scalar, right.scalar) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(apply_integer(op, a, b, pos)?),
            (Scalar::Float(a), Scalar::Float(b)) => apply_float(op, a, b, pos)?,
            _ => {
                return Err(RuntimeError::Unsupported { details: format!("'{op}' on mixed \
                                                                         operands"),
                                                       pos });
            },
        };

        Ok(Self { scalar,
                  fixed: false })
    }

    fn bind(value: Self,
            declared: Option<NumberType>,
            previous: Option<&Self>,
            name: &str,
            pos: usize)
            -> EvalResult<Self> {
        // A free previous value, such as a parameter bound from a literal,
        // does not constrain the new binding.
        let existing = previous.filter(|previous| previous.fixed)
                               .map(Self::number_type);
        match (declared, existing) {
            (Some(declared), Some(existing)) if declared != existing => {
                return Err(RuntimeError::ConflictingDeclaration { name: name.to_string(),
                                                                  declared,
                                                                  existing,
                                                                  pos });
            },
            _ => {},
        }

        let bound = match declared.or(existing) {
            Some(target) => coerce(value, target, pos)?,
            None => value,
        };
        Ok(bound.into_fixed())
    }
}

fn apply_float(op: BinaryOperator, lhs: f64, rhs: f64, pos: usize) -> EvalResult<Scalar> {
    let scalar = match op {
        BinaryOperator::Equal => Scalar::Int(i64::from(lhs == rhs)),
        BinaryOperator::NotEqual => Scalar::Int(i64::from(lhs != rhs)),
        BinaryOperator::Less => Scalar::Int(i64::from(lhs < rhs)),
        BinaryOperator::Greater => Scalar::Int(i64::from(lhs > rhs)),
        BinaryOperator::LessEqual => Scalar::Int(i64::from(lhs <= rhs)),
        BinaryOperator::GreaterEqual => Scalar::Int(i64::from(lhs >= rhs)),
        BinaryOperator::Add => Scalar::Float(lhs + rhs),
        BinaryOperator::Sub => Scalar::Float(lhs - rhs),
        BinaryOperator::Mul => Scalar::Float(lhs * rhs),
        BinaryOperator::Div => {
            if rhs == 0.0 {
                return Err(RuntimeError::DivisionByZero { pos });
            }
            Scalar::Float(lhs / rhs)
        },
        BinaryOperator::Pow => Scalar::Float(lhs.powf(rhs)),
        BinaryOperator::BitOr
        | BinaryOperator::BitXor
        | BinaryOperator::BitAnd
        | BinaryOperator::ShiftLeft
        | BinaryOperator::ShiftRight => {
            return Err(RuntimeError::Unsupported { details: format!("'{op}' requires int \
                                                                     operands"),
                                                   pos });
        },
    };
    Ok(scalar)
}
