use thiserror::Error;

use crate::{
    ast::{BinaryOperator, NumberType},
    error::ErrorKind,
};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a name that no frame binds.
    #[error("Error at position {pos}: Unbound identifier '{name}'.")]
    UnboundName {
        /// The name.
        name: String,
        /// The byte offset of the reference.
        pos:  usize,
    },
    /// Called a function that is not defined.
    #[error("Error at position {pos}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The byte offset of the call.
        pos:  usize,
    },
    /// Called a name that is bound to a number.
    #[error("Error at position {pos}: '{name}' is not a function.")]
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The byte offset of the call.
        pos:  usize,
    },
    /// Used a function name where a number was expected.
    #[error("Error at position {pos}: Function '{name}' cannot be used as a value.")]
    NotAValue {
        /// The function name.
        name: String,
        /// The byte offset of the reference.
        pos:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at position {pos}: '{name}' takes {expected} argument(s) but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The number of parameters.
        expected: usize,
        /// The number of arguments.
        found:    usize,
        /// The byte offset of the call.
        pos:      usize,
    },
    /// Two fixed operands of different types met in one operator.
    #[error("Error at position {pos}: Type mismatch: {left} {op} {right}.")]
    TypeMismatch {
        /// Left operand type.
        left:  NumberType,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand type.
        right: NumberType,
        /// The byte offset of the operator.
        pos:   usize,
    },
    /// A value cannot be converted to the required type without truncation.
    #[error("Error at position {pos}: Cannot convert {from} to {to}.")]
    NotConvertible {
        /// The value's type.
        from: NumberType,
        /// The required type.
        to:   NumberType,
        /// The byte offset of the expression.
        pos:  usize,
    },
    /// A name was redeclared with a different explicit type in the same
    /// frame.
    #[error("Error at position {pos}: '{name}' is already {existing}, cannot redeclare it as {declared}.")]
    ConflictingDeclaration {
        /// The name.
        name:     String,
        /// The newly declared type.
        declared: NumberType,
        /// The type already bound.
        existing: NumberType,
        /// The byte offset of the assignment.
        pos:      usize,
    },
    /// The operation is not available for this kind of value.
    #[error("Error at position {pos}: Type error: {details}.")]
    Unsupported {
        /// Details about the failure.
        details: String,
        /// The byte offset of the expression.
        pos:     usize,
    },
    /// A statement that yields no value was used as an operand.
    #[error("Error at position {pos}: Expression produced no value.")]
    VoidValue {
        /// The byte offset of the expression.
        pos: usize,
    },
    /// Attempted division by zero.
    #[error("Error at position {pos}: Division by zero.")]
    DivisionByZero {
        /// The byte offset of the operator.
        pos: usize,
    },
    /// Raised an integer to a negative power.
    #[error("Error at position {pos}: Integer power with negative exponent {exponent}.")]
    NegativeExponent {
        /// The exponent.
        exponent: i64,
        /// The byte offset of the operator.
        pos:      usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error at position {pos}: Integer overflow while computing '{op}'.")]
    Overflow {
        /// The operator.
        op:  BinaryOperator,
        /// The byte offset of the operator.
        pos: usize,
    },
    /// Shift amount outside `0..64`.
    #[error("Error at position {pos}: Invalid shift amount {amount}.")]
    InvalidShift {
        /// The shift amount.
        amount: i64,
        /// The byte offset of the operator.
        pos:    usize,
    },
    /// A number has no exact representation in the target type.
    #[error("Error at position {pos}: {value} is not representable as {to}.")]
    NotRepresentable {
        /// The value, rendered as text.
        value: String,
        /// The target type.
        to:    NumberType,
        /// The byte offset of the expression.
        pos:   usize,
    },
}

impl RuntimeError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundName { .. } | Self::UnknownFunction { .. } | Self::NotAFunction { .. } => {
                ErrorKind::Name
            },
            Self::ArgumentCountMismatch { .. } => ErrorKind::Arity,
            Self::NotAValue { .. }
            | Self::TypeMismatch { .. }
            | Self::NotConvertible { .. }
            | Self::ConflictingDeclaration { .. }
            | Self::Unsupported { .. }
            | Self::VoidValue { .. } => ErrorKind::Type,
            Self::DivisionByZero { .. }
            | Self::NegativeExponent { .. }
            | Self::Overflow { .. }
            | Self::InvalidShift { .. }
            | Self::NotRepresentable { .. } => ErrorKind::Arithmetic,
        }
    }
}
