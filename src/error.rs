/// Lexing errors.
///
/// Raised when no lexical rule matches at the current position, or when a
/// rule table cannot be compiled.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: unexpected tokens, a missing `then`, calls on something that
/// is not a name and malformed literals. Lexing errors hit while parsing are
/// carried through unchanged.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// names, arity mismatches, type errors from the integer/float inference
/// rules and arithmetic failures such as division by zero.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure taxonomy shared by every pipeline stage.
///
/// Callers can branch on the kind instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No lexical rule matched.
    Lex,
    /// The token stream does not follow the grammar.
    Parse,
    /// An identifier or function name is not bound.
    Name,
    /// A call supplied the wrong number of arguments.
    Arity,
    /// Fixed types clash, a conversion is not allowed, or a value has the
    /// wrong shape.
    Type,
    /// Division by zero, overflow and similar numeric failures.
    Arithmetic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::Name => "NameError",
            Self::Arity => "ArityError",
            Self::Type => "TypeError",
            Self::Arithmetic => "ArithmeticError",
        };
        write!(f, "{name}")
    }
}

/// Any error surfaced by the top-level entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised by the lexer.
    #[error(transparent)]
    Lex(LexError),
    /// Raised by the parser.
    #[error(transparent)]
    Parse(ParseError),
    /// Raised by the evaluator.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the taxonomy kind of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("1 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lex(e) => Self::Lex(e),
            other => Self::Parse(other),
        }
    }
}
