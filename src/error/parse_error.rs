use thiserror::Error;

use crate::{error::LexError, interpreter::lexer::TokenKind};

/// Represents all errors that can occur during parsing.
///
/// Parsing stops at the first error; no partial tree is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Found a token of the wrong type.
    #[error("Error at position {pos}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of the token type(s) that would have been accepted.
        expected: String,
        /// The token type encountered.
        found:    TokenKind,
        /// The byte offset of the offending token.
        pos:      usize,
    },
    /// An `if` condition was not followed by `then`.
    #[error("Error at position {pos}: Expected 'then' after if condition, found {found}.")]
    MissingThen {
        /// The token type encountered instead.
        found: TokenKind,
        /// The byte offset of the offending token.
        pos:   usize,
    },
    /// Something other than a plain name was followed by an argument list.
    #[error("Error at position {pos}: Only named functions can be called.")]
    NotCallable {
        /// The byte offset of the opening parenthesis.
        pos: usize,
    },
    /// A numeric literal could not be represented.
    #[error("Error at position {pos}: Invalid numeric literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The byte offset of the literal.
        pos:     usize,
    },
    /// The lexer failed while the parser was pulling tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
}
