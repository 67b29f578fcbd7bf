use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Error)]
pub enum LexError {
    /// No rule matched at the given position.
    #[error("Error at position {pos}: Could not match anything at '{snippet}'.")]
    NoMatch {
        /// The byte offset into the source.
        pos:     usize,
        /// A short excerpt of the unmatched input.
        snippet: String,
    },
    /// The combined pattern matched, but no single rule accepts the match.
    #[error("Error at position {pos}: '{value}' matched but no rule classifies it.")]
    Unclassified {
        /// The matched text.
        value: String,
        /// The byte offset into the source.
        pos:   usize,
    },
    /// A rule pattern is not a valid regular expression.
    #[error("Invalid lexical rule '{pattern}': {source}")]
    InvalidRule {
        /// The offending pattern.
        pattern: String,
        /// The regex compilation failure.
        source:  regex::Error,
    },
}
