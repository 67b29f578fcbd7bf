use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::{binary::parse_comparison, statement::parse_program},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A lexer paired with the current lookahead token.
///
/// Tokens are pulled from the lexer one at a time as the parser advances;
/// the whole stream is never materialized.
#[derive(Debug)]
pub struct TokenStream {
    lexer:    Lexer,
    current:  Token,
    previous: Option<TokenKind>,
}

impl TokenStream {
    /// Feeds `source` to `lexer` and reads the first token.
    ///
    /// # Errors
    /// Returns `ParseError::Lex` if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer, source: &str) -> ParseResult<Self> {
        lexer.set_input(source);
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  previous: None })
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The kind of the lookahead token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// The kind of the most recently consumed token.
    #[must_use]
    pub const fn previous(&self) -> Option<TokenKind> {
        self.previous
    }

    /// Consumes the lookahead token and returns it.
    ///
    /// # Errors
    /// Returns `ParseError::Lex` if the following token cannot be lexed.
    pub fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.previous = Some(consumed.kind);
        Ok(consumed)
    }

    /// Consumes the lookahead token if it has the expected kind.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` naming the expected and actual
    /// kinds if they differ.
    pub fn match_token(&mut self, expected: TokenKind) -> ParseResult<Token> {
        self.match_one_of(&[expected])
    }

    /// Consumes the lookahead token if its kind is any of `expected`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` if none match.
    pub fn match_one_of(&mut self, expected: &[TokenKind]) -> ParseResult<Token> {
        if expected.contains(&self.current.kind) {
            return self.advance();
        }

        let expected = expected.iter()
                               .map(ToString::to_string)
                               .collect::<Vec<_>>()
                               .join(" or ");
        Err(self.unexpected(expected))
    }

    /// Builds an `UnexpectedToken` error at the lookahead token.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.kind,
                                      pos:      self.current.pos, }
    }
}

/// Parses a complete source text into a [`Program`].
///
/// Parsing stops at the first error; no partial tree is returned.
///
/// # Parameters
/// - `lexer`: A lexer configured with the rule table to use. Its previous
///   input, if any, is replaced.
/// - `source`: The source text.
///
/// # Errors
/// Returns the first lexing or parsing error encountered.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Lexer, parser::core::parse};
///
/// let program = parse(Lexer::standard(true).unwrap(), "set x = 1; print x").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse(Lexer::standard(true).unwrap(), "set = 1").is_err());
/// ```
pub fn parse(lexer: Lexer, source: &str) -> ParseResult<Program> {
    let mut tokens = TokenStream::new(lexer, source)?;
    parse_program(&mut tokens)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_comparison(tokens)
}
