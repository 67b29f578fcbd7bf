/// The rule table of the calculator language.
pub mod rules;

use regex::Regex;
use tracing::trace;

use crate::error::LexError;

/// The symbolic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `set`
    Set,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `func`
    Func,
    /// `print`
    Print,
    /// `reset`
    Reset,
    /// A type keyword: `int` or `float`.
    Type,
    /// A line break. Separates statements like `;`.
    Newline,
    /// Decimal literal tokens, such as `3.14` or `.5`.
    Decimal,
    /// Integer literal tokens, such as `42`.
    Number,
    /// Variable or function names such as `x` or `square`.
    Identifier,
    /// `**`
    Power,
    /// `!=`
    NotEqual,
    /// `==`
    EqualEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>>`
    ShiftRight,
    /// `<<`
    ShiftLeft,
    /// `&`
    Ampersand,
    /// `^`
    Caret,
    /// `|`
    Pipe,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Set => "'set'",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::Else => "'else'",
            Self::Func => "'func'",
            Self::Print => "'print'",
            Self::Reset => "'reset'",
            Self::Type => "TYPE",
            Self::Newline => "NEWLINE",
            Self::Decimal => "DECIMAL",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Power => "'**'",
            Self::NotEqual => "'!='",
            Self::EqualEqual => "'=='",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
            Self::ShiftRight => "'>>'",
            Self::ShiftLeft => "'<<'",
            Self::Ampersand => "'&'",
            Self::Caret => "'^'",
            Self::Pipe => "'|'",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Assign => "'='",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical rule: a regular expression and the kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The pattern, unanchored.
    pub pattern: &'static str,
    /// The kind assigned to text this rule matches.
    pub kind:    TokenKind,
}

/// Represents a lexical token in the source input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first character.
    pub pos:   usize,
    /// The matched text. Empty for [`TokenKind::Eof`].
    pub value: String,
    /// The category.
    pub kind:  TokenKind,
}

/// Produces tokens one at a time from an ordered rule table.
///
/// At each position the union of all rules is matched first; the matched
/// text is then classified by the first rule, in declaration order, that
/// accepts it in full.
#[derive(Debug, Clone)]
pub struct Lexer {
    combined:        Regex,
    classifiers:     Vec<(Regex, TokenKind)>,
    input:           String,
    pos:             usize,
    skip_whitespace: bool,
}

impl Lexer {
    /// Compiles a rule table into a lexer with empty input.
    ///
    /// # Parameters
    /// - `rules`: Patterns with their token kinds, highest priority first.
    /// - `skip_whitespace`: Whether spaces, tabs, carriage returns and form
    ///   feeds are dropped between tokens. Newlines are never skipped.
    ///
    /// # Errors
    /// Returns `LexError::InvalidRule` if a pattern does not compile.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Lexer, TokenKind, rules::STANDARD_RULES};
    ///
    /// let mut lexer = Lexer::new(STANDARD_RULES, true).unwrap();
    /// lexer.set_input("set x = 2");
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Set);
    /// ```
    pub fn new(rules: &[Rule], skip_whitespace: bool) -> Result<Self, LexError> {
        let mut classifiers = Vec::with_capacity(rules.len());
        for rule in rules {
            classifiers.push((compile(&format!("^(?:{})$", rule.pattern), rule.pattern)?, rule.kind));
        }

        let union = rules.iter()
                         .map(|rule| format!("(?:{})", rule.pattern))
                         .collect::<Vec<_>>()
                         .join("|");
        let combined = compile(&format!("^(?:{union})"), &union)?;

        Ok(Self { combined,
                  classifiers,
                  input: String::new(),
                  pos: 0,
                  skip_whitespace })
    }

    /// Builds a lexer over [`rules::STANDARD_RULES`].
    ///
    /// # Errors
    /// Never fails in practice; the standard rules are valid patterns.
    pub fn standard(skip_whitespace: bool) -> Result<Self, LexError> {
        Self::new(rules::STANDARD_RULES, skip_whitespace)
    }

    /// Replaces the input and rewinds to its start.
    pub fn set_input(&mut self, input: &str) {
        input.clone_into(&mut self.input);
        self.pos = 0;
    }

    /// Rewinds to the start of the current input.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns the next token, or a [`TokenKind::Eof`] token once the input
    /// is exhausted. Calling again after the end keeps returning `Eof`.
    ///
    /// # Errors
    /// Returns `LexError::NoMatch` if no rule matches at the current
    /// position.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::standard(true).unwrap();
    /// lexer.set_input("2 ** 3  ");
    ///
    /// let kinds: Vec<TokenKind> = (0..4).map(|_| lexer.next_token().unwrap().kind)
    ///                                   .collect();
    /// assert_eq!(kinds,
    ///            [TokenKind::Number, TokenKind::Power, TokenKind::Number, TokenKind::Eof]);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.skip_whitespace {
            self.skip_blanks();
        }

        if self.pos >= self.input.len() {
            return Ok(Token { pos:   self.input.len(),
                              value: String::new(),
                              kind:  TokenKind::Eof, });
        }

        let rest = &self.input[self.pos..];
        let matched = match self.combined.find(rest) {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => {
                return Err(LexError::NoMatch { pos:     self.pos,
                                               snippet: rest.chars().take(10).collect(), });
            },
        };

        let kind = self.classify(matched)
                       .ok_or_else(|| LexError::Unclassified { value: matched.to_string(),
                                                               pos:   self.pos, })?;

        let token = Token { pos: self.pos,
                            value: matched.to_string(),
                            kind };
        self.pos += matched.len();

        trace!(target: "reckon::lexer", pos = token.pos, kind = %token.kind, value = %token.value, "token");
        Ok(token)
    }

    /// Iterates over the remaining tokens, excluding the final `Eof`.
    ///
    /// The iteration stops after the first error. Call [`Lexer::reset`] to
    /// iterate again.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens { lexer: self,
                 done:  false, }
    }

    fn classify(&self, text: &str) -> Option<TokenKind> {
        self.classifiers
            .iter()
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, kind)| *kind)
    }

    fn skip_blanks(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start_matches([' ', '\t', '\r', '\x0c']);
        self.pos += rest.len() - trimmed.len();
    }
}

fn compile(source: &str, pattern: &str) -> Result<Regex, LexError> {
    Regex::new(source).map_err(|source| LexError::InvalidRule { pattern: pattern.to_string(),
                                                                source })
}

/// Lazy token sequence returned by [`Lexer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    lexer: &'a mut Lexer,
    done:  bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}
