//! Run configuration.
//!
//! Configuration is a plain value passed to [`run`](crate::run) and
//! [`logger::init`](crate::logger::init); there is no global instance.
//!
//! # Example
//! ```
//! use reckon::config::{Config, LogConfig, Mode};
//! use tracing::Level;
//!
//! let config = Config { mode: Mode::Typed,
//!                       log: LogConfig { global: Level::DEBUG,
//!                                        ..Default::default() },
//!                       ..Default::default() };
//!
//! assert_eq!(config.mode, Mode::Typed);
//! ```

use tracing::Level;

/// Which numeric semantics a script runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain 64-bit integers.
    #[default]
    Integer,
    /// Integers and floats with type inference.
    Typed,
}

/// Everything [`run`](crate::run) needs besides the source text.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Numeric semantics.
    pub mode:       Mode,
    /// Lexer options.
    pub lexer:      LexerConfig,
    /// Log levels per phase.
    pub log:        LogConfig,
    /// Print the program's final value if it has one.
    pub auto_print: bool,
    /// Print the syntax tree before evaluating.
    pub dump_ast:   bool,
}

/// Lexer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Drop spaces, tabs, carriage returns and form feeds between tokens.
    pub skip_whitespace: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { skip_whitespace: true }
    }
}

/// Log levels, one per pipeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for everything without a specific setting.
    pub global: Level,
    /// Lexer level; `None` uses `global`.
    pub lexer:  Option<Level>,
    /// Parser level; `None` uses `global`.
    pub parser: Option<Level>,
    /// Evaluator level; `None` uses `global`.
    pub eval:   Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { global: Level::WARN,
               lexer:  None,
               parser: None,
               eval:   None, }
    }
}

/// A pipeline phase with its own log target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Tokenizing, target `reckon::lexer`.
    Lexer,
    /// Parsing, target `reckon::parser`.
    Parser,
    /// Evaluation, target `reckon::eval`.
    Eval,
}

impl Phase {
    /// The `tracing` target events of this phase are logged under.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Lexer => "reckon::lexer",
            Self::Parser => "reckon::parser",
            Self::Eval => "reckon::eval",
        }
    }
}

impl LogConfig {
    /// The effective level of `phase`: its own setting if present, else the
    /// global level.
    ///
    /// # Example
    /// ```
    /// use reckon::config::{LogConfig, Phase};
    /// use tracing::Level;
    ///
    /// let log = LogConfig { lexer: Some(Level::TRACE),
    ///                       ..Default::default() };
    ///
    /// assert_eq!(log.level_for(Phase::Lexer), Level::TRACE);
    /// assert_eq!(log.level_for(Phase::Eval), Level::WARN);
    /// ```
    #[must_use]
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
            Phase::Eval => self.eval,
        };
        specific.unwrap_or(self.global)
    }
}
