//! # reckon
//!
//! reckon is a small calculator language written in Rust.
//! Source text is tokenized by an ordered table of regular-expression rules,
//! parsed by recursive descent into a syntax tree and evaluated by a tree
//! walker, either over plain integers or over integers and floats with type
//! inference.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    config::{Config, LexerConfig, Mode},
    error::Error,
    interpreter::{
        evaluator::{
            core::{Evaluator, IntegerEvaluator, TypedEvaluator},
            output::Stdout,
        },
        lexer::Lexer,
        parser,
        value::{core::Numeric, number::Number},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator and the tree renderer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches byte offsets to AST nodes for error reporting.
/// - Renders trees as indented text.
pub mod ast;
/// Run configuration: numeric mode, lexer options and log levels.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code and
/// maps each of them to one kind of a small taxonomy, so callers can tell
/// failures apart without matching on messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Classifies every error by [`ErrorKind`](error::ErrorKind).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Installs the `tracing` subscriber used by the command-line tool.
pub mod logger;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32` and `f64` without silent data loss.
pub mod util;

/// Parses source text into a syntax tree.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` for the first failure.
///
/// # Examples
/// ```
/// use reckon::{config::LexerConfig, parse};
///
/// let first = parse("print 2 ** 3 ** 2", &LexerConfig::default()).unwrap();
/// let second = parse("print 2 ** 3 ** 2", &LexerConfig::default()).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn parse(source: &str, config: &LexerConfig) -> Result<Program, Error> {
    let lexer = Lexer::standard(config.skip_whitespace)?;
    Ok(parser::core::parse(lexer, source)?)
}

/// Evaluates source text with plain integer semantics and returns the value
/// of its last statement.
///
/// `print` statements write to standard output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::evaluate;
///
/// assert_eq!(evaluate("4-6+3").unwrap(), Some(1));
/// assert_eq!(evaluate("-2").unwrap(), Some(-2));
///
/// // 'x' is not defined
/// assert!(evaluate("set y = x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<i64>, Error> {
    let program = parse(source, &LexerConfig::default())?;
    Ok(IntegerEvaluator::<Stdout>::new().eval_program(&program)?)
}

/// Evaluates source text with integer/float type inference and returns the
/// value of its last statement.
///
/// `print` statements write to standard output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::evaluate_typed;
///
/// let value = evaluate_typed("float v = 3.12; float p = 3.14; v + p").unwrap()
///                                                                    .unwrap();
/// assert_eq!(value.to_string(), "6.26");
/// ```
pub fn evaluate_typed(source: &str) -> Result<Option<Number>, Error> {
    let program = parse(source, &LexerConfig::default())?;
    Ok(TypedEvaluator::<Stdout>::new().eval_program(&program)?)
}

/// Runs a script as configured, printing to standard output.
///
/// With `dump_ast` the syntax tree is printed before evaluation; with
/// `auto_print` the final value is printed after it, if there is one.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Values printed
/// before a runtime error stay printed.
pub fn run(source: &str, config: &Config) -> Result<(), Error> {
    let program = parse(source, &config.lexer)?;
    debug!(target: "reckon::parser", statements = program.statements.len(), "parsed program");

    if config.dump_ast {
        print!("{}", program.render_tree());
    }

    match config.mode {
        Mode::Integer => run_with::<i64>(&program, config.auto_print),
        Mode::Typed => run_with::<Number>(&program, config.auto_print),
    }
}

fn run_with<V: Numeric>(program: &Program, auto_print: bool) -> Result<(), Error> {
    let result = Evaluator::<V, Stdout>::new().eval_program(program)?;

    if auto_print {
        if let Some(value) = result {
            println!("{value}");
        }
    }

    Ok(())
}
