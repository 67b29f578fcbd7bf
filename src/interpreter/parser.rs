/// Core parsing entry points.
///
/// Defines the token cursor with its single lookahead token, the top-level
/// `parse` function and the expression entry point.
pub mod core;

/// Statement parsing.
///
/// Implements assignments, declarations, `if`, `print`, `func` and `reset`,
/// plus the separator-delimited statement lists shared by programs and
/// blocks.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement lists.
pub mod block;

/// Binary operator parsing.
///
/// One function per precedence level, from comparison down to power.
pub mod binary;

/// Unary, call and primary expression parsing.
pub mod unary;

/// Utility functions for the parser.
///
/// Comma-separated lists, identifiers and separator skipping.
pub mod utils;
