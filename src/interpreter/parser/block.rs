use crate::{
    ast::Block,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_statement_list,
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block holds the same separator-delimited statement list as a program.
/// Leading and trailing separators inside the block are ignored.
///
/// Grammar: `block := "{" program "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The parsed block, positioned at its opening brace.
///
/// # Errors
/// - `UnexpectedToken` if the opening or closing brace is missing.
/// - Propagates any errors from the statements inside.
pub fn parse_block(tokens: &mut TokenStream) -> ParseResult<Block> {
    let pos = tokens.match_token(TokenKind::LBrace)?.pos;
    let statements = parse_statement_list(tokens, TokenKind::RBrace)?;
    tokens.match_token(TokenKind::RBrace)?;

    Ok(Block { statements, pos })
}
