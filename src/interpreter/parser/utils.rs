use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, TokenStream},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists and parameter lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - anything other than `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream,
    parse_item: impl Fn(&mut TokenStream) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.kind() == closing {
        tokens.advance()?;

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        let separator = tokens.match_one_of(&[TokenKind::Comma, closing])?;
        if separator.kind == closing {
            break;
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `UnexpectedToken` if the lookahead token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream)
                                                       -> ParseResult<String> {
    Ok(tokens.match_token(TokenKind::Identifier)?.value)
}

/// Returns `true` for the statement separators, newline and `;`.
pub(in crate::interpreter::parser) const fn is_separator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Newline | TokenKind::Semicolon)
}

/// Consumes any run of statement separators.
pub(in crate::interpreter::parser) fn skip_separators(tokens: &mut TokenStream)
                                                      -> ParseResult<()> {
    while is_separator(tokens.kind()) {
        tokens.advance()?;
    }
    Ok(())
}
