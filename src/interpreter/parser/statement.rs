use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{FunctionDef, NumberType, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            block::parse_block,
            core::{ParseResult, TokenStream, parse_expression},
            utils::{parse_comma_separated, parse_identifier, skip_separators},
        },
    },
};

/// Parses statements until end of input.
///
/// Grammar: `program := statement (separator statement)*`
pub fn parse_program(tokens: &mut TokenStream) -> ParseResult<Program> {
    let statements = parse_statement_list(tokens, TokenKind::Eof)?;
    Ok(Program { statements })
}

/// Parses separator-delimited statements up to, but not including,
/// `terminator`.
///
/// Runs of separators are accepted, as are separators before the first
/// statement and after the last. The separator is optional directly before
/// the terminator and after a statement that ends with a closing brace.
///
/// # Errors
/// - `UnexpectedToken` if two statements are not separated, or if the input
///   ends before `terminator`.
/// - Propagates any errors from statement parsing.
pub(in crate::interpreter::parser) fn parse_statement_list(tokens: &mut TokenStream,
                                                           terminator: TokenKind)
                                                           -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    skip_separators(tokens)?;
    while tokens.kind() != terminator {
        if tokens.kind() == TokenKind::Eof {
            return Err(tokens.unexpected(terminator.to_string()));
        }

        let statement = parse_statement(tokens)?;
        debug!(target: "reckon::parser", ?statement, "parsed statement");
        statements.push(statement);

        if tokens.kind() == terminator {
            break;
        }
        if tokens.previous() != Some(TokenKind::RBrace) {
            tokens.match_one_of(&[TokenKind::Newline, TokenKind::Semicolon])?;
        }
        skip_separators(tokens)?;
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// The statement kind is chosen by the lookahead token:
/// - `set` or a type keyword: an assignment.
/// - `if`: a conditional.
/// - `{`: a block.
/// - `print`: a print statement.
/// - `func`: a function definition.
/// - `reset`: clears the innermost frame.
///
/// Anything else is parsed as an expression statement.
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    match tokens.kind() {
        TokenKind::Set | TokenKind::Type => parse_assignment(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::LBrace => Ok(Statement::Block(parse_block(tokens)?)),
        TokenKind::Print => {
            let pos = tokens.advance()?.pos;
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr, pos })
        },
        TokenKind::Func => parse_function_definition(tokens),
        TokenKind::Reset => {
            let pos = tokens.advance()?.pos;
            Ok(Statement::Reset { pos })
        },
        _ => Ok(Statement::Expression(parse_expression(tokens)?)),
    }
}

/// Parses `set NAME = expr`, `int NAME = expr` or `float NAME = expr`.
///
/// # Errors
/// - `UnexpectedToken` if the name or `=` is missing.
/// - Propagates any errors from the value expression.
fn parse_assignment(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let keyword = tokens.match_one_of(&[TokenKind::Set, TokenKind::Type])?;
    let declared = match keyword.kind {
        TokenKind::Type => match NumberType::from_keyword(&keyword.value) {
            Some(ty) => Some(ty),
            None => {
                return Err(ParseError::UnexpectedToken { expected: "'int' or 'float'".to_string(),
                                                         found:    keyword.kind,
                                                         pos:      keyword.pos, });
            },
        },
        _ => None,
    };

    let name = parse_identifier(tokens)?;
    tokens.match_token(TokenKind::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name,
                               declared,
                               value,
                               pos: keyword.pos })
}

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     if <condition> then <statement> [else <statement>]
/// ```
/// The `else` is checked right after the then-branch, so it binds to the
/// nearest unmatched `if`.
///
/// # Errors
/// - `MissingThen` if the condition is not followed by `then`.
/// - Propagates any errors from the condition or branches.
fn parse_if(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let pos = tokens.match_token(TokenKind::If)?.pos;
    let condition = parse_expression(tokens)?;

    if tokens.kind() != TokenKind::Then {
        return Err(ParseError::MissingThen { found: tokens.kind(),
                                             pos:   tokens.current().pos, });
    }
    tokens.advance()?;

    let then_branch = Box::new(parse_statement(tokens)?);
    let else_branch = if tokens.kind() == TokenKind::Else {
        tokens.advance()?;
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       pos })
}

/// Parses a function definition.
///
/// Grammar: `function := "func" IDENTIFIER "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" block`
///
/// # Errors
/// Returns a `ParseError` if the name, parameter list or body is malformed.
fn parse_function_definition(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let pos = tokens.match_token(TokenKind::Func)?.pos;
    let name = parse_identifier(tokens)?;

    tokens.match_token(TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                 params,
                                                 body,
                                                 pos })))
}
