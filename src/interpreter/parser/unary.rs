use crate::{
    ast::{Expr, NumberLiteral, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses unary negation.
///
/// Negation is right-associative and may be repeated, so `--x` is `-(-x)`.
///
/// The rule is: `unary := "-" unary | call`
pub fn parse_unary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    if tokens.kind() != TokenKind::Minus {
        return parse_call(tokens);
    }

    let pos = tokens.advance()?.pos;
    let operand = parse_unary(tokens)?;

    Ok(Expr::Unary { op: UnaryOperator::Negate,
                     operand: Box::new(operand),
                     pos })
}

/// Parses a function call, or falls through to a primary expression.
///
/// A primary that is a plain name and is immediately followed by `(` becomes
/// a call with zero or more comma-separated arguments.
///
/// The rule is: `call := primary ("(" (expression ("," expression)*)? ")")?`
///
/// # Errors
/// - `NotCallable` if the callee is not a name, or if a call result is
///   itself called.
/// - Propagates any errors from the argument expressions.
pub fn parse_call(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let target = parse_primary(tokens)?;
    if tokens.kind() != TokenKind::LParen {
        return Ok(target);
    }

    let Expr::Identifier { name, pos } = target else {
        return Err(ParseError::NotCallable { pos: tokens.current().pos });
    };
    tokens.advance()?;
    let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;

    if tokens.kind() == TokenKind::LParen {
        return Err(ParseError::NotCallable { pos: tokens.current().pos });
    }

    Ok(Expr::Call { name, arguments, pos })
}

/// Parses a primary expression.
///
/// Supports:
/// - integer literals (`NUMBER`),
/// - decimal literals (`DECIMAL`),
/// - identifiers,
/// - parenthesized expressions.
///
/// Literals are never fixed; only a declaration fixes a type.
///
/// # Errors
/// - `InvalidLiteral` if an integer literal does not fit in 64 bits.
/// - `UnexpectedToken` if no expression starts at the lookahead token.
pub fn parse_primary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.kind() {
        TokenKind::Number => {
            let token = tokens.advance()?;
            let value = token.value
                             .parse::<i64>()
                             .map_err(|_| ParseError::InvalidLiteral { literal: token.value.clone(),
                                                                       pos:     token.pos, })?;
            Ok(Expr::Number { value: NumberLiteral::Integer(value),
                              fixed: false,
                              pos:   token.pos, })
        },
        TokenKind::Decimal => {
            let token = tokens.advance()?;
            let value = token.value
                             .parse::<f64>()
                             .map_err(|_| ParseError::InvalidLiteral { literal: token.value.clone(),
                                                                       pos:     token.pos, })?;
            Ok(Expr::Number { value: NumberLiteral::Float(value),
                              fixed: false,
                              pos:   token.pos, })
        },
        TokenKind::Identifier => {
            let token = tokens.advance()?;
            Ok(Expr::Identifier { name: token.value,
                                  pos:  token.pos, })
        },
        TokenKind::LParen => {
            tokens.advance()?;
            let expr = parse_expression(tokens)?;
            tokens.match_token(TokenKind::RParen)?;
            Ok(expr)
        },
        _ => Err(tokens.unexpected("expression")),
    }
}
