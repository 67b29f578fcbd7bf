use crate::{
    ast::{BinaryOperator, ChainLink, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
        },
    },
};

type ParseLevel = fn(&mut TokenStream) -> ParseResult<Expr>;

/// Parses comparison expressions.
///
/// The rule is: `comparison := bit_or (("==" | "!=" | "<" | ">" | "<=" | ">=") bit_or)*`
pub fn parse_comparison(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens,
                    &[TokenKind::EqualEqual,
                      TokenKind::NotEqual,
                      TokenKind::Less,
                      TokenKind::Greater,
                      TokenKind::LessEqual,
                      TokenKind::GreaterEqual],
                    parse_bit_or)
}

/// Parses bitwise or: `bit_or := bit_xor ("|" bit_xor)*`
pub fn parse_bit_or(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::Pipe], parse_bit_xor)
}

/// Parses bitwise exclusive or: `bit_xor := bit_and ("^" bit_and)*`
pub fn parse_bit_xor(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::Caret], parse_bit_and)
}

/// Parses bitwise and: `bit_and := shift ("&" shift)*`
pub fn parse_bit_and(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::Ampersand], parse_shift)
}

/// Parses shifts: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::ShiftLeft, TokenKind::ShiftRight], parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::Plus, TokenKind::Minus], parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub fn parse_multiplicative(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_left_fold(tokens, &[TokenKind::Star, TokenKind::Slash], parse_power)
}

/// Parses exponentiation (`**`).
///
/// Exponentiation is right-associative: the exponent is itself a power
/// expression, so `2 ** 3 ** 2` becomes `2 ** (3 ** 2)`.
///
/// The rule is: `power := unary ("**" power)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the base.
///
/// # Returns
/// The base alone, or a one-link chain whose operand is the nested power.
pub fn parse_power(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let base = parse_unary(tokens)?;
    if tokens.kind() != TokenKind::Power {
        return Ok(base);
    }

    let pos = tokens.advance()?.pos;
    let exponent = parse_power(tokens)?;

    Ok(Expr::Chain { first: Box::new(base),
                     rest:  vec![ChainLink { op: BinaryOperator::Pow,
                                             operand: exponent,
                                             pos }], })
}

/// Parses one left-associative precedence level.
///
/// Parses one operand with `next`, then keeps folding `(operator, operand)`
/// links while the lookahead is one of `operators`. A level with no
/// operator returns the operand unchanged instead of a one-element chain.
fn parse_left_fold(tokens: &mut TokenStream,
                   operators: &[TokenKind],
                   next: ParseLevel)
                   -> ParseResult<Expr> {
    let first = next(tokens)?;
    let mut rest = Vec::new();

    while operators.contains(&tokens.kind()) {
        let Some(op) = token_to_binary_operator(tokens.kind()) else {
            return Err(tokens.unexpected("binary operator"));
        };
        let pos = tokens.advance()?.pos;
        let operand = next(tokens)?;
        rest.push(ChainLink { op, operand, pos });
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::Chain { first: Box::new(first),
                     rest })
}

/// Maps a token kind to its binary operator.
///
/// # Returns
/// - `Some(BinaryOperator)` if the kind denotes a binary operator.
/// - `None` otherwise.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        TokenKind::Caret => Some(BinaryOperator::BitXor),
        TokenKind::Ampersand => Some(BinaryOperator::BitAnd),
        TokenKind::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        TokenKind::ShiftRight => Some(BinaryOperator::ShiftRight),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Power => Some(BinaryOperator::Pow),
        _ => None,
    }
}
