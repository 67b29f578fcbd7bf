use crate::interpreter::lexer::{Rule, TokenKind};

const fn rule(pattern: &'static str, kind: TokenKind) -> Rule {
    Rule { pattern, kind }
}

/// The rule table of the calculator language, in priority order.
///
/// Keywords come first and end in a word boundary so that names such as
/// `settle` or `iffy` stay identifiers. Multi-character operators precede
/// their single-character prefixes.
pub const STANDARD_RULES: &[Rule] = &[rule(r"set\b", TokenKind::Set),
                                      rule(r"if\b", TokenKind::If),
                                      rule(r"then\b", TokenKind::Then),
                                      rule(r"else\b", TokenKind::Else),
                                      rule(r"func\b", TokenKind::Func),
                                      rule(r"print\b", TokenKind::Print),
                                      rule(r"reset\b", TokenKind::Reset),
                                      rule(r"int\b", TokenKind::Type),
                                      rule(r"float\b", TokenKind::Type),
                                      rule(r"\n", TokenKind::Newline),
                                      rule(r"[0-9]*\.[0-9]+", TokenKind::Decimal),
                                      rule(r"[0-9]+", TokenKind::Number),
                                      rule(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier),
                                      rule(r"\*\*", TokenKind::Power),
                                      rule(r"!=", TokenKind::NotEqual),
                                      rule(r"==", TokenKind::EqualEqual),
                                      rule(r">=", TokenKind::GreaterEqual),
                                      rule(r"<=", TokenKind::LessEqual),
                                      rule(r">>", TokenKind::ShiftRight),
                                      rule(r"<<", TokenKind::ShiftLeft),
                                      rule(r"&", TokenKind::Ampersand),
                                      rule(r"\^", TokenKind::Caret),
                                      rule(r"\|", TokenKind::Pipe),
                                      rule(r"<", TokenKind::Less),
                                      rule(r">", TokenKind::Greater),
                                      rule(r"\+", TokenKind::Plus),
                                      rule(r"-", TokenKind::Minus),
                                      rule(r"\*", TokenKind::Star),
                                      rule(r"/", TokenKind::Slash),
                                      rule(r"\(", TokenKind::LParen),
                                      rule(r"\)", TokenKind::RParen),
                                      rule(r"\{", TokenKind::LBrace),
                                      rule(r"\}", TokenKind::RBrace),
                                      rule(r"=", TokenKind::Assign),
                                      rule(r";", TokenKind::Semicolon),
                                      rule(r",", TokenKind::Comma)];
