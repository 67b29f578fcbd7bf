use reckon::{
    ast::{BinaryOperator, ChainLink, Expr, NumberLiteral, NumberType, Statement, UnaryOperator},
    config::LexerConfig,
    error::{Error, ErrorKind, LexError, ParseError},
    interpreter::lexer::{Lexer, Rule, Token, TokenKind},
    parse,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::standard(true).unwrap();
    lexer.set_input(src);
    lexer.tokens().map(|token| token.unwrap().kind).collect()
}

fn single_expression(src: &str) -> Expr {
    let program = parse(src, &LexerConfig::default()).unwrap();
    match program.statements.as_slice() {
        [Statement::Expression(expr)] => expr.clone(),
        other => panic!("Expected a single expression, got {other:?}"),
    }
}

fn number(value: i64, pos: usize) -> Expr {
    Expr::Number { value: NumberLiteral::Integer(value),
                   fixed: false,
                   pos }
}

#[test]
fn keywords_and_types() {
    assert_eq!(kinds("set if then else func print reset int float"),
               [TokenKind::Set,
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Else,
                TokenKind::Func,
                TokenKind::Print,
                TokenKind::Reset,
                TokenKind::Type,
                TokenKind::Type]);
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(kinds("settle iffy printer integer floats _x x2"),
               [TokenKind::Identifier; 7]);
}

#[test]
fn longest_operators_win() {
    assert_eq!(kinds("** != == >= <= >> << & ^ | < > + - * / = ; ,"),
               [TokenKind::Power,
                TokenKind::NotEqual,
                TokenKind::EqualEqual,
                TokenKind::GreaterEqual,
                TokenKind::LessEqual,
                TokenKind::ShiftRight,
                TokenKind::ShiftLeft,
                TokenKind::Ampersand,
                TokenKind::Caret,
                TokenKind::Pipe,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Assign,
                TokenKind::Semicolon,
                TokenKind::Comma]);
    assert_eq!(kinds("2**3"), [TokenKind::Number, TokenKind::Power, TokenKind::Number]);
}

#[test]
fn numbers_and_decimals() {
    assert_eq!(kinds("12 1.5 .25 007"),
               [TokenKind::Number, TokenKind::Decimal, TokenKind::Decimal, TokenKind::Number]);
}

#[test]
fn newlines_are_tokens_but_blanks_are_not() {
    assert_eq!(kinds("  x \t=\r\n\n 1  "),
               [TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Number]);
}

#[test]
fn tokens_carry_text_and_position() {
    let mut lexer = Lexer::standard(true).unwrap();
    lexer.set_input("set abc = 42");
    let tokens: Vec<Token> = lexer.tokens().map(Result::unwrap).collect();

    assert_eq!(tokens[1],
               Token { pos:   4,
                       value: "abc".to_string(),
                       kind:  TokenKind::Identifier, });
    assert_eq!(tokens[3].pos, 10);
    assert_eq!(tokens[3].value, "42");
}

#[test]
fn eof_repeats_at_the_end() {
    let mut lexer = Lexer::standard(true).unwrap();
    lexer.set_input("1   ");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);

    for _ in 0..3 {
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.pos, 4);
        assert!(token.value.is_empty());
    }
}

#[test]
fn reset_rewinds_the_input() {
    let mut lexer = Lexer::standard(true).unwrap();
    lexer.set_input("a + b");

    let first: Vec<Token> = lexer.tokens().map(Result::unwrap).collect();
    lexer.reset();
    let second: Vec<Token> = lexer.tokens().map(Result::unwrap).collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn unmatched_input_reports_its_position() {
    let mut lexer = Lexer::standard(true).unwrap();
    lexer.set_input("1 + $oops");

    let results: Vec<_> = lexer.tokens().collect();
    assert_eq!(results.len(), 3);
    match &results[2] {
        Err(LexError::NoMatch { pos, snippet }) => {
            assert_eq!(*pos, 4);
            assert_eq!(snippet, "$oops");
        },
        other => panic!("Expected NoMatch, got {other:?}"),
    }
}

#[test]
fn whitespace_is_an_error_when_not_skipped() {
    let mut lexer = Lexer::standard(false).unwrap();
    lexer.set_input("1 2");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number);
    assert!(matches!(lexer.next_token(), Err(LexError::NoMatch { pos: 1, .. })));

    let config = LexerConfig { skip_whitespace: false };
    assert!(parse("1+2", &config).is_ok());
    assert!(parse("1 + 2", &config).is_err());
}

#[test]
fn custom_rule_tables() {
    let rules = [Rule { pattern: "[0-9]+",
                        kind:    TokenKind::Number, },
                 Rule { pattern: r"\+",
                        kind:    TokenKind::Plus, }];
    let mut lexer = Lexer::new(&rules, true).unwrap();
    lexer.set_input("1 + 22");
    let kinds: Vec<TokenKind> = lexer.tokens().map(|t| t.unwrap().kind).collect();
    assert_eq!(kinds, [TokenKind::Number, TokenKind::Plus, TokenKind::Number]);

    let broken = [Rule { pattern: "(",
                         kind:    TokenKind::LParen, }];
    assert!(matches!(Lexer::new(&broken, true), Err(LexError::InvalidRule { .. })));
}

#[test]
fn additive_chains_fold_left() {
    let expr = single_expression("1 + 2 - 3");
    let expected = Expr::Chain { first: Box::new(number(1, 0)),
                                 rest:  vec![ChainLink { op:      BinaryOperator::Add,
                                                         operand: number(2, 4),
                                                         pos:     2, },
                                             ChainLink { op:      BinaryOperator::Sub,
                                                         operand: number(3, 8),
                                                         pos:     6, }], };
    assert_eq!(expr, expected);
}

#[test]
fn power_nests_to_the_right() {
    let expr = single_expression("2**3**2");
    let Expr::Chain { first, rest } = expr else {
        panic!("Expected a chain");
    };
    assert_eq!(*first, number(2, 0));
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].op, BinaryOperator::Pow);
    assert!(matches!(&rest[0].operand, Expr::Chain { rest, .. } if rest[0].op == BinaryOperator::Pow));
}

#[test]
fn single_operands_are_not_wrapped() {
    assert_eq!(single_expression("7"), number(7, 0));
    assert_eq!(single_expression("((7))"), number(7, 2));
}

#[test]
fn unary_minus_nests() {
    let expr = single_expression("--x");
    let Expr::Unary { op, operand, pos } = expr else {
        panic!("Expected a unary expression");
    };
    assert_eq!(op, UnaryOperator::Negate);
    assert_eq!(pos, 0);
    assert!(matches!(*operand, Expr::Unary { .. }));
}

#[test]
fn calls_collect_arguments() {
    let expr = single_expression("f(1, g(2), x)");
    let Expr::Call { name, arguments, .. } = expr else {
        panic!("Expected a call");
    };
    assert_eq!(name, "f");
    assert_eq!(arguments.len(), 3);
    assert!(matches!(&arguments[1], Expr::Call { name, .. } if name == "g"));

    assert!(matches!(single_expression("f()"), Expr::Call { arguments, .. } if arguments.is_empty()));
}

#[test]
fn statements() {
    let src = "int x = 1\nfunc f(a, b) { a }\nif x then print x else reset\n{ 2 }";
    let program = parse(src, &LexerConfig::default()).unwrap();
    assert_eq!(program.statements.len(), 4);

    assert!(matches!(&program.statements[0],
                     Statement::Assignment { name, declared: Some(NumberType::Integer), .. } if name == "x"));
    match &program.statements[1] {
        Statement::Function(def) => {
            assert_eq!(def.name, "f");
            assert_eq!(def.params, ["a", "b"]);
            assert_eq!(def.body.statements.len(), 1);
        },
        other => panic!("Expected a function, got {other:?}"),
    }
    match &program.statements[2] {
        Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        .. } => {
            assert!(matches!(**then_branch, Statement::Print { .. }));
            assert!(matches!(**else_branch, Statement::Reset { .. }));
        },
        other => panic!("Expected an if with else, got {other:?}"),
    }
    assert!(matches!(&program.statements[3], Statement::Block(block) if block.statements.len() == 1));
}

#[test]
fn empty_sources_parse_to_empty_programs() {
    for src in ["", "\n\n", " ; ;\n", "{}"] {
        let program = parse(src, &LexerConfig::default()).unwrap();
        assert!(program.statements.len() <= 1, "source: {src:?}");
    }
}

#[test]
fn parsing_is_deterministic() {
    let src = "func f(n) { if n then n * f(n - 1) else 1 }\nprint f(5)";
    assert_eq!(parse(src, &LexerConfig::default()).unwrap(),
               parse(src, &LexerConfig::default()).unwrap());
}

#[test]
fn parse_errors() {
    let missing_then = parse("if 1 print 2", &LexerConfig::default()).unwrap_err();
    assert!(matches!(missing_then, Error::Parse(ParseError::MissingThen { found: TokenKind::Print, pos: 5 })));

    let unexpected = parse("set x 1", &LexerConfig::default()).unwrap_err();
    assert!(matches!(unexpected,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Number, pos: 6, .. })));

    let not_callable = parse("(1)(2)", &LexerConfig::default()).unwrap_err();
    assert!(matches!(not_callable, Error::Parse(ParseError::NotCallable { .. })));

    let lex = parse("set x = #", &LexerConfig::default()).unwrap_err();
    assert_eq!(lex.kind(), ErrorKind::Lex);

    let unclosed = parse("func f() { 1", &LexerConfig::default()).unwrap_err();
    assert_eq!(unclosed.kind(), ErrorKind::Parse);
}

#[test]
fn tree_rendering() {
    let program = parse("set x = 1 + 2\nprint -x", &LexerConfig::default()).unwrap();
    let expected = ["Program",
                    "  Assign x",
                    "    Chain",
                    "      Number 1",
                    "      +",
                    "        Number 2",
                    "  Print",
                    "    Unary -",
                    "      Identifier x",
                    ""].join("\n");
    assert_eq!(program.render_tree(), expected);

    let program = parse("float y = 2.5\nfunc f(a) { a }\nif f(y) then 1 else 0",
                        &LexerConfig::default()).unwrap();
    let expected = ["Program",
                    "  Assign y: float",
                    "    Number 2.5",
                    "  Func f(a)",
                    "    Block",
                    "      Identifier a",
                    "  If",
                    "    Call f",
                    "      Identifier y",
                    "  Then",
                    "    Number 1",
                    "  Else",
                    "    Number 0",
                    ""].join("\n");
    assert_eq!(program.render_tree(), expected);
}
