use reckon::{
    ast::NumberType,
    config::LexerConfig,
    error::{Error, ErrorKind},
    evaluate_typed,
    interpreter::{evaluator::core::TypedEvaluator, value::number::Number},
    parse,
};

fn run(src: &str) -> Result<(Option<Number>, Vec<Number>), Error> {
    let program = parse(src, &LexerConfig::default())?;
    let mut evaluator = TypedEvaluator::<Vec<Number>>::with_sink(Vec::new());
    let value = evaluator.eval_program(&program)?;
    Ok((value, evaluator.into_sink()))
}

fn value_of(src: &str) -> Number {
    match run(src) {
        Ok((Some(value), _)) => value,
        Ok((None, _)) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn printed(src: &str) -> Vec<String> {
    match run(src) {
        Ok((_, printed)) => printed.iter().map(ToString::to_string).collect(),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.kind(), kind, "script: {src}, error: {e}"),
    }
}

#[test]
fn declared_int_stays_int() {
    assert_eq!(printed("int val = 23; print val+2"), ["25"]);

    let value = value_of("int val = 23; val + 2");
    assert_eq!(value.as_i64(), Some(25));
    assert!(!value.fixed);
}

#[test]
fn declared_floats_add_as_floats() {
    assert_eq!(printed("float v = 3.12; float p = 3.14; print v+p"), ["6.26"]);
}

#[test]
fn integer_expressions() {
    assert_eq!(printed("print 2+3+4"), ["9"]);
    assert_eq!(printed("print 2*5+23"), ["33"]);
    assert_eq!(printed("print 2**3+5"), ["13"]);
    assert_eq!(printed("print 2**3*2+43-21"), ["38"]);
    assert_eq!(printed("print 2**3**2"), ["512"]);
}

#[test]
fn mixed_free_literals_widen_to_float() {
    let value = value_of("1 + 2.5");
    assert_eq!(value.number_type(), NumberType::Float);
    assert_eq!(value.as_f64(), Some(3.5));
    assert!(!value.fixed);

    assert_eq!(printed("print .5 + 1"), ["1.5"]);
    assert_eq!(printed("print 4 / 2.0"), ["2.0"]);
}

#[test]
fn free_int_combined_with_fixed_float_is_float() {
    let value = value_of("float f = 1.5; f + 2");
    assert_eq!(value.number_type(), NumberType::Float);
    assert_eq!(value.as_f64(), Some(3.5));
    assert!(!value.fixed);
}

#[test]
fn computed_values_widen_into_declared_types() {
    let src = "int val = 23; float f = 1.5";
    assert_eq!(printed(&format!("{src}; print val + 1 + f")), ["25.5"]);
    assert_eq!(printed(&format!("{src}; print (val * 2) + f")), ["47.5"]);
    assert_eq!(printed("float f = 1.5; int i = 2; print f + (i + 0)"), ["3.5"]);

    // The operands themselves stay fixed.
    assert_failure(&format!("{src}; val + f"), ErrorKind::Type);
}

#[test]
fn free_parameters_do_not_lock_their_type() {
    assert_eq!(printed("func f(a) { set a = 0.5; a }\nprint f(1)"), ["0.5"]);
    assert_failure("int i = 1\nfunc f(a) { set a = 0.5; a }\nf(i)", ErrorKind::Type);
    assert_failure("int i = 1\nfunc f(a) { float a = 0.5 }\nf(i)", ErrorKind::Type);
}

#[test]
fn fixed_operands_of_different_types_are_a_type_error() {
    assert_failure("int i = 1; float f = 2.0; i + f", ErrorKind::Type);
    assert_failure("int i = 1; float f = 2.0; f * i", ErrorKind::Type);
}

#[test]
fn free_float_does_not_narrow_into_fixed_int() {
    assert_failure("int i = 1; i + 2.5", ErrorKind::Type);
    assert_failure("int i = 1; 0.5 * i", ErrorKind::Type);
}

#[test]
fn declarations_convert_free_values() {
    let value = value_of("float x = 2; x");
    assert_eq!(value.as_f64(), Some(2.0));
    assert_eq!(printed("float x = 2; print x"), ["2.0"]);

    assert_failure("int x = 2.5", ErrorKind::Type);
}

#[test]
fn declarations_reject_fixed_values_of_another_type() {
    assert_failure("int i = 3; float f = i", ErrorKind::Type);
}

#[test]
fn rebinding_keeps_the_existing_type() {
    let value = value_of("float x = 1.5; set x = 2; x");
    assert_eq!(value.as_f64(), Some(2.0));

    assert_failure("int x = 1; set x = 0.5", ErrorKind::Type);
    assert_failure("int x = 1; float x = 2.0", ErrorKind::Type);
    assert_eq!(value_of("int x = 1; int x = 5; x").as_i64(), Some(5));
}

#[test]
fn shadowing_in_a_block_may_change_type() {
    assert_eq!(printed("int x = 1\n{ float x = 2.5\n print x }\nprint x"), ["2.5", "1"]);
}

#[test]
fn set_fixes_the_inferred_type() {
    let value = value_of("set x = 2.5; x");
    assert!(value.fixed);
    assert_failure("set i = 1; set f = 2.5; i + f", ErrorKind::Type);
}

#[test]
fn comparisons_yield_free_integers() {
    let value = value_of("float f = 1.5; f < 2");
    assert_eq!(value.as_i64(), Some(1));
    assert!(!value.fixed);

    assert_eq!(printed("print 2.5 == 2.5; print 1 > 1.5"), ["1", "0"]);
}

#[test]
fn bitwise_operators_need_integers() {
    assert_eq!(printed("print 6 & 3; print 1 << 3"), ["2", "8"]);
    assert_failure("1.5 | 1", ErrorKind::Type);
}

#[test]
fn float_power_and_division() {
    assert_eq!(printed("print 2.0 ** 3"), ["8.0"]);
    assert_eq!(printed("print 7 / 2"), ["3"]);
    assert_eq!(printed("print 7.0 / 2"), ["3.5"]);
    assert_failure("1.0 / 0", ErrorKind::Arithmetic);
    assert_failure("1 / 0", ErrorKind::Arithmetic);
    assert_failure("2 ** -1", ErrorKind::Arithmetic);
}

#[test]
fn negation_keeps_type_and_fixedness() {
    let value = value_of("float f = 2.5; -f");
    assert_eq!(value.as_f64(), Some(-2.5));
    assert!(value.fixed);
    assert_eq!(value_of("--3").as_i64(), Some(3));
}

#[test]
fn float_truthiness() {
    assert_eq!(printed("if 0.0 then print 1 else print 2"), ["2"]);
    assert_eq!(printed("if 0.5 then print 1 else print 2"), ["1"]);
}

#[test]
fn parameters_keep_the_arguments_fixed_flag() {
    assert_failure("int i = 1\nfunc f(a) { a + 0.5 }\nf(i)", ErrorKind::Type);

    let value = value_of("func f(a) { a + 0.5 }\nf(1)");
    assert_eq!(value.as_f64(), Some(1.5));
}

#[test]
fn typed_recursion() {
    let src = "func pow2(n) { if n == 0 then 1.0 else 2 * pow2(n - 1) }\npow2(10)";
    let value = value_of(src);
    assert_eq!(value.as_f64(), Some(1024.0));
}

#[test]
fn public_entry_point() {
    let value = evaluate_typed("float v = 3.12; float p = 3.14; v + p").unwrap()
                                                                       .unwrap();
    assert_eq!(value.to_string(), "6.26");
}
