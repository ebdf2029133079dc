use shunt::{
    error::{ConvertError, Error, EvalError, LexError},
    evaluate_line, format_result,
};

fn assert_result(src: &str, expected: &str) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(format_result(value), expected, "expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate_line(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", "3.00");
    assert_result("8 - 5", "3.00");
    assert_result("7 * 9", "63.00");
    assert_result("7 / 2", "3.50");
    assert_result("2 ^ 10", "1024.00");
    assert_result("1.5 + .5", "2.00");
    assert_result("10/3", "3.33");
}

#[test]
fn precedence_and_parentheses() {
    assert_result("3 + 4 * 2", "11.00");
    assert_result("1 + 2 * 3", "7.00");
    assert_result("(1 + 2) * 3", "9.00");
    assert_result("2 + 3 * 4", "14.00");
    assert_result("(2+3)*4", "20.00");
    assert_result("2 * (3 + 4) - 5", "9.00");
    assert_result("((7))", "7.00");
}

#[test]
fn equal_ranks_group_to_the_right() {
    assert_result("8 - 2 - 1", "7.00");
    assert_result("2 ^ 3 ^ 2", "512.00");
}

#[test]
fn ranks_follow_the_table_not_arithmetic_convention() {
    // '+' outranks '-' and '*' outranks '/'.
    assert_result("10 - 4 + 1", "5.00");
    assert_result("10 / 4 * 2", "1.25");
}

#[test]
fn logical_not() {
    assert_result("!0", "1.00");
    assert_result("!5", "0.00");
    assert_result("!!3", "1.00");
    assert_result("!(2 - 2)", "1.00");
    assert_result("1 + !0", "2.00");
    // '!' binds loosest, so it negates the whole sum.
    assert_result("!0 + 1", "0.00");
}

#[test]
fn comparisons_and_logic() {
    assert_result("5 > 3", "1.00");
    assert_result("5 < 3", "0.00");
    assert_result("2 = 2", "1.00");
    assert_result("2.0 = 2", "1.00");
    assert_result("5 & 0", "0.00");
    assert_result("5 & 2", "1.00");
    assert_result("0 | 5", "1.00");
    assert_result("0 | 0", "0.00");
    assert_result("3 < 2 = 0", "1.00");
    assert_result("1 + 1 > 1 & 2 > 1", "1.00");
}

#[test]
fn whitespace_is_insignificant() {
    assert_result("  3+4*2  ", "11.00");
    assert_result("\t( 2 +3 ) *4", "20.00");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1 / 0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("4 / (2 - 2)"), Error::Eval(EvalError::DivisionByZero));
}

#[test]
fn non_finite_results_are_errors() {
    assert_eq!(assert_failure("(0 - 1) ^ .5"),
               Error::Eval(EvalError::NonFiniteResult { symbol: '^' }));
    assert_eq!(assert_failure("10 ^ 400"),
               Error::Eval(EvalError::NonFiniteResult { symbol: '^' }));
    assert_eq!(assert_failure("0 ^ (0 - 1)"),
               Error::Eval(EvalError::NonFiniteResult { symbol: '^' }));
    assert_eq!(assert_failure("1.5 * 10 ^ 300 * 10 ^ 300"),
               Error::Eval(EvalError::NonFiniteResult { symbol: '*' }));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_eq!(assert_failure("(1 + 2"),
               Error::Convert(ConvertError::UnbalancedParenthesis { position: 0 }));
    assert_eq!(assert_failure("1 + 2)"),
               Error::Convert(ConvertError::UnbalancedParenthesis { position: 3 }));
    assert_eq!(assert_failure(")"),
               Error::Convert(ConvertError::UnbalancedParenthesis { position: 0 }));
}

#[test]
fn unknown_symbols_are_invalid_operators() {
    assert_eq!(assert_failure("10 % 3"),
               Error::Convert(ConvertError::InvalidOperator { symbol: '%', position: 1 }));
    assert!(matches!(assert_failure("x + 1"),
                     Error::Convert(ConvertError::InvalidOperator { symbol: 'x', .. })));
}

#[test]
fn malformed_sequences_are_invalid_expressions() {
    for src in ["", "   ", "1 +", "* 2", "1 2", "()", "2 (3)", "3 !", "1 + * 2", "-1"] {
        assert!(matches!(assert_failure(src),
                         Error::Convert(ConvertError::InvalidExpression { .. })),
                "expected {src:?} to be an invalid expression");
    }
}

#[test]
fn lexical_errors() {
    assert!(matches!(assert_failure("1 + ."),
                     Error::Lex(LexError::UnexpectedCharacter { column: 4, .. })));
    assert!(matches!(assert_failure("99999999999999999999 + 1"),
                     Error::Lex(LexError::LiteralTooLarge { column: 0, .. })));

    let huge_real = format!("1 + {}.0", "9".repeat(400));
    assert!(matches!(assert_failure(&huge_real),
                     Error::Lex(LexError::LiteralTooLarge { column: 4, .. })));
}

#[test]
fn integers_beyond_exact_real_range_are_rejected() {
    assert_eq!(assert_failure("9007199254740993 + 0"),
               Error::Eval(EvalError::LiteralTooLarge { value: 9_007_199_254_740_993 }));
    assert_result("9007199254740991 - 9007199254740990", "1.00");
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(assert_failure("1 / 0").to_string(), "Division by zero.");
    assert_eq!(assert_failure("10 % 3").to_string(), "Invalid operator '%' at token 1.");
    assert_eq!(assert_failure("(1 + 2").to_string(), "Unbalanced parenthesis at token 0.");
}
