use shunt::{
    error::{ConvertError, EvalError},
    interpreter::{
        converter::to_postfix,
        evaluator::evaluate,
        lexer::{Token, TokenList, tokenize},
        precedence::rank,
    },
};

fn postfix_of(src: &str) -> String {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    let postfix = to_postfix(&tokens).unwrap_or_else(|e| panic!("Failed to convert {src:?}: {e}"));
    TokenList(&postfix).to_string()
}

#[test]
fn postfix_order() {
    assert_eq!(postfix_of("3 + 4 * 2"), "3 4 2 * +");
    assert_eq!(postfix_of("(1 + 2) * 3"), "1 2 + 3 *");
    assert_eq!(postfix_of("2 * (3 + 4) - 5"), "2 3 4 + * 5 -");
    assert_eq!(postfix_of("8 - 2 - 1"), "8 2 1 - -");
    assert_eq!(postfix_of("3 < 2 = 0"), "3 2 < 0 =");
    assert_eq!(postfix_of("1 + !0"), "1 0 ! +");
    assert_eq!(postfix_of("!(1 & 0)"), "1 0 & !");
    assert_eq!(postfix_of("1.5 * 2."), "1.5 2.0 *");
}

#[test]
fn operands_are_preserved_in_order_and_parentheses_removed() {
    let sources = ["3 + 4 * 2",
                   "(1 + 2) * 3",
                   "((2 + 3) * (4 - 1)) ^ 2",
                   "!(5 > 3) | 2.5 & (1 = 1)",
                   "10 / 4 * 2 - 7 + 1"];

    for src in sources {
        let infix = tokenize(src).unwrap();
        let postfix = to_postfix(&infix).unwrap();

        let parens = infix.iter().filter(|t| matches!(t, Token::Symbol('(' | ')'))).count();
        assert_eq!(postfix.len(), infix.len() - parens, "length of {src:?}");
        assert!(postfix.iter().all(|t| !matches!(t, Token::Symbol('(' | ')'))));

        let operands = |tokens: &[Token]| -> Vec<Token> {
            tokens.iter()
                  .copied()
                  .filter(|t| matches!(t, Token::Integer(_) | Token::Float(_)))
                  .collect()
        };
        assert_eq!(operands(&infix), operands(&postfix), "operands of {src:?}");

        let operators = postfix.iter().filter(|t| rank(t).is_some()).count();
        assert_eq!(postfix.len(), operands(&infix).len() + operators);
    }
}

#[test]
fn postfix_of_known_expression_evaluates() {
    let postfix = to_postfix(&tokenize("3 + 4 * 2").unwrap()).unwrap();
    assert_eq!(evaluate(&postfix).unwrap(), 11.0);
}

#[test]
fn conversion_reports_positions() {
    let tokens = tokenize("(1 + (2 * 3)").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ConvertError::UnbalancedParenthesis { position: 0 }));

    let tokens = tokenize("1 + 2 +").unwrap();
    assert!(matches!(to_postfix(&tokens),
                     Err(ConvertError::InvalidExpression { position: 3, .. })));

    assert!(matches!(to_postfix(&[]),
                     Err(ConvertError::InvalidExpression { position: 0, .. })));
}

#[test]
fn evaluator_rejects_sequences_that_do_not_reduce() {
    let malformed = [vec![],
                     vec![Token::Integer(1), Token::Integer(2)],
                     vec![Token::Symbol('+')],
                     vec![Token::Integer(1), Token::Symbol('*')],
                     vec![Token::Symbol('!')]];

    for postfix in malformed {
        assert!(matches!(evaluate(&postfix), Err(EvalError::MalformedExpression { .. })),
                "expected {} to be malformed",
                TokenList(&postfix));
    }
}

#[test]
fn evaluator_rejects_parentheses_and_unknown_symbols() {
    let with_paren = [Token::Integer(1), Token::Symbol('(')];
    assert_eq!(evaluate(&with_paren), Err(EvalError::UnsupportedOperator { symbol: '(' }));

    let with_unknown = [Token::Integer(1), Token::Integer(2), Token::Symbol('%')];
    assert_eq!(evaluate(&with_unknown), Err(EvalError::UnsupportedOperator { symbol: '%' }));
}

#[test]
fn lexer_keeps_integers_and_reals_apart() {
    assert_eq!(tokenize("2 2.0 .25 3.").unwrap(),
               vec![Token::Integer(2), Token::Float(2.0), Token::Float(0.25), Token::Float(3.0)]);
    assert_eq!(tokenize("").unwrap(), vec![]);
}
