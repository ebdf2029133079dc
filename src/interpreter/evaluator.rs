use crate::{
    collections::Stack,
    error::EvalError,
    interpreter::{
        lexer::Token,
        precedence::{Arity, arity},
    },
    util::num::promote_operand,
};

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence to a single real value.
///
/// Operands are promoted to `f64` and pushed on a value stack. Each operator
/// pops its operands, with the right operand on top, and pushes its result.
/// Comparison and logical operators yield `1.0` for true and `0.0` for
/// false; the logical operators treat values greater than zero as true.
///
/// # Errors
/// - `EvalError::DivisionByZero` if the right operand of `/` is zero.
/// - `EvalError::UnsupportedOperator` for parentheses or symbols outside the
///   operator table.
/// - `EvalError::MalformedExpression` if an operator lacks operands or the
///   sequence does not reduce to exactly one value.
/// - `EvalError::LiteralTooLarge` if an integer operand is not exactly
///   representable as an `f64`.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::evaluate, lexer::Token};
///
/// // 3 4 2 * +
/// let postfix = [Token::Integer(3),
///                Token::Integer(4),
///                Token::Integer(2),
///                Token::Symbol('*'),
///                Token::Symbol('+')];
/// assert_eq!(evaluate(&postfix).unwrap(), 11.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut values: Stack<f64> = Stack::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Integer(n) => values.push(promote_operand(n)?),
            Token::Float(x) => values.push(x),
            Token::Symbol(symbol) => {
                let result = match arity(token) {
                    Some(Arity::Unary) => {
                        let operand = pop_operand(&mut values, symbol)?;
                        eval_unary(symbol, operand)?
                    },
                    Some(Arity::Binary) => {
                        let right = pop_operand(&mut values, symbol)?;
                        let left = pop_operand(&mut values, symbol)?;
                        eval_binary(symbol, left, right)?
                    },
                    Some(Arity::Grouping) | None => {
                        return Err(EvalError::UnsupportedOperator { symbol });
                    },
                };
                values.push(result);
            },
        }
    }

    match (values.pop(), values.len()) {
        (Some(result), 0) => Ok(result),
        (None, _) => Err(EvalError::MalformedExpression { details: "no value left on the stack".to_string() }),
        (Some(_), rest) => Err(EvalError::MalformedExpression { details: format!("{} values left on the stack",
                                                                                   rest + 1) }),
    }
}

/// Evaluates a unary operator.
///
/// The only unary operator is logical NOT, which maps zero to `1.0` and
/// anything else to `0.0`.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::eval_unary;
///
/// assert_eq!(eval_unary('!', 0.0).unwrap(), 1.0);
/// assert_eq!(eval_unary('!', 5.0).unwrap(), 0.0);
/// ```
pub fn eval_unary(symbol: char, operand: f64) -> EvalResult<f64> {
    match symbol {
        '!' => Ok(truth(operand == 0.0)),
        _ => Err(EvalError::UnsupportedOperator { symbol }),
    }
}

/// Evaluates a binary operator on two real operands.
///
/// Division by zero is an error rather than an infinity or NaN, and so is any
/// arithmetic result that is not finite, such as `(0 - 1) ^ .5` or
/// `10 ^ 400`. Equality is exact floating-point equality.
///
/// # Example
/// ```
/// use shunt::{error::EvalError, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary('^', 2.0, 10.0).unwrap(), 1024.0);
/// assert_eq!(eval_binary('>', 5.0, 3.0).unwrap(), 1.0);
/// assert_eq!(eval_binary('|', 0.0, 5.0).unwrap(), 1.0);
/// assert_eq!(eval_binary('/', 1.0, 0.0), Err(EvalError::DivisionByZero));
/// assert_eq!(eval_binary('^', -1.0, 0.5), Err(EvalError::NonFiniteResult { symbol: '^' }));
/// ```
#[allow(clippy::float_cmp)]
pub fn eval_binary(symbol: char, left: f64, right: f64) -> EvalResult<f64> {
    match symbol {
        '+' => finite(symbol, left + right),
        '-' => finite(symbol, left - right),
        '*' => finite(symbol, left * right),
        '/' => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                finite(symbol, left / right)
            }
        },
        '^' => finite(symbol, left.powf(right)),
        '>' => Ok(truth(left > right)),
        '<' => Ok(truth(left < right)),
        '=' => Ok(truth(left == right)),
        '&' => Ok(truth(left > 0.0 && right > 0.0)),
        '|' => Ok(truth(left > 0.0 || right > 0.0)),
        _ => Err(EvalError::UnsupportedOperator { symbol }),
    }
}

fn pop_operand(values: &mut Stack<f64>, symbol: char) -> EvalResult<f64> {
    values.pop()
          .ok_or_else(|| EvalError::MalformedExpression { details: format!("missing operand for '{symbol}'") })
}

fn finite(symbol: char, value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult { symbol })
    }
}

const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}
