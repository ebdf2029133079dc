use crate::{
    collections::{Queue, Stack},
    error::ConvertError,
    interpreter::{
        lexer::{Token, TokenList},
        precedence::{CLOSE_PAREN_RANK, NOT_RANK, OPEN_PAREN_RANK, precedence, rank},
    },
};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Converts an infix token sequence to postfix (Reverse Polish) order.
///
/// This is a shunting-yard pass with a fixed rank table and no associativity
/// beyond it: a pending operator is moved to the output only when its rank is
/// strictly greater than the incoming operator's rank. Operators of equal
/// rank therefore group to the right, so `8 - 2 - 1` becomes `8 2 1 - -`.
///
/// `!` is a prefix operator and is pushed without moving anything to the
/// output, since the only operator it could displace is a binary operator
/// still waiting for its right operand.
///
/// Alongside the conversion the tokens are checked to alternate between
/// operands and operators, so that the output is always evaluable.
///
/// # Errors
/// - `ConvertError::InvalidOperator` for a symbol outside the operator table.
/// - `ConvertError::UnbalancedParenthesis` for a `)` without a matching `(`,
///   or a `(` that is never closed.
/// - `ConvertError::InvalidExpression` for an empty sequence, a missing
///   operand, adjacent operands, or empty parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     converter::to_postfix,
///     lexer::{TokenList, tokenize},
/// };
///
/// let postfix = to_postfix(&tokenize("3 + 4 * 2").unwrap()).unwrap();
/// assert_eq!(TokenList(&postfix).to_string(), "3 4 2 * +");
///
/// let postfix = to_postfix(&tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(TokenList(&postfix).to_string(), "2 3 + 4 *");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ConvertResult<Vec<Token>> {
    let mut output = Queue::with_capacity(tokens.len());
    let mut operators: Stack<(Token, usize)> = Stack::new();
    let mut open_groups = 0_usize;
    let mut expect_operand = true;

    for (position, &token) in tokens.iter().enumerate() {
        let symbol = match token {
            Token::Integer(_) | Token::Float(_) => {
                if !expect_operand {
                    return Err(invalid("missing operator between operands", position));
                }
                output.enqueue(token);
                expect_operand = false;
                continue;
            },
            Token::Symbol(c) => c,
        };

        let current = precedence(symbol).ok_or(ConvertError::InvalidOperator { symbol,
                                                                               position })?;

        match current {
            NOT_RANK => {
                if !expect_operand {
                    return Err(invalid("'!' cannot follow an operand", position));
                }
                operators.push((token, position));
            },
            OPEN_PAREN_RANK => {
                if !expect_operand {
                    return Err(invalid("missing operator before '('", position));
                }
                open_groups += 1;
                operators.push((token, position));
            },
            CLOSE_PAREN_RANK => {
                if open_groups == 0 {
                    return Err(ConvertError::UnbalancedParenthesis { position });
                }
                if expect_operand {
                    return Err(invalid("missing operand before ')'", position));
                }
                close_group(&mut operators, &mut output);
                open_groups -= 1;
            },
            _ => {
                if expect_operand {
                    return Err(invalid(&format!("missing left operand for '{symbol}'"), position));
                }
                reduce(&mut operators, &mut output, current);
                operators.push((token, position));
                expect_operand = true;
            },
        }
    }

    if expect_operand {
        return Err(match tokens.len() {
            0 => invalid("empty expression", 0),
            len => invalid("missing right operand", len - 1),
        });
    }

    while let Some((token, position)) = operators.pop() {
        if rank(&token) == Some(OPEN_PAREN_RANK) {
            return Err(ConvertError::UnbalancedParenthesis { position });
        }
        output.enqueue(token);
    }

    let postfix = output.into_vec();
    tracing::debug!(infix = %TokenList(tokens), postfix = %TokenList(&postfix), "converted to postfix");
    Ok(postfix)
}

/// Moves pending operators that bind tighter than `current` to the output,
/// stopping at the first `(`.
fn reduce(operators: &mut Stack<(Token, usize)>, output: &mut Queue<Token>, current: u8) {
    while let Some((top, _)) =
        operators.pop_if(|(top, _)| rank(top).is_some_and(|r| r > current && r != OPEN_PAREN_RANK))
    {
        output.enqueue(top);
    }
}

/// Moves pending operators to the output up to the innermost `(`, which is
/// discarded.
///
/// The caller guarantees that a `(` is pending.
fn close_group(operators: &mut Stack<(Token, usize)>, output: &mut Queue<Token>) {
    while let Some((top, _)) = operators.pop() {
        if rank(&top) == Some(OPEN_PAREN_RANK) {
            break;
        }
        output.enqueue(top);
    }
}

fn invalid(details: &str, position: usize) -> ConvertError {
    ConvertError::InvalidExpression { details: details.to_string(),
                                      position }
}
