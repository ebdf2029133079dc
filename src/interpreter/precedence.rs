use crate::interpreter::lexer::Token;

/// Recognized symbols ordered by binding power; a symbol's index is its rank.
pub const OPERATORS: [char; 13] = ['!', '|', '&', '=', '<', '>', '-', '+', '/', '*', '^', '(', ')'];

/// Rank of the logical NOT prefix operator `!`.
pub const NOT_RANK: u8 = 0;
/// Rank of `(`. Pushed by the converter, never reduced against.
pub const OPEN_PAREN_RANK: u8 = 11;
/// Rank of `)`. Consumed by the converter, never pushed.
pub const CLOSE_PAREN_RANK: u8 = 12;

/// How a ranked symbol takes part in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Prefix operator taking one operand (`!`).
    Unary,
    /// Infix operator taking two operands.
    Binary,
    /// A parenthesis; only meaningful during conversion.
    Grouping,
}

impl Arity {
    /// Classifies a rank returned by [`precedence`].
    ///
    /// Returns `None` for ranks outside the table.
    #[must_use]
    pub const fn of_rank(rank: u8) -> Option<Self> {
        match rank {
            NOT_RANK => Some(Self::Unary),
            1..=10 => Some(Self::Binary),
            OPEN_PAREN_RANK | CLOSE_PAREN_RANK => Some(Self::Grouping),
            _ => None,
        }
    }
}

/// Returns the rank of an operator symbol.
///
/// # Example
/// ```
/// use shunt::interpreter::precedence::precedence;
///
/// assert_eq!(precedence('!'), Some(0));
/// assert_eq!(precedence('*'), Some(9));
/// assert_eq!(precedence(')'), Some(12));
/// assert_eq!(precedence('%'), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn precedence(symbol: char) -> Option<u8> {
    OPERATORS.iter()
             .position(|&op| op == symbol)
             .map(|index| index as u8)
}

/// Returns the rank of a token, or `None` if it is an operand or an
/// unrecognized symbol.
#[must_use]
pub fn rank(token: &Token) -> Option<u8> {
    token.symbol().and_then(precedence)
}

/// Returns how a token takes part in an expression, or `None` if it is an
/// operand or an unrecognized symbol.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::Token,
///     precedence::{Arity, arity},
/// };
///
/// assert_eq!(arity(&Token::Symbol('!')), Some(Arity::Unary));
/// assert_eq!(arity(&Token::Symbol('^')), Some(Arity::Binary));
/// assert_eq!(arity(&Token::Symbol('(')), Some(Arity::Grouping));
/// assert_eq!(arity(&Token::Integer(4)), None);
/// ```
#[must_use]
pub fn arity(token: &Token) -> Option<Arity> {
    rank(token).and_then(Arity::of_rank)
}
