use thiserror::Error;

/// Represents all errors that can occur while converting infix tokens to
/// postfix order.
///
/// Positions are zero-based token indices into the infix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A symbol token outside the recognized operator alphabet.
    #[error("Invalid operator '{symbol}' at token {position}.")]
    InvalidOperator {
        /// The unrecognized symbol.
        symbol:   char,
        /// Index of the symbol token.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Unbalanced parenthesis at token {position}.")]
    UnbalancedParenthesis {
        /// Index of the unmatched parenthesis token.
        position: usize,
    },
    /// The tokens do not form an expression, for example an operator with a
    /// missing operand or two adjacent operands.
    #[error("Invalid expression at token {position}: {details}.")]
    InvalidExpression {
        /// What was wrong with the token sequence.
        details:  String,
        /// Index of the token where the problem was detected.
        position: usize,
    },
}
