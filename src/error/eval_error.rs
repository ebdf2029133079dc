use thiserror::Error;

/// Represents all errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` was zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A symbol that has no evaluation rule, including parentheses.
    #[error("Unsupported operator '{symbol}'.")]
    UnsupportedOperator {
        /// The symbol that could not be evaluated.
        symbol: char,
    },
    /// The sequence did not reduce to exactly one value, or an operator ran
    /// out of operands.
    #[error("Malformed expression: {details}.")]
    MalformedExpression {
        /// Details about how the sequence failed to reduce.
        details: String,
    },
    /// An arithmetic operator produced NaN or an infinity.
    #[error("Result of '{symbol}' is not a finite number.")]
    NonFiniteResult {
        /// The operator whose result was not finite.
        symbol: char,
    },
    /// An integer operand cannot be represented exactly as an `f64`.
    #[error("Integer {value} cannot be represented exactly as a real number.")]
    LiteralTooLarge {
        /// The integer operand.
        value: i64,
    },
}
