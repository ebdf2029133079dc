use thiserror::Error;

/// Lexical errors.
///
/// Raised while turning a raw line into tokens: characters the lexer cannot
/// classify and integer literals that do not fit the integer token type.
pub mod lex_error;
/// Conversion errors.
///
/// Raised by the infix to postfix pass: unknown operator symbols, unbalanced
/// parentheses, and token sequences that do not form an expression.
pub mod convert_error;
/// Evaluation errors.
///
/// Raised while reducing a postfix sequence to a value, such as division by
/// zero or a sequence that does not collapse to exactly one value.
pub mod eval_error;

pub use convert_error::ConvertError;
pub use eval_error::EvalError;
pub use lex_error::LexError;

/// Any failure that can stop a single line from producing a result.
///
/// Every phase of the pipeline has its own error type; this enum lets the
/// pipeline propagate all of them with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens could not be converted to postfix form.
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// The postfix form could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
