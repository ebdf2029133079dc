use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found text that is neither a number nor a single symbol.
    #[error("Unexpected input '{found}' at column {column}.")]
    UnexpectedCharacter {
        /// The offending slice of the line.
        found:  String,
        /// Byte offset of the slice within the line.
        column: usize,
    },
    /// A numeric literal does not fit in an `i64` or `f64`.
    #[error("Literal '{literal}' at column {column} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal within the line.
        column:  usize,
    },
}
