use std::fmt;

use logos::Logos;

use crate::error::LexError;

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of an expression line.
///
/// Operands keep their integer or real nature as written. Every other
/// non-whitespace character becomes a single [`Token::Symbol`]; whether that
/// symbol is a recognized operator is decided later by the precedence table.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Any other single character, such as `+`, `(` or `%`.
    #[regex(r"[^0-9. \t\r\n\f]", parse_symbol)]
    Symbol(char),
}

impl Token {
    /// Returns the character of a symbol token, or `None` for operands.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Symbol(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// Splits a line into operand and symbol tokens.
///
/// Whitespace is insignificant, so `3+4` and `3 + 4` produce the same tokens.
///
/// # Errors
/// - `LexError::LiteralTooLarge` if an integer literal overflows `i64` or a
///   real literal overflows `f64`.
/// - `LexError::UnexpectedCharacter` for input that is neither a number nor a
///   symbol, such as a lone `.`.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1 + 2.5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Symbol('('),
///                 Token::Integer(1),
///                 Token::Symbol('+'),
///                 Token::Float(2.5),
///                 Token::Symbol(')')]);
/// ```
pub fn tokenize(line: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice().to_string();
            let column = lexer.span().start;

            if slice.bytes().any(|b| b.is_ascii_digit())
               && slice.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            {
                return Err(LexError::LiteralTooLarge { literal: slice,
                                                       column });
            }
            return Err(LexError::UnexpectedCharacter { found: slice,
                                                       column });
        }
    }

    Ok(tokens)
}

fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|x: &f64| x.is_finite())
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn parse_symbol(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Displays a token sequence separated by single spaces, e.g. `3 4 2 * +`.
#[derive(Debug, Clone, Copy)]
pub struct TokenList<'a>(pub &'a [Token]);

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
