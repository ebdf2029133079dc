//! # shunt
//!
//! shunt is a line-oriented infix expression calculator. Each line is
//! tokenized, converted to postfix (Reverse Polish) order with the
//! shunting-yard algorithm, and evaluated to a real number.
//!
//! Supported operators, from loosest to tightest binding:
//! `!` (logical not), `|`, `&`, `=`, `<`, `>`, `-`, `+`, `/`, `*`, `^`,
//! plus parentheses for grouping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize},
};

/// Growable stack and queue containers.
///
/// The converter keeps pending operators on a [`collections::Stack`] and
/// collects its output in a [`collections::Queue`]; the evaluator keeps
/// intermediate values on a stack.
pub mod collections;
/// Runs the calculator over a whole input.
///
/// Reads expressions line by line from any buffered reader and writes the
/// formatted results to any writer, skipping lines that fail.
pub mod driver;
/// Provides error types for every phase of a line's evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, converter, evaluator).
/// - Wraps them in a single [`error::Error`] for the pipeline.
pub mod error;
/// The three phases that turn a line into a value.
///
/// # Responsibilities
/// - Tokenizes a line into operands and symbols.
/// - Ranks operator symbols.
/// - Converts infix tokens to postfix order.
/// - Evaluates postfix tokens.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates a single infix expression.
///
/// The line is tokenized, converted to postfix order and evaluated. The
/// result is returned at full precision; see [`format_result`] for display.
///
/// # Errors
/// Returns an error if any phase fails. No partial result is produced.
///
/// # Examples
/// ```
/// use shunt::{error::Error, evaluate_line};
///
/// assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_line("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate_line("!0").unwrap(), 1.0);
///
/// assert!(matches!(evaluate_line("(1 + 2"), Err(Error::Convert(_))));
/// assert!(matches!(evaluate_line("1 / 0"), Err(Error::Eval(_))));
/// ```
pub fn evaluate_line(line: &str) -> Result<f64, Error> {
    let tokens = tokenize(line)?;
    let postfix = to_postfix(&tokens)?;
    Ok(evaluate(&postfix)?)
}

/// Formats a result with exactly two digits after the decimal point.
///
/// # Examples
/// ```
/// use shunt::format_result;
///
/// assert_eq!(format_result(11.0), "11.00");
/// assert_eq!(format_result(1.0 / 3.0), "0.33");
/// assert_eq!(format_result(-2.5), "-2.50");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    format!("{value:.2}")
}
