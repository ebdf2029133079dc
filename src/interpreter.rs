/// The lexer module tokenizes an expression line.
///
/// Produces integer and real operand tokens and single-character symbol
/// tokens. Whether a symbol is a valid operator is not decided here.
pub mod lexer;
/// The precedence module ranks operator symbols.
///
/// The rank table is the single source of truth for both how the converter
/// reorders operators and how many operands the evaluator gives each one.
pub mod precedence;
/// The converter module turns infix tokens into postfix order.
///
/// # Responsibilities
/// - Reorders operators by rank using an operator stack.
/// - Removes parentheses.
/// - Rejects unknown symbols, unbalanced parentheses and malformed sequences.
pub mod converter;
/// The evaluator module reduces postfix tokens to a value.
///
/// # Responsibilities
/// - Promotes operands to `f64`.
/// - Applies unary and binary operators with a value stack.
/// - Reports division by zero and sequences that do not reduce to one value.
pub mod evaluator;
