use crate::error::EvalError;

/// Largest integer magnitude an `f64` holds exactly (`2^53 - 1`).
pub const MAX_EXACT_INT: i64 = (1 << 53) - 1;

/// Promotes an integer operand to a real for evaluation.
///
/// Operands beyond `±MAX_EXACT_INT` would silently round, so they are
/// rejected instead.
///
/// ## Example
/// ```
/// use shunt::{
///     error::EvalError,
///     util::num::{MAX_EXACT_INT, promote_operand},
/// };
///
/// assert_eq!(promote_operand(-7).unwrap(), -7.0);
/// assert_eq!(promote_operand(-MAX_EXACT_INT).unwrap(), -9_007_199_254_740_991.0);
///
/// let err = promote_operand(MAX_EXACT_INT + 1).unwrap_err();
/// assert_eq!(err, EvalError::LiteralTooLarge { value: MAX_EXACT_INT + 1 });
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn promote_operand(value: i64) -> Result<f64, EvalError> {
    if (-MAX_EXACT_INT..=MAX_EXACT_INT).contains(&value) {
        Ok(value as f64)
    } else {
        Err(EvalError::LiteralTooLarge { value })
    }
}
