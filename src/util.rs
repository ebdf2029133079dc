/// Numeric conversion helpers.
///
/// Integer operands are evaluated as `f64`. The helpers here make that
/// promotion lossless or fail loudly, instead of rounding large integers.
pub mod num;
