/// Last-in, first-out container.
///
/// Holds pending operators during conversion and intermediate values during
/// evaluation.
pub mod stack;
/// First-in, first-out container.
///
/// Accumulates the postfix output of the converter in emission order.
pub mod queue;

pub use queue::Queue;
pub use stack::Stack;
