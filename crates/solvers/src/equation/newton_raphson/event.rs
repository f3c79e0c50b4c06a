use super::Iteration;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The step just recorded in the history.
    pub iteration: Iteration,

    /// The function value at `iteration.x`.
    pub value: f64,

    /// The derivative value at `iteration.x`.
    pub derivative: f64,
}
