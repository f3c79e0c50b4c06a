use super::Iteration;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step fell below the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The final estimate, equal to the last history entry's `next`.
    pub x: f64,

    /// The final step size.
    pub step: f64,

    /// Every step taken, in order.
    pub history: Vec<Iteration>,
}

impl Solution {
    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.history.len()
    }
}
