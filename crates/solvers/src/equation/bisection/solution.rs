/// Relative error reported before the solver has computed one.
///
/// Large enough that the relative-error test alone cannot end a solve before
/// any error is available.
pub const INITIAL_RELATIVE_ERROR: f64 = 100.0;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative error reached the tolerance, or an exact root was found.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last midpoint, or the endpoint where `f` is exactly zero.
    pub x: f64,

    /// The last computed relative error, or [`INITIAL_RELATIVE_ERROR`] if
    /// none was computed.
    pub relative_error: f64,

    /// Number of iterations performed.
    pub iters: usize,

    /// The bracket when the solver finished.
    pub bracket: [f64; 2],
}

impl Solution {
    /// A solution for an endpoint where `f` is exactly zero.
    pub(super) fn endpoint_root(x: f64, bracket: [f64; 2]) -> Self {
        Self {
            status: Status::Converged,
            x,
            relative_error: INITIAL_RELATIVE_ERROR,
            iters: 0,
            bracket,
        }
    }

    /// Returns the width of the final bracket.
    ///
    /// Each iteration halves the bracket, so after `k` iterations this is the
    /// starting width divided by `2^k`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
