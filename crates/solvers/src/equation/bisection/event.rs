/// Iteration event emitted by the bisection solver.
///
/// Emitted once per iteration, after the bracket has been narrowed around the
/// new midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The bracket after this iteration's update.
    pub bracket: [f64; 2],

    /// The midpoint evaluated this iteration.
    pub midpoint: f64,

    /// The function value at the midpoint.
    pub value: f64,

    /// Relative change from the previous midpoint, if computed this iteration.
    pub relative_error: Option<f64>,
}
