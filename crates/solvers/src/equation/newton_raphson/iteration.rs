/// One recorded Newton-Raphson step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// The estimate the step started from.
    pub x: f64,

    /// The estimate the step produced.
    pub next: f64,

    /// The step size, `|next - x|`.
    pub step: f64,
}
