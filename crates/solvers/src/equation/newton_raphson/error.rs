use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite starting point {x0}")]
    NonFiniteStart { x0: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("derivative {derivative} is too close to zero at x = {x}")]
    ZeroDerivative { x: f64, derivative: f64 },

    #[error("step from x = {x} produced non-finite estimate {next}")]
    Diverged { x: f64, next: f64 },

    #[error("no convergence after {iters} iterations: x = {x}, last step = {step}")]
    NonConvergent { iters: usize, x: f64, step: f64 },
}
