use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    derivative_tol: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("derivative_tol must be finite and non-negative")]
    DerivativeTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 50).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step tolerance and iteration cap.
    ///
    /// Only an exactly zero derivative is rejected; use
    /// [`Config::with_derivative_tol`] to reject small derivatives too.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if `max_iters`
    /// is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tol,
            max_iters,
            derivative_tol: 0.0,
        })
    }

    /// Returns a copy of this config that treats derivatives with magnitude
    /// at or below `derivative_tol` as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `derivative_tol` is negative or non-finite.
    pub fn with_derivative_tol(self, derivative_tol: f64) -> Result<Self, ConfigError> {
        if !derivative_tol.is_finite() || derivative_tol < 0.0 {
            return Err(ConfigError::DerivativeTol);
        }

        Ok(Self {
            derivative_tol,
            ..self
        })
    }

    /// Returns the step size below which the solver has converged.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the derivative magnitude treated as zero.
    #[must_use]
    pub fn derivative_tol(&self) -> f64 {
        self.derivative_tol
    }
}
