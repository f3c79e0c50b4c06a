use thiserror::Error;

use super::INITIAL_RELATIVE_ERROR;

/// When the solver starts computing the relative error between midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorOnset {
    /// First computed on the third iteration.
    ///
    /// The first two iterations always run, whatever the tolerance.
    #[default]
    ThirdIteration,

    /// First computed on the second iteration, the earliest one with a
    /// previous midpoint to compare against.
    FirstUpdate,
}

impl ErrorOnset {
    /// Returns true if the relative error is computed at the zero-based
    /// iteration `index`.
    #[must_use]
    pub fn is_active(self, index: usize) -> bool {
        match self {
            ErrorOnset::ThirdIteration => index > 1,
            ErrorOnset::FirstUpdate => index > 0,
        }
    }
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
    error_onset: ErrorOnset,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("rel_tol must be finite, positive, and below the initial relative error")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, 1e-3).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// The relative error is computed from the third iteration onward; use
    /// [`Config::with_error_onset`] to change that.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero, or if `rel_tol` is not finite,
    /// not positive, or not below [`INITIAL_RELATIVE_ERROR`].
    pub fn new(max_iters: usize, rel_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !rel_tol.is_finite() || rel_tol <= 0.0 || rel_tol >= INITIAL_RELATIVE_ERROR {
            return Err(ConfigError::RelTol);
        }

        Ok(Self {
            max_iters,
            rel_tol,
            error_onset: ErrorOnset::default(),
        })
    }

    /// Returns a copy of this config with a different error onset.
    #[must_use]
    pub fn with_error_onset(self, error_onset: ErrorOnset) -> Self {
        Self {
            error_onset,
            ..self
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative-error stopping threshold.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns when the relative error is first computed.
    #[must_use]
    pub fn error_onset(&self) -> ErrorOnset {
        self.error_onset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.error_onset(), ErrorOnset::ThirdIteration);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-3), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_tolerances() {
        for rel_tol in [0.0, -1e-3, f64::NAN, f64::INFINITY, INITIAL_RELATIVE_ERROR] {
            assert_eq!(Config::new(10, rel_tol), Err(ConfigError::RelTol));
        }
    }

    #[test]
    fn onset_controls_first_error_index() {
        let delayed: Vec<_> = (0..4).map(|i| ErrorOnset::ThirdIteration.is_active(i)).collect();
        assert_eq!(delayed, [false, false, true, true]);

        let early: Vec<_> = (0..4).map(|i| ErrorOnset::FirstUpdate.is_active(i)).collect();
        assert_eq!(early, [false, true, true, true]);
    }
}
