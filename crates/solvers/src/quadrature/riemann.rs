//! Left-endpoint Riemann sums.
//!
//! The interval `[a, b]` is split into `n` subintervals of width
//! `h = (b - a) / n`, and each contributes a rectangle whose height is the
//! integrand at its left endpoint:
//!
//! ```text
//! ∫ f dx ≈ h · Σ f(a + i·h),  i = 0, 1, …, n - 1
//! ```
//!
//! The rule is first-order accurate: the error shrinks like `1/n`.

use tangent_core::Function;
use thiserror::Error;

/// Errors that can occur when computing a Riemann sum.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("subdivision count must be at least 1, got {n}")]
    InvalidSubdivisionCount { n: usize },

    #[error("interval [{a}, {b}] has a non-finite limit or width")]
    InvalidInterval { a: f64, b: f64 },

    #[error("non-finite integrand value {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },

    #[error("sum overflowed to {sum}")]
    NonFiniteSum { sum: f64 },
}

/// Approximates the integral of `f` over `interval` with `n` left rectangles.
///
/// Limits given as `[b, a]` with `b > a` produce the negated integral, and
/// equal limits produce zero.
///
/// # Errors
///
/// Returns an error if `n` is zero, if a limit or the subinterval width is
/// not finite, if `f` returns a non-finite value, or if the sum overflows.
pub fn left_sum<F: Function>(f: &F, interval: [f64; 2], n: usize) -> Result<f64, Error> {
    if n == 0 {
        return Err(Error::InvalidSubdivisionCount { n });
    }

    let [a, b] = interval;
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::InvalidInterval { a, b });
    }

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;
    if !h.is_finite() {
        return Err(Error::InvalidInterval { a, b });
    }

    let mut sum = 0.0;
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let x = a + i as f64 * h;
        let value = f.eval(x);
        if !value.is_finite() {
            return Err(Error::NonFiniteEvaluation { x, value });
        }
        sum += value * h;
    }

    if !sum.is_finite() {
        return Err(Error::NonFiniteSum { sum });
    }
    Ok(sum)
}
