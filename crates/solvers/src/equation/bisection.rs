//! Bisection method for scalar root finding.
//!
//! # Algorithm
//!
//! Bisection starts from a bracket `[left, right]` on which `f` changes sign
//! and repeatedly evaluates the midpoint `m`. If `f(m)` and `f(right)` have
//! opposite signs the root lies in `[m, right]`, otherwise in `[left, m]`.
//! An exact zero at `m` takes the second branch and ends the solve, since `m`
//! is itself a root.
//!
//! # Stopping
//!
//! The solver tracks the relative change between successive midpoints,
//! `|m - m_prev| / |m|`, and stops once it falls to [`Config::rel_tol`] or
//! after [`Config::max_iters`] iterations. The relative error starts at
//! [`INITIAL_RELATIVE_ERROR`] and, by default, is first computed on the third
//! iteration (see [`ErrorOnset`]). A solve that stops earlier reports that
//! initial value.
//!
//! An exact zero at a midpoint ends the solve as [`Status::Converged`] on any
//! iteration, including those before the relative error is first computed.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the bracket update.
//! Observers can return [`Action::StopEarly`] to halt with the current
//! midpoint as the estimate.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError, ErrorOnset};
pub use error::Error;
pub use event::Event;
pub use solution::{INITIAL_RELATIVE_ERROR, Solution, Status};

use tangent_core::{Function, Observer};

use bracket::{Bounds, Bracket, Sign};

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// Endpoints may be given in either order. If `f` is exactly zero at an
/// endpoint, that endpoint is returned without iterating.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// enclose a sign change, or if `f` returns a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_value = checked_eval(f, left)?;
    if left_value == 0.0 {
        return Ok(finish(Solution::endpoint_root(left, bounds.as_array())));
    }
    let right_value = checked_eval(f, right)?;
    if right_value == 0.0 {
        return Ok(finish(Solution::endpoint_root(right, bounds.as_array())));
    }

    let mut bracket = Bracket::new(bounds, left_value, right_value)?;

    let mut midpoint = 0.0;
    let mut relative_error = INITIAL_RELATIVE_ERROR;

    for index in 0..config.max_iters() {
        let previous = midpoint;
        midpoint = bracket.midpoint();

        let value = checked_eval(f, midpoint)?;
        bracket.bisect(midpoint, Sign::of(value));

        let computed = config
            .error_onset()
            .is_active(index)
            .then(|| relative_change(midpoint, previous));
        if let Some(error) = computed {
            relative_error = error;
        }

        let iter = index + 1;
        let event = Event {
            iter,
            bracket: bracket.as_array(),
            midpoint,
            value,
            relative_error: computed,
        };

        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if value == 0.0 || relative_error <= config.rel_tol() {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(finish(Solution {
                status,
                x: midpoint,
                relative_error,
                iters: iter,
                bracket: bracket.as_array(),
            }));
        }
    }

    Ok(finish(Solution {
        status: Status::MaxIters,
        x: midpoint,
        relative_error,
        iters: config.max_iters(),
        bracket: bracket.as_array(),
    }))
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// enclose a sign change, or if `f` returns a non-finite value.
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

/// Relative change between successive midpoints.
///
/// Falls back to the absolute change when the current midpoint is exactly
/// zero, where the relative form is undefined.
fn relative_change(current: f64, previous: f64) -> f64 {
    if current == 0.0 {
        (current - previous).abs()
    } else {
        ((current - previous) / current).abs()
    }
}

fn checked_eval<F: Function>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.eval(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteEvaluation { x, value })
    }
}

fn finish(solution: Solution) -> Solution {
    if solution.status == Status::MaxIters {
        log::warn!(
            "bisection reached {} iterations without converging (relative error {:e})",
            solution.iters,
            solution.relative_error,
        );
    }
    log::debug!(
        "bisection finished: status={:?} x={} relative_error={:e} iters={}",
        solution.status,
        solution.x,
        solution.relative_error,
        solution.iters,
    );
    solution
}
