//! Newton-Raphson method for scalar root finding.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration follows the tangent line of `f` at the
//! current estimate down to zero:
//!
//! ```text
//! next = x - f(x) / f'(x)
//! ```
//!
//! and records `(x, next, |next - x|)` in the solution history. Iteration
//! continues while the step `|next - x|` is at least [`Config::tol`]. Near a
//! simple root convergence is quadratic: each step is roughly the square of
//! the previous one.
//!
//! # Failure Modes
//!
//! Newton-Raphson has no bracket to fall back on. A zero derivative, a
//! non-finite value, or a sequence that oscillates or diverges ends the solve
//! with an [`Error`] instead of looping indefinitely: the iteration count is
//! capped by [`Config::max_iters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the step is recorded.
//! Observers can return [`Action::StopEarly`] to halt with the latest
//! estimate.

mod action;
mod config;
mod error;
mod event;
mod iteration;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use iteration::Iteration;
pub use solution::{Solution, Status};

use tangent_core::{Function, Observer};

/// Finds a root of `fx` starting from `x0`, using `dfx` as its derivative.
///
/// The loop body always runs at least once, so the returned history is never
/// empty.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if either function returns a
/// non-finite value, if the derivative magnitude is at or below
/// [`Config::derivative_tol`], or if the step is still at least
/// [`Config::tol`] after [`Config::max_iters`] iterations.
pub fn solve<F, D, Obs>(
    fx: &F,
    dfx: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x0 });
    }

    let mut history = Vec::new();
    let mut x = x0;
    let mut step = 2.0 * config.tol();

    while step >= config.tol() {
        if history.len() == config.max_iters() {
            log::debug!("newton-raphson gave up after {} iterations", history.len());
            return Err(Error::NonConvergent {
                iters: history.len(),
                x,
                step,
            });
        }

        let value = fx.eval(x);
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x, value });
        }

        let derivative = dfx.eval(x);
        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }
        if derivative.abs() <= config.derivative_tol() {
            return Err(Error::ZeroDerivative { x, derivative });
        }

        let next = x - value / derivative;
        if !next.is_finite() {
            return Err(Error::Diverged { x, next });
        }

        step = (next - x).abs();
        let iteration = Iteration { x, next, step };
        history.push(iteration);
        x = next;

        let event = Event {
            iter: history.len(),
            iteration,
            value,
            derivative,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Solution {
                status: Status::StoppedByObserver,
                x,
                step,
                history,
            }));
        }
    }

    Ok(finish(Solution {
        status: Status::Converged,
        x,
        step,
        history,
    }))
}

/// Runs Newton-Raphson without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(fx: &F, dfx: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(fx, dfx, x0, config, ())
}

fn finish(solution: Solution) -> Solution {
    log::debug!(
        "newton-raphson finished: status={:?} x={} step={:e} iters={}",
        solution.status,
        solution.x,
        solution.step,
        solution.iters(),
    );
    solution
}
