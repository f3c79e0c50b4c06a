//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can drive both root-finding solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry a 1-based iteration number
//! - [`HasEstimate`] — events that carry the solver's current estimate
//! - [`HasErrorEstimate`] — events that may carry a convergence metric
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tangent_core::Observer;
//! use tangent_observers::traits::{CanStopEarly, HasEstimate};
//! use tangent_solvers::equation::{bisection, newton_raphson};
//!
//! /// Stops once the estimate enters a known window.
//! struct Within {
//!     low: f64,
//!     high: f64,
//! }
//!
//! impl<E: HasEstimate, A: CanStopEarly> Observer<E, A> for Within {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let x = event.estimate();
//!         (self.low..=self.high).contains(&x).then(A::stop_early)
//!     }
//! }
//!
//! let cubic = |x: f64| x.powi(3) - x - 2.0;
//! let slope = |x: f64| 3.0 * x.powi(2) - 1.0;
//! let window = || Within { low: 1.5, high: 1.55 };
//!
//! let config = bisection::Config::default();
//! let solution = bisection::solve(&cubic, [1.0, 2.0], &config, window()).unwrap();
//! assert_eq!(solution.status, bisection::Status::StoppedByObserver);
//!
//! let config = newton_raphson::Config::default();
//! let solution = newton_raphson::solve(&cubic, &slope, 2.0, &config, window()).unwrap();
//! assert_eq!(solution.status, newton_raphson::Status::StoppedByObserver);
//! ```

use tangent_solvers::equation::{bisection, newton_raphson};

/// An event that carries a 1-based iteration number.
pub trait HasIteration {
    /// Returns the iteration that produced this event.
    fn iteration(&self) -> usize;
}

/// An event that carries the solver's current estimate of the root.
pub trait HasEstimate {
    /// Returns the estimate after this event's iteration.
    fn estimate(&self) -> f64;
}

/// An event that may carry a convergence metric.
pub trait HasErrorEstimate {
    /// Returns the metric the solver compares against its tolerance, or
    /// `None` if the solver did not compute one this iteration.
    fn error_estimate(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasIteration for bisection::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        self.midpoint
    }
}

impl HasErrorEstimate for bisection::Event {
    fn error_estimate(&self) -> Option<f64> {
        self.relative_error
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton_raphson ---

impl HasIteration for newton_raphson::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for newton_raphson::Event {
    fn estimate(&self) -> f64 {
        self.iteration.next
    }
}

impl HasErrorEstimate for newton_raphson::Event {
    fn error_estimate(&self) -> Option<f64> {
        Some(self.iteration.step)
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tangent_core::Observer;

    /// Stops after a fixed number of iterations, for any solver.
    struct StopAt(usize);

    impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAt {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.iteration() >= self.0).then(A::stop_early)
        }
    }

    fn cubic(x: f64) -> f64 {
        x.powi(3) - x - 2.0
    }

    fn cubic_slope(x: f64) -> f64 {
        3.0 * x.powi(2) - 1.0
    }

    #[test]
    fn generic_observer_stops_bisection() {
        let config = bisection::Config::default();
        let solution = bisection::solve(&cubic, [1.0, 2.0], &config, StopAt(2)).unwrap();

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn generic_observer_stops_newton() {
        let config = newton_raphson::Config::new(1e-12, 50).unwrap();
        let solution =
            newton_raphson::solve(&cubic, &cubic_slope, 2.0, &config, StopAt(2)).unwrap();

        assert_eq!(solution.status, newton_raphson::Status::StoppedByObserver);
        assert_eq!(solution.iters(), 2);
    }

    #[test]
    fn events_expose_estimates() {
        let mut estimates = Vec::new();
        let mut metrics = Vec::new();
        let observer = |event: &bisection::Event| -> Option<bisection::Action> {
            estimates.push(event.estimate());
            metrics.push(event.error_estimate());
            None
        };

        let config = bisection::Config::new(3, 1e-3).unwrap();
        bisection::solve(&cubic, [1.0, 2.0], &config, observer).unwrap();

        assert_eq!(estimates, [1.5, 1.75, 1.625]);
        assert_eq!(metrics[..2], [None, None]);
        assert!(metrics[2].is_some());
    }

    #[test]
    fn newton_estimate_is_next_iterate() {
        let mut pairs = Vec::new();
        let observer = |event: &newton_raphson::Event| -> Option<newton_raphson::Action> {
            pairs.push((event.estimate(), event.error_estimate()));
            None
        };

        let config = newton_raphson::Config::default();
        let solution = newton_raphson::solve(&cubic, &cubic_slope, 1.5, &config, observer).unwrap();

        for ((estimate, metric), iteration) in pairs.iter().zip(&solution.history) {
            assert_eq!(*estimate, iteration.next);
            assert_eq!(*metric, Some(iteration.step));
        }
    }
}
