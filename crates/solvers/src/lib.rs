//! Scalar numerical approximation methods.
//!
//! - [`equation`] — root finding: [`bisection`](equation::bisection) on a
//!   bracket and [`newton_raphson`](equation::newton_raphson) from a starting
//!   point
//! - [`quadrature`] — definite integrals: left-endpoint
//!   [`riemann`](quadrature::riemann) sums
//!
//! Every solver evaluates caller-supplied [`Function`](tangent_core::Function)
//! values and returns a `Result` with a solver-specific error type.

pub mod equation;
pub mod quadrature;
