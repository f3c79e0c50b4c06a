//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`] — halves a sign-changing bracket; needs only `f`
//! - [`newton_raphson`] — follows tangent lines from a starting point; needs
//!   `f` and its derivative
//!
//! Both accept an [`Observer`](tangent_core::Observer) that sees one event per
//! iteration and may stop the solver early.

pub mod bisection;
pub mod newton_raphson;
