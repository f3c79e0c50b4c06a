//! Numerical approximations of definite integrals.
//!
//! - [`riemann`] — left-endpoint rectangle rule over equal subintervals

pub mod riemann;
