//! Core traits for the tangent solvers.
//!
//! This crate defines the two capabilities every solver builds on:
//!
//! - [`Function`] — a deterministic real-to-real mapping that solvers evaluate
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
