//! Reusable observers and presentation helpers for the tangent solvers.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEstimate`], [`HasErrorEstimate`], [`CanStopEarly`])
//! - [`logging`] — [`LogObserver`], which forwards solver events to the `log`
//!   facade, and [`StderrLogger`], a minimal logger for command-line programs
//! - [`report`] — [`IterationTable`] and [`Report`] for printing a
//!   Newton-Raphson history
//!
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasErrorEstimate`]: traits::HasErrorEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod logging;
pub mod report;
pub mod traits;

pub use logging::{LogObserver, StderrLogger};
pub use report::{IterationTable, Report};
