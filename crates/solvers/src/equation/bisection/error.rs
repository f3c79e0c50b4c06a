use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },
}
