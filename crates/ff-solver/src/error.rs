//! Error types for solver operations.

use ff_core::FfError;
use thiserror::Error;

/// Errors that can occur while setting up or running a freeze.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error(
        "Unstable explicit scheme: diffusion number r = epsilon*dt/dx^2 = {r} exceeds {limit}; reduce dt or epsilon, or increase dx"
    )]
    Unstable { r: f64, limit: f64 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Core error: {0}")]
    Core(#[from] FfError),
}

pub type SolverResult<T> = Result<T, SolverError>;
