//! Error types for sequence generation.

use thiserror::Error;
use ts_core::CoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Reasons a parameter set cannot produce a sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Capacity must be strictly positive; the mixing rules divide by it.
    #[error("Domain error: capacity must be > 0 (got {capacity})")]
    Domain { capacity: f64 },

    /// At least one day is required.
    #[error("Invalid length: n_max must be >= 1 (got {n_max})")]
    InvalidLength { n_max: usize },

    #[error(transparent)]
    NonFinite(#[from] CoreError),
}
