//! Error types for tour-stops.

use thiserror::Error;
use tour_core::StopId;

/// Errors raised while building or querying a stop registry.
#[derive(Debug, Error)]
pub enum StopsError {
    #[error("stop registry is empty")]
    Empty,

    #[error("duplicate stop ID {0} in registry")]
    DuplicateId(StopId),

    #[error("stop {stop} has non-positive trigger radius {radius}")]
    NonPositiveRadius { stop: StopId, radius: f64 },

    #[error("stop {0} not found in the registry")]
    UnknownStop(StopId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, StopsError>`.
pub type StopsResult<T> = Result<T, StopsError>;
