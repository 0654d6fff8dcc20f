//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `TourError` via `From` impls, or keep them separate and wrap `TourError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::StopId;

/// The top-level error type for `tour-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("stop {0} not found in the registry")]
    StopNotFound(StopId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tour-*` crates.
pub type TourResult<T> = Result<T, TourError>;
