//! Error types for tour-map.

use thiserror::Error;

/// Errors raised by map bounds construction.
///
/// Degenerate bounds are a configuration defect, detected when the bounds
/// are built so startup can halt with a diagnostic instead of producing
/// NaN coordinates at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("degenerate map bounds: zero span on the {axis} axis")]
    DegenerateBounds { axis: &'static str },
}

/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;
