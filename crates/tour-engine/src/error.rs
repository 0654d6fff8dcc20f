use thiserror::Error;
use tour_core::StopId;
use tour_progress::ProgressError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("stop {0} not found in the registry")]
    UnknownStop(StopId),

    #[error("progress persistence error: {0}")]
    Progress(#[from] ProgressError),
}

pub type EngineResult<T> = Result<T, EngineError>;
