use thiserror::Error;
use tokio::task::JoinError;

use crate::ingest::StructuralError;

/// Failures an upload or reset reports to its caller. Row-level problems are never errors.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error("An upload is already in progress, retry later")]
    Busy,
    #[error("Upload worker failed: {0}")]
    Worker(#[from] JoinError)
}

impl UploadError {
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadError::Busy)
    }
}
