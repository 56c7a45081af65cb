use std::io;

use thiserror::Error;
use tokio::task::JoinError;

/// Failures of the environment around a batch, as opposed to problems with its content.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Could not open batch file at path: {path} | {source}")]
    Open {
        path: String,
        source: io::Error
    },
    #[error("Batch file is not readable as CSV: {0}")]
    Malformed(#[from] csv::Error),
    #[error("CSV parse task did not complete: {0}")]
    Task(#[from] JoinError)
}
