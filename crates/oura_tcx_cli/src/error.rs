//! Error taxonomy for a single export run.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that terminate a run with a non-zero exit. There are no
/// retries; the operator re-invokes the tool.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("fetching from the Oura API: {0}")]
    Fetch(#[from] oura_client::OuraError),

    #[error("workout {id} has a malformed {field} timestamp: {value:?}")]
    MalformedTimestamp {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("assembling the TCX document: {0}")]
    Xml(#[from] crate::xml::XmlWriteError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Clean terminal states of one run. Cancellation and an empty workout
/// history end the run with exit code 0 and no file written.
#[derive(Debug)]
pub enum RunOutcome {
    Exported { path: PathBuf, sample_count: usize },
    NothingToExport,
    Cancelled,
}
