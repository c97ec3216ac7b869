use thiserror::Error;

use crate::analyzer::MatchKeyError;
use crate::loader::LoaderError;
use crate::s3::UploadError;

/// Top-level error for a report-generation run.
///
/// Loader and match-key failures abort before any output is produced; the
/// upload variant is only reachable after the report has already been written
/// locally, and its message says so.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    MatchKey(#[from] MatchKeyError),

    #[error("report was generated, but uploading it failed: {0}")]
    Upload(#[from] UploadError),

    #[error("failed to render report JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
