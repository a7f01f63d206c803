//! Errors surfaced by the showcase.

use listmap::map::MapError;
use thiserror::Error;

/// Anything that can stop the showcase.
///
/// Map errors are not recovered: they propagate to `main` and end the process.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// A map operation was rejected.
    #[error(transparent)]
    Map(#[from] MapError),
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding a stage as JSON failed.
    #[error("failed to encode stage: {0}")]
    Json(#[from] serde_json::Error),
}
