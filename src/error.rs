use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl SummaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SummaryError::Io {
            path: path.into(),
            source,
        }
    }
}
/// Reasons a single file could not be previewed.
///
/// These never abort a scan; they are folded into [`crate::Preview::Unavailable`].
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File looks binary")]
    Binary,
}
