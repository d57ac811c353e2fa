//! Storage-specific error types wrapping filesystem and JSON faults.

use stayhub_domain::error::StayHubError;

/// Errors originating from the JSON document store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the document file failed.
    #[error("document I/O error")]
    Io(#[from] std::io::Error),

    /// The document file holds malformed JSON, or a record failed to
    /// serialize.
    #[error("document JSON error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for StayHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Errors originating from the uploads directory tree.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Creating the per-hotel directory or writing an image failed.
    #[error("image write error")]
    Io(#[from] std::io::Error),
}

impl From<MediaError> for StayHubError {
    fn from(err: MediaError) -> Self {
        Self::Media(Box::new(err))
    }
}
