//! Store error types for rota-store.

use std::path::PathBuf;

use rota_core::errors::CoreError;
use thiserror::Error;

/// Errors from profile persistence and roster edits.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile list could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A roster edit was rejected (validation, unknown id).
    #[error(transparent)]
    Core(#[from] CoreError),
}
