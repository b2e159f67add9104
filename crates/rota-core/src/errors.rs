//! Cross-cutting error types for Rota.
//!
//! Storage errors (`StoreError`) and configuration errors (`ConfigError`) live
//! in their own crates. Errors converge into `anyhow` in `rota-cli`.

use thiserror::Error;

/// Errors that can be raised by any Rota crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (empty name, no roles, unknown role tag, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A year/month pair does not name a calendar month.
    #[error("Invalid month '{value}': {reason}")]
    InvalidMonth { value: String, reason: String },
}
