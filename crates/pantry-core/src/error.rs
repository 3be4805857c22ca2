//! Error types for the pantry system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PantryError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    /// The data collaborator could not be reached. Retrying is left to
    /// the caller.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PantryError {
    /// Whether the failure is transient (the same call may succeed later).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
    }
}

pub type PantryResult<T> = Result<T, PantryError>;
