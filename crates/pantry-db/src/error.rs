//! Database-specific error types and conversions.

use pantry_core::error::PantryError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Corrupt {entity} row: {reason}")]
    CorruptRow { entity: &'static str, reason: String },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl DbError {
    pub(crate) fn invalid_uuid(entity: &'static str, err: uuid::Error) -> Self {
        Self::CorruptRow {
            entity,
            reason: format!("invalid UUID: {err}"),
        }
    }
}

impl From<DbError> for PantryError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => PantryError::NotFound { entity, id },
            other => PantryError::Database(other.to_string()),
        }
    }
}
