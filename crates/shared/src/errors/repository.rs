use crate::errors::DomainError;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Error retrieving all {entity}")]
    Retrieval {
        entity: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Stored record is invalid: {0}")]
    Domain(#[from] DomainError),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str) -> Self {
        RepositoryError::NotFound { entity }
    }

    /// Collapses any failure into the generic "retrieving all" error. An error
    /// that is already a retrieval failure is passed through as is.
    pub fn retrieval(entity: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::Retrieval { .. } => err,
            other => RepositoryError::Retrieval {
                entity,
                source: Box::new(other),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    pub fn is_retrieval(&self) -> bool {
        matches!(self, RepositoryError::Retrieval { .. })
    }

    /// True when the storage layer rejected a write on a primary key or
    /// unique index.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            RepositoryError::Sqlx(SqlxError::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            RepositoryError::Sqlx(SqlxError::Database(db_err)) => {
                db_err.is_foreign_key_violation()
            }
            _ => false,
        }
    }
}
