use thiserror::Error;

use lifestyle_history_data::repository::RepositoryError;

/// Errors returned by the domain services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The targeted record does not exist
    #[error("{0}")]
    RecordNotFound(String),

    /// The datastore failed
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Repository(err.to_string())
    }
}
