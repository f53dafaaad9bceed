use thiserror::Error;

use crate::domain::repositories::RepositoryError;
use crate::domain::team::sort::InvalidSortField;

/// Errors returned by team operations
#[derive(Debug, Error)]
pub enum TeamServiceError {
    #[error("Team with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    InvalidSort(#[from] InvalidSortField),

    #[error("{0}")]
    InvalidPage(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type TeamServiceResult<T> = Result<T, TeamServiceError>;
