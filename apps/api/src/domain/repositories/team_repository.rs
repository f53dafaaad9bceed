use async_trait::async_trait;
use thiserror::Error;

use crate::domain::pagination::{Page, PageRequest};
use crate::domain::team::Team;

/// Errors raised by team store implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams with their
/// rosters. Implementations own identifier assignment and any transactional
/// scoping a multi-row save needs.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a team and its roster, assigning identifiers
    ///
    /// Any identifier already present on the input is ignored.
    async fn save(&self, team: Team) -> Result<Team, RepositoryError>;

    /// Find a team by its ID, roster loaded
    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, RepositoryError>;

    /// Fetch one page of teams ordered by `request.sort`, then by ID
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Team>, RepositoryError>;

    /// Count all stored teams
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Delete every team and player
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
