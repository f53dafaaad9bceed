use std::sync::Arc;

use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::sort::parse_sort_orders;

use super::errors::{TeamServiceError, TeamServiceResult};
use super::mapping::{to_entity, to_view, TeamView};

/// Team operations
///
/// Stateless between calls: every operation is one round trip through the
/// repository, and failures come back as [`TeamServiceError`] variants.
#[derive(Clone)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Get a team by its ID
    ///
    /// # Errors
    /// * `TeamServiceError::NotFound` - no team has this ID
    pub async fn get_team_by_id(&self, id: i64) -> TeamServiceResult<TeamView> {
        tracing::info!(id, "Fetching team");

        let team = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(id, "Team not found");
                TeamServiceError::NotFound(id)
            })?;

        tracing::info!(id, name = team.name(), "Team found");
        Ok(to_view(&team))
    }

    /// Get a page of teams with optional sorting
    ///
    /// `sort_by` holds field names, each optionally prefixed with `-` for
    /// descending order. An empty list keeps the store's natural order.
    ///
    /// # Errors
    /// * `TeamServiceError::InvalidSort` - a token names a non-sortable field
    /// * `TeamServiceError::InvalidPage` - `size` is zero
    pub async fn list_teams(
        &self,
        page: u32,
        size: u32,
        sort_by: &[String],
    ) -> TeamServiceResult<Page<TeamView>> {
        tracing::info!(page, size, ?sort_by, "Fetching teams");

        let sort = parse_sort_orders(sort_by)?;

        if size < 1 {
            return Err(TeamServiceError::InvalidPage(
                "Page size must not be less than one".to_string(),
            ));
        }

        if sort.is_empty() {
            tracing::info!("No sorting criteria provided, fetching teams without sorting");
        }

        let request = PageRequest::new(page, size, sort);
        let result = self.repository.find_all(&request).await?;

        tracing::info!(total = result.total_elements, "Fetched teams");
        Ok(result.map(|team| to_view(&team)))
    }

    /// Add a new team
    ///
    /// The store assigns the team and player IDs; the returned view carries
    /// them.
    pub async fn create_team(&self, view: TeamView) -> TeamServiceResult<TeamView> {
        tracing::info!(name = %view.name, "Adding new team");

        let team = self.repository.save(to_entity(view)).await?;

        tracing::info!(id = ?team.id(), "Team added");
        Ok(to_view(&team))
    }
}
