use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::sort::compare_teams;
use crate::domain::team::{Player, Team};

#[derive(Debug, Default)]
struct State {
    next_team_id: i64,
    next_player_id: i64,
    teams: Vec<Team>,
}

/// Thread-safe in-memory implementation of TeamRepository
///
/// Useful for testing and development. Data is lost when the process
/// terminates. Teams are kept in insertion order, which is also ID order.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    state: RwLock<State>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: Team) -> Result<Team, RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| RepositoryError::LockPoisoned(e.to_string()))?;

        state.next_team_id += 1;
        let team_id = state.next_team_id;

        let mut players = Vec::with_capacity(team.roster().len());
        for player in team.roster() {
            state.next_player_id += 1;
            players.push(Player::from_persistence(
                Some(state.next_player_id),
                player.name().to_string(),
                player.position().to_string(),
            ));
        }

        let stored = team.with_ids(team_id, players);
        state.teams.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|e| RepositoryError::LockPoisoned(e.to_string()))?;

        Ok(state.teams.iter().find(|t| t.id() == Some(id)).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Team>, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|e| RepositoryError::LockPoisoned(e.to_string()))?;

        // Stable sort keeps ID order among equal keys
        let mut teams: Vec<&Team> = state.teams.iter().collect();
        teams.sort_by(|a, b| compare_teams(&request.sort, a, b));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = teams
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, state.teams.len() as u64))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|e| RepositoryError::LockPoisoned(e.to_string()))?;

        Ok(state.teams.len() as u64)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| RepositoryError::LockPoisoned(e.to_string()))?;

        state.teams.clear();
        Ok(())
    }
}
