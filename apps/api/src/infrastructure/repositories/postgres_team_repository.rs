use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{Player, Team};

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    acronym: String,
    budget: Option<Decimal>,
}

#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    team_id: i64,
    name: String,
    position: String,
}

/// PostgreSQL implementation of TeamRepository
///
/// Teams live in `teams`, rosters in `players` keyed by `team_id` and
/// ordered by `roster_index`. Rosters are fetched with a second query per
/// call rather than a join so paging stays on team rows.
#[derive(Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the schema migrations shipped with the crate
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to run migrations: {}", e)))
    }

    async fn load_rosters(&self, team_ids: &[i64]) -> Result<HashMap<i64, Vec<Player>>, RepositoryError> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, team_id, name, position
            FROM players
            WHERE team_id = ANY($1)
            ORDER BY team_id, roster_index
            "#,
        )
        .bind(team_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to load rosters: {}", e)))?;

        let mut rosters: HashMap<i64, Vec<Player>> = HashMap::new();
        for row in rows {
            rosters
                .entry(row.team_id)
                .or_default()
                .push(Player::from_persistence(Some(row.id), row.name, row.position));
        }

        Ok(rosters)
    }
}

fn into_team(row: TeamRow, players: Vec<Player>) -> Team {
    Team::from_persistence(Some(row.id), row.name, row.acronym, row.budget, Some(players))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: Team) -> Result<Team, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to begin transaction: {}", e)))?;

        let (team_id, budget): (i64, Option<Decimal>) = sqlx::query_as(
            r#"
            INSERT INTO teams (name, acronym, budget)
            VALUES ($1, $2, $3)
            RETURNING id, budget
            "#,
        )
        .bind(team.name())
        .bind(team.acronym())
        .bind(team.budget())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to save team: {}", e)))?;

        let mut players = Vec::with_capacity(team.roster().len());
        for (index, player) in team.roster().iter().enumerate() {
            let roster_index = i32::try_from(index)
                .map_err(|_| RepositoryError::Database("Roster too large".to_string()))?;

            let player_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO players (team_id, name, position, roster_index)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(team_id)
            .bind(player.name())
            .bind(player.position())
            .bind(roster_index)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to save player: {}", e)))?;

            players.push(Player::from_persistence(
                Some(player_id),
                player.name().to_string(),
                player.position().to_string(),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to commit team: {}", e)))?;

        // echo what the column holds rather than the caller's value
        Ok(Team::from_persistence(
            Some(team_id),
            team.name().to_string(),
            team.acronym().to_string(),
            budget,
            Some(players),
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, acronym, budget
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(format!("Failed to find team by id: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut rosters = self.load_rosters(&[row.id]).await?;
        let players = rosters.remove(&row.id).unwrap_or_default();

        Ok(Some(into_team(row, players)))
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Team>, RepositoryError> {
        let limit = i64::from(request.size);
        let offset = i64::try_from(request.offset())
            .map_err(|_| RepositoryError::Database("Page offset out of range".to_string()))?;

        // Sort columns come from a closed enum, never from caller input
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, acronym, budget FROM teams ORDER BY ");
        for order in &request.sort {
            query
                .push(order.field.order_expression())
                .push(" ")
                .push(order.direction.as_sql())
                .push(", ");
        }
        query
            .push("id ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows: Vec<TeamRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to list teams: {}", e)))?;

        let total = self.count().await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut rosters = if ids.is_empty() {
            HashMap::new()
        } else {
            self.load_rosters(&ids).await?
        };

        let content = rows
            .into_iter()
            .map(|row| {
                let players = rosters.remove(&row.id).unwrap_or_default();
                into_team(row, players)
            })
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to count teams: {}", e)))?;

        u64::try_from(count).map_err(|_| RepositoryError::CorruptRecord(format!("negative team count {}", count)))
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        // players go with their team through ON DELETE CASCADE
        sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(format!("Failed to delete teams: {}", e)))?;

        Ok(())
    }
}
