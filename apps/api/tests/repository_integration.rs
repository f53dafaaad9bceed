//! Integration tests for the PostgreSQL team repository
//!
//! These tests need a reachable database and are ignored by default. Run
//! them with `DATABASE_URL` set:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test --test repository_integration -- --ignored --test-threads=1
//! ```
//!
//! Each test clears the `teams` table first, so point them at a throwaway
//! database.

use football_teams_api::domain::pagination::PageRequest;
use football_teams_api::domain::repositories::TeamRepository;
use football_teams_api::domain::team::{Player, SortOrder, Team, TeamSortField};
use football_teams_api::infrastructure::repositories::PostgresTeamRepository;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Set up a migrated, empty repository
async fn setup_repository() -> PostgresTeamRepository {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    let repository = PostgresTeamRepository::new(pool);
    repository.migrate().await.expect("Failed to run migrations");
    repository
        .delete_all()
        .await
        .expect("Failed to clean teams table");
    repository
}

fn team(name: &str, acronym: &str, budget: Option<i64>) -> Team {
    Team::new(
        name.to_string(),
        acronym.to_string(),
        budget.map(Decimal::from),
        Vec::new(),
    )
}

async fn names(repository: &PostgresTeamRepository, request: &PageRequest) -> Vec<String> {
    repository
        .find_all(request)
        .await
        .expect("Failed to list teams")
        .content
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_and_find_by_id_with_roster() {
    let repository = setup_repository().await;

    let saved = repository
        .save(Team::new(
            "OGC Nice".to_string(),
            "OGCN".to_string(),
            Some(Decimal::from(10_000_000)),
            vec![
                Player::new("Marcin Bulka".to_string(), "Goalkeeper".to_string()),
                Player::new("Dante".to_string(), "Defender".to_string()),
            ],
        ))
        .await
        .expect("Failed to save team");

    let id = saved.id().expect("Team ID should be assigned");
    assert!(saved.roster().iter().all(|p| p.id().is_some()));

    let found = repository
        .find_by_id(id)
        .await
        .expect("Failed to find team")
        .expect("Team should be found");

    assert_eq!(found.name(), "OGC Nice");
    assert_eq!(found.acronym(), "OGCN");
    assert_eq!(found.budget(), Some(Decimal::from(10_000_000)));
    let roster: Vec<&str> = found.roster().iter().map(|p| p.name()).collect();
    assert_eq!(roster, vec!["Marcin Bulka", "Dante"]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_unknown_id_returns_none() {
    let repository = setup_repository().await;

    let found = repository.find_by_id(i64::MAX).await.expect("Query failed");

    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_ignores_supplied_id() {
    let repository = setup_repository().await;

    let first = repository.save(team("A", "A", Some(1))).await.unwrap();
    let second = repository
        .save(Team::from_persistence(
            first.id(),
            "B".to_string(),
            "B".to_string(),
            None,
            None,
        ))
        .await
        .unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(repository.count().await.unwrap(), 2);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_sorted_and_paginated() {
    let repository = setup_repository().await;
    repository.save(team("OGC Nice", "OGCN", Some(10_000_000))).await.unwrap();
    repository.save(team("Paris Saint-Germain", "PSG", Some(20_000_000))).await.unwrap();
    repository.save(team("Olympique Lyon", "OL", Some(15_000_000))).await.unwrap();

    let by_name_desc = PageRequest::new(0, 3, vec![SortOrder::desc(TeamSortField::Name)]);
    assert_eq!(
        names(&repository, &by_name_desc).await,
        vec!["Paris Saint-Germain", "Olympique Lyon", "OGC Nice"]
    );

    let page = repository
        .find_all(&PageRequest::new(0, 2, Vec::new()))
        .await
        .unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unset_budget_ordering_matches_in_memory_store() {
    let repository = setup_repository().await;
    repository.save(team("none", "N", None)).await.unwrap();
    repository.save(team("rich", "R", Some(50))).await.unwrap();
    repository.save(team("poor", "P", Some(5))).await.unwrap();

    let asc = PageRequest::new(0, 10, vec![SortOrder::asc(TeamSortField::Budget)]);
    assert_eq!(names(&repository, &asc).await, vec!["poor", "rich", "none"]);

    let desc = PageRequest::new(0, 10, vec![SortOrder::desc(TeamSortField::Budget)]);
    assert_eq!(names(&repository, &desc).await, vec!["none", "rich", "poor"]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_all_removes_teams_and_players() {
    let repository = setup_repository().await;
    repository
        .save(Team::new(
            "OGC Nice".to_string(),
            "OGCN".to_string(),
            None,
            vec![Player::new("Dante".to_string(), "Defender".to_string())],
        ))
        .await
        .unwrap();

    repository.delete_all().await.unwrap();

    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_budget_keeps_full_precision() {
    let repository = setup_repository().await;
    let budget = Decimal::new(125, 3);

    let saved = repository
        .save(Team::new(
            "OGC Nice".to_string(),
            "OGCN".to_string(),
            Some(budget),
            Vec::new(),
        ))
        .await
        .expect("Failed to save team");

    let found = repository
        .find_by_id(saved.id().expect("Team ID should be assigned"))
        .await
        .expect("Failed to find team")
        .expect("Team should be found");

    assert_eq!(saved.budget(), Some(budget));
    assert_eq!(found.budget(), Some(budget));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_large_budget_is_stored() {
    let repository = setup_repository().await;
    let budget = Decimal::from(10_000_000_000_000_000_i64);

    let saved = repository
        .save(Team::new(
            "Paris Saint-Germain".to_string(),
            "PSG".to_string(),
            Some(budget),
            Vec::new(),
        ))
        .await
        .expect("Failed to save team");

    assert_eq!(saved.budget(), Some(budget));
}
