use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::validation::ValidatedJson;
use crate::api::AppState;
use crate::domain::pagination::Page;
use crate::services::TeamView;

const DEFAULT_PAGE: u32 = 0;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for listing teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTeamsParams {
    pub page: u32,
    pub size: u32,
    pub sort_by: Vec<String>,
}

impl Default for ListTeamsParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort_by: Vec::new(),
        }
    }
}

impl ListTeamsParams {
    /// Builds parameters from raw query pairs
    ///
    /// `sortBy` may repeat, and each occurrence may hold a comma-separated
    /// list; tokens keep their order of appearance. An empty `sortBy` value
    /// adds no tokens.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => params.page = parse_number("page", &value)?,
                "size" => params.size = parse_number("size", &value)?,
                // an empty value means no ordering
                "sortBy" if value.is_empty() => {}
                "sortBy" => params
                    .sort_by
                    .extend(value.split(',').map(str::to_string)),
                _ => {}
            }
        }

        Ok(params)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, ApiError> {
    value.trim().parse().map_err(|_| {
        ApiError::bad_request(format!(
            "Invalid value for parameter '{}': {}",
            name, value
        ))
    })
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamView>, ApiError> {
    let team = state.team_service.get_team_by_id(id).await?;

    Ok(Json(team))
}

/// List teams, paginated and optionally sorted
///
/// GET /api/teams?page=&size=&sortBy=
pub async fn list_teams(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Page<TeamView>>, ApiError> {
    let params = ListTeamsParams::from_pairs(pairs)?;

    let teams = state
        .team_service
        .list_teams(params.page, params.size, &params.sort_by)
        .await?;

    Ok(Json(teams))
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(team): ValidatedJson<TeamView>,
) -> Result<(StatusCode, Json<TeamView>), ApiError> {
    let created = state.team_service.create_team(team).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
