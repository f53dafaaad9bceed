// Application services
// Orchestrate domain types and repository ports for the API layer

pub mod errors;
pub mod mapping;
pub mod team_service;

pub use errors::TeamServiceError;
pub use mapping::{PlayerView, TeamView};
pub use team_service::TeamService;
