// Team domain module
// Contains the team aggregate root, its roster, and sort specifications

#![allow(clippy::module_inception)]

pub mod player;
pub mod sort;
pub mod team;

// Re-export main types for convenience
pub use player::Player;
pub use sort::{SortDirection, SortOrder, TeamSortField};
pub use team::Team;
