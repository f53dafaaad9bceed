use rust_decimal::Decimal;

use super::player::Player;

/// Team aggregate root
///
/// A football team together with its roster. The identifier is assigned by
/// the store when the team is first saved and never changes afterwards.
///
/// # Invariants
/// - `id` is `None` until the store assigns it
/// - `budget` is `None` when the caller did not provide one; it is never
///   defaulted to zero
/// - `players` is `None` when the roster was not loaded, otherwise it keeps
///   insertion order
///
/// # Example
/// ```
/// use football_teams_api::domain::team::{Player, Team};
/// use rust_decimal::Decimal;
///
/// let team = Team::new(
///     "OGC Nice".to_string(),
///     "OGCN".to_string(),
///     Some(Decimal::from(10_000_000)),
///     vec![Player::new("Jean".to_string(), "Goalkeeper".to_string())],
/// );
///
/// assert!(team.id().is_none());
/// assert_eq!(team.roster().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Option<i64>,
    name: String,
    acronym: String,
    budget: Option<Decimal>,
    players: Option<Vec<Player>>,
}

impl Team {
    /// Creates a team that has not been persisted yet
    pub fn new(
        name: String,
        acronym: String,
        budget: Option<Decimal>,
        players: Vec<Player>,
    ) -> Self {
        Self {
            id: None,
            name,
            acronym,
            budget,
            players: Some(players),
        }
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Only to be used by repository implementations and the mapping layer.
    pub fn from_persistence(
        id: Option<i64>,
        name: String,
        acronym: String,
        budget: Option<Decimal>,
        players: Option<Vec<Player>>,
    ) -> Self {
        Self {
            id,
            name,
            acronym,
            budget,
            players,
        }
    }

    /// Returns a copy of this team carrying the store-assigned identifiers
    pub fn with_ids(mut self, id: i64, players: Vec<Player>) -> Self {
        self.id = Some(id);
        self.players = Some(players);
        self
    }

    // ===== Getters =====

    /// Returns the team's ID, if it has been persisted
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn acronym(&self) -> &str {
        &self.acronym
    }

    /// Returns the budget if one was set
    pub fn budget(&self) -> Option<Decimal> {
        self.budget
    }

    /// Returns the roster, `None` when it was not loaded
    pub fn players(&self) -> Option<&[Player]> {
        self.players.as_deref()
    }

    /// Returns the roster, empty when it was not loaded
    pub fn roster(&self) -> &[Player] {
        self.players().unwrap_or_default()
    }
}
