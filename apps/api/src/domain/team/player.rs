/// A player on a team's roster
///
/// Players have no identity outside the team that owns them; the store
/// assigns `id` when the owning team is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Option<i64>,
    name: String,
    position: String,
}

impl Player {
    pub fn new(name: String, position: String) -> Self {
        Self {
            id: None,
            name,
            position,
        }
    }

    pub fn from_persistence(id: Option<i64>, name: String, position: String) -> Self {
        Self { id, name, position }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}
