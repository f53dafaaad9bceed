//! Conversion between persisted teams and their external views
//!
//! Both directions are pure and total. An absent roster on either side maps
//! to an empty one; an absent budget on input stays absent on the entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::team::{Player, Team};

/// External representation of a player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
}

/// External representation of a team
///
/// `players` is optional on input and always present on output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub acronym: String,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub players: Option<Vec<PlayerView>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub fn player_to_view(player: &Player) -> PlayerView {
    PlayerView {
        id: player.id(),
        name: player.name().to_string(),
        position: player.position().to_string(),
    }
}

pub fn player_to_entity(view: PlayerView) -> Player {
    Player::from_persistence(view.id, view.name, view.position)
}

/// Converts a stored team to its view; an unloaded roster becomes empty
pub fn to_view(team: &Team) -> TeamView {
    let view = TeamView {
        id: team.id(),
        name: team.name().to_string(),
        acronym: team.acronym().to_string(),
        budget: team.budget(),
        players: Some(team.roster().iter().map(player_to_view).collect()),
    };

    tracing::debug!(team = %view.name, "Converted Team entity to TeamView");
    view
}

/// Converts a view to an entity
///
/// The identifier passes through untouched; the store decides what to do
/// with it.
pub fn to_entity(view: TeamView) -> Team {
    let players = view
        .players
        .unwrap_or_default()
        .into_iter()
        .map(player_to_entity)
        .collect();

    let team = Team::from_persistence(view.id, view.name, view.acronym, view.budget, Some(players));

    tracing::debug!(team = team.name(), "Converted TeamView to Team entity");
    team
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nice() -> TeamView {
        TeamView {
            id: None,
            name: "OGC Nice".to_string(),
            acronym: "OGCN".to_string(),
            budget: Some(Decimal::from(10_000_000)),
            players: Some(vec![
                PlayerView {
                    id: None,
                    name: "Marcin Bulka".to_string(),
                    position: "Goalkeeper".to_string(),
                },
                PlayerView {
                    id: None,
                    name: "Dante".to_string(),
                    position: "Defender".to_string(),
                },
            ]),
        }
    }

    #[test]
    fn round_trip_preserves_fields_and_roster_order() {
        let view = nice();
        let back = to_view(&to_entity(view.clone()));

        assert_eq!(back.name, view.name);
        assert_eq!(back.acronym, view.acronym);
        assert_eq!(back.budget, view.budget);
        assert_eq!(back.players, view.players);
    }

    #[test]
    fn missing_roster_on_view_maps_to_empty_roster() {
        let view = TeamView {
            players: None,
            ..nice()
        };

        let team = to_entity(view);
        assert_eq!(team.players(), Some(&[][..]));
    }

    #[test]
    fn unloaded_roster_on_entity_maps_to_empty_sequence() {
        let team = Team::from_persistence(
            Some(1),
            "Olympique Lyon".to_string(),
            "OL".to_string(),
            Some(Decimal::from(15_000_000)),
            None,
        );

        let view = to_view(&team);
        assert_eq!(view.players, Some(Vec::new()));
        assert_eq!(view.id, Some(1));
    }

    #[test]
    fn missing_budget_stays_unset() {
        let view = TeamView {
            budget: None,
            ..nice()
        };

        assert_eq!(to_entity(view).budget(), None);
    }

    #[test]
    fn identifier_passes_through() {
        let view = TeamView {
            id: Some(42),
            ..nice()
        };

        assert_eq!(to_entity(view).id(), Some(42));
    }

    #[test]
    fn output_always_serialises_players() {
        let team = Team::from_persistence(Some(2), "PSG".to_string(), "PSG".to_string(), None, None);
        let json = serde_json::to_value(to_view(&team)).unwrap();

        assert_eq!(json["players"], serde_json::json!([]));
        assert!(json["budget"].is_null());
    }

    #[test]
    fn null_fields_deserialise_as_absent() {
        let view: TeamView = serde_json::from_str(
            r#"{"name": null, "acronym": "OGCN", "budget": null, "players": null}"#,
        )
        .unwrap();

        assert_eq!(view.name, "");
        assert_eq!(view.budget, None);
        assert_eq!(view.players, None);
    }

    #[test]
    fn numeric_budget_deserialises() {
        let view: TeamView =
            serde_json::from_str(r#"{"name": "OGC Nice", "acronym": "OGCN", "budget": 10000000.0}"#)
                .unwrap();

        assert_eq!(view.budget, Some(Decimal::from(10_000_000)));
    }
}
