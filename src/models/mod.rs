use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display};

/// Canonical identifier for a game.
///
/// This is the one item-identifier type in the system: interactions, catalog
/// entries, graph results, and recommendations all carry it. The string form
/// exists only where node IRIs are rendered for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (user, game) interaction: how long the user has played the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub item_id: ItemId,
    pub name: String,
    pub hours_played: f64,
}

/// A game catalog row: read-only reference data joined against interactions
/// and fed to the knowledge graph builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: ItemId,
    pub name: String,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub publishers: Vec<String>,
    pub release_date: Option<String>,
}

/// Compact preference summary derived from a user's liked games.
/// Immutable once built; lifetime is one recommendation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Most frequent tags across liked games, rank order, at most 5
    pub top_tags: Vec<String>,
    /// Most frequent genres, rank order, at most 3
    pub top_genres: Vec<String>,
    /// Most frequent publishers, rank order, at most 3
    pub top_publishers: Vec<String>,
    /// Most frequent release years (4-char strings), rank order, at most 2
    pub top_years: Vec<String>,
    /// Every liked game, independent of catalog join success
    pub liked_item_ids: HashSet<ItemId>,
}

impl UserProfile {
    /// True when no preference signal was extracted
    pub fn is_empty(&self) -> bool {
        self.top_tags.is_empty()
            && self.top_genres.is_empty()
            && self.top_publishers.is_empty()
            && self.top_years.is_empty()
    }
}

/// One ranked recommendation. The score is the number of distinct
/// preference-signal queries that matched the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub item_id: ItemId,
    pub score: u32,
}

// ============================================================================
// Steam Web API Types
// ============================================================================

/// Raw owned-games response from the Steam Web API
#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGamesResponse {
    pub response: OwnedGamesBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnedGamesBody {
    /// Absent for private profiles
    #[serde(default)]
    pub games: Option<Vec<ApiOwnedGame>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOwnedGame {
    pub appid: u64,
    #[serde(default)]
    pub name: Option<String>,
    /// Total playtime in minutes
    pub playtime_forever: u64,
}

impl From<ApiOwnedGame> for InteractionRecord {
    fn from(game: ApiOwnedGame) -> Self {
        InteractionRecord {
            item_id: ItemId(game.appid),
            name: game.name.unwrap_or_else(|| "Unknown".to_string()),
            // Steam reports minutes; everything downstream works in hours
            hours_played: game.playtime_forever as f64 / 60.0,
        }
    }
}

/// Cached snapshot of a user's library, stored in Redis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub user_id: String,
    pub records: Vec<InteractionRecord>,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        let id = ItemId(361352402);
        assert_eq!(format!("{}", id), "361352402");
    }

    #[test]
    fn test_item_id_serde_transparent() {
        let id = ItemId(440);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "440");

        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_api_owned_game_to_interaction_converts_minutes() {
        let game = ApiOwnedGame {
            appid: 570,
            name: Some("Dota 2".to_string()),
            playtime_forever: 600,
        };

        let record: InteractionRecord = game.into();
        assert_eq!(record.item_id, ItemId(570));
        assert_eq!(record.name, "Dota 2");
        assert_eq!(record.hours_played, 10.0);
    }

    #[test]
    fn test_api_owned_game_without_name() {
        let game = ApiOwnedGame {
            appid: 12345,
            name: None,
            playtime_forever: 30,
        };

        let record: InteractionRecord = game.into();
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.hours_played, 0.5);
    }

    #[test]
    fn test_owned_games_response_deserialization() {
        let json = r#"{
            "response": {
                "games": [
                    {"appid": 440, "name": "Team Fortress 2", "playtime_forever": 480},
                    {"appid": 570, "playtime_forever": 0}
                ]
            }
        }"#;

        let parsed: OwnedGamesResponse = serde_json::from_str(json).unwrap();
        let games = parsed.response.games.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].appid, 440);
        assert_eq!(games[1].name, None);
    }

    #[test]
    fn test_owned_games_response_private_profile() {
        let json = r#"{"response": {}}"#;
        let parsed: OwnedGamesResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.response.games.is_none());
    }

    #[test]
    fn test_user_profile_is_empty() {
        let profile = UserProfile::default();
        assert!(profile.is_empty());

        let profile = UserProfile {
            top_tags: vec!["RPG".to_string()],
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_user_profile_is_empty_ignores_liked_ids() {
        // A user whose liked games are all missing from the catalog still
        // has an empty query plan
        let profile = UserProfile {
            liked_item_ids: [ItemId(1)].into_iter().collect(),
            ..Default::default()
        };
        assert!(profile.is_empty());
    }
}
