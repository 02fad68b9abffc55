//! Games domain models.

use nesta_steam::{OwnedGame, SteamIdentity};
use serde::{Deserialize, Serialize};

/// Domain model representing a game in the player's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub app_id: u32,
    pub name: String,
}

impl Game {
    pub fn new(app_id: u32, name: impl Into<String>) -> Self {
        Self {
            app_id,
            name: name.into(),
        }
    }

    /// Case-insensitive substring match on the game name.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl From<OwnedGame> for Game {
    fn from(game: OwnedGame) -> Self {
        Self {
            app_id: game.app_id,
            name: game.name,
        }
    }
}

/// Who to look up, and with what credential.
///
/// Built once per pick after vanity resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamAccess {
    pub identity: SteamIdentity,
    pub api_key: Option<String>,
}

impl SteamAccess {
    pub fn new(identity: SteamIdentity, api_key: Option<String>) -> Self {
        Self { identity, api_key }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let game = Game::new(620, "Portal 2");
        assert!(game.matches_filter("portal"));
        assert!(game.matches_filter("TAL 2"));
        assert!(game.matches_filter(""));
        assert!(!game.matches_filter("half-life"));
    }
}
