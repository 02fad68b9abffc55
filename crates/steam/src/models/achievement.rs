use serde::{Deserialize, Serialize};

/// Catalog definition of an achievement, independent of any player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAchievement {
    /// API name, the identifier shared with player state
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl SchemaAchievement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            description: None,
        }
    }
}

/// Per-player unlock state for one achievement, normalized across sources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAchievementState {
    pub api_name: String,
    /// Raw flag as Steam reports it. Only `1` means unlocked.
    pub achieved: i64,
    /// Unix seconds. Steam reports `0` for locked achievements.
    pub unlock_time: Option<i64>,
}

impl PlayerAchievementState {
    pub fn new(api_name: impl Into<String>, achieved: i64, unlock_time: Option<i64>) -> Self {
        Self {
            api_name: api_name.into(),
            achieved,
            unlock_time,
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.achieved == 1
    }
}

/// One achievement block from a public community stats document.
///
/// Carries both catalog text and unlock state because the community page
/// is the only source available without an API key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunityAchievement {
    pub api_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub achieved: i64,
    pub unlock_time: Option<i64>,
}

impl CommunityAchievement {
    pub fn to_schema(&self) -> SchemaAchievement {
        SchemaAchievement {
            name: self.api_name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
        }
    }

    pub fn to_player_state(&self) -> PlayerAchievementState {
        PlayerAchievementState::new(self.api_name.clone(), self.achieved, self.unlock_time)
    }
}
