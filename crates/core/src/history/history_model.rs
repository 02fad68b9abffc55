//! Pick history domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored pick event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickHistoryEntry {
    pub id: i64,
    pub game_app_id: u32,
    pub achievement_api_name: String,
    pub picked_at: DateTime<Utc>,
}

/// Input model for recording a pick
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPickHistoryEntry {
    pub game_app_id: u32,
    pub achievement_api_name: String,
    pub picked_at: DateTime<Utc>,
}

/// A pick joined with the achievement's display name, for listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PickHistoryView {
    pub id: i64,
    pub game_app_id: u32,
    pub achievement_api_name: String,
    /// `None` when the achievement row is gone.
    pub display_name: Option<String>,
    pub picked_at: DateTime<Utc>,
}

impl PickHistoryView {
    /// Display name, or the api name when unknown.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.achievement_api_name)
    }
}
