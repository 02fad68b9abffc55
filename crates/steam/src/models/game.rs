use serde::{Deserialize, Serialize};

/// A game in the player's library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedGame {
    pub app_id: u32,
    pub name: String,
}

impl OwnedGame {
    /// Builds a library entry, dropping unnamed or zero-id entries.
    pub fn from_parts(app_id: u32, name: Option<String>) -> Option<Self> {
        let name = name?;
        if app_id == 0 || name.trim().is_empty() {
            return None;
        }
        Some(Self { app_id, name })
    }
}
