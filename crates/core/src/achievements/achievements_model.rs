//! Achievements domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One achievement of one game, with the player's progress merged in.
///
/// `unlocked_at` is only ever set when `achieved` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub api_name: String,
    pub game_app_id: u32,
    pub display_name: String,
    pub description: String,
    pub achieved: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// A locked achievement with the given texts.
    pub fn locked(
        game_app_id: u32,
        api_name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            api_name: api_name.into(),
            game_app_id,
            display_name: display_name.into(),
            description: description.into(),
            achieved: false,
            unlocked_at: None,
        }
    }

    /// Sets the unlock state from Steam's raw flag and epoch seconds.
    ///
    /// Only a flag of exactly `1` counts, and a non-positive epoch means
    /// "no timestamp".
    pub fn apply_unlock(&mut self, achieved_flag: i64, unlock_time: Option<i64>) {
        self.achieved = achieved_flag == 1;
        self.unlocked_at = if self.achieved {
            unlock_time
                .filter(|t| *t > 0)
                .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0))
        } else {
            None
        };
    }
}
