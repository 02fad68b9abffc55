//! Picker inputs and outcomes.

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::games::Game;

/// How to choose the next achievement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickOptions {
    /// Case-insensitive substring of the game name.
    pub game_filter: Option<String>,
    /// Shuffle games and choose uniformly among outstanding achievements.
    pub random: bool,
}

/// Which game to list achievements for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseOptions {
    pub game_filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotFoundReason {
    /// No Steam id configured; nothing was fetched.
    ConfigIncomplete,
    /// The library is empty or nothing matched the game filter.
    NoCandidates,
    /// Every candidate game is complete or has no achievements.
    NothingOutstanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFound {
    pub reason: NotFoundReason,
    /// Whether the authenticated path was available for this run.
    pub used_api_key: bool,
}

impl NotFound {
    pub fn new(reason: NotFoundReason, used_api_key: bool) -> Self {
        Self {
            reason,
            used_api_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked {
        game: Game,
        achievement: Achievement,
    },
    NotFound(NotFound),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    Listed {
        game: Game,
        achievements: Vec<Achievement>,
    },
    NotFound(NotFound),
}

/// Games whose name contains `filter`, ignoring case. Blank filters keep all.
pub fn filter_games(games: Vec<Game>, filter: Option<&str>) -> Vec<Game> {
    match filter.filter(|f| !f.trim().is_empty()) {
        Some(f) => games.into_iter().filter(|g| g.matches_filter(f)).collect(),
        None => games,
    }
}
