//! Turns service outcomes into terminal text.

use chrono::Local;
use nesta_core::achievements::Achievement;
use nesta_core::games::Game;
use nesta_core::history::PickHistoryView;
use nesta_core::picker::{BrowseOutcome, NotFound, NotFoundReason, PickOutcome};

const SET_STEAM_ID_HINT: &str = "Set it with: nesta config steam.steamId <id>";
const SET_API_KEY_HINT: &str = "nesta config steam.apiKey <key>";
const PRIVATE_PROFILE_HINT: &str =
    "Set \"Game details\" to Public in your Steam privacy settings, then try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

/// What to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub text: String,
}

impl Report {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

pub fn pick_report(outcome: &PickOutcome) -> Report {
    match outcome {
        PickOutcome::Picked { game, achievement } => Report::success(picked(game, achievement)),
        PickOutcome::NotFound(not_found) => Report::failure(pick_not_found(not_found)),
    }
}

pub fn browse_report(outcome: &BrowseOutcome) -> Report {
    match outcome {
        BrowseOutcome::Listed { game, achievements } if !achievements.is_empty() => {
            let mut lines = vec![format!("{} ({} achievements)", game.name, achievements.len())];
            lines.extend(achievements.iter().map(|a| {
                let mark = if a.achieved { "x" } else { " " };
                format!("[{}] {}", mark, a.display_name)
            }));
            Report::success(lines.join("\n"))
        }
        BrowseOutcome::Listed { .. } => Report::failure(browse_empty(true)),
        BrowseOutcome::NotFound(not_found) => Report::failure(browse_not_found(not_found)),
    }
}

pub fn history_report(rows: &[PickHistoryView]) -> Report {
    if rows.is_empty() {
        return Report::success(
            "No history yet. Tip: run \"nesta pick\" to choose an achievement, then it will appear here.",
        );
    }
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "{} - {}",
                row.picked_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                row.label()
            )
        })
        .collect();
    Report::success(lines.join("\n"))
}

/// Steam's own message followed by what to change.
pub fn private_profile_report(message: &str) -> Report {
    Report::failure(format!("{}\n{}", message, PRIVATE_PROFILE_HINT))
}

fn picked(game: &Game, achievement: &Achievement) -> String {
    let mut text = format!(
        "Your next achievement is: {}\nGame: {}",
        achievement.display_name, game.name
    );
    if !achievement.description.is_empty() {
        text.push_str(&format!("\n{}", achievement.description));
    }
    text
}

fn pick_not_found(not_found: &NotFound) -> String {
    match (not_found.reason, not_found.used_api_key) {
        (NotFoundReason::ConfigIncomplete, _) => format!(
            "SteamID is not configured. {}\nFor better coverage also set a Steam API key: {}",
            SET_STEAM_ID_HINT, SET_API_KEY_HINT
        ),
        (_, false) => format!(
            "No suitable achievement found (public profile pages; no Steam API key). Set an API key for better coverage: {}\nOr try --random or --game \"Name\".",
            SET_API_KEY_HINT
        ),
        (_, true) => {
            "No suitable achievement found from Steam API. Try --random or --game \"Name\".".to_string()
        }
    }
}

fn browse_not_found(not_found: &NotFound) -> String {
    match not_found.reason {
        NotFoundReason::ConfigIncomplete => {
            format!("SteamID is not configured. {}", SET_STEAM_ID_HINT)
        }
        _ => browse_empty(not_found.used_api_key),
    }
}

fn browse_empty(used_api_key: bool) -> String {
    if used_api_key {
        "No suitable achievement found. Try --game \"Name\".".to_string()
    } else {
        format!(
            "No achievements found (public profile pages; no Steam API key). Consider setting one: {}\nTry --game \"Name\" to filter.",
            SET_API_KEY_HINT
        )
    }
}
