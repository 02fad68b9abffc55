//! Secondary source: `ISteamUserStats/GetUserStatsForGame`.
//!
//! Some titles omit data from GetPlayerAchievements but still report it
//! here, under `name` instead of `apiname`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::SteamError;
use crate::http::SteamHttp;
use crate::models::PlayerAchievementState;

use super::{PlayerStateSource, SourceRequest};

const PROVIDER_ID: &str = "USER_STATS";
const ENDPOINT: &str = "/ISteamUserStats/GetUserStatsForGame/v2/";

#[derive(Debug, Deserialize)]
struct UserStatsResponse {
    playerstats: Option<UserStats>,
}

#[derive(Debug, Deserialize)]
struct UserStats {
    achievements: Option<Vec<UserStatsAchievement>>,
}

#[derive(Debug, Deserialize)]
struct UserStatsAchievement {
    name: String,
    achieved: i64,
    unlocktime: Option<i64>,
}

/// Authenticated user-stats endpoint.
pub struct UserStatsSource {
    http: SteamHttp,
}

impl UserStatsSource {
    pub fn new(http: SteamHttp) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PlayerStateSource for UserStatsSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(
        &self,
        request: &SourceRequest,
    ) -> Result<Vec<PlayerAchievementState>, SteamError> {
        let key = request.require_api_key(PROVIDER_ID)?;
        let url = self.http.api_url(ENDPOINT);
        let params = [
            ("key", key.to_string()),
            ("steamid", request.identity.to_string()),
            ("appid", request.app_id.to_string()),
            ("l", "english".to_string()),
        ];

        let body = self.http.get_ok(PROVIDER_ID, &url, &params).await?;
        parse_user_stats(&body)
    }
}

/// Parse a GetUserStatsForGame body, remapped to the primary shape.
pub(crate) fn parse_user_stats(body: &str) -> Result<Vec<PlayerAchievementState>, SteamError> {
    let parsed: UserStatsResponse =
        serde_json::from_str(body).map_err(|e| SteamError::invalid(PROVIDER_ID, e.to_string()))?;

    Ok(parsed
        .playerstats
        .and_then(|stats| stats.achievements)
        .unwrap_or_default()
        .into_iter()
        .map(|a| PlayerAchievementState::new(a.name, a.achieved, a.unlocktime))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let source = UserStatsSource::new(SteamHttp::new());
        assert_eq!(source.id(), "USER_STATS");
        assert!(source.requires_api_key());
    }

    #[test]
    fn test_parse_user_stats_remaps_name() {
        let json = r#"{
            "playerstats": {
                "steamID": "76561197972495328",
                "gameName": "Portal 2",
                "achievements": [
                    {"name": "ACH_SPEED", "achieved": 1},
                    {"name": "ACH_WAKE_UP", "achieved": 1, "unlocktime": 1700000000}
                ],
                "stats": [{"name": "total_portals", "value": 42}]
            }
        }"#;

        let states = parse_user_stats(json).unwrap();
        assert_eq!(
            states,
            vec![
                PlayerAchievementState::new("ACH_SPEED", 1, None),
                PlayerAchievementState::new("ACH_WAKE_UP", 1, Some(1700000000)),
            ]
        );
    }

    #[test]
    fn test_parse_user_stats_without_achievements() {
        let json = r#"{"playerstats": {"steamID": "1", "gameName": "x"}}"#;
        assert!(parse_user_stats(json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_user_stats_invalid_body() {
        let err = parse_user_stats("not json").unwrap_err();
        assert!(matches!(err, SteamError::InvalidResponse { .. }));
    }
}
