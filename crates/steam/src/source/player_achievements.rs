//! Primary source: `ISteamUserStats/GetPlayerAchievements`.
//!
//! This is the only source that can report a private profile. The privacy
//! marker (`playerstats.error` containing "not public") is checked on the
//! raw JSON before the typed parse, and regardless of the HTTP status,
//! because Steam sends it with a 403.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::SteamError;
use crate::http::SteamHttp;
use crate::models::PlayerAchievementState;

use super::{PlayerStateSource, SourceRequest};

const PROVIDER_ID: &str = "PLAYER_ACHIEVEMENTS";
const ENDPOINT: &str = "/ISteamUserStats/GetPlayerAchievements/v0001/";
const PRIVACY_MARKER: &str = "not public";

#[derive(Debug, Deserialize)]
struct PlayerAchievementsResponse {
    playerstats: Option<PlayerStats>,
}

#[derive(Debug, Deserialize)]
struct PlayerStats {
    achievements: Option<Vec<PlayerAchievementEntry>>,
    // Note: error/success fields exist; error is inspected on the raw value
}

#[derive(Debug, Deserialize)]
struct PlayerAchievementEntry {
    apiname: String,
    achieved: i64,
    unlocktime: Option<i64>,
}

/// Authenticated per-player achievements endpoint.
pub struct PlayerAchievementsSource {
    http: SteamHttp,
}

impl PlayerAchievementsSource {
    pub fn new(http: SteamHttp) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PlayerStateSource for PlayerAchievementsSource {
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

        let raw = self.http.get(PROVIDER_ID, &url, &params).await?;
        let states = classify(raw.status, &raw.body)?;
        debug!(
            "{} returned {} entries for app {}",
            PROVIDER_ID,
            states.len(),
            request.app_id
        );
        Ok(states)
    }
}

/// Combine the HTTP status with the parsed body.
///
/// A non-2xx reply still reports a private profile when the body carries
/// the marker. Otherwise it is an `HttpStatus` error unless the body held
/// actual entries.
fn classify(status: StatusCode, body: &str) -> Result<Vec<PlayerAchievementState>, SteamError> {
    let http_status = || SteamError::HttpStatus {
        provider: PROVIDER_ID.to_string(),
        status: status.as_u16(),
    };

    match parse_player_achievements(body) {
        Err(SteamError::InvalidResponse { .. }) if !status.is_success() => Err(http_status()),
        Ok(states) if !status.is_success() && states.is_empty() => Err(http_status()),
        other => other,
    }
}

/// Parse a GetPlayerAchievements body.
///
/// Order matters: the privacy marker wins over any shape problem, so a
/// private profile is never mistaken for "no data".
pub(crate) fn parse_player_achievements(
    body: &str,
) -> Result<Vec<PlayerAchievementState>, SteamError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SteamError::invalid(PROVIDER_ID, format!("not JSON: {}", e)))?;

    if let Some(message) = value.pointer("/playerstats/error").and_then(Value::as_str) {
        if message.to_lowercase().contains(PRIVACY_MARKER) {
            return Err(SteamError::ProfilePrivate {
                message: message.to_string(),
            });
        }
    }

    let parsed: PlayerAchievementsResponse = serde_json::from_value(value)
        .map_err(|e| SteamError::invalid(PROVIDER_ID, e.to_string()))?;

    Ok(parsed
        .playerstats
        .and_then(|stats| stats.achievements)
        .unwrap_or_default()
        .into_iter()
        .map(|a| PlayerAchievementState::new(a.apiname, a.achieved, a.unlocktime))
        .collect())
}
