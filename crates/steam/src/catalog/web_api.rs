//! Steam Web API catalog client.
//!
//! Endpoints:
//! - `ISteamUser/ResolveVanityURL/v0001` for vanity aliases
//! - `IPlayerService/GetOwnedGames/v0001` for the library
//! - `ISteamUserStats/GetSchemaForGame/v2` for achievement definitions

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::SteamCatalog;
use crate::errors::SteamError;
use crate::http::SteamHttp;
use crate::models::{OwnedGame, SchemaAchievement, SteamIdentity};

const VANITY_ID: &str = "RESOLVE_VANITY";
const OWNED_GAMES_ID: &str = "OWNED_GAMES";
const SCHEMA_ID: &str = "GAME_SCHEMA";

const VANITY_ENDPOINT: &str = "/ISteamUser/ResolveVanityURL/v0001/";
const OWNED_GAMES_ENDPOINT: &str = "/IPlayerService/GetOwnedGames/v0001/";
const SCHEMA_ENDPOINT: &str = "/ISteamUserStats/GetSchemaForGame/v2/";

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct VanityResponse {
    response: Option<VanityResult>,
}

#[derive(Debug, Deserialize)]
struct VanityResult {
    success: Option<i64>,
    steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesResponse {
    response: Option<OwnedGamesResult>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesResult {
    games: Option<Vec<OwnedGameEntry>>,
}

#[derive(Debug, Deserialize)]
struct OwnedGameEntry {
    appid: u32,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SchemaResponse {
    game: Option<SchemaGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaGame {
    available_game_stats: Option<AvailableGameStats>,
}

#[derive(Debug, Deserialize)]
struct AvailableGameStats {
    achievements: Option<Vec<SchemaEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaEntry {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Key-authenticated Steam Web API catalog.
#[derive(Clone, Debug, Default)]
pub struct SteamWebApi {
    http: SteamHttp,
}

impl SteamWebApi {
    pub fn new(http: SteamHttp) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SteamCatalog for SteamWebApi {
    async fn resolve_vanity(
        &self,
        api_key: &str,
        vanity: &str,
    ) -> Result<Option<String>, SteamError> {
        let url = self.http.api_url(VANITY_ENDPOINT);
        let params = [("key", api_key.to_string()), ("vanityurl", vanity.to_string())];

        let body = self.http.get_ok(VANITY_ID, &url, &params).await?;
        parse_vanity(&body)
    }

    async fn owned_games(
        &self,
        api_key: &str,
        identity: &SteamIdentity,
    ) -> Result<Vec<OwnedGame>, SteamError> {
        let url = self.http.api_url(OWNED_GAMES_ENDPOINT);
        let params = [
            ("key", api_key.to_string()),
            ("steamid", identity.to_string()),
            ("include_appinfo", "true".to_string()),
            ("include_played_free_games", "true".to_string()),
        ];

        let body = self.http.get_ok(OWNED_GAMES_ID, &url, &params).await?;
        let games = parse_owned_games(&body)?;
        debug!("{} listed {} games", OWNED_GAMES_ID, games.len());
        Ok(games)
    }

    async fn game_schema(
        &self,
        api_key: &str,
        app_id: u32,
    ) -> Result<Vec<SchemaAchievement>, SteamError> {
        let url = self.http.api_url(SCHEMA_ENDPOINT);
        let params = [
            ("key", api_key.to_string()),
            ("appid", app_id.to_string()),
            ("l", "english".to_string()),
        ];

        let body = self.http.get_ok(SCHEMA_ID, &url, &params).await?;
        parse_schema(&body)
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn parse_vanity(body: &str) -> Result<Option<String>, SteamError> {
    let parsed: VanityResponse =
        serde_json::from_str(body).map_err(|e| SteamError::invalid(VANITY_ID, e.to_string()))?;

    Ok(parsed.response.and_then(|r| match (r.success, r.steamid) {
        (Some(1), Some(id)) if !id.is_empty() => Some(id),
        _ => None,
    }))
}

fn parse_owned_games(body: &str) -> Result<Vec<OwnedGame>, SteamError> {
    let parsed: OwnedGamesResponse = serde_json::from_str(body)
        .map_err(|e| SteamError::invalid(OWNED_GAMES_ID, e.to_string()))?;

    Ok(parsed
        .response
        .and_then(|r| r.games)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|g| OwnedGame::from_parts(g.appid, g.name))
        .collect())
}

fn parse_schema(body: &str) -> Result<Vec<SchemaAchievement>, SteamError> {
    let parsed: SchemaResponse =
        serde_json::from_str(body).map_err(|e| SteamError::invalid(SCHEMA_ID, e.to_string()))?;

    Ok(parsed
        .game
        .and_then(|g| g.available_game_stats)
        .and_then(|s| s.achievements)
        .unwrap_or_default()
        .into_iter()
        .map(|a| SchemaAchievement {
            name: a.name,
            display_name: a.display_name,
            description: a.description,
        })
        .collect())
}
