//! Keyless catalog backed by public community XML pages.

use async_trait::async_trait;
use tracing::warn;

use super::GuestCatalog;
use crate::community::{parse_games_document, parse_stats_document, stats_params, stats_url};
use crate::http::SteamHttp;
use crate::models::{CommunityAchievement, OwnedGame, SteamIdentity};

const GAMES_ID: &str = "COMMUNITY_GAMES";
const STATS_ID: &str = "COMMUNITY_STATS";

#[derive(Clone, Debug, Default)]
pub struct CommunityCatalog {
    http: SteamHttp,
}

impl CommunityCatalog {
    pub fn new(http: SteamHttp) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuestCatalog for CommunityCatalog {
    async fn owned_games(&self, identity: &SteamIdentity) -> Vec<OwnedGame> {
        let url = self
            .http
            .community_url(&format!("/{}/games", identity.profile_path()));
        let params = [("tab", "all".to_string()), ("xml", "1".to_string())];

        match self.http.get_ok(GAMES_ID, &url, &params).await {
            Ok(body) => parse_games_document(&body),
            Err(e) => {
                warn!("Public games list unavailable for {}: {}", identity, e);
                Vec::new()
            }
        }
    }

    async fn achievements(
        &self,
        identity: &SteamIdentity,
        app_id: u32,
    ) -> Vec<CommunityAchievement> {
        let url = stats_url(&self.http, identity, app_id);

        match self.http.get_ok(STATS_ID, &url, &stats_params()).await {
            Ok(body) => parse_stats_document(&body),
            Err(e) => {
                warn!("Public stats unavailable for app {}: {}", app_id, e);
                Vec::new()
            }
        }
    }
}
