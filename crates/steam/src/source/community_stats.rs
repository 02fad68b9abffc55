//! Last-resort source: the public community stats XML page.
//!
//! No key needed. Parsing never fails; a page we cannot read simply
//! yields no entries.

use async_trait::async_trait;
use tracing::debug;

use crate::community::{parse_stats_document, stats_params, stats_url};
use crate::errors::SteamError;
use crate::http::SteamHttp;
use crate::models::PlayerAchievementState;

use super::{PlayerStateSource, SourceRequest};

const PROVIDER_ID: &str = "COMMUNITY_STATS";

/// Unauthenticated profile-stats scraper.
pub struct CommunityStatsSource {
    http: SteamHttp,
}

impl CommunityStatsSource {
    pub fn new(http: SteamHttp) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PlayerStateSource for CommunityStatsSource {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn fetch(
        &self,
        request: &SourceRequest,
    ) -> Result<Vec<PlayerAchievementState>, SteamError> {
        let url = stats_url(&self.http, &request.identity, request.app_id);

        let body = self.http.get_ok(PROVIDER_ID, &url, &stats_params()).await?;
        let states: Vec<PlayerAchievementState> = parse_stats_document(&body)
            .iter()
            .map(|a| a.to_player_state())
            .collect();

        debug!(
            "{} parsed {} achievement blocks for app {}",
            PROVIDER_ID,
            states.len(),
            request.app_id
        );
        Ok(states)
    }
}
