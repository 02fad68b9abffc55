//! Ordered fallback over player-state sources.
//!
//! The chain tries each source in turn and returns the first non-empty
//! result. Failures classified [`FallbackClass::NextSource`] are logged and
//! treated as "no data"; [`FallbackClass::Terminal`] ones stop the chain.
//! Running out of sources is not an error: the caller gets an empty list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{AttemptOutcome, FetchDiagnostics, SkipReason};
use crate::errors::{FallbackClass, SteamError};
use crate::http::SteamHttp;
use crate::models::PlayerAchievementState;
use crate::source::{
    CommunityStatsSource, PlayerAchievementsSource, PlayerStateSource, SourceRequest,
    UserStatsSource,
};

pub struct SourceChain {
    sources: Vec<Arc<dyn PlayerStateSource>>,
}

impl SourceChain {
    pub fn new(sources: Vec<Arc<dyn PlayerStateSource>>) -> Self {
        Self { sources }
    }

    /// The three Steam sources in their fixed priority order.
    pub fn steam_default(http: SteamHttp) -> Self {
        let sources: Vec<Arc<dyn PlayerStateSource>> = vec![
            Arc::new(PlayerAchievementsSource::new(http.clone())),
            Arc::new(UserStatsSource::new(http.clone())),
            Arc::new(CommunityStatsSource::new(http)),
        ];
        Self::new(sources)
    }

    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    pub async fn fetch(
        &self,
        request: &SourceRequest,
    ) -> Result<Vec<PlayerAchievementState>, SteamError> {
        self.fetch_with_diagnostics(request)
            .await
            .map(|(states, _)| states)
    }

    pub async fn fetch_with_diagnostics(
        &self,
        request: &SourceRequest,
    ) -> Result<(Vec<PlayerAchievementState>, FetchDiagnostics), SteamError> {
        let mut diagnostics = FetchDiagnostics::new();

        for source in &self.sources {
            let source_id = source.id();

            if source.requires_api_key() && request.api_key.is_none() {
                debug!("No API key configured, skipping source '{}'", source_id);
                diagnostics.record(source_id, AttemptOutcome::Skipped(SkipReason::MissingApiKey));
                continue;
            }

            match source.fetch(request).await {
                Ok(states) if states.is_empty() => {
                    debug!(
                        "Source '{}' had no entries for app {}, trying next",
                        source_id, request.app_id
                    );
                    diagnostics.record(source_id, AttemptOutcome::Empty);
                }
                Ok(states) => {
                    info!(
                        "Fetched {} player entries for app {} from '{}'",
                        states.len(),
                        request.app_id,
                        source_id
                    );
                    diagnostics.record(source_id, AttemptOutcome::Success(states.len()));
                    return Ok((states, diagnostics));
                }
                Err(e) => match e.fallback_class() {
                    FallbackClass::Terminal => {
                        info!("Terminal error from '{}': {}, not continuing", source_id, e);
                        return Err(e);
                    }
                    FallbackClass::NextSource => {
                        warn!(
                            "Source '{}' failed for app {}: {}, trying next source",
                            source_id, request.app_id, e
                        );
                        diagnostics.record(source_id, AttemptOutcome::Failed(e.to_string()));
                    }
                },
            }
        }

        debug!(
            "No source had player data for app {}: {}",
            request.app_id,
            diagnostics.summary()
        );
        Ok((Vec::new(), diagnostics))
    }
}
