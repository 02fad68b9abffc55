use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use nesta_steam::{
    CommunityAchievement, GuestCatalog, PlayerAchievementState, SchemaAchievement, SourceChain,
    SourceRequest, SteamCatalog,
};

use super::achievements_model::Achievement;
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
use super::reconciler::merge_schema_and_player_achievements;
use crate::errors::Result;
use crate::games::SteamAccess;

pub struct AchievementService {
    repository: Arc<dyn AchievementRepositoryTrait>,
    catalog: Arc<dyn SteamCatalog>,
    guest_catalog: Arc<dyn GuestCatalog>,
    sources: Arc<SourceChain>,
}

impl AchievementService {
    pub fn new(
        repository: Arc<dyn AchievementRepositoryTrait>,
        catalog: Arc<dyn SteamCatalog>,
        guest_catalog: Arc<dyn GuestCatalog>,
        sources: Arc<SourceChain>,
    ) -> Self {
        Self {
            repository,
            catalog,
            guest_catalog,
            sources,
        }
    }

    /// Schema and player state, fetched concurrently.
    async fn fetch_with_key(
        &self,
        access: &SteamAccess,
        api_key: &str,
        game_app_id: u32,
    ) -> Result<(Vec<SchemaAchievement>, Vec<PlayerAchievementState>)> {
        let request = SourceRequest::new(
            Some(api_key.to_string()),
            access.identity.clone(),
            game_app_id,
        );

        let (schema, player) = tokio::join!(
            self.catalog.game_schema(api_key, game_app_id),
            self.sources.fetch(&request)
        );

        let schema = schema.unwrap_or_else(|e| {
            warn!("Schema unavailable for app {}: {}", game_app_id, e);
            Vec::new()
        });
        let player = player?;

        Ok((schema, player))
    }

    /// Public stats page only: it carries both definitions and state.
    async fn fetch_as_guest(
        &self,
        access: &SteamAccess,
        game_app_id: u32,
    ) -> (Vec<SchemaAchievement>, Vec<PlayerAchievementState>) {
        let blocks: Vec<CommunityAchievement> = self
            .guest_catalog
            .achievements(&access.identity, game_app_id)
            .await;

        let schema = blocks.iter().map(CommunityAchievement::to_schema).collect();
        let player = blocks
            .iter()
            .map(CommunityAchievement::to_player_state)
            .collect();
        (schema, player)
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    async fn load_game_achievements(
        &self,
        access: &SteamAccess,
        game_app_id: u32,
    ) -> Result<Vec<Achievement>> {
        let (schema, player) = match access.api_key() {
            Some(key) => self.fetch_with_key(access, key, game_app_id).await?,
            None => self.fetch_as_guest(access, game_app_id).await,
        };

        let achievements = merge_schema_and_player_achievements(&schema, &player, game_app_id);
        debug!(
            "App {}: {} schema entries, {} player entries, {} merged",
            game_app_id,
            schema.len(),
            player.len(),
            achievements.len()
        );

        if !achievements.is_empty() {
            self.repository
                .upsert_achievements(achievements.clone())
                .await?;
        }
        Ok(achievements)
    }
}
