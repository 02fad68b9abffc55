use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rand::seq::SliceRandom;

use super::picker_model::{
    filter_games, BrowseOptions, BrowseOutcome, NotFound, NotFoundReason, PickOptions,
    PickOutcome,
};
use super::picker_traits::PickerServiceTrait;
use crate::achievements::{Achievement, AchievementServiceTrait};
use crate::config::ConfigServiceTrait;
use crate::errors::Result;
use crate::games::{Game, GameServiceTrait, SteamAccess};
use crate::history::HistoryServiceTrait;

/// Resolved identity plus the games left after filtering.
enum Candidates {
    Ready(SteamAccess, Vec<Game>),
    Missing(NotFound),
}

pub struct PickerService {
    config_service: Arc<dyn ConfigServiceTrait>,
    game_service: Arc<dyn GameServiceTrait>,
    achievement_service: Arc<dyn AchievementServiceTrait>,
    history_service: Arc<dyn HistoryServiceTrait>,
}

impl PickerService {
    pub fn new(
        config_service: Arc<dyn ConfigServiceTrait>,
        game_service: Arc<dyn GameServiceTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
        history_service: Arc<dyn HistoryServiceTrait>,
    ) -> Self {
        Self {
            config_service,
            game_service,
            achievement_service,
            history_service,
        }
    }

    /// Config guard, identity resolution, listing and filtering.
    async fn candidates(&self, game_filter: Option<&str>) -> Result<Candidates> {
        let config = self.config_service.get_config().await?;
        let used_api_key = config.has_api_key();

        if !config.has_steam_id() {
            debug!("No Steam id configured");
            return Ok(Candidates::Missing(NotFound::new(
                NotFoundReason::ConfigIncomplete,
                used_api_key,
            )));
        }
        debug!(
            "Config ready ({})",
            if used_api_key { "api key" } else { "public pages" }
        );

        let access = self.game_service.resolve_access(&config).await?;
        let games = self.game_service.list_owned_games(&access).await?;
        debug!("{} games in library", games.len());

        let games = filter_games(games, game_filter);
        debug!("{} candidate games after filter {:?}", games.len(), game_filter);

        if games.is_empty() {
            return Ok(Candidates::Missing(NotFound::new(
                NotFoundReason::NoCandidates,
                used_api_key,
            )));
        }
        Ok(Candidates::Ready(access, games))
    }
}

#[async_trait]
impl PickerServiceTrait for PickerService {
    async fn pick_achievement(&self, options: PickOptions) -> Result<PickOutcome> {
        let (access, mut games) = match self.candidates(options.game_filter.as_deref()).await? {
            Candidates::Ready(access, games) => (access, games),
            Candidates::Missing(not_found) => return Ok(PickOutcome::NotFound(not_found)),
        };

        if options.random {
            games.shuffle(&mut rand::thread_rng());
        }

        for game in games {
            debug!("Trying {} ({})", game.name, game.app_id);
            let achievements = self
                .achievement_service
                .load_game_achievements(&access, game.app_id)
                .await?;

            let outstanding: Vec<&Achievement> =
                achievements.iter().filter(|a| !a.achieved).collect();
            debug!(
                "{} of {} achievements outstanding in {}",
                outstanding.len(),
                achievements.len(),
                game.name
            );

            let chosen = if options.random {
                outstanding.choose(&mut rand::thread_rng()).copied()
            } else {
                outstanding.first().copied()
            };
            let Some(achievement) = chosen.cloned() else {
                continue;
            };

            debug!("Picked {} in {}", achievement.api_name, game.name);
            self.history_service.record_pick(&achievement).await?;

            return Ok(PickOutcome::Picked { game, achievement });
        }

        Ok(PickOutcome::NotFound(NotFound::new(
            NotFoundReason::NothingOutstanding,
            access.api_key.is_some(),
        )))
    }

    async fn list_achievements(&self, options: BrowseOptions) -> Result<BrowseOutcome> {
        let (access, games) = match self.candidates(options.game_filter.as_deref()).await? {
            Candidates::Ready(access, games) => (access, games),
            Candidates::Missing(not_found) => return Ok(BrowseOutcome::NotFound(not_found)),
        };

        let Some(game) = games.into_iter().next() else {
            return Ok(BrowseOutcome::NotFound(NotFound::new(
                NotFoundReason::NoCandidates,
                access.api_key.is_some(),
            )));
        };

        let achievements = self
            .achievement_service
            .load_game_achievements(&access, game.app_id)
            .await?;
        debug!("Listing {} achievements of {}", achievements.len(), game.name);

        Ok(BrowseOutcome::Listed { game, achievements })
    }
}
