#[cfg(test)]
mod tests {
    use crate::achievements::{Achievement, AchievementServiceTrait};
    use crate::config::{Config, ConfigServiceTrait, ConfigUpdate};
    use crate::errors::{Error, Result};
    use crate::games::{Game, GameServiceTrait, SteamAccess};
    use crate::history::{HistoryServiceTrait, PickHistoryEntry, PickHistoryView};
    use crate::picker::{
        BrowseOptions, BrowseOutcome, NotFoundReason, PickOptions, PickOutcome, PickerService,
        PickerServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use nesta_steam::SteamIdentity;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    // --- Mock ConfigService ---
    struct MockConfigService {
        config: Config,
    }

    #[async_trait]
    impl ConfigServiceTrait for MockConfigService {
        async fn get_config(&self) -> Result<Config> {
            Ok(self.config.clone())
        }

        async fn set_config(&self, _update: ConfigUpdate) -> Result<Config> {
            unimplemented!()
        }
    }

    // --- Mock GameService ---
    #[derive(Default)]
    struct MockGameService {
        games: Vec<Game>,
        resolved_to: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GameServiceTrait for MockGameService {
        async fn resolve_access(&self, config: &Config) -> Result<SteamAccess> {
            self.calls.lock().unwrap().push("resolve".to_string());
            let id = self
                .resolved_to
                .clone()
                .unwrap_or_else(|| config.steam_id.clone());
            Ok(SteamAccess::new(
                SteamIdentity::new(id),
                config.api_key().map(str::to_string),
            ))
        }

        async fn list_owned_games(&self, access: &SteamAccess) -> Result<Vec<Game>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("list:{}", access.identity));
            Ok(self.games.clone())
        }
    }

    // --- Mock AchievementService ---
    #[derive(Default)]
    struct MockAchievementService {
        by_game: HashMap<u32, Vec<Achievement>>,
        private_games: Vec<u32>,
        loaded: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl AchievementServiceTrait for MockAchievementService {
        async fn load_game_achievements(
            &self,
            _access: &SteamAccess,
            game_app_id: u32,
        ) -> Result<Vec<Achievement>> {
            self.loaded.lock().unwrap().push(game_app_id);
            if self.private_games.contains(&game_app_id) {
                return Err(Error::ProfilePrivate("Profile is not public".to_string()));
            }
            Ok(self.by_game.get(&game_app_id).cloned().unwrap_or_default())
        }
    }

    // --- Mock HistoryService ---
    #[derive(Default)]
    struct MockHistoryService {
        recorded: Mutex<Vec<(u32, String)>>,
    }

    #[async_trait]
    impl HistoryServiceTrait for MockHistoryService {
        async fn record_pick(&self, achievement: &Achievement) -> Result<PickHistoryEntry> {
            let mut recorded = self.recorded.lock().unwrap();
            recorded.push((achievement.game_app_id, achievement.api_name.clone()));
            Ok(PickHistoryEntry {
                id: recorded.len() as i64,
                game_app_id: achievement.game_app_id,
                achievement_api_name: achievement.api_name.clone(),
                picked_at: Utc::now(),
            })
        }

        fn recent_picks(&self, _limit: Option<i64>) -> Result<Vec<PickHistoryView>> {
            unimplemented!()
        }
    }

    struct Fixture {
        picker: PickerService,
        games: Arc<MockGameService>,
        achievements: Arc<MockAchievementService>,
        history: Arc<MockHistoryService>,
    }

    fn fixture(
        config: Config,
        games: MockGameService,
        achievements: MockAchievementService,
    ) -> Fixture {
        let games = Arc::new(games);
        let achievements = Arc::new(achievements);
        let history = Arc::new(MockHistoryService::default());
        let picker = PickerService::new(
            Arc::new(MockConfigService { config }),
            games.clone(),
            achievements.clone(),
            history.clone(),
        );
        Fixture {
            picker,
            games,
            achievements,
            history,
        }
    }

    fn config(steam_id: &str, api_key: Option<&str>) -> Config {
        Config {
            steam_id: steam_id.to_string(),
            api_key: api_key.map(str::to_string),
            open_router_api_key: None,
        }
    }

    fn achievement(app_id: u32, name: &str, achieved: bool) -> Achievement {
        let mut a = Achievement::locked(app_id, name, name, "");
        a.achieved = achieved;
        a
    }

    fn library() -> MockGameService {
        MockGameService {
            games: vec![Game::new(440, "Team Fortress 2"), Game::new(620, "Portal 2")],
            ..Default::default()
        }
    }

    fn progress() -> MockAchievementService {
        let mut by_game = HashMap::new();
        by_game.insert(440, vec![achievement(440, "TF_DONE", true)]);
        by_game.insert(
            620,
            vec![
                achievement(620, "P2_DONE", true),
                achievement(620, "P2_OPEN_A", false),
                achievement(620, "P2_OPEN_B", false),
            ],
        );
        MockAchievementService {
            by_game,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_steam_id_makes_no_calls() {
        let f = fixture(config("", Some("k")), library(), progress());

        let outcome = f.picker.pick_achievement(PickOptions::default()).await.unwrap();

        match outcome {
            PickOutcome::NotFound(nf) => {
                assert_eq!(nf.reason, NotFoundReason::ConfigIncomplete);
                assert!(nf.used_api_key);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(f.games.calls.lock().unwrap().is_empty());
        assert!(f.achievements.loaded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resolved_identity_is_used_for_listing() {
        let games = MockGameService {
            resolved_to: Some("76561197960287930".to_string()),
            ..library()
        };
        let f = fixture(config("gabelogannewell", Some("k")), games, progress());

        f.picker.pick_achievement(PickOptions::default()).await.unwrap();

        assert_eq!(
            *f.games.calls.lock().unwrap(),
            vec!["resolve".to_string(), "list:76561197960287930".to_string()]
        );
    }

    #[tokio::test]
    async fn test_completed_game_is_skipped_and_one_pick_recorded() {
        let f = fixture(config("76561197960287930", Some("k")), library(), progress());

        let outcome = f.picker.pick_achievement(PickOptions::default()).await.unwrap();

        match outcome {
            PickOutcome::Picked { game, achievement } => {
                assert_eq!(game.app_id, 620);
                assert_eq!(achievement.api_name, "P2_OPEN_A");
            }
            other => panic!("expected Picked, got {:?}", other),
        }
        assert_eq!(*f.achievements.loaded.lock().unwrap(), vec![440, 620]);
        assert_eq!(
            *f.history.recorded.lock().unwrap(),
            vec![(620, "P2_OPEN_A".to_string())]
        );
    }

    #[tokio::test]
    async fn test_random_pick_is_an_outstanding_achievement() {
        for _ in 0..20 {
            let f = fixture(config("76561197960287930", Some("k")), library(), progress());

            let outcome = f
                .picker
                .pick_achievement(PickOptions {
                    random: true,
                    ..Default::default()
                })
                .await
                .unwrap();

            match outcome {
                PickOutcome::Picked { achievement, .. } => {
                    assert!(!achievement.achieved);
                    assert!(["P2_OPEN_A", "P2_OPEN_B"].contains(&achievement.api_name.as_str()));
                }
                other => panic!("expected Picked, got {:?}", other),
            }
            assert_eq!(f.history.recorded.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_random_pick_reaches_every_outstanding_achievement() {
        let games = MockGameService {
            games: vec![Game::new(620, "Portal 2")],
            ..Default::default()
        };
        let f = fixture(config("76561197960287930", Some("k")), games, progress());
        let options = PickOptions {
            random: true,
            ..Default::default()
        };

        let mut seen = HashSet::new();
        for _ in 0..200 {
            if let PickOutcome::Picked { achievement, .. } =
                f.picker.pick_achievement(options.clone()).await.unwrap()
            {
                seen.insert(achievement.api_name);
            }
        }

        assert!(seen.contains("P2_OPEN_A"));
        assert!(seen.contains("P2_OPEN_B"));
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn test_random_pick_shuffles_game_order() {
        let mut by_game = HashMap::new();
        by_game.insert(440, vec![achievement(440, "TF_OPEN", false)]);
        by_game.insert(620, vec![achievement(620, "P2_OPEN", false)]);
        let options = PickOptions {
            random: true,
            ..Default::default()
        };

        let mut first_visited = HashSet::new();
        for _ in 0..200 {
            let achievements = MockAchievementService {
                by_game: by_game.clone(),
                ..Default::default()
            };
            let f = fixture(config("76561197960287930", Some("k")), library(), achievements);

            f.picker.pick_achievement(options.clone()).await.unwrap();

            first_visited.insert(f.achievements.loaded.lock().unwrap()[0]);
        }

        assert!(first_visited.contains(&440));
        assert!(first_visited.contains(&620));
    }

    #[tokio::test]
    async fn test_game_filter_limits_candidates() {
        let f = fixture(config("76561197960287930", None), library(), progress());

        let outcome = f
            .picker
            .pick_achievement(PickOptions {
                game_filter: Some("fortress".to_string()),
                random: false,
            })
            .await
            .unwrap();

        match outcome {
            PickOutcome::NotFound(nf) => {
                assert_eq!(nf.reason, NotFoundReason::NothingOutstanding);
                assert!(!nf.used_api_key);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(*f.achievements.loaded.lock().unwrap(), vec![440]);
        assert!(f.history.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_matching_game() {
        let f = fixture(config("76561197960287930", Some("k")), library(), progress());

        let outcome = f
            .picker
            .pick_achievement(PickOptions {
                game_filter: Some("zelda".to_string()),
                random: false,
            })
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            PickOutcome::NotFound(nf) if nf.reason == NotFoundReason::NoCandidates
        ));
        assert!(f.achievements.loaded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_private_profile_aborts_pick() {
        let achievements = MockAchievementService {
            private_games: vec![440],
            ..progress()
        };
        let f = fixture(config("76561197960287930", Some("k")), library(), achievements);

        let err = f
            .picker
            .pick_achievement(PickOptions::default())
            .await
            .unwrap_err();

        assert!(err.is_profile_private());
        assert_eq!(*f.achievements.loaded.lock().unwrap(), vec![440]);
        assert!(f.history.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_browse_lists_first_game_without_history() {
        let f = fixture(config("76561197960287930", Some("k")), library(), progress());

        let outcome = f
            .picker
            .list_achievements(BrowseOptions {
                game_filter: Some("portal".to_string()),
            })
            .await
            .unwrap();

        match outcome {
            BrowseOutcome::Listed { game, achievements } => {
                assert_eq!(game.app_id, 620);
                assert_eq!(achievements.len(), 3);
            }
            other => panic!("expected Listed, got {:?}", other),
        }
        assert!(f.history.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_browse_without_config() {
        let f = fixture(config("  ", None), library(), progress());

        let outcome = f
            .picker
            .list_achievements(BrowseOptions::default())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            BrowseOutcome::NotFound(nf) if nf.reason == NotFoundReason::ConfigIncomplete
        ));
        assert!(f.games.calls.lock().unwrap().is_empty());
    }
}
