use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use nesta_steam::{GuestCatalog, SteamCatalog, SteamIdentity};

use super::games_model::{Game, SteamAccess};
use super::games_traits::{GameRepositoryTrait, GameServiceTrait};
use crate::config::Config;
use crate::errors::Result;

pub struct GameService {
    repository: Arc<dyn GameRepositoryTrait>,
    catalog: Arc<dyn SteamCatalog>,
    guest_catalog: Arc<dyn GuestCatalog>,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepositoryTrait>,
        catalog: Arc<dyn SteamCatalog>,
        guest_catalog: Arc<dyn GuestCatalog>,
    ) -> Self {
        Self {
            repository,
            catalog,
            guest_catalog,
        }
    }
}

#[async_trait]
impl GameServiceTrait for GameService {
    async fn resolve_access(&self, config: &Config) -> Result<SteamAccess> {
        let identity = SteamIdentity::new(config.steam_id.as_str());
        let api_key = config.api_key().map(str::to_string);

        let Some(key) = api_key.as_deref() else {
            return Ok(SteamAccess::new(identity, None));
        };
        if identity.is_steam_id64() {
            return Ok(SteamAccess::new(identity, api_key));
        }

        let resolved = match self.catalog.resolve_vanity(key, identity.as_str()).await {
            Ok(Some(steam_id)) => {
                debug!("Resolved vanity '{}' to {}", identity, steam_id);
                SteamIdentity::new(steam_id)
            }
            Ok(None) => {
                debug!("Vanity '{}' did not resolve, keeping it", identity);
                identity
            }
            Err(e) => {
                warn!("Vanity resolution failed for '{}': {}", identity, e);
                identity
            }
        };

        Ok(SteamAccess::new(resolved, api_key))
    }

    async fn list_owned_games(&self, access: &SteamAccess) -> Result<Vec<Game>> {
        let owned = match access.api_key() {
            Some(key) => match self.catalog.owned_games(key, &access.identity).await {
                Ok(games) => games,
                Err(e) => {
                    warn!("Failed to list owned games for {}: {}", access.identity, e);
                    Vec::new()
                }
            },
            None => self.guest_catalog.owned_games(&access.identity).await,
        };

        let games: Vec<Game> = owned.into_iter().map(Game::from).collect();
        debug!("Listed {} games for {}", games.len(), access.identity);

        if !games.is_empty() {
            self.repository.upsert_games(games.clone()).await?;
        }
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nesta_steam::{CommunityAchievement, OwnedGame, SchemaAchievement, SteamError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockGameRepository {
        games: Mutex<Vec<Game>>,
    }

    #[async_trait]
    impl GameRepositoryTrait for MockGameRepository {
        fn list_games(&self) -> Result<Vec<Game>> {
            Ok(self.games.lock().unwrap().clone())
        }

        async fn upsert_games(&self, games: Vec<Game>) -> Result<usize> {
            let count = games.len();
            self.games.lock().unwrap().extend(games);
            Ok(count)
        }
    }

    #[derive(Default)]
    struct MockCatalog {
        vanity: Option<String>,
        fail_listing: bool,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SteamCatalog for MockCatalog {
        async fn resolve_vanity(
            &self,
            _api_key: &str,
            vanity: &str,
        ) -> std::result::Result<Option<String>, SteamError> {
            self.calls.lock().unwrap().push(format!("vanity:{}", vanity));
            Ok(self.vanity.clone())
        }

        async fn owned_games(
            &self,
            _api_key: &str,
            identity: &SteamIdentity,
        ) -> std::result::Result<Vec<OwnedGame>, SteamError> {
            self.calls.lock().unwrap().push(format!("games:{}", identity));
            if self.fail_listing {
                return Err(SteamError::HttpStatus {
                    provider: "OWNED_GAMES".to_string(),
                    status: 500,
                });
            }
            Ok(vec![OwnedGame {
                app_id: 440,
                name: "Team Fortress 2".to_string(),
            }])
        }

        async fn game_schema(
            &self,
            _api_key: &str,
            _app_id: u32,
        ) -> std::result::Result<Vec<SchemaAchievement>, SteamError> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockGuestCatalog {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl GuestCatalog for MockGuestCatalog {
        async fn owned_games(&self, _identity: &SteamIdentity) -> Vec<OwnedGame> {
            *self.calls.lock().unwrap() += 1;
            vec![OwnedGame {
                app_id: 620,
                name: "Portal 2".to_string(),
            }]
        }

        async fn achievements(
            &self,
            _identity: &SteamIdentity,
            _app_id: u32,
        ) -> Vec<CommunityAchievement> {
            unimplemented!()
        }
    }

    fn config(steam_id: &str, api_key: Option<&str>) -> Config {
        Config {
            steam_id: steam_id.to_string(),
            api_key: api_key.map(str::to_string),
            open_router_api_key: None,
        }
    }

    fn service(
        catalog: Arc<MockCatalog>,
        guest: Arc<MockGuestCatalog>,
    ) -> (GameService, Arc<MockGameRepository>) {
        let repo = Arc::new(MockGameRepository::default());
        (GameService::new(repo.clone(), catalog, guest), repo)
    }

    #[tokio::test]
    async fn test_vanity_is_resolved_with_key() {
        let catalog = Arc::new(MockCatalog {
            vanity: Some("76561197960287930".to_string()),
            ..Default::default()
        });
        let (service, _) = service(catalog.clone(), Arc::new(MockGuestCatalog::default()));

        let access = service
            .resolve_access(&config("gabelogannewell", Some("k")))
            .await
            .unwrap();

        assert_eq!(access.identity.as_str(), "76561197960287930");
        assert_eq!(
            *catalog.calls.lock().unwrap(),
            vec!["vanity:gabelogannewell".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unresolved_vanity_is_kept() {
        let catalog = Arc::new(MockCatalog::default());
        let (service, _) = service(catalog, Arc::new(MockGuestCatalog::default()));

        let access = service
            .resolve_access(&config("somealias", Some("k")))
            .await
            .unwrap();

        assert_eq!(access.identity.as_str(), "somealias");
    }

    #[tokio::test]
    async fn test_numeric_id_and_keyless_skip_resolution() {
        let catalog = Arc::new(MockCatalog::default());
        let (service, _) = service(catalog.clone(), Arc::new(MockGuestCatalog::default()));

        service
            .resolve_access(&config("76561197960287930", Some("k")))
            .await
            .unwrap();
        let keyless = service
            .resolve_access(&config("somealias", None))
            .await
            .unwrap();

        assert!(catalog.calls.lock().unwrap().is_empty());
        assert_eq!(keyless.api_key, None);
    }

    #[tokio::test]
    async fn test_listing_with_key_is_stored() {
        let catalog = Arc::new(MockCatalog::default());
        let guest = Arc::new(MockGuestCatalog::default());
        let (service, repo) = service(catalog, guest.clone());

        let access = SteamAccess::new(SteamIdentity::new("76561197960287930"), Some("k".into()));
        let games = service.list_owned_games(&access).await.unwrap();

        assert_eq!(games, vec![Game::new(440, "Team Fortress 2")]);
        assert_eq!(repo.list_games().unwrap(), games);
        assert_eq!(*guest.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_keyless_listing_uses_public_pages() {
        let catalog = Arc::new(MockCatalog::default());
        let (service, _) = service(catalog.clone(), Arc::new(MockGuestCatalog::default()));

        let access = SteamAccess::new(SteamIdentity::new("somealias"), None);
        let games = service.list_owned_games(&access).await.unwrap();

        assert_eq!(games, vec![Game::new(620, "Portal 2")]);
        assert!(catalog.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_failure_is_an_empty_library() {
        let catalog = Arc::new(MockCatalog {
            fail_listing: true,
            ..Default::default()
        });
        let (service, repo) = service(catalog, Arc::new(MockGuestCatalog::default()));

        let access = SteamAccess::new(SteamIdentity::new("76561197960287930"), Some("k".into()));
        let games = service.list_owned_games(&access).await.unwrap();

        assert!(games.is_empty());
        assert!(repo.list_games().unwrap().is_empty());
    }
}
