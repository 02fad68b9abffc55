use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use nesta_core::{
    achievements::AchievementService,
    config::{ConfigService, ConfigServiceTrait},
    games::GameService,
    history::{HistoryService, HistoryServiceTrait},
    picker::{PickerService, PickerServiceTrait},
};
use nesta_steam::{CommunityCatalog, GuestCatalog, SourceChain, SteamCatalog, SteamHttp, SteamWebApi};
use nesta_storage_sqlite::{
    db, AchievementRepository, ConfigRepository, GameRepository, HistoryRepository,
};

use crate::config::AppConfig;

pub struct AppState {
    pub config_service: Arc<dyn ConfigServiceTrait>,
    pub history_service: Arc<dyn HistoryServiceTrait>,
    pub picker_service: Arc<dyn PickerServiceTrait>,
}

/// Installs the global subscriber. Output goes to stderr so stdout stays clean.
///
/// `RUST_LOG` controls the filter (default `warn`); `NESTA_LOG_FORMAT=json`
/// switches to JSON lines. `log` records from the libraries are bridged in.
pub fn init_tracing() {
    let log_format = std::env::var("NESTA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_state(config: AppConfig) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::debug!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let http = SteamHttp::new();
    let catalog: Arc<dyn SteamCatalog> = Arc::new(SteamWebApi::new(http.clone()));
    let guest_catalog: Arc<dyn GuestCatalog> = Arc::new(CommunityCatalog::new(http.clone()));
    let sources = Arc::new(SourceChain::steam_default(http));

    let config_repo = Arc::new(ConfigRepository::new(pool.clone(), writer.clone()));
    let config_service: Arc<dyn ConfigServiceTrait> =
        Arc::new(ConfigService::new(config_repo, config.env));

    let game_repo = Arc::new(GameRepository::new(pool.clone(), writer.clone()));
    let game_service = Arc::new(GameService::new(
        game_repo,
        catalog.clone(),
        guest_catalog.clone(),
    ));

    let achievement_repo = Arc::new(AchievementRepository::new(pool.clone(), writer.clone()));
    let achievement_service = Arc::new(AchievementService::new(
        achievement_repo,
        catalog,
        guest_catalog,
        sources,
    ));

    let history_repo = Arc::new(HistoryRepository::new(pool.clone(), writer.clone()));
    let history_service: Arc<dyn HistoryServiceTrait> =
        Arc::new(HistoryService::new(history_repo));

    let picker_service: Arc<dyn PickerServiceTrait> = Arc::new(PickerService::new(
        config_service.clone(),
        game_service,
        achievement_service,
        history_service.clone(),
    ));

    Ok(Arc::new(AppState {
        config_service,
        history_service,
        picker_service,
    }))
}
