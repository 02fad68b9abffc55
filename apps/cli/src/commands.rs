//! Subcommand handlers.

use anyhow::Result;
use clap::CommandFactory;
use nesta_core::config::ConfigUpdate;
use nesta_core::picker::{BrowseOptions, PickOptions};
use nesta_core::Error;

use crate::cli::{Cli, Command, ConfigKey, PickArgs};
use crate::main_lib::AppState;
use crate::render::{self, Report};

pub async fn run(command: Option<Command>, state: &AppState) -> Result<Report> {
    match command {
        Some(Command::Pick(args)) => pick(args, state).await,
        Some(Command::History) => history(state),
        Some(Command::Config { key, value }) => config(key, value, state).await,
        None => Ok(Report::success(Cli::command().render_help().to_string())),
    }
}

pub async fn pick(args: PickArgs, state: &AppState) -> Result<Report> {
    let result = if args.browse {
        state
            .picker_service
            .list_achievements(BrowseOptions {
                game_filter: args.game,
            })
            .await
            .map(|outcome| render::browse_report(&outcome))
    } else {
        state
            .picker_service
            .pick_achievement(PickOptions {
                game_filter: args.game,
                random: args.random,
            })
            .await
            .map(|outcome| render::pick_report(&outcome))
    };

    match result {
        Ok(report) => Ok(report),
        Err(Error::ProfilePrivate(message)) => Ok(render::private_profile_report(&message)),
        Err(e) => Err(e.into()),
    }
}

pub fn history(state: &AppState) -> Result<Report> {
    let rows = state.history_service.recent_picks(None)?;
    Ok(render::history_report(&rows))
}

pub async fn config(
    key: Option<String>,
    value: Option<String>,
    state: &AppState,
) -> Result<Report> {
    let Some(key) = key else {
        return Ok(Report::failure("Usage: nesta config <key> [value]"));
    };

    match value {
        Some(value) => {
            let mut update = ConfigUpdate::default();
            match ConfigKey::for_write(&key) {
                ConfigKey::SteamId => update.steam_id = Some(value),
                ConfigKey::ApiKey => update.api_key = Some(value),
                ConfigKey::OpenRouterApiKey => update.open_router_api_key = Some(value),
            }
            state.config_service.set_config(update).await?;
            Ok(Report::success("Configuration saved."))
        }
        None => {
            let config = state.config_service.get_config().await?;
            let current = match ConfigKey::parse(&key) {
                Some(ConfigKey::SteamId) => Some(config.steam_id),
                Some(ConfigKey::ApiKey) => config.api_key,
                Some(ConfigKey::OpenRouterApiKey) => config.open_router_api_key,
                None => None,
            };
            Ok(Report::success(current.unwrap_or_default()))
        }
    }
}
