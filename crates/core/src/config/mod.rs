//! Config module - user settings resolved against the environment.

mod config_model;
mod config_service;
mod config_traits;

pub use config_model::{
    resolve_config, Config, ConfigUpdate, EnvConfig, API_KEY_ENV_VARS, OPEN_ROUTER_KEY_ENV_VARS,
    STEAM_ID_ENV_VARS,
};
pub use config_service::ConfigService;
pub use config_traits::{ConfigRepositoryTrait, ConfigServiceTrait};
