//! Config domain models and resolution against the environment.

use serde::{Deserialize, Serialize};

/// Environment variables consulted for the Steam id, in order.
pub const STEAM_ID_ENV_VARS: &[&str] = &["STEAM_ID", "STEAMID64", "STEAM_ID64", "STEAM_STEAMID"];

/// Environment variables consulted for the Steam Web API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["STEAM_API_KEY", "STEAM_WEB_API_KEY", "STEAMKEY"];

pub const OPEN_ROUTER_KEY_ENV_VARS: &[&str] = &["OPENROUTER_API_KEY"];

/// Effective user configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub steam_id: String,
    pub api_key: Option<String>,
    pub open_router_api_key: Option<String>,
}

impl Config {
    /// Gates every Steam lookup.
    pub fn has_steam_id(&self) -> bool {
        !self.steam_id.trim().is_empty()
    }

    /// Selects the authenticated path over the public pages.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// The API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// Applies a partial update.
    pub fn apply(&mut self, update: &ConfigUpdate) {
        if let Some(steam_id) = &update.steam_id {
            self.steam_id = steam_id.trim().to_string();
        }
        if let Some(api_key) = &update.api_key {
            self.api_key = non_blank(Some(api_key.as_str())).map(str::to_string);
        }
        if let Some(key) = &update.open_router_api_key {
            self.open_router_api_key = non_blank(Some(key.as_str())).map(str::to_string);
        }
    }
}

/// Partial config update.
///
/// `None` leaves a field untouched; `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub steam_id: Option<String>,
    pub api_key: Option<String>,
    pub open_router_api_key: Option<String>,
}

/// Config values found in the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub steam_id: Option<String>,
    pub api_key: Option<String>,
    pub open_router_api_key: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds from any variable lookup; the first non-blank candidate wins.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        Self {
            steam_id: first(STEAM_ID_ENV_VARS),
            api_key: first(API_KEY_ENV_VARS),
            open_router_api_key: first(OPEN_ROUTER_KEY_ENV_VARS),
        }
    }
}

/// Effective config: each stored field, or the environment when the
/// stored one is missing or blank.
pub fn resolve_config(stored: Option<&Config>, env: &EnvConfig) -> Config {
    let stored_steam_id = stored.and_then(|c| non_blank(Some(c.steam_id.as_str())));
    let stored_api_key = stored.and_then(|c| non_blank(c.api_key.as_deref()));
    let stored_router_key = stored.and_then(|c| non_blank(c.open_router_api_key.as_deref()));

    Config {
        steam_id: stored_steam_id
            .or(env.steam_id.as_deref())
            .unwrap_or_default()
            .to_string(),
        api_key: stored_api_key
            .or(env.api_key.as_deref())
            .map(str::to_string),
        open_router_api_key: stored_router_key
            .or(env.open_router_api_key.as_deref())
            .map(str::to_string),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
